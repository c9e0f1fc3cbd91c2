//! Registry configuration passed from JavaScript.

use super::binding::{Overrides, RegistryBinding};
use crate::renderer::Options;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Components the documentation host can render itself.
///
/// Each slot is checked independently: a host `Card` says nothing about a host
/// `Cards`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostComponents {
    /// Host component used for `<Card>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<String>,
    /// Host component used for `<Cards>` and `<CardGroup>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cards: Option<String>,
    /// Host callout primitive used by the callout family.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callout: Option<String>,
    /// Other component names the host binds by default (`a`, `pre`, `Steps`, ...).
    #[serde(default)]
    pub defaults: Vec<String>,
}

/// Configuration for the component registry passed from JavaScript.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryConfig {
    /// Host component bag; `None` renders everything with fallbacks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<HostComponents>,
    /// Tag name to host component name, applied over every other binding.
    #[serde(default)]
    pub overrides: BTreeMap<String, String>,
    /// Render options.
    #[serde(default)]
    pub options: Options,
}

impl RegistryConfig {
    /// Composes the binding for one render pass.
    pub fn binding(&self) -> RegistryBinding {
        let overrides = self
            .overrides
            .iter()
            .fold(Overrides::new(), |acc, (tag, component)| {
                acc.component(tag, component)
            });
        RegistryBinding::compose(self.host.as_ref(), overrides)
    }

    /// Parses a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
