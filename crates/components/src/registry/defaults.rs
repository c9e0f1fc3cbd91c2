//! Default registry configurations for common documentation hosts.
//!
//! The primary use case is a fumadocs host, whose default MDX component bag
//! ships `Card`, `Cards`, and `Callout` alongside intrinsic element overrides.

use super::types::{HostComponents, RegistryConfig};
use crate::renderer::Options;
use std::collections::BTreeMap;

/// Component names a fumadocs host binds by default, besides the card and
/// callout slots.
pub const FUMADOCS_DEFAULT_COMPONENTS: &[&str] = &[
    "a", "img", "pre", "table", "h1", "h2", "h3", "h4", "h5", "h6",
];

/// Creates the fumadocs host bag.
///
/// # Example
///
/// ```
/// use quivo_mdx_components::registry::defaults::fumadocs_host;
///
/// let host = fumadocs_host();
/// assert_eq!(host.callout.as_deref(), Some("Callout"));
/// assert!(host.defaults.iter().any(|name| name == "pre"));
/// ```
pub fn fumadocs_host() -> HostComponents {
    HostComponents {
        card: Some("Card".to_string()),
        cards: Some("Cards".to_string()),
        callout: Some("Callout".to_string()),
        defaults: FUMADOCS_DEFAULT_COMPONENTS
            .iter()
            .map(|name| name.to_string())
            .collect(),
    }
}

/// Registry configuration for a fumadocs host with no overrides.
pub fn default_fumadocs_registry() -> RegistryConfig {
    RegistryConfig {
        host: Some(fumadocs_host()),
        overrides: BTreeMap::new(),
        options: Options::default(),
    }
}

/// Registry configuration that renders every built-in with its fallback.
pub fn fallback_registry() -> RegistryConfig {
    RegistryConfig::default()
}
