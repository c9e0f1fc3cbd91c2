//! Document walker and render output.
//!
//! [`render_document`] walks an authored [`ContentNode`] tree against one
//! [`RegistryBinding`] and returns a [`RenderNode`] tree plus the diagnostics
//! collected along the way.

mod context;
mod markup;
mod node;

pub use context::RenderContext;
pub use markup::nodes_to_markup;
pub use node::{RenderNode, RenderProp};

use crate::registry::RegistryBinding;
use quivo_mdx_core::{ContentError, ContentNode, ParseOptions, RenderDiagnostics};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Options for one render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// Abort on the first authoring-shape violation. When false the violation
    /// is recorded in the diagnostics and the offending tag renders as nothing.
    #[serde(default = "default_strict")]
    pub strict: bool,
    /// Selected tab key per `<Tabs id="..">` instance. Groups without an
    /// entry show their initial selection.
    #[serde(default)]
    pub tab_selections: BTreeMap<String, String>,
}

fn default_strict() -> bool {
    true
}

impl Default for Options {
    fn default() -> Self {
        Self {
            strict: default_strict(),
            tab_selections: BTreeMap::new(),
        }
    }
}

impl Options {
    /// Lenient options: violations are recorded instead of aborting.
    pub fn lenient() -> Self {
        Self {
            strict: false,
            ..Self::default()
        }
    }

    /// Selects `key` in the `<Tabs>` group whose `id` is `tabs_id`.
    pub fn select_tab(mut self, tabs_id: impl Into<String>, key: impl Into<String>) -> Self {
        self.tab_selections.insert(tabs_id.into(), key.into());
        self
    }
}

/// Output of one render pass.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderResult {
    /// Rendered tree.
    pub node: RenderNode,
    /// Warnings and recovered errors.
    pub diagnostics: RenderDiagnostics,
}

impl RenderResult {
    /// Serializes the rendered tree to markup.
    pub fn markup(&self) -> String {
        self.node.to_markup()
    }
}

/// Renders an authored document tree.
///
/// # Example
///
/// ```
/// use quivo_mdx_components::{Options, RegistryBinding, render_document};
/// use quivo_mdx_core::ContentNode;
///
/// let doc = ContentNode::element("Note").with_child(ContentNode::text("Heads up"));
/// let result = render_document(&doc, &RegistryBinding::fallback(), &Options::default()).unwrap();
/// assert!(result.markup().contains("data-callout=\"info\""));
/// ```
pub fn render_document(
    document: &ContentNode,
    binding: &RegistryBinding,
    options: &Options,
) -> Result<RenderResult, ContentError> {
    let mut cx = RenderContext::new(binding, options);
    let node = cx.render_node(document)?;
    let diagnostics = cx.into_diagnostics();
    if diagnostics.has_warnings() || diagnostics.has_errors() {
        log::debug!(
            "Rendered document with {} diagnostic(s)",
            diagnostics.count()
        );
    }
    Ok(RenderResult { node, diagnostics })
}

/// Parses MDX source and renders it.
///
/// `file` only labels source locations in diagnostics.
pub fn render_mdx(
    source: &str,
    file: Option<&str>,
    binding: &RegistryBinding,
    options: &Options,
) -> Result<RenderResult, ContentError> {
    let document =
        quivo_mdx_core::parse_document_with_options(source, &ParseOptions::mdx(), file)?;
    render_document(&document, binding, options)
}
