use quivo_mdx_components::{IconKey, RegistryConfig, RenderNode, RenderResult};
use quivo_mdx_core::{ContentNode, RenderDiagnostics};
use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

// ============================================================================
// Registry Config
// ============================================================================

/// Reads the registry configuration passed from JavaScript.
///
/// `undefined` and `null` select the fallback-only registry; anything else
/// must match the camelCase `RegistryConfig` shape.
fn parse_config(config: JsValue) -> Result<RegistryConfig, JsError> {
    if config.is_undefined() || config.is_null() {
        return Ok(RegistryConfig::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsError::new(&format!("Invalid registry config: {}", e)))
}

// ============================================================================
// Render API Types
// ============================================================================

/// Result of rendering one document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WasmRenderResult {
    /// Rendered tree for hosts that build their own output.
    pub node: RenderNode,
    /// Rendered tree serialized to markup.
    pub markup: String,
    /// Warnings and recovered errors.
    pub diagnostics: RenderDiagnostics,
}

impl From<RenderResult> for WasmRenderResult {
    fn from(result: RenderResult) -> Self {
        Self {
            markup: result.markup(),
            node: result.node,
            diagnostics: result.diagnostics,
        }
    }
}

fn to_js(result: RenderResult) -> Result<JsValue, JsError> {
    // Plain objects instead of `Map`s for component props.
    WasmRenderResult::from(result)
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

// ============================================================================
// Render API
// ============================================================================

/// Renders a document tree produced by the host's MDX pipeline.
///
/// # Arguments
///
/// * `tree` - A `ContentNode` tree (`{type: "element", name, props, children}`)
/// * `config` - Optional `RegistryConfig` (host components, overrides, options)
///
/// # Example (JavaScript)
///
/// ```javascript
/// import { render_tree } from './quivo_mdx_wasm';
///
/// const result = render_tree(
///   { type: 'element', name: 'Tip', props: {}, children: [{ type: 'text', value: 'Hi' }] },
///   { host: { callout: 'Callout' } },
/// );
/// // result.markup === '<Callout type="tip">Hi</Callout>'
/// ```
#[wasm_bindgen]
pub fn render_tree(tree: JsValue, config: JsValue) -> Result<JsValue, JsError> {
    let config = parse_config(config)?;
    let tree: ContentNode = serde_wasm_bindgen::from_value(tree)
        .map_err(|e| JsError::new(&format!("Invalid document tree: {}", e)))?;

    let binding = config.binding();
    let result = quivo_mdx_components::render_document(&tree, &binding, &config.options)
        .map_err(|e| JsError::new(&e.to_string()))?;
    to_js(result)
}

/// Parses MDX source and renders it.
///
/// # Arguments
///
/// * `source` - The MDX source
/// * `filepath` - File name used in diagnostics
/// * `config` - Optional `RegistryConfig`
#[wasm_bindgen]
pub fn render_mdx(source: &str, filepath: &str, config: JsValue) -> Result<JsValue, JsError> {
    let config = parse_config(config)?;
    let binding = config.binding();
    let file = Some(filepath).filter(|path| !path.is_empty());
    let result = quivo_mdx_components::render_mdx(source, file, &binding, &config.options)
        .map_err(|e| JsError::new(&e.to_string()))?;
    to_js(result)
}

// ============================================================================
// Icon API
// ============================================================================

/// Resolves an authoring icon key to its lucide glyph name.
///
/// Returns `undefined` for unknown keys.
#[wasm_bindgen]
pub fn resolve_icon_name(key: &str) -> Option<String> {
    IconKey::parse(key).map(|icon| icon.glyph().to_string())
}

/// Lists every accepted icon key.
#[wasm_bindgen]
pub fn icon_keys() -> js_sys::Array {
    IconKey::ALL
        .iter()
        .map(|key| JsValue::from_str(key.as_str()))
        .collect()
}
