use quivo_mdx_wasm::{icon_keys, render_mdx, render_tree, resolve_icon_name};
use serde::Deserialize;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RenderResult {
    node: serde_json::Value,
    markup: String,
    diagnostics: Diagnostics,
}

#[derive(Deserialize, Debug)]
struct Diagnostics {
    warnings: Vec<serde_json::Value>,
    errors: Vec<serde_json::Value>,
}

fn js(json: &str) -> JsValue {
    js_sys::JSON::parse(json).expect("valid JSON")
}

fn decode(value: JsValue) -> RenderResult {
    serde_wasm_bindgen::from_value(value).expect("deserialize result")
}

#[wasm_bindgen_test]
fn render_tree_with_host_callout() {
    let tree = js(
        r#"{"type":"element","name":"Tip","children":[{"type":"text","value":"Hi"}]}"#,
    );
    let result = render_tree(tree, js(r#"{"host":{"callout":"Callout"}}"#))
        .expect("render should succeed");
    let result = decode(result);

    assert_eq!(result.markup, "<Callout type=\"tip\">Hi</Callout>");
    assert_eq!(result.node["type"], "component");
    assert_eq!(result.node["props"]["type"]["value"], "tip");
}

#[wasm_bindgen_test]
fn render_tree_without_config_uses_fallbacks() {
    let tree = js(
        r#"{"type":"element","name":"Card","props":{"title":{"type":"literal","value":"Docs"},"icon":{"type":"literal","value":"rocket"}}}"#,
    );
    let result = decode(render_tree(tree, JsValue::UNDEFINED).expect("render should succeed"));

    assert!(result.markup.starts_with("<a class="));
    assert!(result.markup.contains("lucide-rocket"));
    assert!(result.diagnostics.warnings.is_empty());
}

#[wasm_bindgen_test]
fn render_mdx_collects_lenient_errors() {
    let source = "<Card />\n\n<Note>kept</Note>";
    let config = js(r#"{"options":{"strict":false}}"#);
    let result = decode(render_mdx(source, "page.mdx", config).expect("render should succeed"));

    assert_eq!(result.diagnostics.errors.len(), 1);
    assert!(result.markup.contains("data-callout=\"info\""));
    assert!(result.markup.contains("kept"));
}

#[wasm_bindgen_test]
fn render_mdx_strict_failure_is_an_error() {
    assert!(render_mdx("<Tabs></Tabs>", "page.mdx", JsValue::NULL).is_err());
}

#[wasm_bindgen_test]
fn invalid_config_is_rejected() {
    let tree = js(r#"{"type":"text","value":"x"}"#);
    assert!(render_tree(tree, js(r#"{"host":"nope"}"#)).is_err());
}

#[wasm_bindgen_test]
fn icon_lookup() {
    assert_eq!(resolve_icon_name("location-dot").as_deref(), Some("map-pin"));
    assert_eq!(resolve_icon_name("question-circle").as_deref(), Some("circle-help"));
    assert_eq!(resolve_icon_name("sparkles"), None);
    assert_eq!(icon_keys().length(), 9);
}

#[wasm_bindgen_test]
fn render_tree_honors_tab_selections() {
    let tree = js(
        r#"{"type":"element","name":"Tabs","props":{"id":{"type":"literal","value":"install"}},"children":[
            {"type":"element","name":"Tab","props":{"value":{"type":"literal","value":"a"}},"children":[{"type":"text","value":"alpha"}]},
            {"type":"element","name":"Tab","props":{"value":{"type":"literal","value":"b"}},"children":[{"type":"text","value":"beta"}]}
        ]}"#,
    );
    let config = js(r#"{"options":{"tabSelections":{"install":"b"}}}"#);
    let result = decode(render_tree(tree, config).expect("render should succeed"));

    assert!(result.markup.contains("data-selected=\"b\""));
    assert!(result.markup.contains("beta"));
    assert!(!result.markup.contains("alpha"));
}
