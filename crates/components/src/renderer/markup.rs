//! Markup serializer for render trees.
//!
//! Elements print as HTML. Host component invocations print as JSX-style tags
//! so the output stays readable when a tree mixes both.

use super::node::{RenderNode, RenderProp};
use html_escape::{encode_double_quoted_attribute, encode_text};

const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "meta", "link", "source", "wbr"];

impl RenderNode {
    /// Serializes the tree to markup.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        write_node(self, &mut out);
        out
    }
}

/// Serializes a list of sibling nodes to markup.
pub fn nodes_to_markup(nodes: &[RenderNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(node, &mut out);
    }
    out
}

fn write_node(node: &RenderNode, out: &mut String) {
    match node {
        RenderNode::Element {
            tag,
            attrs,
            children,
        } => {
            out.push('<');
            out.push_str(tag);
            for (key, value) in attrs {
                write_literal_attr(key, value, out);
            }
            if children.is_empty() && VOID_ELEMENTS.contains(&tag.as_str()) {
                out.push_str(" />");
                return;
            }
            out.push('>');
            for child in children {
                write_node(child, out);
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
        RenderNode::Text { value } => out.push_str(&encode_text(value)),
        RenderNode::Raw { html } => out.push_str(html),
        RenderNode::Expression { value } => {
            out.push('{');
            out.push_str(value);
            out.push('}');
        }
        RenderNode::Component {
            name,
            props,
            children,
        } => {
            out.push('<');
            out.push_str(name);
            for (key, prop) in props {
                match prop {
                    RenderProp::Literal { value } => write_literal_attr(key, value, out),
                    RenderProp::Expression { value } => {
                        out.push(' ');
                        out.push_str(key);
                        out.push_str("={");
                        out.push_str(value);
                        out.push('}');
                    }
                    RenderProp::Node { node } => {
                        out.push(' ');
                        out.push_str(key);
                        out.push_str("={");
                        write_node(node, out);
                        out.push('}');
                    }
                }
            }
            if children.is_empty() {
                out.push_str(" />");
                return;
            }
            out.push('>');
            for child in children {
                write_node(child, out);
            }
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
        RenderNode::Fragment { children } => {
            for child in children {
                write_node(child, out);
            }
        }
    }
}

fn write_literal_attr(key: &str, value: &str, out: &mut String) {
    out.push(' ');
    out.push_str(key);
    out.push_str("=\"");
    out.push_str(&encode_double_quoted_attribute(value));
    out.push('"');
}
