//! Authored document tree.
//!
//! The documentation host parses each page into a tree of tag invocations and
//! hands it over as JSON; [`crate::parse_document`] builds the same tree from
//! MDX source.

use crate::{ContentError, SourceLocation};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A component prop value - either a literal string or a JS expression.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PropValue {
    /// A literal string value (from key="value").
    Literal {
        /// Literal text.
        value: String,
    },
    /// A JS expression (from key={expression}).
    Expression {
        /// Expression source.
        value: String,
    },
}

impl PropValue {
    /// Creates a literal string prop value.
    pub fn literal(value: impl Into<String>) -> Self {
        PropValue::Literal {
            value: value.into(),
        }
    }

    /// Creates an expression prop value.
    pub fn expression(value: impl Into<String>) -> Self {
        PropValue::Expression {
            value: value.into(),
        }
    }

    /// Returns the raw value regardless of type.
    pub fn value(&self) -> &str {
        match self {
            PropValue::Literal { value } | PropValue::Expression { value } => value,
        }
    }

    /// Returns the literal text, or `None` for expressions.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            PropValue::Literal { value } => Some(value),
            PropValue::Expression { .. } => None,
        }
    }

    /// Returns true if this is an expression.
    pub fn is_expression(&self) -> bool {
        matches!(self, PropValue::Expression { .. })
    }

    /// Text known without evaluating JS: a literal, or an expression that is a
    /// plain string literal (`{"Orders"}`). Trimmed; empty counts as absent.
    pub fn static_text(&self) -> Option<&str> {
        let text = match self {
            PropValue::Literal { value } => value.trim(),
            PropValue::Expression { value } => string_literal(value.trim())?.trim(),
        };
        (!text.is_empty()).then_some(text)
    }

    /// Static text as a literal, any other non-empty expression unchanged.
    pub fn settled(&self) -> Option<PropValue> {
        if let Some(text) = self.static_text() {
            return Some(PropValue::literal(text));
        }
        match self {
            PropValue::Expression { value } if !value.trim().is_empty() => {
                Some(PropValue::expression(value.trim()))
            }
            _ => None,
        }
    }
}

/// Body of a quoted JS string without escapes or interpolation.
fn string_literal(source: &str) -> Option<&str> {
    let quote = source.chars().next().filter(|c| matches!(c, '"' | '\'' | '`'))?;
    let body = source.strip_prefix(quote)?.strip_suffix(quote)?;
    let plain = !body.contains(quote)
        && !body.contains('\\')
        && !(quote == '`' && body.contains("${"));
    plain.then_some(body)
}

/// One node of an authored document.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ContentNode {
    /// A tag invocation: `<Card title="..">..</Card>` or an intrinsic element.
    Element {
        /// Tag name as authored (`Card`, `p`, `h2`, ...).
        name: String,
        /// Props in authoring order-independent form.
        #[serde(default)]
        props: BTreeMap<String, PropValue>,
        /// Child nodes in authoring order.
        #[serde(default)]
        children: Vec<ContentNode>,
        /// Where the tag starts in the source document.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        position: Option<SourceLocation>,
    },
    /// Plain text.
    Text {
        /// Unescaped text content.
        value: String,
    },
    /// Raw HTML the host already trusts.
    Html {
        /// HTML source.
        value: String,
    },
    /// A group of siblings with no wrapper (`<>..</>`, document root).
    Fragment {
        /// Child nodes in authoring order.
        #[serde(default)]
        children: Vec<ContentNode>,
    },
}

impl ContentNode {
    /// Creates an element with no props, children, or position.
    pub fn element(name: impl Into<String>) -> Self {
        ContentNode::Element {
            name: name.into(),
            props: BTreeMap::new(),
            children: Vec::new(),
            position: None,
        }
    }

    /// Decodes a document tree serialized by the host.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Creates a text node.
    pub fn text(value: impl Into<String>) -> Self {
        ContentNode::Text {
            value: value.into(),
        }
    }

    /// Creates a fragment.
    pub fn fragment(children: Vec<ContentNode>) -> Self {
        ContentNode::Fragment { children }
    }

    /// Adds a literal prop (builder style; no-op on non-elements).
    pub fn with_prop(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_prop_value(key, PropValue::literal(value))
    }

    /// Adds an expression prop (builder style; no-op on non-elements).
    pub fn with_expression(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_prop_value(key, PropValue::expression(value))
    }

    /// Adds a prop value (builder style; no-op on non-elements).
    pub fn with_prop_value(mut self, key: impl Into<String>, value: PropValue) -> Self {
        if let ContentNode::Element { props, .. } = &mut self {
            props.insert(key.into(), value);
        }
        self
    }

    /// Appends a child (builder style; no-op on leaves).
    pub fn with_child(mut self, child: ContentNode) -> Self {
        match &mut self {
            ContentNode::Element { children, .. } | ContentNode::Fragment { children } => {
                children.push(child)
            }
            ContentNode::Text { .. } | ContentNode::Html { .. } => {}
        }
        self
    }

    /// Sets the source position (builder style; no-op on non-elements).
    pub fn at(mut self, location: SourceLocation) -> Self {
        if let ContentNode::Element { position, .. } = &mut self {
            *position = Some(location);
        }
        self
    }

    /// Tag name for elements.
    pub fn name(&self) -> Option<&str> {
        match self {
            ContentNode::Element { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Prop lookup for elements.
    pub fn prop(&self, key: &str) -> Option<&PropValue> {
        match self {
            ContentNode::Element { props, .. } => props.get(key),
            _ => None,
        }
    }

    /// Statically known prop text (see [`PropValue::static_text`]).
    pub fn text_prop(&self, key: &str) -> Option<&str> {
        self.prop(key).and_then(PropValue::static_text)
    }

    /// Children of elements and fragments; empty for leaves.
    pub fn children(&self) -> &[ContentNode] {
        match self {
            ContentNode::Element { children, .. } | ContentNode::Fragment { children } => children,
            ContentNode::Text { .. } | ContentNode::Html { .. } => &[],
        }
    }

    /// Source position, or an unknown location.
    pub fn location(&self) -> SourceLocation {
        match self {
            ContentNode::Element {
                position: Some(position),
                ..
            } => position.clone(),
            _ => SourceLocation::unknown(),
        }
    }

    /// True for text nodes holding only whitespace.
    pub fn is_blank_text(&self) -> bool {
        matches!(self, ContentNode::Text { value } if value.trim().is_empty())
    }
}
