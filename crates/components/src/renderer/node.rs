//! Render tree handed back to the documentation host.

use quivo_mdx_core::PropValue;
use serde::Serialize;
use std::collections::BTreeMap;

/// A prop passed to a host component invocation.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RenderProp {
    /// A literal string value.
    Literal {
        /// Literal text.
        value: String,
    },
    /// A JS expression forwarded untouched.
    Expression {
        /// Expression source.
        value: String,
    },
    /// An already rendered node (resolved icons).
    Node {
        /// Rendered node.
        node: Box<RenderNode>,
    },
}

impl RenderProp {
    /// Creates a literal prop.
    pub fn literal(value: impl Into<String>) -> Self {
        RenderProp::Literal {
            value: value.into(),
        }
    }

    /// Creates an expression prop.
    pub fn expression(value: impl Into<String>) -> Self {
        RenderProp::Expression {
            value: value.into(),
        }
    }

    /// Creates a node-valued prop.
    pub fn node(node: RenderNode) -> Self {
        RenderProp::Node {
            node: Box::new(node),
        }
    }
}

impl From<&PropValue> for RenderProp {
    fn from(value: &PropValue) -> Self {
        match value {
            PropValue::Literal { value } => RenderProp::literal(value.clone()),
            PropValue::Expression { value } => RenderProp::expression(value.clone()),
        }
    }
}

/// A renderable node.
///
/// Fallback renderings are plain elements; host delegations are
/// [`RenderNode::Component`] invocations the host resolves by name.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RenderNode {
    /// An intrinsic HTML element.
    Element {
        /// Tag name.
        tag: String,
        /// Attributes in output order.
        attrs: Vec<(String, String)>,
        /// Child nodes.
        children: Vec<RenderNode>,
    },
    /// Text, escaped on output.
    Text {
        /// Unescaped text.
        value: String,
    },
    /// Trusted HTML emitted verbatim.
    Raw {
        /// HTML source.
        html: String,
    },
    /// Opaque host expression (for example an icon element authored inline).
    Expression {
        /// Expression source.
        value: String,
    },
    /// A host component invocation.
    Component {
        /// Host component name.
        name: String,
        /// Props by name.
        props: BTreeMap<String, RenderProp>,
        /// Default slot children.
        children: Vec<RenderNode>,
    },
    /// Siblings without a wrapper.
    Fragment {
        /// Child nodes.
        children: Vec<RenderNode>,
    },
}

impl RenderNode {
    /// Creates an element with no attributes or children.
    pub fn element(tag: impl Into<String>) -> Self {
        RenderNode::Element {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates a text node.
    pub fn text(value: impl Into<String>) -> Self {
        RenderNode::Text {
            value: value.into(),
        }
    }

    /// Creates a fragment.
    pub fn fragment(children: Vec<RenderNode>) -> Self {
        RenderNode::Fragment { children }
    }

    /// Creates an empty fragment.
    pub fn empty() -> Self {
        RenderNode::Fragment {
            children: Vec::new(),
        }
    }

    /// Creates a host component invocation.
    pub fn component(
        name: impl Into<String>,
        props: BTreeMap<String, RenderProp>,
        children: Vec<RenderNode>,
    ) -> Self {
        RenderNode::Component {
            name: name.into(),
            props,
            children,
        }
    }

    /// Appends an attribute (builder style; no-op on non-elements).
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let RenderNode::Element { attrs, .. } = &mut self {
            attrs.push((key.into(), value.into()));
        }
        self
    }

    /// Appends a child (builder style; no-op on leaves).
    pub fn child(self, child: RenderNode) -> Self {
        self.children(std::iter::once(child))
    }

    /// Appends children (builder style; no-op on leaves).
    pub fn children(mut self, nodes: impl IntoIterator<Item = RenderNode>) -> Self {
        match &mut self {
            RenderNode::Element { children, .. }
            | RenderNode::Component { children, .. }
            | RenderNode::Fragment { children } => children.extend(nodes),
            RenderNode::Text { .. } | RenderNode::Raw { .. } | RenderNode::Expression { .. } => {}
        }
        self
    }

    /// Child nodes of containers; empty for leaves.
    pub fn child_nodes(&self) -> &[RenderNode] {
        match self {
            RenderNode::Element { children, .. }
            | RenderNode::Component { children, .. }
            | RenderNode::Fragment { children } => children,
            RenderNode::Text { .. } | RenderNode::Raw { .. } | RenderNode::Expression { .. } => {
                &[]
            }
        }
    }

    /// Attribute lookup for elements.
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        match self {
            RenderNode::Element { attrs, .. } => attrs
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, value)| value.as_str()),
            _ => None,
        }
    }

    /// Visits this node and every descendant depth-first, in document order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a RenderNode)) {
        visit(self);
        for child in self.child_nodes() {
            child.walk(visit);
        }
    }
}
