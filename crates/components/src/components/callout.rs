//! Callout family: `Note`, `Tip`, `Warning`, `Info`, `Check`, and `Callout`.
//!
//! Every wrapper only fixes a [`CalloutKind`]; rendering goes through
//! [`CalloutDescriptor::render`].

use crate::registry::{Invocation, Strategy, Tag};
use crate::renderer::{RenderContext, RenderNode, RenderProp};
use quivo_mdx_core::ContentError;
use std::collections::BTreeMap;

/// Semantic category of a callout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalloutKind {
    /// Informational (`Note`, `Info`).
    Info,
    /// Helpful suggestion (`Tip`).
    Tip,
    /// Caution (`Warning`).
    Warn,
    /// Confirmation (`Check`).
    Check,
    /// No category (bare `Callout`).
    Neutral,
}

impl CalloutKind {
    /// Kind name as used in `data-callout` and host `type` props.
    pub fn as_str(self) -> &'static str {
        match self {
            CalloutKind::Info => "info",
            CalloutKind::Tip => "tip",
            CalloutKind::Warn => "warn",
            CalloutKind::Check => "check",
            CalloutKind::Neutral => "neutral",
        }
    }

    /// The `type` prop passed to a host callout; neutral passes none.
    pub fn host_type(self) -> Option<&'static str> {
        match self {
            CalloutKind::Neutral => None,
            other => Some(other.as_str()),
        }
    }

    /// Parses an authored `type` prop on a bare `Callout`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "info" => Some(CalloutKind::Info),
            "tip" => Some(CalloutKind::Tip),
            "warn" | "warning" => Some(CalloutKind::Warn),
            "check" => Some(CalloutKind::Check),
            "neutral" => Some(CalloutKind::Neutral),
            _ => None,
        }
    }

    fn fallback_class(self) -> &'static str {
        match self {
            CalloutKind::Info => {
                "my-4 rounded-lg border border-blue-200 bg-blue-50 p-4 dark:border-blue-800 dark:bg-blue-950"
            }
            CalloutKind::Tip | CalloutKind::Check => {
                "my-4 rounded-lg border border-green-200 bg-green-50 p-4 dark:border-green-800 dark:bg-green-950"
            }
            CalloutKind::Warn => {
                "my-4 rounded-lg border border-yellow-200 bg-yellow-50 p-4 dark:border-yellow-800 dark:bg-yellow-950"
            }
            CalloutKind::Neutral => "my-4 rounded-lg border border-border bg-card p-4",
        }
    }
}

/// One callout block.
#[derive(Debug, Clone, PartialEq)]
pub struct CalloutDescriptor {
    /// Semantic category.
    pub kind: CalloutKind,
    /// Optional heading.
    pub title: Option<String>,
    /// Rendered body.
    pub body: Vec<RenderNode>,
}

impl CalloutDescriptor {
    /// Creates an untitled callout.
    pub fn new(kind: CalloutKind, body: Vec<RenderNode>) -> Self {
        Self {
            kind,
            title: None,
            body,
        }
    }

    /// Builds the descriptor for a callout-family tag.
    pub fn from_invocation(
        tag: Tag,
        invocation: &Invocation<'_>,
        cx: &mut RenderContext<'_>,
    ) -> Result<Self, ContentError> {
        let kind = match tag {
            Tag::Callout => match invocation.text("type") {
                Some(raw) => CalloutKind::parse(raw).unwrap_or_else(|| {
                    cx.warn(
                        format!("unknown callout type \"{}\"; using neutral", raw),
                        &invocation.location,
                    );
                    CalloutKind::Neutral
                }),
                None => CalloutKind::Neutral,
            },
            other => other.callout_kind().ok_or_else(|| {
                ContentError::Internal(format!("<{}> is not a callout", other))
            })?,
        };

        Ok(Self {
            kind,
            title: invocation.text("title").map(str::to_string),
            body: cx.render_children(invocation.children)?,
        })
    }

    /// Renders with the given strategy.
    pub fn render(&self, strategy: &Strategy) -> RenderNode {
        match strategy {
            Strategy::Host(component) => {
                let mut props = BTreeMap::new();
                if let Some(kind) = self.kind.host_type() {
                    props.insert("type".to_string(), RenderProp::literal(kind));
                }
                if let Some(title) = &self.title {
                    props.insert("title".to_string(), RenderProp::literal(title));
                }
                RenderNode::component(component, props, self.body.clone())
            }
            Strategy::Fallback => {
                let mut block = RenderNode::element("div")
                    .attr("class", self.kind.fallback_class())
                    .attr("data-callout", self.kind.as_str());
                if let Some(title) = &self.title {
                    block = block.child(
                        RenderNode::element("p")
                            .attr("class", "mb-1 text-sm font-medium")
                            .child(RenderNode::text(title)),
                    );
                }
                block.child(
                    RenderNode::element("p")
                        .attr("class", "text-sm")
                        .children(self.body.iter().cloned()),
                )
            }
        }
    }
}
