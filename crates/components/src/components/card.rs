//! `Card`, `Cards`, and `CardGroup`.

use crate::icons::{Visual, resolve_icon};
use crate::registry::{Invocation, Strategy};
use crate::renderer::{RenderContext, RenderNode, RenderProp};
use quivo_mdx_core::{ContentError, PropValue};
use std::collections::BTreeMap;

const CARD_CLASS: &str = "group flex flex-col gap-2 rounded-lg border border-border bg-card p-4 transition-all hover:border-primary/50 hover:bg-accent/50 hover:shadow-sm";
const CARD_ICON_CLASS: &str = "text-muted-foreground transition-colors group-hover:text-foreground";
const CARD_TITLE_CLASS: &str = "font-semibold text-base leading-tight";
const CARD_BODY_CLASS: &str = "text-sm leading-relaxed text-muted-foreground";

/// Column count used by the fallback grid when `cols` is not set.
pub const DEFAULT_COLS: u8 = 2;
/// Largest accepted `cols` value.
pub const MAX_COLS: u8 = 4;

/// Props consumed by the card renderer rather than forwarded to the host.
const CARD_PROPS: &[&str] = &["title", "icon", "href"];

fn forwarded_props(invocation: &Invocation<'_>, consumed: &[&str]) -> BTreeMap<String, RenderProp> {
    invocation
        .props
        .iter()
        .filter(|(key, _)| !consumed.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), RenderProp::from(value)))
        .collect()
}

/// One navigation card.
///
/// `title` and `href` are literals when their text is known statically;
/// other expressions are kept so a host card can evaluate them.
#[derive(Debug, Clone, PartialEq)]
pub struct CardDescriptor {
    /// Heading text.
    pub title: PropValue,
    /// Resolved icon.
    pub icon: Option<Visual>,
    /// Link target.
    pub href: Option<PropValue>,
    /// Rendered body.
    pub body: Vec<RenderNode>,
    /// Other authored props, forwarded to a host card.
    pub extra: BTreeMap<String, RenderProp>,
}

impl CardDescriptor {
    /// Creates a card with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: PropValue::literal(title),
            icon: None,
            href: None,
            body: Vec::new(),
            extra: BTreeMap::new(),
        }
    }

    /// Builds the descriptor for a `<Card>` tag. A missing title is an authoring error.
    pub fn from_invocation(
        invocation: &Invocation<'_>,
        cx: &mut RenderContext<'_>,
    ) -> Result<Self, ContentError> {
        let title = invocation
            .settled("title")
            .ok_or_else(|| invocation.invalid("missing required `title` prop"))?;
        let href = invocation.settled("href");

        if !cx.binding().card_strategy().is_host() {
            if let PropValue::Expression { value } = &title {
                cx.warn(
                    format!(
                        "cannot evaluate `title={{{}}}` without a host card; showing its source",
                        value
                    ),
                    &invocation.location,
                );
            }
            if let Some(PropValue::Expression { value }) = &href {
                cx.warn(
                    format!(
                        "cannot evaluate `href={{{}}}` without a host card; rendering without a link",
                        value
                    ),
                    &invocation.location,
                );
            }
        }

        Ok(Self {
            title,
            icon: resolve_icon(invocation.prop("icon")),
            href,
            body: cx.render_children(invocation.children)?,
            extra: forwarded_props(invocation, CARD_PROPS),
        })
    }

    /// Renders with the given strategy.
    pub fn render(&self, strategy: &Strategy) -> RenderNode {
        match strategy {
            Strategy::Host(component) => {
                let mut props = self.extra.clone();
                props.insert("title".to_string(), RenderProp::from(&self.title));
                match &self.icon {
                    Some(Visual::Handle(expr)) => {
                        props.insert("icon".to_string(), RenderProp::expression(expr));
                    }
                    Some(glyph) => {
                        props.insert("icon".to_string(), RenderProp::node(glyph.to_node()));
                    }
                    None => {}
                }
                if let Some(href) = &self.href {
                    props.insert("href".to_string(), RenderProp::from(href));
                }
                RenderNode::component(component, props, self.body.clone())
            }
            Strategy::Fallback => {
                let mut anchor = RenderNode::element("a");
                if let Some(href) = self.href.as_ref().and_then(PropValue::as_literal) {
                    anchor = anchor.attr("href", href);
                }
                anchor = anchor.attr("class", CARD_CLASS);
                if let Some(icon) = &self.icon {
                    anchor = anchor.child(
                        RenderNode::element("div")
                            .attr("class", CARD_ICON_CLASS)
                            .child(icon.to_node()),
                    );
                }
                anchor
                    .child(
                        RenderNode::element("h3")
                            .attr("class", CARD_TITLE_CLASS)
                            .child(RenderNode::text(self.title.value())),
                    )
                    .child(
                        RenderNode::element("p")
                            .attr("class", CARD_BODY_CLASS)
                            .children(self.body.iter().cloned()),
                    )
            }
        }
    }
}

/// An ordered group of cards (`<Cards>` or `<CardGroup>`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CardGroupDescriptor {
    /// Rendered children, in authoring order.
    pub cards: Vec<RenderNode>,
    /// Column count for medium screens and up.
    pub cols: Option<u8>,
    /// Other authored props, forwarded to a host group.
    pub extra: BTreeMap<String, RenderProp>,
}

impl CardGroupDescriptor {
    /// Creates a group from rendered cards.
    pub fn new(cards: Vec<RenderNode>) -> Self {
        Self {
            cards,
            ..Default::default()
        }
    }

    /// Builds the descriptor for a `<Cards>` or `<CardGroup>` tag.
    ///
    /// An unusable `cols` value is ignored with a warning.
    pub fn from_invocation(
        invocation: &Invocation<'_>,
        cx: &mut RenderContext<'_>,
    ) -> Result<Self, ContentError> {
        let cols = match invocation.prop("cols") {
            Some(raw) => {
                let parsed = parse_cols(raw);
                if parsed.is_none() {
                    cx.warn(
                        format!(
                            "ignoring `cols={}`; expected a number from 1 to {}",
                            raw.value(),
                            MAX_COLS
                        ),
                        &invocation.location,
                    );
                }
                parsed
            }
            None => None,
        };

        let mut cards = Vec::new();
        for child in invocation.significant_children() {
            cards.push(cx.render_node(child)?);
        }

        Ok(Self {
            cards,
            cols,
            extra: forwarded_props(invocation, &["cols"]),
        })
    }

    /// Renders with the given strategy.
    pub fn render(&self, strategy: &Strategy) -> RenderNode {
        match strategy {
            Strategy::Host(component) => {
                let mut props = self.extra.clone();
                if let Some(cols) = self.cols {
                    props.insert("cols".to_string(), RenderProp::expression(cols.to_string()));
                }
                RenderNode::component(component, props, self.cards.clone())
            }
            Strategy::Fallback => {
                let cols = self.cols.unwrap_or(DEFAULT_COLS);
                RenderNode::element("div")
                    .attr(
                        "class",
                        format!("my-4 grid gap-3 grid-cols-1 md:grid-cols-{}", cols),
                    )
                    .children(self.cards.iter().cloned())
            }
        }
    }
}

fn parse_cols(raw: &PropValue) -> Option<u8> {
    raw.value()
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|cols| (1..=MAX_COLS).contains(cols))
}
