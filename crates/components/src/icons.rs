//! Icon key table.
//!
//! Authors name icons with short string keys (`icon="rocket"`). Each key maps
//! to exactly one lucide glyph. Unknown keys resolve to no icon so a typo in a
//! cosmetic prop never breaks a page build.

use crate::renderer::RenderNode;
use once_cell::sync::Lazy;
use quivo_mdx_core::PropValue;
use serde::Serialize;
use std::collections::HashMap;

static KEYS: Lazy<HashMap<&'static str, IconKey>> =
    Lazy::new(|| IconKey::ALL.into_iter().map(|key| (key.as_str(), key)).collect());

/// Closed set of authoring-time icon keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKey {
    /// `warehouse`
    Warehouse,
    /// `shopping-cart`
    ShoppingCart,
    /// `location-dot`
    LocationDot,
    /// `rotate-left`
    RotateLeft,
    /// `bell`
    Bell,
    /// `question-circle`
    QuestionCircle,
    /// `rocket`
    Rocket,
    /// `book`
    Book,
    /// `key`
    Key,
}

impl IconKey {
    /// Every key, in table order.
    pub const ALL: [IconKey; 9] = [
        IconKey::Warehouse,
        IconKey::ShoppingCart,
        IconKey::LocationDot,
        IconKey::RotateLeft,
        IconKey::Bell,
        IconKey::QuestionCircle,
        IconKey::Rocket,
        IconKey::Book,
        IconKey::Key,
    ];

    /// Parses an authoring key. Matching is exact.
    pub fn parse(key: &str) -> Option<Self> {
        KEYS.get(key).copied()
    }

    /// The authoring key.
    pub fn as_str(self) -> &'static str {
        match self {
            IconKey::Warehouse => "warehouse",
            IconKey::ShoppingCart => "shopping-cart",
            IconKey::LocationDot => "location-dot",
            IconKey::RotateLeft => "rotate-left",
            IconKey::Bell => "bell",
            IconKey::QuestionCircle => "question-circle",
            IconKey::Rocket => "rocket",
            IconKey::Book => "book",
            IconKey::Key => "key",
        }
    }

    /// The lucide glyph drawn for this key.
    pub fn glyph(self) -> &'static str {
        match self {
            IconKey::Warehouse => "warehouse",
            IconKey::ShoppingCart => "shopping-cart",
            IconKey::LocationDot => "map-pin",
            IconKey::RotateLeft => "rotate-ccw",
            IconKey::Bell => "bell",
            IconKey::QuestionCircle => "circle-help",
            IconKey::Rocket => "rocket",
            IconKey::Book => "book",
            IconKey::Key => "key",
        }
    }
}

impl std::fmt::Display for IconKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visual {
    /// A glyph from the key table.
    Glyph(IconKey),
    /// An icon the author built inline (`icon={<Rocket />}`), forwarded untouched.
    Handle(String),
}

impl Visual {
    /// Renders the visual.
    pub fn to_node(&self) -> RenderNode {
        match self {
            Visual::Glyph(key) => RenderNode::element("svg")
                .attr("class", format!("lucide lucide-{} w-5 h-5", key.glyph()))
                .attr("data-icon", key.as_str())
                .attr("aria-hidden", "true"),
            Visual::Handle(expr) => RenderNode::Expression {
                value: expr.clone(),
            },
        }
    }
}

/// Resolves an `icon` prop to a visual, or `None` when absent or unknown.
pub fn resolve_icon(prop: Option<&PropValue>) -> Option<Visual> {
    match prop? {
        PropValue::Literal { value } => {
            let key = IconKey::parse(value.trim());
            if key.is_none() && !value.trim().is_empty() {
                log::debug!("Unknown icon key {:?}; rendering without icon", value);
            }
            key.map(Visual::Glyph)
        }
        PropValue::Expression { value } if !value.trim().is_empty() => {
            Some(Visual::Handle(value.clone()))
        }
        PropValue::Expression { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_key_resolves() {
        for key in IconKey::ALL {
            let prop = PropValue::literal(key.as_str());
            assert_eq!(resolve_icon(Some(&prop)), Some(Visual::Glyph(key)));
        }
    }

    #[test]
    fn unknown_and_absent_keys_resolve_to_none() {
        for raw in ["", "rockets", "Rocket", "shopping_cart", "fa-book"] {
            assert_eq!(resolve_icon(Some(&PropValue::literal(raw))), None, "{raw}");
        }
        assert_eq!(resolve_icon(None), None);
    }

    #[test]
    fn expressions_are_opaque_handles() {
        let prop = PropValue::expression("<Rocket className=\"w-5\" />");
        assert_eq!(
            resolve_icon(Some(&prop)),
            Some(Visual::Handle("<Rocket className=\"w-5\" />".to_string()))
        );
        assert_eq!(resolve_icon(Some(&PropValue::expression(" "))), None);
    }

    #[test]
    fn glyph_node_carries_lucide_class() {
        let node = Visual::Glyph(IconKey::LocationDot).to_node();
        assert_eq!(node.get_attr("class"), Some("lucide lucide-map-pin w-5 h-5"));
        assert_eq!(node.get_attr("data-icon"), Some("location-dot"));
    }

    #[test]
    fn keys_are_distinct() {
        let mut keys: Vec<_> = IconKey::ALL.iter().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), IconKey::ALL.len());
    }
}
