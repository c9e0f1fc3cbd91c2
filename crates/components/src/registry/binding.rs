//! Registry composition: tag name to renderer.

use super::tag::Tag;
use super::types::HostComponents;
use crate::renderer::{RenderContext, RenderNode};
use quivo_mdx_core::{ContentError, ContentNode, PropValue, SourceLocation};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Rendering strategy for one built-in component kind, chosen once per
/// binding by probing the host bag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// Delegate to the named host component.
    Host(String),
    /// Render the self-contained fallback.
    Fallback,
}

impl Strategy {
    /// Host delegation when `component` names something, fallback otherwise.
    pub fn detect(component: Option<&str>) -> Self {
        match component.map(str::trim) {
            Some(name) if !name.is_empty() => Strategy::Host(name.to_string()),
            _ => Strategy::Fallback,
        }
    }

    /// True for host delegation.
    pub fn is_host(&self) -> bool {
        matches!(self, Strategy::Host(_))
    }
}

/// One tag invocation handed to a renderer.
#[derive(Debug, Clone)]
pub struct Invocation<'a> {
    /// Tag name as authored.
    pub name: &'a str,
    /// Authored props.
    pub props: &'a BTreeMap<String, PropValue>,
    /// Authored children, not yet rendered.
    pub children: &'a [ContentNode],
    /// Where the tag starts.
    pub location: SourceLocation,
}

impl<'a> Invocation<'a> {
    /// Prop lookup.
    pub fn prop(&self, key: &str) -> Option<&'a PropValue> {
        self.props.get(key)
    }

    /// Statically known prop text: a literal or a quoted string expression.
    pub fn text(&self, key: &str) -> Option<&'a str> {
        self.prop(key).and_then(PropValue::static_text)
    }

    /// Prop with static text folded to a literal; dynamic expressions kept.
    pub fn settled(&self, key: &str) -> Option<PropValue> {
        self.prop(key).and_then(PropValue::settled)
    }

    /// Children without whitespace-only text between tags.
    pub fn significant_children(&self) -> Vec<&'a ContentNode> {
        self.children
            .iter()
            .filter(|child| !child.is_blank_text())
            .collect()
    }

    /// Builds a validation error for this invocation.
    pub fn invalid(&self, message: impl Into<String>) -> ContentError {
        ContentError::validation(self.name, message, self.location.clone())
    }
}

/// A caller-supplied renderer for one tag.
pub trait TagRenderer: Send + Sync {
    /// Renders one invocation. Use `cx` to render nested content.
    fn render(
        &self,
        invocation: &Invocation<'_>,
        cx: &mut RenderContext<'_>,
    ) -> Result<RenderNode, ContentError>;
}

impl<F> TagRenderer for F
where
    F: Fn(&Invocation<'_>, &mut RenderContext<'_>) -> Result<RenderNode, ContentError>
        + Send
        + Sync,
{
    fn render(
        &self,
        invocation: &Invocation<'_>,
        cx: &mut RenderContext<'_>,
    ) -> Result<RenderNode, ContentError> {
        (self)(invocation, cx)
    }
}

/// What a tag name resolves to.
#[derive(Clone)]
pub enum Binding {
    /// Pass the invocation through to a host component by name.
    Host(String),
    /// One of the registry's own components.
    Builtin(Tag),
    /// A caller-supplied renderer.
    Custom(Arc<dyn TagRenderer>),
}

impl std::fmt::Debug for Binding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Binding::Host(name) => f.debug_tuple("Host").field(name).finish(),
            Binding::Builtin(tag) => f.debug_tuple("Builtin").field(tag).finish(),
            Binding::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Caller overrides, applied over every other binding.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    entries: BTreeMap<String, Binding>,
}

impl Overrides {
    /// Creates an empty override set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `tag` to a host component by name.
    pub fn component(mut self, tag: impl Into<String>, component: impl Into<String>) -> Self {
        self.entries
            .insert(tag.into(), Binding::Host(component.into()));
        self
    }

    /// Binds `tag` to a renderer closure.
    pub fn custom<F>(self, tag: impl Into<String>, render: F) -> Self
    where
        F: Fn(&Invocation<'_>, &mut RenderContext<'_>) -> Result<RenderNode, ContentError>
            + Send
            + Sync
            + 'static,
    {
        self.renderer(tag, Arc::new(render))
    }

    /// Binds `tag` to a shared renderer.
    pub fn renderer(mut self, tag: impl Into<String>, renderer: Arc<dyn TagRenderer>) -> Self {
        self.entries.insert(tag.into(), Binding::Custom(renderer));
        self
    }

    /// Number of overridden tags.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is overridden.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolved tag bindings for one render pass.
///
/// Composed from host defaults, then the built-in components, then caller
/// overrides; later layers win. Cheap to rebuild, so callers whose overrides
/// vary per page compose one per page instead of sharing it.
#[derive(Debug, Clone)]
pub struct RegistryBinding {
    tags: BTreeMap<String, Binding>,
    card: Strategy,
    cards: Strategy,
    callout: Strategy,
}

impl RegistryBinding {
    /// Composes a binding from an optional host bag and caller overrides.
    ///
    /// # Example
    ///
    /// ```
    /// use quivo_mdx_components::registry::{Binding, HostComponents, Overrides, RegistryBinding, Strategy};
    ///
    /// let host = HostComponents { card: Some("Card".into()), ..Default::default() };
    /// let binding = RegistryBinding::compose(Some(&host), Overrides::new().component("Tip", "MyTip"));
    /// assert!(binding.card_strategy().is_host());
    /// assert_eq!(binding.cards_strategy(), &Strategy::Fallback);
    /// assert!(matches!(binding.get("Tip"), Some(Binding::Host(name)) if name == "MyTip"));
    /// ```
    pub fn compose(host: Option<&HostComponents>, overrides: Overrides) -> Self {
        let mut tags = BTreeMap::new();

        if let Some(host) = host {
            for name in &host.defaults {
                tags.insert(name.clone(), Binding::Host(name.clone()));
            }
        }

        for tag in Tag::ALL {
            tags.insert(tag.name().to_string(), Binding::Builtin(tag));
        }

        tags.extend(overrides.entries);

        Self {
            tags,
            card: Strategy::detect(host.and_then(|h| h.card.as_deref())),
            cards: Strategy::detect(host.and_then(|h| h.cards.as_deref())),
            callout: Strategy::detect(host.and_then(|h| h.callout.as_deref())),
        }
    }

    /// A binding with no host bag and no overrides.
    pub fn fallback() -> Self {
        Self::compose(None, Overrides::new())
    }

    /// Looks up a tag.
    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.tags.get(name)
    }

    /// Bound tag names, sorted.
    pub fn tag_names(&self) -> impl Iterator<Item = &str> {
        self.tags.keys().map(String::as_str)
    }

    /// Strategy for `<Card>`.
    pub fn card_strategy(&self) -> &Strategy {
        &self.card
    }

    /// Strategy for `<Cards>` and `<CardGroup>`.
    pub fn cards_strategy(&self) -> &Strategy {
        &self.cards
    }

    /// Strategy for the callout family.
    pub fn callout_strategy(&self) -> &Strategy {
        &self.callout
    }
}

impl Default for RegistryBinding {
    fn default() -> Self {
        Self::fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_are_always_bound() {
        let binding = RegistryBinding::fallback();
        for tag in Tag::ALL {
            assert!(
                matches!(binding.get(tag.name()), Some(Binding::Builtin(t)) if *t == tag),
                "{tag}"
            );
        }
        assert!(binding.get("Steps").is_none());
    }

    #[test]
    fn builtins_beat_host_defaults() {
        let host = HostComponents {
            defaults: vec!["Card".to_string(), "Steps".to_string()],
            ..Default::default()
        };
        let binding = RegistryBinding::compose(Some(&host), Overrides::new());
        assert!(matches!(binding.get("Card"), Some(Binding::Builtin(Tag::Card))));
        assert!(matches!(binding.get("Steps"), Some(Binding::Host(name)) if name == "Steps"));
        assert!(binding.tag_names().any(|name| name == "Steps"));
        // Listing Card among the defaults does not make the Card slot host-backed.
        assert_eq!(binding.card_strategy(), &Strategy::Fallback);
    }

    #[test]
    fn overrides_beat_builtins() {
        let binding = RegistryBinding::compose(
            None,
            Overrides::new().custom("Card", |_inv: &Invocation<'_>, _cx: &mut RenderContext<'_>| {
                Ok(RenderNode::text("custom"))
            }),
        );
        assert!(matches!(binding.get("Card"), Some(Binding::Custom(_))));
    }

    #[test]
    fn detect_treats_blank_names_as_absent() {
        assert_eq!(Strategy::detect(None), Strategy::Fallback);
        assert_eq!(Strategy::detect(Some("  ")), Strategy::Fallback);
        assert_eq!(
            Strategy::detect(Some("Callout")),
            Strategy::Host("Callout".to_string())
        );
    }

    #[test]
    fn binding_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RegistryBinding>();
    }
}
