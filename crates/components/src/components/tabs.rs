//! `Tabs` / `Tab` composite.
//!
//! A `Tabs` instance is a small state machine over its tab keys. Only the
//! selected pane is rendered; the other bodies stay as authored content and
//! are never walked.

use crate::registry::{Invocation, Tag};
use crate::renderer::{RenderContext, RenderNode};
use quivo_mdx_core::{ContentError, ContentNode, PropValue};
use std::collections::HashSet;
use thiserror::Error;

const LIST_CLASS: &str = "inline-flex h-10 items-center justify-center rounded-md bg-muted p-1 text-muted-foreground";
const TRIGGER_CLASS: &str = "inline-flex items-center justify-center whitespace-nowrap rounded-sm px-3 py-1.5 text-sm font-medium ring-offset-background transition-all focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 disabled:pointer-events-none disabled:opacity-50 data-[state=active]:bg-background data-[state=active]:text-foreground data-[state=active]:shadow-sm";
const CONTENT_CLASS: &str = "mt-2 ring-offset-background focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2";

/// Shape problems in a tab group.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TabsShapeError {
    /// The group has no tabs.
    #[error("at least one <Tab> child is required")]
    Empty,
    /// Two tabs resolve to the same key; the later one could never be selected.
    #[error("tab value \"{0}\" is used by more than one <Tab>")]
    DuplicateValue(String),
}

/// One authored tab.
#[derive(Debug, Clone, PartialEq)]
pub struct TabDescriptor {
    /// Header text, when authored.
    pub title: Option<String>,
    /// Selection key, when authored.
    pub value: Option<String>,
    /// Authored body, rendered only while selected.
    pub body: Vec<ContentNode>,
}

impl TabDescriptor {
    /// Creates a tab from its optional title and value.
    pub fn new(title: Option<&str>, value: Option<&str>, body: Vec<ContentNode>) -> Self {
        Self {
            title: title.map(str::to_string),
            value: value.map(str::to_string),
            body,
        }
    }

    /// Header label: title, else value, else `Tab {index + 1}`.
    pub fn label(&self, index: usize) -> String {
        self.title
            .clone()
            .or_else(|| self.value.clone())
            .unwrap_or_else(|| format!("Tab {}", index + 1))
    }

    /// Selection key: value, else title, else `tab-{index}`.
    pub fn key(&self, index: usize) -> String {
        self.value
            .clone()
            .or_else(|| self.title.clone())
            .unwrap_or_else(|| format!("tab-{}", index))
    }
}

/// A validated tab group.
#[derive(Debug, Clone, PartialEq)]
pub struct TabsDescriptor {
    tabs: Vec<TabDescriptor>,
    keys: Vec<String>,
    initial_selection: String,
}

impl TabsDescriptor {
    /// Validates the group and resolves its initial selection.
    ///
    /// The initial selection is `default_value` when it names a tab, otherwise
    /// the first tab's key.
    pub fn new(
        tabs: Vec<TabDescriptor>,
        default_value: Option<&str>,
    ) -> Result<Self, TabsShapeError> {
        if tabs.is_empty() {
            return Err(TabsShapeError::Empty);
        }

        let keys: Vec<String> = tabs
            .iter()
            .enumerate()
            .map(|(index, tab)| tab.key(index))
            .collect();

        let mut seen = HashSet::new();
        for key in &keys {
            if !seen.insert(key.as_str()) {
                return Err(TabsShapeError::DuplicateValue(key.clone()));
            }
        }

        let initial_selection = default_value
            .filter(|value| keys.iter().any(|key| key == value))
            .map(str::to_string)
            .unwrap_or_else(|| keys[0].clone());

        Ok(Self {
            tabs,
            keys,
            initial_selection,
        })
    }

    /// Builds the descriptor for a `<Tabs>` tag.
    pub fn from_invocation(
        invocation: &Invocation<'_>,
        cx: &mut RenderContext<'_>,
    ) -> Result<Self, ContentError> {
        let mut tabs = Vec::new();
        for child in invocation.significant_children() {
            match child {
                ContentNode::Element { name, children, .. } if name == Tag::Tab.name() => {
                    let title = tab_text(child, "title", cx);
                    let value = tab_text(child, "value", cx);
                    tabs.push(TabDescriptor {
                        title,
                        value,
                        body: children.clone(),
                    });
                }
                other => cx.warn(
                    format!(
                        "<Tabs> only shows <Tab> children; dropping {}",
                        other.name().map_or("text", |name| name)
                    ),
                    &invocation.location,
                ),
            }
        }

        let default_value = invocation.text("defaultValue");
        let descriptor = Self::new(tabs, default_value)
            .map_err(|err| invocation.invalid(err.to_string()))?;

        if let Some(requested) = default_value
            && requested != descriptor.initial_selection
        {
            cx.warn(
                format!(
                    "defaultValue \"{}\" matches no tab; selecting \"{}\"",
                    requested, descriptor.initial_selection
                ),
                &invocation.location,
            );
        }

        Ok(descriptor)
    }

    /// Tabs in authoring order.
    pub fn tabs(&self) -> &[TabDescriptor] {
        &self.tabs
    }

    /// Resolved keys in authoring order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Key selected before any interaction.
    pub fn initial_selection(&self) -> &str {
        &self.initial_selection
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.keys.iter().position(|candidate| candidate == key)
    }
}

/// Reads a `<Tab>` label or key. Dynamic expressions cannot be evaluated
/// here, so their source text stands in.
fn tab_text(tab: &ContentNode, key: &str, cx: &mut RenderContext<'_>) -> Option<String> {
    match tab.prop(key).and_then(PropValue::settled)? {
        PropValue::Literal { value } => Some(value),
        PropValue::Expression { value } => {
            cx.warn(
                format!("cannot evaluate <Tab> `{}={{{}}}`; using its source", key, value),
                &tab.location(),
            );
            Some(value)
        }
    }
}

/// Selection state of one rendered `Tabs` instance.
#[derive(Debug, Clone)]
pub struct TabsState {
    descriptor: TabsDescriptor,
    selected: usize,
}

impl TabsState {
    /// Starts at the descriptor's initial selection.
    pub fn new(descriptor: TabsDescriptor) -> Self {
        let selected = descriptor
            .position(&descriptor.initial_selection)
            .unwrap_or(0);
        Self {
            descriptor,
            selected,
        }
    }

    /// Currently selected key.
    pub fn selected(&self) -> &str {
        &self.descriptor.keys[self.selected]
    }

    /// Selects the tab with `key`. Unknown keys leave the state unchanged.
    pub fn select(&mut self, key: &str) -> Result<(), ContentError> {
        let index = self
            .descriptor
            .position(key)
            .ok_or_else(|| ContentError::UnknownTab(key.to_string()))?;
        self.selected = index;
        Ok(())
    }

    /// Renders the header strip and the selected pane.
    pub fn render(&self, cx: &mut RenderContext<'_>) -> Result<RenderNode, ContentError> {
        let tabs = &self.descriptor.tabs;
        let keys = &self.descriptor.keys;

        let triggers = tabs.iter().enumerate().map(|(index, tab)| {
            let active = index == self.selected;
            RenderNode::element("button")
                .attr("type", "button")
                .attr("role", "tab")
                .attr("aria-selected", if active { "true" } else { "false" })
                .attr("data-state", if active { "active" } else { "inactive" })
                .attr("data-value", &keys[index])
                .attr("class", TRIGGER_CLASS)
                .child(RenderNode::text(tab.label(index)))
        });
        let list = RenderNode::element("div")
            .attr("role", "tablist")
            .attr("class", LIST_CLASS)
            .children(triggers);

        let pane = RenderNode::element("div")
            .attr("role", "tabpanel")
            .attr("data-state", "active")
            .attr("data-value", &keys[self.selected])
            .attr("class", CONTENT_CLASS)
            .children(cx.render_children(&tabs[self.selected].body)?);

        Ok(RenderNode::element("div")
            .attr("class", "my-4")
            .attr("data-selected", &keys[self.selected])
            .child(list)
            .child(pane))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RegistryBinding;
    use crate::renderer::Options;

    fn tab(title: Option<&str>, value: Option<&str>, body: &str) -> TabDescriptor {
        TabDescriptor::new(title, value, vec![ContentNode::text(body)])
    }

    #[test]
    fn label_and_key_fallbacks() {
        let titled = tab(Some("A"), None, "");
        let valued = tab(None, Some("b"), "");
        let bare = tab(None, None, "");
        assert_eq!(titled.label(0), "A");
        assert_eq!(titled.key(0), "A");
        assert_eq!(valued.label(1), "b");
        assert_eq!(valued.key(1), "b");
        assert_eq!(bare.label(2), "Tab 3");
        assert_eq!(bare.key(2), "tab-2");
    }

    #[test]
    fn default_selection_precedence() {
        let tabs = || vec![tab(Some("A"), None, "a"), tab(Some("B"), Some("b"), "b")];

        let explicit = TabsDescriptor::new(tabs(), Some("b")).unwrap();
        assert_eq!(explicit.initial_selection(), "b");

        let first = TabsDescriptor::new(tabs(), None).unwrap();
        assert_eq!(first.initial_selection(), "A");

        let stale = TabsDescriptor::new(tabs(), Some("missing")).unwrap();
        assert_eq!(stale.initial_selection(), "A");

        let generated = TabsDescriptor::new(vec![tab(None, None, "x")], None).unwrap();
        assert_eq!(generated.initial_selection(), "tab-0");
    }

    #[test]
    fn first_tab_key_prefers_value() {
        let tabs = vec![tab(Some("Shell"), Some("sh"), "x"), tab(Some("Node"), None, "y")];
        let descriptor = TabsDescriptor::new(tabs, None).unwrap();
        assert_eq!(descriptor.initial_selection(), "sh");
    }

    #[test]
    fn rejects_empty_and_duplicate_groups() {
        assert_eq!(TabsDescriptor::new(Vec::new(), None), Err(TabsShapeError::Empty));
        let dup = vec![tab(Some("A"), None, "1"), tab(Some("Other"), Some("A"), "2")];
        assert_eq!(
            TabsDescriptor::new(dup, None),
            Err(TabsShapeError::DuplicateValue("A".to_string()))
        );
    }

    #[test]
    fn select_renders_only_the_chosen_pane() {
        let binding = RegistryBinding::fallback();
        let options = Options::default();
        let mut cx = RenderContext::new(&binding, &options);

        let descriptor = TabsDescriptor::new(
            vec![tab(Some("A"), None, "alpha body"), tab(Some("B"), Some("b"), "beta body")],
            None,
        )
        .unwrap();
        let mut state = TabsState::new(descriptor);
        assert_eq!(state.selected(), "A");

        let before = state.render(&mut cx).unwrap().to_markup();
        assert!(before.contains("alpha body"));
        assert!(!before.contains("beta body"));

        state.select("b").unwrap();
        let after = state.render(&mut cx).unwrap().to_markup();
        assert!(after.contains("beta body"));
        assert!(!after.contains("alpha body"));
        assert!(after.contains("data-selected=\"b\""));
    }

    #[test]
    fn unknown_selection_keeps_state() {
        let descriptor = TabsDescriptor::new(vec![tab(Some("A"), None, "a")], None).unwrap();
        let mut state = TabsState::new(descriptor);
        let err = state.select("zzz").unwrap_err();
        assert!(matches!(err, ContentError::UnknownTab(key) if key == "zzz"));
        assert_eq!(state.selected(), "A");
    }
}
