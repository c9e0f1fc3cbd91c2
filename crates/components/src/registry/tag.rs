//! Closed set of authoring tags the registry implements itself.

use crate::components::callout::CalloutKind;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A built-in authoring tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    /// `<Card>`
    Card,
    /// `<CardGroup>`, alias of `<Cards>` with an optional `cols` prop.
    CardGroup,
    /// `<Cards>`
    Cards,
    /// `<Note>`
    Note,
    /// `<Tip>`
    Tip,
    /// `<Warning>`
    Warning,
    /// `<Info>`
    Info,
    /// `<Check>`
    Check,
    /// `<Callout>`
    Callout,
    /// `<Tabs>`
    Tabs,
    /// `<Tab>`, only meaningful inside `<Tabs>`.
    Tab,
}

static TAGS_BY_NAME: Lazy<HashMap<&'static str, Tag>> =
    Lazy::new(|| Tag::ALL.iter().map(|tag| (tag.name(), *tag)).collect());

impl Tag {
    /// Every built-in tag.
    pub const ALL: [Tag; 11] = [
        Tag::Card,
        Tag::CardGroup,
        Tag::Cards,
        Tag::Note,
        Tag::Tip,
        Tag::Warning,
        Tag::Info,
        Tag::Check,
        Tag::Callout,
        Tag::Tabs,
        Tag::Tab,
    ];

    /// Looks up a tag by its authored name (case-sensitive, as in JSX).
    pub fn from_name(name: &str) -> Option<Self> {
        TAGS_BY_NAME.get(name).copied()
    }

    /// The authored name.
    pub fn name(self) -> &'static str {
        match self {
            Tag::Card => "Card",
            Tag::CardGroup => "CardGroup",
            Tag::Cards => "Cards",
            Tag::Note => "Note",
            Tag::Tip => "Tip",
            Tag::Warning => "Warning",
            Tag::Info => "Info",
            Tag::Check => "Check",
            Tag::Callout => "Callout",
            Tag::Tabs => "Tabs",
            Tag::Tab => "Tab",
        }
    }

    /// The fixed callout kind for callout wrappers; `None` for other tags.
    pub fn callout_kind(self) -> Option<CalloutKind> {
        match self {
            Tag::Note | Tag::Info => Some(CalloutKind::Info),
            Tag::Tip => Some(CalloutKind::Tip),
            Tag::Warning => Some(CalloutKind::Warn),
            Tag::Check => Some(CalloutKind::Check),
            Tag::Callout => Some(CalloutKind::Neutral),
            Tag::Card | Tag::CardGroup | Tag::Cards | Tag::Tabs | Tag::Tab => None,
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
