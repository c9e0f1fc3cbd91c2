//! Built-in component renderers.
//!
//! - `card`: `Card`, `Cards`, `CardGroup`.
//! - `callout`: the callout family behind one shared renderer.
//! - `tabs`: the `Tabs`/`Tab` selection state machine.

/// Callout family renderer.
pub mod callout;
/// Card and card group renderers.
pub mod card;
/// Tabs composite.
pub mod tabs;

use crate::registry::{Invocation, Tag};
use crate::renderer::{RenderContext, RenderNode};
use callout::CalloutDescriptor;
use card::{CardDescriptor, CardGroupDescriptor};
use quivo_mdx_core::ContentError;
use tabs::{TabsDescriptor, TabsState};

/// Renders one built-in tag with the strategies of the current binding.
pub(crate) fn render_builtin(
    tag: Tag,
    invocation: &Invocation<'_>,
    cx: &mut RenderContext<'_>,
) -> Result<RenderNode, ContentError> {
    let binding = cx.binding();
    match tag {
        Tag::Card => CardDescriptor::from_invocation(invocation, cx)
            .map(|card| card.render(binding.card_strategy())),
        Tag::Cards | Tag::CardGroup => CardGroupDescriptor::from_invocation(invocation, cx)
            .map(|group| group.render(binding.cards_strategy())),
        Tag::Note | Tag::Tip | Tag::Warning | Tag::Info | Tag::Check | Tag::Callout => {
            CalloutDescriptor::from_invocation(tag, invocation, cx)
                .map(|callout| callout.render(binding.callout_strategy()))
        }
        Tag::Tabs => {
            let descriptor = TabsDescriptor::from_invocation(invocation, cx)?;
            let mut state = TabsState::new(descriptor);
            if let Some(id) = invocation.text("id")
                && let Some(key) = cx.options().tab_selections.get(id)
                && let Err(err) = state.select(key)
            {
                cx.warn(
                    format!("{} in <Tabs id=\"{}\">; keeping \"{}\"", err, id, state.selected()),
                    &invocation.location,
                );
            }
            state.render(cx)
        }
        // Outside a Tabs parent a Tab has no identity of its own.
        Tag::Tab => Ok(RenderNode::fragment(cx.render_children(invocation.children)?)),
    }
}
