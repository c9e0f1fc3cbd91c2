#![deny(missing_docs)]
//! quivo-mdx components: the MDX content-component registry, its fallback
//! renderers, and the render tree handed back to the documentation host.

/// Parallel rendering of many documents against one binding.
pub mod batch;
/// Card, callout, and tabs renderers.
pub mod components;
/// Icon key table and visual resolution.
pub mod icons;
/// Component registry: tags, host capabilities, overrides, composition.
pub mod registry;
/// Render tree, markup serializer, and document walker.
pub mod renderer;

pub use batch::{
    BatchInput, BatchOptions, BatchProcessingResult, BatchResult, BatchSource, BatchStats,
    render_batch,
};
pub use components::callout::{CalloutDescriptor, CalloutKind};
pub use components::card::{CardDescriptor, CardGroupDescriptor};
pub use components::tabs::{TabDescriptor, TabsDescriptor, TabsShapeError, TabsState};
pub use icons::{IconKey, Visual, resolve_icon};
pub use registry::{
    Binding, HostComponents, Invocation, Overrides, RegistryBinding, RegistryConfig, Strategy,
    Tag, TagRenderer,
};
pub use renderer::{
    Options, RenderContext, RenderNode, RenderProp, RenderResult, render_document, render_mdx,
};
