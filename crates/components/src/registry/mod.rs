//! Component registry.
//!
//! - `tag`: the closed set of tags the registry implements.
//! - `types`: host capabilities and JSON configuration.
//! - `binding`: composition of host defaults, built-ins, and overrides.
//! - `defaults`: ready-made host bags.

/// Tag composition and rendering strategies.
pub mod binding;
/// Ready-made host component bags.
pub mod defaults;
/// Built-in tag set.
pub mod tag;
/// Registry configuration types.
pub mod types;

pub use binding::{Binding, Invocation, Overrides, RegistryBinding, Strategy, TagRenderer};
pub use tag::Tag;
pub use types::{HostComponents, RegistryConfig};
