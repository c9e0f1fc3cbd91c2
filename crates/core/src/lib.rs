#![deny(missing_docs)]
//! quivo-mdx core: the authored document tree, error and diagnostic types,
//! and the MDX source adapter.

/// Core error and diagnostic types.
pub mod error;
/// Authored document tree handed over by the documentation host.
pub mod node;
/// MDX source to document tree adapter.
pub mod parse;

pub use error::{
    ContentError, ErrorSeverity, RecoverableError, RenderDiagnostics, SourceLocation,
};
pub use node::{ContentNode, PropValue};
pub use parse::{ParseOptions, parse_document, parse_document_with_options, parse_mdast};
