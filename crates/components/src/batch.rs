//! Batch rendering of many documents in parallel.
//!
//! Every document renders against the same [`RegistryBinding`]; a failure in
//! one document is reported in its own [`BatchResult`] and never affects the
//! others.

use crate::registry::RegistryBinding;
use crate::renderer::{Options, RenderResult, render_document, render_mdx};
use quivo_mdx_core::{ContentError, ContentNode};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Instant;

/// Content of one batch input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum BatchSource {
    /// MDX source text, parsed before rendering.
    Mdx(String),
    /// An already parsed document tree.
    Tree(ContentNode),
}

/// Input for batch processing: one document to render.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchInput {
    /// Document identifier (typically the file path).
    pub id: String,
    /// Document content.
    pub source: BatchSource,
    /// Optional file name for diagnostics; defaults to `id`.
    #[serde(default)]
    pub file: Option<String>,
}

impl BatchInput {
    /// Creates an input from MDX source.
    pub fn mdx(id: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: BatchSource::Mdx(source.into()),
            file: None,
        }
    }

    /// Creates an input from a document tree.
    pub fn tree(id: impl Into<String>, tree: ContentNode) -> Self {
        Self {
            id: id.into(),
            source: BatchSource::Tree(tree),
            file: None,
        }
    }

    fn render(
        &self,
        binding: &RegistryBinding,
        options: &Options,
    ) -> Result<RenderResult, ContentError> {
        match &self.source {
            BatchSource::Mdx(source) => {
                let file = self.file.as_deref().unwrap_or(&self.id);
                render_mdx(source, Some(file), binding, options)
            }
            BatchSource::Tree(tree) => render_document(tree, binding, options),
        }
    }
}

/// Result for a single document in a batch.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    /// Document identifier matching the input.
    pub id: String,
    /// Render result (present on success).
    pub result: Option<RenderResult>,
    /// Error message (present on failure).
    pub error: Option<String>,
}

/// Statistics for batch processing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchStats {
    /// Total number of documents submitted.
    pub total: u32,
    /// Number of documents rendered successfully.
    pub succeeded: u32,
    /// Number of documents that failed.
    pub failed: u32,
    /// Total processing time in milliseconds.
    pub processing_time_ms: f64,
}

/// Options for batch processing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOptions {
    /// Maximum number of threads to use. Defaults to the rayon global pool.
    #[serde(default)]
    pub max_threads: Option<usize>,
    /// Whether to keep going after a failed document. Defaults to true.
    #[serde(default = "default_continue_on_error")]
    pub continue_on_error: bool,
}

fn default_continue_on_error() -> bool {
    true
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            max_threads: None,
            continue_on_error: default_continue_on_error(),
        }
    }
}

/// Result of batch processing containing all results and statistics.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchProcessingResult {
    /// Individual results, in input order.
    pub results: Vec<BatchResult>,
    /// Processing statistics.
    pub stats: BatchStats,
}

/// Renders many documents in parallel against one binding.
///
/// With `continue_on_error` unset the documents render sequentially and the
/// batch stops after the first failure.
pub fn render_batch(
    inputs: Vec<BatchInput>,
    binding: &RegistryBinding,
    options: &Options,
    batch: &BatchOptions,
) -> BatchProcessingResult {
    let start = Instant::now();

    let pool = batch.max_threads.and_then(|max_threads| {
        rayon::ThreadPoolBuilder::new()
            .num_threads(max_threads)
            .build()
            .map_err(|err| log::warn!("Falling back to the global thread pool: {}", err))
            .ok()
    });

    let total = inputs.len() as u32;
    let succeeded = AtomicU32::new(0);
    let failed = AtomicU32::new(0);

    let process_input = |input: BatchInput| -> BatchResult {
        match input.render(binding, options) {
            Ok(result) => {
                succeeded.fetch_add(1, Ordering::Relaxed);
                BatchResult {
                    id: input.id,
                    result: Some(result),
                    error: None,
                }
            }
            Err(err) => {
                failed.fetch_add(1, Ordering::Relaxed);
                log::warn!("Failed to render {}: {}", input.id, err);
                BatchResult {
                    id: input.id,
                    result: None,
                    error: Some(err.to_string()),
                }
            }
        }
    };

    let results: Vec<BatchResult> = if batch.continue_on_error {
        if let Some(pool) = pool {
            pool.install(|| inputs.into_par_iter().map(process_input).collect())
        } else {
            inputs.into_par_iter().map(process_input).collect()
        }
    } else {
        let mut results = Vec::with_capacity(inputs.len());
        for input in inputs {
            let result = process_input(input);
            let stop = result.error.is_some();
            results.push(result);
            if stop {
                break;
            }
        }
        results
    };

    let elapsed = start.elapsed();

    BatchProcessingResult {
        results,
        stats: BatchStats {
            total,
            succeeded: succeeded.load(Ordering::Relaxed),
            failed: failed.load(Ordering::Relaxed),
            processing_time_ms: elapsed.as_secs_f64() * 1000.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> Vec<BatchInput> {
        vec![
            BatchInput::mdx("a.mdx", "<Tip>first</Tip>"),
            BatchInput::tree("b", ContentNode::element("Card")),
            BatchInput::tree("c", ContentNode::element("Card").with_prop("title", "Third")),
        ]
    }

    #[test]
    fn failures_are_isolated_per_document() {
        let output = render_batch(
            inputs(),
            &RegistryBinding::fallback(),
            &Options::default(),
            &BatchOptions::default(),
        );
        assert_eq!(output.stats.total, 3);
        assert_eq!(output.stats.succeeded, 2);
        assert_eq!(output.stats.failed, 1);

        let ids: Vec<_> = output.results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a.mdx", "b", "c"]);
        assert!(output.results[0].result.is_some());
        assert!(output.results[1].error.as_deref().unwrap().contains("<Card>"));
        assert!(output.results[2].result.as_ref().unwrap().markup().contains("Third"));
    }

    #[test]
    fn stop_on_error_halts_after_first_failure() {
        let output = render_batch(
            inputs(),
            &RegistryBinding::fallback(),
            &Options::default(),
            &BatchOptions {
                max_threads: None,
                continue_on_error: false,
            },
        );
        assert_eq!(output.results.len(), 2);
        assert_eq!(output.stats.failed, 1);
    }

    #[test]
    fn bounded_pool_renders_everything() {
        let output = render_batch(
            inputs(),
            &RegistryBinding::fallback(),
            &Options::lenient(),
            &BatchOptions {
                max_threads: Some(2),
                ..Default::default()
            },
        );
        assert_eq!(output.stats.succeeded, 3);
        let lenient = output.results[1].result.as_ref().unwrap();
        assert!(lenient.diagnostics.has_errors());
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: BatchOptions = serde_json::from_str(r#"{"maxThreads": 4}"#).unwrap();
        assert_eq!(options.max_threads, Some(4));
        assert!(options.continue_on_error);
    }
}
