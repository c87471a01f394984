//! Tracing configuration for debugging inference.
//!
//! Supports three output formats controlled by `LUNAR_LOG_FORMAT`:
//!
//! - `text` (default): Standard `tracing-subscriber` flat output
//! - `tree`: Hierarchical indented output via `tracing-tree`
//! - `json`: One JSON object per span/event
//!
//! ## Quick start
//!
//! ```bash
//! LUNAR_LOG=trace LUNAR_LOG_FORMAT=tree cargo test -p lunar-solver
//! LUNAR_LOG="lunar_solver::metatable=trace" cargo test
//! ```
//!
//! The subscriber is only initialised when `LUNAR_LOG` (or `RUST_LOG`) is set.

use std::sync::Once;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse a `LUNAR_LOG_FORMAT` value. Unknown values fall back to text.
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("LUNAR_LOG_FORMAT").unwrap_or_default())
    }
}

/// Build an `EnvFilter` from `LUNAR_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("LUNAR_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

static INIT: Once = Once::new();

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `LUNAR_LOG` nor `RUST_LOG` is set. Safe to call
/// repeatedly; only the first call installs anything.
/// All output goes to stderr.
pub fn init_tracing() {
    INIT.call_once(|| {
        let has_lunar_log = std::env::var("LUNAR_LOG").is_ok();
        let has_rust_log = std::env::var("RUST_LOG").is_ok();
        if !has_lunar_log && !has_rust_log {
            return;
        }

        let filter = build_filter();
        // try_init: a host binary may already own the global subscriber.
        let _ = match LogFormat::from_env() {
            LogFormat::Tree => {
                let tree_layer = tracing_tree::HierarchicalLayer::default()
                    .with_indent_amount(2)
                    .with_indent_lines(true)
                    .with_targets(true);
                Registry::default().with(filter).with(tree_layer).try_init()
            }
            LogFormat::Json => {
                let json_layer = fmt::layer().json().with_writer(std::io::stderr);
                Registry::default().with(filter).with(json_layer).try_init()
            }
            LogFormat::Text => {
                let text_layer = fmt::layer().with_writer(std::io::stderr);
                Registry::default().with(filter).with(text_layer).try_init()
            }
        };
    });
}

#[cfg(test)]
#[path = "../tests/tracing_config_tests.rs"]
mod tests;
