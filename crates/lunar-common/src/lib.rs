//! Common types and utilities for the lunar type checker.
//!
//! This crate provides foundational types used across all lunar crates:
//! - Source positions and locations (`Position`, `Location`)
//! - Diagnostics and the append-only collector they accumulate in
//! - Centralized limits and thresholds
//! - Tracing subscriber setup

// Position/Location types for line/column source locations
pub mod position;
pub use position::{Location, Position};

// Diagnostic records and stable codes
pub mod diagnostics;
pub use diagnostics::{
    Diagnostic, DiagnosticCategory, DiagnosticCollector, diagnostic_codes, format_message,
};

// Centralized limits and thresholds
pub mod limits;

// Tracing setup (LUNAR_LOG / LUNAR_LOG_FORMAT)
pub mod tracing_config;
pub use tracing_config::init_tracing;
