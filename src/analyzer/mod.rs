//! Analyzer boundary.
//!
//! # Data Flow
//! ```text
//! user URL
//!     → client.rs (GET {base}/ui/api/analyze?url=..., Accept: application/json)
//!     → types.rs (typed analysis: meta flags, raw link, decomposition, detections)
//!     → session layer
//! ```
//!
//! # Design Decisions
//! - The UI never parses URLs itself; the decomposition comes from here
//! - No retries: failures go straight back to the caller, who keeps the
//!   previous analysis on screen

pub mod client;
pub mod types;

pub use client::{AnalyzerClient, AnalyzerError};
pub use types::{Analysis, AnalysisMeta, Detection, Reason, Severity, Source};
