//! URL reduction engine.
//!
//! # Data Flow
//! ```text
//! analyzer response
//!     → decomposition.rs (scheme, sub-domains, root domain, path, query)
//!     → enablement.rs (EnablementState::for_decomposition, apply_toggle)
//!     → reconstruct.rs (decomposition + state → candidate URL)
//!     → components.rs (per-part affordances for rendering)
//!
//! Side channel:
//!     analyzer meta flags → headline.rs (at most one advisory)
//! ```
//!
//! # Design Decisions
//! - Everything here is synchronous and side-effect free
//! - A toggle never fails; out-of-range indices are clamped
//! - State is replaced wholesale per toggle, never patched in place by callers

pub mod components;
pub mod decomposition;
pub mod enablement;
pub mod headline;
pub mod reconstruct;

pub use components::{components, Component, ComponentKind};
pub use decomposition::UrlDecomposition;
pub use enablement::{apply_toggle, Cascade, EnablementState, Toggle};
pub use headline::{headline, Headline, HeadlineSeverity};
pub use reconstruct::reconstruct;
