//! Session subsystem.
//!
//! # Data Flow
//! ```text
//! Analysis (from analyzer)
//!     → store.rs (create / replace_analysis, keyed by UUID)
//!     → state.rs (Session: analysis + EnablementState)
//!     → SessionView (candidate URL, headline, detections, components)
//! ```
//!
//! # Design Decisions
//! - Sessions live only in memory; nothing is persisted
//! - A toggle holds the session entry for one state replacement, never across an await
//! - A failed re-analysis never touches the stored session
//! - Any access refreshes a session; idle ones are swept in the background
//!   and, when the store is full, before a new one is refused

pub mod state;
pub mod store;

pub use state::{DetectionRow, Session, SessionView};
pub use store::{SessionError, SessionStore};
