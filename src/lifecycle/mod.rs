//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     Signal received → trigger → server stops accepting → in-flight requests finish
//!                               → session sweeper exits its loop
//!
//! Signals (signals.rs):
//!     SIGINT (Ctrl+C) / SIGTERM → Trigger graceful shutdown
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
