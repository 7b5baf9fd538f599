//! HTTP API subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID, tracing span)
//!     → extract.rs (JSON body and path, rejections as ApiError)
//!     → handlers.rs (analyze, toggle, view)
//!     → session store / analyzer client
//!     → error.rs (failures as JSON with a retryable flag)
//! ```

pub mod error;
pub mod extract;
pub mod handlers;
pub mod request;
pub mod server;

pub use error::ApiError;
pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer};
