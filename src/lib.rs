//! Checkmate UI Library
//!
//! Interactive URL reduction on top of the Checkmate URL analyzer.

pub mod analyzer;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod reduce;
pub mod session;

pub use config::schema::UiConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
