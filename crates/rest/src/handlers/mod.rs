//! HTTP request handlers.
//!
//! - [`convert`] - JSON to XML conversion
//! - [`health`] - Health check endpoints

pub mod convert;
pub mod health;

// Re-export handlers for convenience
pub use convert::convert_handler;
pub use health::health_handler;
