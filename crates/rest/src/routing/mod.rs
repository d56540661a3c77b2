//! Route configuration for the conversion API.

pub mod routes;

pub use routes::{CONVERT_PATH, create_routes};
