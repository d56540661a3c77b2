//! Application state for the conversion API.
//!
//! Holds the converter and configuration shared by every request handler.

use std::sync::Arc;

use pubxml_convert::PublishedItemConverter;

use crate::config::ServerConfig;

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `C` - The converter (must implement [`PublishedItemConverter`])
///
/// # Example
///
/// ```rust
/// use pubxml_convert::XmlConverter;
/// use pubxml_rest::{AppState, ServerConfig};
/// use std::sync::Arc;
///
/// let state = AppState::new(Arc::new(XmlConverter::new()), ServerConfig::default());
/// assert_eq!(state.max_body_size(), 10 * 1024 * 1024);
/// ```
pub struct AppState<C> {
    /// The converter.
    converter: Arc<C>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since C is wrapped in Arc and doesn't need to be Clone
impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            converter: Arc::clone(&self.converter),
            config: Arc::clone(&self.config),
        }
    }
}

impl<C: PublishedItemConverter> AppState<C> {
    /// Creates a new AppState with the given converter and configuration.
    pub fn new(converter: Arc<C>, config: ServerConfig) -> Self {
        Self {
            converter,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the converter.
    pub fn converter(&self) -> &C {
        &self.converter
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the maximum accepted request body size in bytes.
    pub fn max_body_size(&self) -> usize {
        self.config.max_body_size
    }
}
