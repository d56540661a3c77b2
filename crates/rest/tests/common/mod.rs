//! Common test utilities for REST API testing.
//!
//! - [`fixtures`] - Request payloads
//! - [`assertions`] - HTTP response assertions

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;

use axum_test::TestServer;
use pubxml_convert::XmlConverter;
use pubxml_rest::{ServerConfig, create_app_with_config};

/// Creates a test server with the standard converter and test configuration.
pub fn create_test_server() -> TestServer {
    create_test_server_with_config(ServerConfig::for_testing())
}

/// Creates a test server with the standard converter and the given configuration.
pub fn create_test_server_with_config(config: ServerConfig) -> TestServer {
    let app = create_app_with_config(XmlConverter::new(), config);
    TestServer::new(app).expect("Failed to create test server")
}
