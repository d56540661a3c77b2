//! HTTP response assertions.

use axum_test::TestResponse;
use serde_json::Value;

/// Asserts that the response has the expected status code.
pub fn assert_status(response: &TestResponse, expected: u16) {
    let actual = response.status_code().as_u16();
    assert_eq!(
        actual, expected,
        "Expected status {}, got {}",
        expected, actual
    );
}

/// Asserts that the response carries the given content type.
pub fn assert_content_type(response: &TestResponse, expected: &str) {
    let actual = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert_eq!(
        actual, expected,
        "Expected content type {}, got {}",
        expected, actual
    );
}

/// Asserts that the response is a problem details body and returns it.
pub fn assert_problem(response: &TestResponse, status: u16) -> Value {
    assert_status(response, status);
    assert_content_type(response, "application/problem+json");

    let body: Value = response.json();
    assert_eq!(body["status"], status, "Problem status mismatch: {}", body);
    assert!(body["type"].is_string(), "Problem without type: {}", body);
    assert!(body["title"].is_string(), "Problem without title: {}", body);
    body
}

/// Returns the messages reported for one property of a validation problem.
pub fn validation_messages(problem: &Value, property: &str) -> Vec<String> {
    problem["errors"][property]
        .as_array()
        .map(|messages| {
            messages
                .iter()
                .filter_map(|m| m.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
