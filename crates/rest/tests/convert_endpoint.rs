//! Conversion endpoint tests.
//!
//! Covers the success response (body, content type, attachment name), the
//! validation problem body, and request body rejections.

mod common;

use axum::body::Bytes;
use pubxml_rest::ServerConfig;
use quick_xml::Reader;
use quick_xml::events::Event;
use regex::Regex;
use serde_json::json;

use common::assertions::{assert_content_type, assert_problem, assert_status, validation_messages};
use common::fixtures;

const CONVERT: &str = "/convert/json-to-xml";

/// Collects `(sequence, Name, DisplayName)` for every `PersonGroup`.
fn person_groups(xml: &str) -> Vec<(String, String, String)> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut groups = Vec::new();
    let mut current = None;
    let mut element = Vec::new();
    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) => {
                if e.name().as_ref() == b"PersonGroup" {
                    let attr = e.try_get_attribute("sequence").unwrap().unwrap();
                    let sequence = String::from_utf8(attr.value.to_vec()).unwrap();
                    current = Some((sequence, String::new(), String::new()));
                }
                element = e.name().as_ref().to_vec();
            }
            Event::Text(t) => {
                let text = String::from_utf8(t.to_vec()).unwrap();
                if let Some(group) = current.as_mut() {
                    match element.as_slice() {
                        b"Name" => group.1 = text,
                        b"DisplayName" => group.2 = text,
                        _ => {}
                    }
                }
            }
            Event::End(e) if e.name().as_ref() == b"PersonGroup" => {
                groups.extend(current.take());
            }
            Event::Eof => break,
            _ => {}
        }
    }
    groups
}

#[tokio::test]
async fn test_convert_returns_xml_attachment() {
    let server = common::create_test_server();

    let response = server.post(CONVERT).json(&fixtures::single_contact()).await;

    assert_status(&response, 200);
    assert_content_type(&response, "application/xml");

    let disposition = response.header("content-disposition");
    let disposition = disposition.to_str().unwrap();
    let pattern = Regex::new(
        r#"^attachment; filename="[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}_\d{8}_\d{6}\.xml"$"#,
    )
    .unwrap();
    assert!(pattern.is_match(disposition), "unexpected disposition: {}", disposition);
}

#[tokio::test]
async fn test_attachment_names_differ_between_requests() {
    let server = common::create_test_server();

    let first = server.post(CONVERT).json(&fixtures::single_contact()).await;
    let second = server.post(CONVERT).json(&fixtures::single_contact()).await;

    assert_ne!(
        first.header("content-disposition"),
        second.header("content-disposition")
    );
}

#[tokio::test]
async fn test_single_contact_document() {
    let server = common::create_test_server();

    let xml = server
        .post(CONVERT)
        .json(&fixtures::single_contact())
        .await
        .text();

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
    assert!(xml.contains("<Title>Document for Publication &gt; Best Report Yet!!</Title>"));
    assert!(xml.contains("<Countries>US</Countries>"));
    assert!(xml.contains("<PublishedDate>2024-08-26T18:19:59Z</PublishedDate>"));
    assert!(xml.contains("<JobTitle>Director of Communications &amp; Marketing</JobTitle>"));
    assert!(xml.contains("<Number>1-646-731-1347</Number>"));
    assert!(!xml.contains("mike.johnsen@example.com"));
    assert!(!xml.contains("CM&amp;AA"));

    assert_eq!(
        person_groups(&xml),
        [(
            "1".to_string(),
            "Media Contact".to_string(),
            "Mike Johnsen".to_string()
        )]
    );
}

#[tokio::test]
async fn test_multiple_contacts_document() {
    let server = common::create_test_server();

    let response = server
        .post(CONVERT)
        .json(&fixtures::multiple_contacts())
        .await;
    assert_status(&response, 200);

    let xml = response.text();
    assert!(xml.contains("<Countries>US,BR</Countries>"));
    // Document title is absent, so the metadata title is used
    assert!(xml.contains("<Title>Document for Publication &gt; Best Report Yet!!</Title>"));

    let groups: Vec<_> = person_groups(&xml)
        .into_iter()
        .map(|(seq, name, display)| format!("{}|{}|{}", seq, name, display))
        .collect();
    assert_eq!(
        groups,
        [
            "1|Media Contact|Mike Johnsen",
            "2|Analytical Contacts|Fabio Camillo",
            "3|Analytical Contacts|Fabio 2 Camillo 2",
        ]
    );
}

#[tokio::test]
async fn test_offset_publish_date_is_rendered_in_utc() {
    let server = common::create_test_server();

    let body = fixtures::single_contact_with("PublishDate", json!("2024-08-26T20:19:59+02:00"));
    let xml = server.post(CONVERT).json(&body).await.text();

    assert!(xml.contains("<PublishedDate>2024-08-26T18:19:59Z</PublishedDate>"));
}

#[tokio::test]
async fn test_control_character_fails_without_a_document() {
    let server = common::create_test_server();

    let body = fixtures::single_contact_with("Title", json!("A\u{1}B"));
    let response = server.post(CONVERT).json(&body).await;

    let problem = assert_problem(&response, 500);
    assert_eq!(problem["title"], "Internal Server Error");
    assert!(problem.get("detail").is_none());
    assert!(!response.headers().contains_key("content-disposition"));
}

#[tokio::test]
async fn test_later_duplicate_key_wins() {
    let server = common::create_test_server();

    let mut body = fixtures::single_contact();
    body["TITLE"] = json!("Final Title");
    let xml = server.post(CONVERT).json(&body).await.text();

    assert!(xml.contains("<Title>Final Title</Title>"));
}

#[tokio::test]
async fn test_early_publish_date_is_rejected() {
    let server = common::create_test_server();

    let body = fixtures::single_contact_with("PublishDate", json!("2024-08-01T00:00:00Z"));
    let response = server.post(CONVERT).json(&body).await;

    let problem = assert_problem(&response, 400);
    assert_eq!(problem["title"], "One or more validation errors occurred.");
    assert_eq!(
        problem["type"],
        "https://tools.ietf.org/html/rfc9110#section-15.5.1"
    );
    assert_eq!(
        validation_messages(&problem, "PublishDate"),
        ["PublishDate must be on or after 2024-08-24."]
    );
    assert_eq!(problem["errors"].as_object().unwrap().len(), 1);
}

#[tokio::test]
async fn test_status_and_test_run_are_rejected() {
    let server = common::create_test_server();

    let mut body = fixtures::single_contact();
    body["Status"] = json!(2);
    body["TestRun"] = json!(false);
    let response = server.post(CONVERT).json(&body).await;

    let problem = assert_problem(&response, 400);
    assert_eq!(validation_messages(&problem, "Status"), ["Status must be 3."]);
    assert_eq!(
        validation_messages(&problem, "TestRun"),
        ["Request must be a test run (TestRun=true)."]
    );
    assert!(validation_messages(&problem, "PublishDate").is_empty());
}

#[tokio::test]
async fn test_empty_document_fails_every_rule() {
    let server = common::create_test_server();

    let response = server.post(CONVERT).json(&json!({})).await;

    let problem = assert_problem(&response, 400);
    let errors = problem["errors"].as_object().unwrap();
    assert_eq!(errors.len(), 3);
    assert!(!response.headers().contains_key("content-disposition"));
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let server = common::create_test_server();

    let response = server
        .post(CONVERT)
        .bytes(Bytes::from_static(b"{\"Title\": "))
        .content_type("application/json")
        .await;

    let problem = assert_problem(&response, 400);
    assert_eq!(problem["title"], "Invalid request body");
    assert!(problem["detail"].is_string());
}

#[tokio::test]
async fn test_wrong_field_type_is_bad_request() {
    let server = common::create_test_server();

    let body = fixtures::single_contact_with("Status", json!("three"));
    let response = server.post(CONVERT).json(&body).await;

    let problem = assert_problem(&response, 400);
    assert_eq!(problem["title"], "Invalid request body");
}

#[tokio::test]
async fn test_non_json_content_type_is_unsupported() {
    let server = common::create_test_server();

    let response = server.post(CONVERT).text("<Document/>").await;

    let problem = assert_problem(&response, 415);
    assert!(problem["detail"].as_str().unwrap().contains("text/plain"));
}

#[tokio::test]
async fn test_missing_content_type_is_read_as_json() {
    let server = common::create_test_server();

    let body = serde_json::to_vec(&fixtures::single_contact()).unwrap();
    let response = server.post(CONVERT).bytes(Bytes::from(body)).await;

    assert_status(&response, 200);
    assert_content_type(&response, "application/xml");
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let server = common::create_test_server_with_config(ServerConfig {
        max_body_size: 64,
        ..ServerConfig::for_testing()
    });

    let response = server.post(CONVERT).json(&fixtures::single_contact()).await;

    assert_problem(&response, 413);
}

#[tokio::test]
async fn test_get_is_not_allowed() {
    let server = common::create_test_server();

    let response = server.get(CONVERT).await;

    assert_status(&response, 405);
}
