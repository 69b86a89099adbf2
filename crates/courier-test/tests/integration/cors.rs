//! Tests for the cross-origin policy.

use salvo::http::StatusCode;

use super::helpers::*;

#[test_log::test(tokio::test)]
async fn preflight_allows_configured_origin() {
    let app = TestApp::new();

    let response = TestRequest::options(CONTACT_ROUTE_PREFIX)
        .header("Origin", TEST_ORIGIN)
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .send(&app.service)
        .await
        .assert_header("access-control-allow-origin", TEST_ORIGIN)
        .assert_header_contains("access-control-allow-methods", "POST")
        .assert_header_contains("access-control-allow-headers", "content-type")
        .assert_header("access-control-allow-credentials", "true");
    assert!(response.status.is_success(), "preflight got {}", response.status);
}

#[test_log::test(tokio::test)]
async fn simple_request_carries_allow_origin() {
    let app = TestApp::new();

    TestRequest::get(CONTACT_ROUTE_PREFIX)
        .header("Origin", TEST_ORIGIN)
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .assert_header("access-control-allow-origin", TEST_ORIGIN)
        .assert_header("access-control-allow-credentials", "true");
}

#[test_log::test(tokio::test)]
async fn unknown_origin_is_not_allowed() {
    let app = TestApp::new();

    let response = TestRequest::get(CONTACT_ROUTE_PREFIX)
        .header("Origin", "http://evil.example")
        .send(&app.service)
        .await;
    assert!(response.get_header("access-control-allow-origin").is_none());
}
