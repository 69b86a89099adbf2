//! Tests for the contact endpoints.
//!
//! Covers the submit, list, update and delete flows over an in-memory store.

use std::sync::Arc;

use salvo::http::StatusCode;
use serde_json::json;

use super::helpers::*;

// ============================================================================
// Create
// ============================================================================

/// ## Summary
/// A valid submission is stored and listed first with all its fields.
#[test_log::test(tokio::test)]
async fn create_then_list_returns_record() {
    let app = TestApp::new();

    let response = TestRequest::post(CONTACT_ROUTE_PREFIX)
        .json_body(&john_doe())
        .send(&app.service)
        .await
        .assert_status(StatusCode::CREATED);
    let created = response.json();
    assert_eq!(created["message"], "Contact saved");
    let id = created["id"].as_str().expect("id is a string").to_string();

    let contacts = list_contacts(&app.service).await;
    assert_eq!(contacts.len(), 1);
    let record = &contacts[0];
    assert_eq!(record["id"], id.as_str());
    assert_eq!(record["first_name"], "John");
    assert_eq!(record["last_name"], "Doe");
    assert_eq!(record["email"], "john@example.com");
    assert_eq!(record["phone_number"], "+1234567890");
    assert_eq!(record["message"], "Hi");
    assert_eq!(record["services"], json!(["Web Development"]));
    assert!(record["created_at"].is_string());
}

#[test_log::test(tokio::test)]
async fn list_is_newest_first() {
    let app = TestApp::without_mail();

    let mut ids = Vec::new();
    for name in ["Ann", "Bob", "Cat"] {
        let mut body = john_doe();
        body["first_name"] = json!(name);
        ids.push(create_contact(&app.service, &body).await);
    }

    let listed: Vec<String> = list_contacts(&app.service)
        .await
        .iter()
        .map(|c| c["id"].as_str().expect("id").to_string())
        .collect();
    ids.reverse();
    assert_eq!(listed, ids);
}

#[test_log::test(tokio::test)]
async fn empty_first_name_is_rejected() {
    let app = TestApp::new();
    let mut body = john_doe();
    body["first_name"] = json!("");

    let response = TestRequest::post(CONTACT_ROUTE_PREFIX)
        .json_body(&body)
        .send(&app.service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["field"], "first_name");

    assert!(app.store.is_empty().await);
}

#[test_log::test(tokio::test)]
async fn malformed_email_is_rejected() {
    let app = TestApp::new();
    let mut body = john_doe();
    body["email"] = json!("not-an-email");

    let response = TestRequest::post(CONTACT_ROUTE_PREFIX)
        .json_body(&body)
        .send(&app.service)
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_body_contains("Invalid email format");
    assert_eq!(response.json()["field"], "email");

    assert!(app.store.is_empty().await);
}

#[test_log::test(tokio::test)]
async fn non_object_body_is_rejected() {
    let app = TestApp::new();

    TestRequest::post(CONTACT_ROUTE_PREFIX)
        .json_body(&json!(["John", "Doe"]))
        .send(&app.service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    TestRequest::post(CONTACT_ROUTE_PREFIX)
        .content_type("application/json")
        .body("{\"first_name\": ")
        .send(&app.service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    assert!(app.store.is_empty().await);
}

/// ## Summary
/// A failed notification does not undo the stored record.
#[test_log::test(tokio::test)]
async fn notification_failure_still_stores_record() {
    let notifier = Arc::new(ScriptedNotifier::new(NotifyOutcome::Fail));
    let app = TestApp::with_notifier(notifier.clone());

    let response = TestRequest::post(CONTACT_ROUTE_PREFIX)
        .json_body(&john_doe())
        .send(&app.service)
        .await
        .assert_status(StatusCode::CREATED);
    assert_eq!(
        response.json()["message"],
        "Contact saved, but the notification email could not be sent"
    );

    assert_eq!(notifier.attempts(), 1);
    assert_eq!(app.store.len().await, 1);
}

#[test_log::test(tokio::test)]
async fn invalid_submission_sends_no_notification() {
    let notifier = Arc::new(ScriptedNotifier::new(NotifyOutcome::Deliver));
    let app = TestApp::with_notifier(notifier.clone());
    let mut body = john_doe();
    body["phone_number"] = json!("123");

    TestRequest::post(CONTACT_ROUTE_PREFIX)
        .json_body(&body)
        .send(&app.service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    assert_eq!(notifier.attempts(), 0);
}

// ============================================================================
// Update
// ============================================================================

#[test_log::test(tokio::test)]
async fn update_replaces_fields_and_keeps_identity() {
    let app = TestApp::new();
    let id = create_contact(&app.service, &john_doe()).await;
    let original = list_contacts(&app.service).await.remove(0);

    let replacement = json!({
        "first_name": "Jane",
        "last_name": "Roe",
        "email": "jane@example.com",
        "phone_number": "+1987654321",
        "message": "Updated",
        "services": ["SEO"]
    });
    TestRequest::put(&contact_path(&id))
        .json_body(&replacement)
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("Contact updated successfully");

    let updated = list_contacts(&app.service).await.remove(0);
    assert_eq!(updated["id"], original["id"]);
    assert_eq!(updated["created_at"], original["created_at"]);
    assert_eq!(updated["first_name"], "Jane");
    assert_eq!(updated["email"], "jane@example.com");
    assert_eq!(updated["services"], json!(["SEO"]));
}

#[test_log::test(tokio::test)]
async fn update_with_invalid_body_keeps_record() {
    let app = TestApp::new();
    let id = create_contact(&app.service, &john_doe()).await;

    let mut body = john_doe();
    body["message"] = json!("");
    TestRequest::put(&contact_path(&id))
        .json_body(&body)
        .send(&app.service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let contact = list_contacts(&app.service).await.remove(0);
    assert_eq!(contact["message"], "Hi");
}

#[test_log::test(tokio::test)]
async fn update_missing_contact_is_not_found() {
    let app = TestApp::new();
    let missing = create_contact(&app.service, &john_doe()).await;
    TestRequest::delete(&contact_path(&missing))
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK);

    TestRequest::put(&contact_path(&missing))
        .json_body(&john_doe())
        .send(&app.service)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

// ============================================================================
// Delete
// ============================================================================

#[test_log::test(tokio::test)]
async fn delete_removes_record() {
    let app = TestApp::new();
    let id = create_contact(&app.service, &john_doe()).await;

    TestRequest::delete(&contact_path(&id))
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("Contact deleted successfully");

    assert!(list_contacts(&app.service).await.is_empty());
}

/// ## Summary
/// Deleting an absent id reports not found on every attempt.
#[test_log::test(tokio::test)]
async fn delete_missing_is_not_found_twice() {
    let app = TestApp::new();
    let id = create_contact(&app.service, &john_doe()).await;
    TestRequest::delete(&contact_path(&id))
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK);

    for _ in 0..2 {
        TestRequest::delete(&contact_path(&id))
            .send(&app.service)
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}

#[test_log::test(tokio::test)]
async fn malformed_id_is_bad_request() {
    let app = TestApp::new();
    create_contact(&app.service, &john_doe()).await;

    TestRequest::delete(&contact_path("not-a-valid-id"))
        .send(&app.service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    TestRequest::put(&contact_path("1234"))
        .json_body(&john_doe())
        .send(&app.service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    assert_eq!(app.store.len().await, 1);
}

// ============================================================================
// Health
// ============================================================================

#[test_log::test(tokio::test)]
async fn health_reports_ok() {
    let app = TestApp::new();

    let response = TestRequest::get("/api/v1/health")
        .send(&app.service)
        .await
        .assert_status(StatusCode::OK);
    assert_eq!(response.body_string(), "OK");
}
