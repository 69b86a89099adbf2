use salvo::{Depot, Request, Response, Router, handler, http::StatusCode, writing::Json};
use serde::Serialize;
use serde_json::{Map, Value};

use courier_core::constants::CONTACT_ROUTE_COMPONENT;
use courier_service::notify::NotificationStatus;

use crate::error::{AppError, AppResult};
use crate::service_handler::get_service_from_depot;

pub const SAVED_MESSAGE: &str = "Contact saved";
pub const SAVED_NOTIFY_FAILED_MESSAGE: &str =
    "Contact saved, but the notification email could not be sent";
pub const UPDATED_MESSAGE: &str = "Contact updated successfully";
pub const DELETED_MESSAGE: &str = "Contact deleted successfully";

/// ## Summary
/// Create contact response payload
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: String,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// ## Summary
/// Reads the request body as a JSON object.
///
/// Field-level checks happen in the validator; this only rejects bodies that
/// are not JSON or not an object.
async fn read_object(req: &mut Request) -> AppResult<Map<String, Value>> {
    match req.parse_json::<Value>().await {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(AppError::BadRequest(
            "Request body must be a JSON object".to_string(),
        )),
        Err(e) => {
            tracing::debug!(error = %e, "Failed to parse contact request body");
            Err(AppError::BadRequest("Invalid request body".to_string()))
        }
    }
}

fn path_id(req: &Request) -> AppResult<String> {
    req.param::<String>("id")
        .ok_or_else(|| AppError::BadRequest("Missing contact id".to_string()))
}

/// ## Summary
/// POST /api/v1/contact - Store a submission and notify the site owner
///
/// ## Side Effects
/// - Inserts one contact record
/// - Sends at most one notification email
///
/// ## Errors
/// Returns HTTP 400 for an unreadable body or a failed validation rule
/// Returns HTTP 5xx if the store rejects the insert
#[handler]
async fn create_contact(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    tracing::debug!("Processing contact submission");

    let result = async {
        let service = get_service_from_depot(depot)?;
        let payload = read_object(req).await?;
        Ok::<_, AppError>(service.submit(&payload).await?)
    }
    .await;

    match result {
        Ok(submission) => {
            let message = match submission.notification {
                NotificationStatus::Failed => SAVED_NOTIFY_FAILED_MESSAGE,
                NotificationStatus::Sent | NotificationStatus::Disabled => SAVED_MESSAGE,
            };
            res.status_code(StatusCode::CREATED);
            res.render(Json(CreatedResponse {
                id: submission.id.to_string(),
                message,
            }));
        }
        Err(e) => e.render(res),
    }
}

/// ## Summary
/// GET /api/v1/contact - List stored contacts, newest first
///
/// ## Errors
/// Returns HTTP 5xx if the store cannot be read
#[handler]
async fn list_contacts(depot: &mut Depot, res: &mut Response) {
    let result = async {
        let service = get_service_from_depot(depot)?;
        Ok::<_, AppError>(service.list().await?)
    }
    .await;

    match result {
        Ok(contacts) => {
            tracing::debug!(count = contacts.len(), "Listed contacts");
            res.render(Json(contacts));
        }
        Err(e) => e.render(res),
    }
}

/// ## Summary
/// PUT /api/v1/contact/{id} - Replace a stored contact
///
/// ## Errors
/// Returns HTTP 400 for a malformed id, an unreadable body or a failed rule
/// Returns HTTP 404 if no contact has the id
#[handler]
async fn update_contact(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let result = async {
        let service = get_service_from_depot(depot)?;
        let raw_id = path_id(req)?;
        let payload = read_object(req).await?;
        service.update(&raw_id, &payload).await?;
        Ok::<_, AppError>(())
    }
    .await;

    match result {
        Ok(()) => res.render(Json(MessageResponse {
            message: UPDATED_MESSAGE,
        })),
        Err(e) => e.render(res),
    }
}

/// ## Summary
/// DELETE /api/v1/contact/{id} - Remove a stored contact
///
/// ## Errors
/// Returns HTTP 400 for a malformed id
/// Returns HTTP 404 if no contact has the id
#[handler]
async fn delete_contact(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let result = async {
        let service = get_service_from_depot(depot)?;
        let raw_id = path_id(req)?;
        service.delete(&raw_id).await?;
        Ok::<_, AppError>(())
    }
    .await;

    match result {
        Ok(()) => res.render(Json(MessageResponse {
            message: DELETED_MESSAGE,
        })),
        Err(e) => e.render(res),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(CONTACT_ROUTE_COMPONENT)
        .get(list_contacts)
        .post(create_contact)
        .push(
            Router::with_path("{id}")
                .put(update_contact)
                .delete(delete_contact),
        )
}
