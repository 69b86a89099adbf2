//! Courier HTTP layer.

pub mod app;
pub mod error;
pub mod middleware;
pub mod service_handler;

use std::sync::Arc;

use salvo::{Router, Service};

use courier_service::contact::ContactService;

use crate::middleware::cors::cors_handler;
use crate::service_handler::ContactServiceHandler;

/// ## Summary
/// Builds the complete HTTP service: CORS, service injection and all routes.
///
/// CORS is attached to the `Service` rather than the router so preflight
/// requests are answered even when no route matches `OPTIONS`.
#[must_use]
pub fn build_service(contacts: Arc<ContactService>, cors_origins: &[String]) -> Service {
    let router = Router::new()
        .hoop(ContactServiceHandler { service: contacts })
        .push(app::api::routes());

    Service::new(router).hoop(cors_handler(cors_origins))
}
