mod contact;
mod health;

use salvo::Router;

// Re-export route constants from core
pub use courier_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, API_VERSION_COMPONENT, API_VERSION_PREFIX,
    CONTACT_ROUTE_COMPONENT, CONTACT_ROUTE_PREFIX, HEALTH_ROUTE_COMPONENT,
};

/// ## Summary
/// Constructs the versioned API router.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT).push(
        Router::with_path(API_VERSION_COMPONENT)
            .push(health::routes())
            .push(contact::routes()),
    )
}
