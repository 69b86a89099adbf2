use salvo::{Router, handler};

use courier_core::constants::HEALTH_ROUTE_COMPONENT;

#[handler]
async fn health() -> &'static str {
    "OK"
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(HEALTH_ROUTE_COMPONENT).get(health)
}
