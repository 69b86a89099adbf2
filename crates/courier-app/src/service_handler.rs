use salvo::async_trait;
use std::sync::Arc;

use crate::error::AppResult;
use courier_core::error::CoreError;
use courier_service::contact::ContactService;

pub struct ContactServiceHandler {
    pub service: Arc<ContactService>,
}

#[async_trait]
impl salvo::Handler for ContactServiceHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.service));
    }
}

/// ## Summary
/// Retrieves the contact service from the depot.
///
/// ## Errors
/// Returns an error if the contact service is not found in the depot.
pub fn get_service_from_depot(depot: &salvo::Depot) -> AppResult<Arc<ContactService>> {
    depot
        .obtain::<Arc<ContactService>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Contact service not found in depot").into())
}
