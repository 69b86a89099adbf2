//! Cross-origin policy for the browser-facing contact form.

use salvo::cors::{AllowHeaders, AllowMethods, AllowOrigin, Cors, CorsHandler};
use salvo::http::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use salvo::http::Method;

/// ## Summary
/// Builds the CORS handler for the configured `origins`.
///
/// Origins that are not valid header values are skipped with a warning.
#[must_use]
pub fn cors_handler(origins: &[String]) -> CorsHandler {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    tracing::debug!(origins = allowed.len(), "CORS policy configured");

    Cors::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([CONTENT_TYPE, AUTHORIZATION]))
        .allow_credentials(true)
        .into_handler()
}
