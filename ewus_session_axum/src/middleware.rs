use axum::{extract::Request, middleware::Next, response::Response};
use http::header::SET_COOKIE;

use ewus_session::refresh_session_core;

/// Sliding-expiry session refresh, mounted on protected routes with
/// `axum::middleware::from_fn`
///
/// A request without a usable session cookie passes through untouched.
/// Otherwise the refreshed cookie rides the outgoing response, pushing the
/// expiry window forward on every authenticated request. Failures degrade to
/// pass-through; the middleware never fails the request itself.
pub async fn refresh_session(req: Request, next: Next) -> Response {
    let refreshed = match refresh_session_core(req.headers()) {
        Ok(refreshed) => refreshed,
        Err(e) => {
            tracing::error!("Session refresh failed: {}", e);
            None
        }
    };

    let mut response = next.run(req).await;

    if let Some(cookie_headers) = refreshed {
        for value in cookie_headers.get_all(SET_COOKIE) {
            response.headers_mut().append(SET_COOKIE, value.clone());
        }
    }

    response
}
