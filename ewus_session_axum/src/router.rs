//! Router for the eWUS session endpoints

use axum::{
    Router,
    routing::{get, post},
};

/// Create the router for the sign-in/sign-out endpoints
///
/// Mount it under [`ewus_session::EWUS_ROUTE_PREFIX`]:
/// - `POST {EWUS_ROUTE_PREFIX}/signin`
/// - `GET {EWUS_ROUTE_PREFIX}/signout`
pub fn ewus_session_router() -> Router {
    Router::new()
        .route("/signin", post(super::signin::signin))
        .route("/signout", get(super::signin::signout))
}
