use axum::{
    Json,
    response::{IntoResponse, Redirect, Response},
};
use http::{HeaderMap, StatusCode};
use serde::Serialize;

use ewus_session::{SignInForm, SignInResult, signin_core, signout_core};

use super::config::{EWUS_REDIRECT_ANON, EWUS_REDIRECT_SIGNED_IN};
use super::error::IntoResponseError;

#[derive(Debug, Serialize)]
struct SignInMessage {
    message: &'static str,
}

/// `POST {EWUS_ROUTE_PREFIX}/signin`
///
/// On success the session cookie and the redirect to the application root
/// ride the same response. A denied attempt returns the localized message
/// with no cookie and no redirect.
pub(super) async fn signin(Json(form): Json<SignInForm>) -> Result<Response, (StatusCode, String)> {
    match signin_core(&form).await.into_response_error()? {
        SignInResult::Authenticated(headers) => {
            Ok((headers, Redirect::to(EWUS_REDIRECT_SIGNED_IN.as_str())).into_response())
        }
        SignInResult::Denied(message) => Ok(Json(SignInMessage { message }).into_response()),
    }
}

/// `GET {EWUS_ROUTE_PREFIX}/signout`
///
/// Expires the cookie unconditionally and redirects to the login route.
pub(super) async fn signout() -> Result<(HeaderMap, Redirect), (StatusCode, String)> {
    let headers = signout_core().into_response_error()?;
    Ok((headers, Redirect::to(EWUS_REDIRECT_ANON.as_str())))
}
