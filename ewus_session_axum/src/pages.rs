use askama::Template;
use axum::response::{Html, IntoResponse, Redirect, Response};
use http::StatusCode;

use ewus_session::EWUS_ROUTE_PREFIX;

use super::config::EWUS_REDIRECT_SIGNED_IN;
use super::session::AuthSession;

#[derive(Template)]
#[template(path = "login.j2")]
struct LoginTemplate<'a> {
    message: &'a str,
    ewus_route_prefix: &'a str,
}

/// Minimal login page; an already-authenticated visitor is sent back to the
/// application.
pub async fn login_page(session: Option<AuthSession>) -> Result<Response, (StatusCode, String)> {
    match session {
        Some(_) => Ok(Redirect::to(EWUS_REDIRECT_SIGNED_IN.as_str()).into_response()),
        None => {
            let template = LoginTemplate {
                message: "Logowanie eWUŚ",
                ewus_route_prefix: EWUS_ROUTE_PREFIX.as_str(),
            };
            let html = Html(
                template
                    .render()
                    .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?,
            );
            Ok(html.into_response())
        }
    }
}
