use axum::response::{Html, IntoResponse};

use ewus_session_axum::{AuthSession, EWUS_ROUTE_PREFIX};

/// Protected index page; anonymous visitors are redirected to /login by the
/// extractor.
pub(crate) async fn index(session: AuthSession) -> impl IntoResponse {
    Html(format!(
        "<h1>Zalogowano jako {}</h1>\
         <p>Sesja eWUŚ: {} (token {})</p>\
         <p>Wygasa: {}</p>\
         <p><a href=\"{}/signout\">Wyloguj</a></p>",
        session.login_ewus,
        session.session_id,
        session.token_id,
        session.expires,
        EWUS_ROUTE_PREFIX.as_str(),
    ))
}
