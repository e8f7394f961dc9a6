use axum::{
    RequestPartsExt,
    extract::{FromRequestParts, OptionalFromRequestParts},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::{TypedHeader, headers};
use chrono::{DateTime, Utc};
use http::{Method, StatusCode, request::Parts};

use ewus_session::{SessionPayload, SessionSecret, get_session_from_cookies};

use super::config::EWUS_REDIRECT_ANON;

pub struct AuthRedirect {
    method: Method,
}

impl AuthRedirect {
    fn new(method: Method) -> Self {
        Self { method }
    }

    fn into_response_with_method(self) -> Response {
        if self.method == Method::GET {
            tracing::debug!("Redirecting to {}", EWUS_REDIRECT_ANON.as_str());
            Redirect::temporary(EWUS_REDIRECT_ANON.as_str()).into_response()
        } else {
            tracing::debug!("Unauthorized");
            (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
        }
    }
}

impl IntoResponse for AuthRedirect {
    fn into_response(self) -> Response {
        self.into_response_with_method()
    }
}

/// Authenticated eWUS session, available as an axum extractor
///
/// When used as an extractor, it reads the session cookie, decodes it with
/// the process secret, and re-checks the expiry against wall-clock time.
/// Anonymous visitors are redirected to the login route on GET requests and
/// rejected with 401 otherwise.
///
/// # Example
///
/// ```no_run
/// use axum::{routing::get, Router};
/// use ewus_session_axum::AuthSession;
///
/// async fn protected_handler(session: AuthSession) -> String {
///     format!("Hello, {}!", session.login_ewus)
/// }
///
/// let app: Router = Router::new()
///     .route("/protected", get(protected_handler));
/// ```
#[derive(Clone, Debug)]
pub struct AuthSession {
    /// eWUS login the session was created for
    pub login_ewus: String,
    /// Remote session identifier
    pub session_id: String,
    /// Remote token identifier
    pub token_id: String,
    /// Current expiry of the rolling window
    pub expires: DateTime<Utc>,
}

impl From<SessionPayload> for AuthSession {
    fn from(payload: SessionPayload) -> Self {
        AuthSession {
            login_ewus: payload.user_session.login_ewus,
            session_id: payload.user_session.session_id,
            token_id: payload.user_session.token_id,
            expires: payload.expires,
        }
    }
}

impl<B> FromRequestParts<B> for AuthSession
where
    B: Send + Sync,
{
    type Rejection = AuthRedirect;

    async fn from_request_parts(parts: &mut Parts, _: &B) -> Result<Self, Self::Rejection> {
        let method = parts.method.clone();
        let cookies: TypedHeader<headers::Cookie> = parts.extract().await.map_err(|_| {
            tracing::error!("Failed to extract cookies");
            AuthRedirect::new(method.clone())
        })?;

        let secret = SessionSecret::from_env().map_err(|e| {
            tracing::error!("Session secret unavailable: {}", e);
            AuthRedirect::new(method.clone())
        })?;

        let payload = match get_session_from_cookies(&cookies, &secret) {
            Ok(Some(payload)) => payload,
            _ => return Err(AuthRedirect::new(method)),
        };

        // Decoding already rejects expired tokens; the expiry is re-checked
        // against wall-clock time before the payload is trusted
        if payload.is_expired() {
            return Err(AuthRedirect::new(method));
        }

        Ok(AuthSession::from(payload))
    }
}

impl<B> OptionalFromRequestParts<B> for AuthSession
where
    B: Send + Sync,
{
    type Rejection = AuthRedirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &B,
    ) -> Result<Option<Self>, Self::Rejection> {
        let result: Result<Self, Self::Rejection> =
            <AuthSession as FromRequestParts<B>>::from_request_parts(parts, state).await;
        Ok(result.ok())
    }
}
