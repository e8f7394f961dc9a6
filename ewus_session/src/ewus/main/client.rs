use std::time::Duration;

use http::header::CONTENT_TYPE;
use url::Url;

use crate::ewus::config::{EWUS_LOGIN_TIMEOUT, EWUS_SERVER_BASE_URL};
use crate::ewus::errors::EwusError;
use crate::ewus::types::{Credentials, LoginResponse};

/// Client settings:
///
/// - `timeout`: bounds every login attempt; a hung remote endpoint must not
///   hold the inbound request open indefinitely.
/// - `pool_idle_timeout` / `pool_max_idle_per_host`: connection reuse across
///   sign-in attempts against the single remote host.
fn get_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(*EWUS_LOGIN_TIMEOUT))
        .pool_idle_timeout(Duration::from_secs(90))
        .pool_max_idle_per_host(32)
        .build()
        .expect("Failed to create reqwest client")
}

fn login_endpoint(base_url: &str) -> String {
    format!("{}/login/", base_url.trim_end_matches('/'))
}

fn map_error_status(code: u16) -> EwusError {
    match code {
        400 => EwusError::NotFound,
        500 => EwusError::InternalServerError,
        code => EwusError::Status(code),
    }
}

/// Perform the remote login call
///
/// One outbound request per sign-in attempt, no retry. The body carries the
/// five wire fields of [`Credentials`] as JSON.
pub(crate) async fn login_with_credentials(
    credentials: &Credentials,
) -> Result<LoginResponse, EwusError> {
    let endpoint = login_endpoint(&EWUS_SERVER_BASE_URL);
    let url = Url::parse(&endpoint)
        .map_err(|e| EwusError::Config(format!("Invalid login endpoint {endpoint}: {e}")))?;

    let body =
        serde_json::to_string(credentials).map_err(|e| EwusError::Serde(e.to_string()))?;

    let client = get_client();
    let response = client
        .post(url)
        .header(CONTENT_TYPE, "application/json;charset=utf-8")
        .body(body)
        .send()
        .await
        .map_err(|e| EwusError::Request(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(map_error_status(status.as_u16()));
    }

    let response_body = response
        .text()
        .await
        .map_err(|e| EwusError::Request(e.to_string()))?;

    tracing::debug!("Login response body: {:#?}", response_body);
    let login: LoginResponse = serde_json::from_str(&response_body)
        .map_err(|e| EwusError::Serde(format!("Failed to deserialize response body: {e}")))?;

    Ok(login)
}
