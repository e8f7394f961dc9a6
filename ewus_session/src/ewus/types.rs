use serde::{Deserialize, Serialize};

use crate::ewus::errors::EwusError;

/// Raw sign-in form input. Every field is optional; [`SignInForm::normalize`]
/// fills the gaps with empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignInForm {
    pub domain: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(rename = "idntSwd")]
    pub idnt_swd: Option<String>,
    pub login_ewus: Option<String>,
    pub password_ewus: Option<String>,
}

impl SignInForm {
    /// Required field shape: a sign-in attempt needs a non-empty eWUS login
    /// and password. The remaining fields may be absent.
    pub fn validate(&self) -> Result<(), EwusError> {
        let filled = |field: &Option<String>| field.as_deref().is_some_and(|s| !s.trim().is_empty());

        if filled(&self.login_ewus) && filled(&self.password_ewus) {
            Ok(())
        } else {
            Err(EwusError::InvalidForm)
        }
    }

    /// Normalized wire credentials: any missing field becomes an empty string.
    pub fn normalize(&self) -> Credentials {
        Credentials {
            domain: self.domain.clone().unwrap_or_default(),
            kind: self.kind.clone().unwrap_or_default(),
            idnt_swd: self.idnt_swd.clone().unwrap_or_default(),
            login_ewus: self.login_ewus.clone().unwrap_or_default(),
            password_ewus: self.password_ewus.clone().unwrap_or_default(),
        }
    }
}

/// Wire-format credentials for `POST {base}/login/`
///
/// Field names follow the remote API exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub domain: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "idntSwd")]
    pub idnt_swd: String,
    pub login_ewus: String,
    pub password_ewus: String,
}

/// Success body of the remote login endpoint
///
/// A session is only minted when both identifiers are present and non-empty.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub token_id: Option<String>,
}
