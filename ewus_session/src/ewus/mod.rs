mod config;
mod errors;
mod main;
mod types;

pub use errors::EwusError;
pub use types::{Credentials, LoginResponse, SignInForm};

pub(crate) use main::login_with_credentials;
