mod client;

pub(crate) use client::login_with_credentials;
