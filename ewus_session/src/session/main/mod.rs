mod codec;
mod session;

pub use codec::{SessionSecret, decrypt_session, encrypt_session};
pub use session::{
    expired_session_headers, get_session_from_cookies, get_session_from_headers,
    new_session_headers, refresh_session_headers,
};
