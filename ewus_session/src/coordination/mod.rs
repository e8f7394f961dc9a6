mod errors;
mod session;
mod signin;

pub use errors::CoordinationError;
pub use session::{get_session_core, refresh_session_core};
pub use signin::{
    MSG_INVALID_CREDENTIALS, MSG_SIGNIN_FAILED, SignInResult, signin_core, signout_core,
};
