//! Authentication: password hashing, session state and the Auth Manager.

mod context;
mod manager;
mod password;
pub mod session;

pub use context::RequestContext;
pub use manager::AuthManager;
pub use password::{hash_password, verify_password};
pub use session::{SessionState, SESSION_LAST_LOGIN_KEY, SESSION_USER_ID_KEY};
