//! Authentication Handlers
//!
//! - **`login`** - `POST /login`, exchanges email and password for a token
//! - **`types`** - Request and response bodies

pub mod login;
pub mod types;

pub use login::login;
pub use types::{AuthResponse, LoginRequest};
