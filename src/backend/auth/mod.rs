//! Authentication Module
//!
//! Everything that decides who a request comes from and what it may do.
//!
//! # Architecture
//!
//! - **`credentials`** - bcrypt password digests
//! - **`sessions`** - Signed, expiring identity tokens
//! - **`policy`** - Ownership rules checked before every mutation
//! - **`handlers`** - `POST /login`
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── credentials.rs  - Password hashing and verification
//! ├── sessions.rs     - Token issuance and verification
//! ├── policy.rs       - Ownership policy
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     └── login.rs    - User authentication handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Login**: email and password → digest verified → token returned
//! 2. **Protected request**: `Authorization: Bearer <token>` → the gate in
//!    `backend::middleware` verifies it once → handler receives the subject
//! 3. **Mutation**: handler loads the target, then `policy::authorize`
//!    compares it with the subject before anything is written
//!
//! # Security
//!
//! - Tokens are HS256 only and expire 6 hours after issuance
//! - There is no server-side session store and no revocation
//! - Invalid credentials return 401 (no information leakage)

/// Password hashing
pub mod credentials;

/// Identity token issuance and validation
pub mod sessions;

/// Ownership policy
pub mod policy;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use credentials::CredentialError;
pub use handlers::{login, AuthResponse, LoginRequest};
pub use policy::{authorize, OwnershipRule, PolicyViolation};
pub use sessions::{Claims, TokenError, TokenService};
