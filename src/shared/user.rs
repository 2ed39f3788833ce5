//! User Types
//!
//! Payloads and views for user accounts. Incoming payloads are validated and
//! normalised with `prepare()` before they reach the database.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::{require_field, SharedError};

/// Identifier of a user account; also the subject carried by identity tokens.
pub type UserId = u64;

/// Public view of a user (never carries the password digest)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub nick: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Account creation payload (`POST /users`)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewUser {
    pub name: String,
    pub nick: String,
    pub email: String,
    /// Plaintext password, hashed before storage
    pub password: String,
}

impl NewUser {
    /// Validate and trim every field
    pub fn prepare(&mut self) -> Result<(), SharedError> {
        prepare_profile(&mut self.name, &mut self.nick, &mut self.email)?;
        if self.password.is_empty() {
            return Err(SharedError::validation(
                "password",
                "Password cannot be blank",
            ));
        }
        Ok(())
    }
}

/// Profile edit payload (`PUT /users/{userId}`)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserUpdate {
    pub name: String,
    pub nick: String,
    pub email: String,
}

impl UserUpdate {
    pub fn prepare(&mut self) -> Result<(), SharedError> {
        prepare_profile(&mut self.name, &mut self.nick, &mut self.email)
    }
}

/// Password change payload (`POST /users/{userId}/update-password`)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PasswordChange {
    #[serde(rename = "current")]
    pub current_password: String,
    #[serde(rename = "new")]
    pub new_password: String,
}

impl PasswordChange {
    pub fn prepare(&self) -> Result<(), SharedError> {
        if self.new_password.is_empty() {
            return Err(SharedError::validation("new", "New password cannot be blank"));
        }
        Ok(())
    }
}

fn prepare_profile(
    name: &mut String,
    nick: &mut String,
    email: &mut String,
) -> Result<(), SharedError> {
    require_field("name", "Name", name)?;
    require_field("nick", "Nick", nick)?;
    require_field("email", "Email", email)?;

    if !is_valid_email(email) {
        return Err(SharedError::validation("email", "Email format is invalid"));
    }
    Ok(())
}

/// Basic `local@domain.tld` shape check
///
/// - exactly one `@`, with a non-empty local part
/// - the domain has a dot that is neither first nor last
/// - no whitespace anywhere
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.rfind('.') {
        Some(dot) => dot > 0 && dot + 1 < domain.len() && !domain.starts_with('.'),
        None => false,
    }
}
