//! Users Module
//!
//! User accounts: storage in `db`, HTTP surface in `handlers`.

pub mod db;
pub mod handlers;

pub use handlers::{create_user, delete_user, get_user, search_users, update_password, update_user};
