//! Followers Module
//!
//! Directed follow edges between users.

pub mod db;
pub mod handlers;

pub use handlers::{follow, followers, following, unfollow};
