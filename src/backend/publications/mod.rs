//! Publications Module
//!
//! Posts, the follower feed and like counters.

pub mod db;
pub mod handlers;

pub use handlers::{
    create_publication, delete_publication, feed, get_publication, like, publications_by_user,
    unlike, update_publication,
};
