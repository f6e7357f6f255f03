//! Data models for the user directory.
//!
//! - [`User`]: a single directory entry

mod user;

pub use user::User;
