//! In-memory user store.
//!
//! The directory is a fixed, ordered list of users built once at startup and
//! shared read-only by every request handler.
//!
//! ## Components
//!
//! - [`UserStore`]: ordered, immutable collection with lookup and head-limit
//! - [`seed_users`]: the records the server starts with

mod seed;
mod user_store;

pub use seed::seed_users;
pub use user_store::UserStore;
