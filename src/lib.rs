//! # User Directory - a read-only user directory over GraphQL
//!
//! Serves a fixed, in-memory list of users through a GraphQL API with two
//! queries: `getUser(id: ID!)` and `listUsers(limit: Int)`.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the server on the default port (4000, or $PORT)
//! user-directory serve
//!
//! # Fetch one user without starting a server
//! user-directory query '{ getUser(id: "1") { name email } }'
//!
//! # Print the schema
//! user-directory schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading and overrides
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Data models (User)
//! - [`store`]: Immutable in-memory user store

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles the optional `userdir.toml` file and command-line overrides.
pub mod config;

/// Error types and result aliases.
///
/// Defines `DirectoryError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers and server.
pub mod graphql;

/// Data models.
pub mod model;

/// In-memory user store.
pub mod store;

pub mod logging;
