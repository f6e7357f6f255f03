//! GraphQL schema, resolvers and HTTP transport for the user directory.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! user-directory serve --port 4000
//!
//! # Execute a query from the CLI
//! user-directory query '{ listUsers(limit: 2) { id name } }'
//! ```
//!
//! ## Schema
//!
//! ```graphql
//! type User {
//!   id: ID!
//!   name: String!
//!   email: String!
//!   age: Int
//! }
//!
//! type Query {
//!   getUser(id: ID!): User
//!   listUsers(limit: Int): [User!]!
//! }
//! ```

mod schema;
mod server;
mod types;

pub use schema::{DirectorySchema, QueryRoot, build_schema};
pub use server::{bind, router, run_server, serve};
pub use types::*;
