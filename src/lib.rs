//! # Holonet - a Star Wars GraphQL API
//!
//! Holonet serves the characters, droids, episodes and planets of the
//! original trilogy over a single GraphQL endpoint, backed by a seeded
//! in-memory relational store.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the server (playground on GET /graphql)
//! holonet serve --port 4000
//!
//! # One-off queries without a server
//! holonet query '{ hero { name } }'
//! holonet query '{ luke: human(id: "1000") { name homePlanet } }'
//!
//! # Inspect the schema
//! holonet schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and the axum server
//! - [`model`]: Data models (Character, Episode, Planet, join rows)
//! - [`storage`]: In-memory store and the repository layer
//! - [`trilogy`]: Hero-of-an-episode lookup policy

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles the optional `holonet.yml` configuration file.
pub mod config;

/// Error types and result aliases.
///
/// Defines the `HolonetError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers and HTTP server.
///
/// Provides the async-graphql schema and the axum router serving it.
pub mod graphql;

/// Data models for the Star Wars catalog.
pub mod model;

/// In-memory relational store and repositories.
pub mod storage;

/// Hero lookup across the trilogy.
pub mod trilogy;

pub mod logging;
