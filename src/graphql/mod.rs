//! GraphQL schema and resolvers for the Star Wars catalog.
//!
//! Three root fields, all read-only:
//!
//! - `hero(episode)`: the hero of one episode, or of the whole saga
//! - `human(id)`: a human by id
//! - `droid(id)`: a droid by id
//!
//! `Human` and `Droid` both implement the `Character` interface; their
//! `friends` and `appearsIn` fields resolve lazily against the repository
//! layer, only when the client selects them.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! holonet serve --port 4000
//!
//! # Execute a query from the CLI
//! holonet query '{ hero(episode: EMPIRE) { name } }'
//! ```

mod schema;
mod server;
mod types;

pub use schema::{HolonetSchema, QueryRoot, build_schema};
pub use server::{router, run_server};
pub use types::{Character, Droid, Episode, Human};
