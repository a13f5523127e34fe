//! In-memory relational store for the Star Wars catalog.
//!
//! Tables keep rows in insertion order, which is load-bearing: friend and
//! appearance edges are returned exactly as seeded, never resorted.
//!
//! ## Components
//!
//! - [`StarWarsDb`]: the tables plus the two join-row vectors
//! - [`Repository`]: unit-of-work CRUD shared by every entity type
//! - [`CharacterRepository`] and friends: per-entity repositories, created
//!   fresh for each logical request from the shared [`SharedDb`] handle

mod database;
mod repository;
mod seed;

pub use database::{Entity, SharedDb, StarWarsDb, Table};
pub use repository::{
    CharacterRepository, DroidRepository, EpisodeRepository, HumanRepository, LoadedCharacter,
    LoadedEpisode, PlanetRepository, Repository,
};
pub use seed::ensure_seed_data;
