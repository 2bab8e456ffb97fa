//! Configuration loader and schema types.
//!
//! This module exposes the settings that tune a fetch run (request pacing,
//! provider endpoints, which files count as audio) and helpers to load them
//! from disk and the environment.

mod load;
mod schema;

pub use schema::*;
