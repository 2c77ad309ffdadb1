//! Configuration loader and schema types.
//!
//! This module exposes the configuration schema used to pick storage
//! locations and helpers to load configuration from disk.

mod load;
mod schema;

pub use schema::*;
