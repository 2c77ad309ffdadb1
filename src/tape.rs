//! Tape records, label fonts and the shell style catalog.
//!
//! `tape::model` holds the serializable record types; `tape::styles` holds
//! the fixed catalog of cassette shells tapes reference by id.

mod model;
mod styles;

pub use model::*;
pub use styles::*;
