//! Store module: exposes the [`TapeStore`] holding shelf state, selection
//! and label settings, with write-behind persistence.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
