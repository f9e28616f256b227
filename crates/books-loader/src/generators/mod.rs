//! Row generators for the bulk load.
//!
//! - [`BookGenerator`]: yields the numbered `books` rows of a run

pub mod book;

pub use book::{BookGenerator, BookRow};
