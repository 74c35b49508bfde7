//! Synthetic Goodreads review data generator.
//!
//! Each run draws flat fake review events from the `fake` backend and fans
//! them out into four denormalized CSV tables (reviews, user, author, book)
//! under a configurable base directory.

pub mod config;
pub mod engine;
pub mod errors;
pub mod event;
pub mod logging;
pub mod model;
pub mod output;
pub mod project;
pub mod titles;

pub use engine::GoodreadsGenerator;
pub use errors::GenerationError;
pub use model::{GenerateOptions, GenerationReport, TableReport};
