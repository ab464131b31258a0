//! # Culina Store
//!
//! The saved-recipes repository and its durable storage backends.
//!
//! [`RecipeBook`] holds the in-memory collection and writes the full blob
//! back through an injected [`culina_core::RecipeStorage`] after every
//! mutation. Two backends are provided:
//!
//! - [`JsonFileStorage`]: one JSON file per key in a data directory
//! - [`MemoryStorage`]: in-process map, for tests and ephemeral sessions
//!
//! A blob that fails to parse loads as an empty collection ("corrupt cache
//! is empty cache"); the condition is logged, never surfaced.

#![warn(clippy::all)]

pub mod book;
pub mod file;
pub mod memory;

pub use book::RecipeBook;
pub use file::JsonFileStorage;
pub use memory::MemoryStorage;
