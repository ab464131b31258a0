//! # Culina CLI
//!
//! Command-line front end for the Culina recipe assistant: full recipes by
//! dish name, suggestions by ingredients or mood, and a saved-recipes book.

#![warn(clippy::all)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod session;
