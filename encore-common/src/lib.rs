//! # Encore Common Library
//!
//! Shared code for the Encore listing service:
//! - Database initialization and schema
//! - Entity models (Venue, Artist, Show)
//! - Error types
//! - Configuration loading

pub mod config;
pub mod db;
pub mod error;
pub mod models;

pub use error::{Error, Result};
