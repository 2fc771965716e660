//! # Psyche-Core
//!
//! Core types and reference data for the psyche trait-classification
//! and archetype-scoring engine.

pub mod catalog;
pub mod error;
pub mod types;

pub use catalog::*;
pub use error::{Error, Result};
pub use types::*;
