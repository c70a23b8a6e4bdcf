//! Domain layer for the Forkful plugin.
//!
//! This module contains the core domain types for the plugin, independent of
//! Zellij-specific APIs or infrastructure concerns. It follows domain-driven
//! design principles by keeping business rules isolated from external
//! dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`recipe`]: Recipe domain model and the built-in catalog
//!
//! # Examples
//!
//! ```
//! use forkful::domain::{catalog, Difficulty};
//!
//! let recipes = catalog();
//! assert_eq!(recipes[0].difficulty, Difficulty::Medium);
//! ```

pub mod error;
pub mod recipe;

pub use error::{ForkfulError, Result};
pub use recipe::{catalog, Difficulty, ImageRef, Recipe, RecipeId};
