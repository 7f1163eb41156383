//! Static recipe catalog
//!
//! Categories and recipes are fixed at startup; lookups never fail.

pub mod data;
pub mod types;

pub use data::{categories, recipes_for_category};
pub use types::{Category, CategoryIcon, Difficulty, Recipe};
