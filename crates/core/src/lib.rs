//! Recipe domain core.
//!
//! Shared types, the domain error enum, and pure rules (paging, search,
//! defaults) with no database or HTTP dependencies.

pub mod error;
pub mod recipe;
pub mod search;
pub mod types;
