//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for inserts and full replacements where the entity is writable

pub mod category;
pub mod recipe;
