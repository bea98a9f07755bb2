//! Domains module containing business logic organized by bounded contexts.
//!
//! `knowledge` owns the data; `tools` and `resources` are the two ways
//! clients read it.

pub mod knowledge;
pub mod resources;
pub mod tools;
