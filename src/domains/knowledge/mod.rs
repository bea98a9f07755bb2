//! Knowledge domain module.
//!
//! Holds the static character, build and team data that every tool queries.
//! The store is constructed once at startup and shared read-only behind an
//! `Arc` by the tool dispatcher and the resource service.
//!
//! ## Architecture
//!
//! - `types.rs` - Entity types (characters, builds, team compositions)
//! - `store.rs` - The store, its lookups and load-time validation
//! - `seed.rs` - The compiled-in data set
//! - `error.rs` - Errors for inconsistent data

mod error;
mod seed;
mod store;
pub mod types;

pub use error::KnowledgeError;
pub use store::{KnowledgeStore, slugify};
pub use types::{Build, Character, Element, EquipmentSlot, TeamComposition, WeaponType};
