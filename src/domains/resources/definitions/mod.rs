//! Resource definitions module.
//!
//! Each resource is defined in its own file with:
//! - URI and metadata
//! - A content provider reading from the knowledge store
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file (e.g., `my_resource.rs`)
//! 2. Implement the `ResourceDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

mod builds;
mod characters;
mod teams;

pub use builds::BuildsResource;
pub use characters::CharactersResource;
pub use teams::TeamsResource;

use crate::domains::knowledge::KnowledgeStore;

/// Trait for resource definitions.
///
/// Each resource must implement this trait to provide its metadata and content.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str = "application/json";

    /// Build the resource content from the store.
    fn content(store: &KnowledgeStore) -> serde_json::Result<serde_json::Value>;
}
