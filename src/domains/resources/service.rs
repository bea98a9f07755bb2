//! Resource service implementation.
//!
//! The ResourceService lists the registered resources and renders their
//! content from the knowledge store on read.
//!
//! Resources are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new resource does NOT require modifying this file.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use std::sync::Arc;
use tracing::info;

use super::error::ResourceError;
use super::registry::get_all_resources;
use crate::domains::knowledge::KnowledgeStore;

/// Produces a resource's JSON content from the store.
pub type ResourceContentFn = fn(&KnowledgeStore) -> serde_json::Result<serde_json::Value>;

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContentFn,
}

/// Service for listing and reading resources.
pub struct ResourceService {
    store: Arc<KnowledgeStore>,

    /// Registered resources, in listing order.
    resources: Vec<ResourceEntry>,
}

impl ResourceService {
    /// Create a new ResourceService over the given store.
    pub fn new(store: Arc<KnowledgeStore>) -> Self {
        info!("Initializing ResourceService");

        let resources = get_all_resources();
        for entry in &resources {
            info!("Registering resource: {}", entry.resource.raw.uri);
        }

        Self { store, resources }
    }

    /// List all available resources.
    pub fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .iter()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    pub fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .iter()
            .find(|entry| entry.resource.raw.uri == uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let value = (entry.content)(&self.store)?;
        let text = serde_json::to_string_pretty(&value)?;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, uri)],
        })
    }
}
