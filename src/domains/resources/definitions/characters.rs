//! Characters resource definition.

use super::ResourceDefinition;
use crate::domains::knowledge::KnowledgeStore;

/// Every character keyed by slug.
pub struct CharactersResource;

impl ResourceDefinition for CharactersResource {
    const URI: &'static str = "genshin://characters";
    const NAME: &'static str = "Genshin Impact Characters";
    const DESCRIPTION: &'static str =
        "Database of Genshin Impact characters with stats and information";

    fn content(store: &KnowledgeStore) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(store.characters())
    }
}
