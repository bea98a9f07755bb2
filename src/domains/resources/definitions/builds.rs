//! Builds resource definition.

use super::ResourceDefinition;
use crate::domains::knowledge::KnowledgeStore;

/// Every build grouped by character slug.
pub struct BuildsResource;

impl ResourceDefinition for BuildsResource {
    const URI: &'static str = "genshin://builds";
    const NAME: &'static str = "Character Builds";
    const DESCRIPTION: &'static str = "Optimal builds and artifacts for characters";

    fn content(store: &KnowledgeStore) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(store.builds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_content() {
        let store = KnowledgeStore::seeded().unwrap();
        let value = BuildsResource::content(&store).unwrap();
        let mavuika = value["mavuika"].as_array().unwrap();
        assert_eq!(mavuika.len(), 2);
        assert_eq!(mavuika[0]["role"], "DPS");
        assert_eq!(mavuika[0]["main_stats"]["goblet"], "Pyro DMG%");
    }
}
