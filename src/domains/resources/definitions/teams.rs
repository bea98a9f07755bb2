//! Team compositions resource definition.

use super::ResourceDefinition;
use crate::domains::knowledge::KnowledgeStore;

/// Every team grouped by centerpiece slug.
pub struct TeamsResource;

impl ResourceDefinition for TeamsResource {
    const URI: &'static str = "genshin://teams";
    const NAME: &'static str = "Team Compositions";
    const DESCRIPTION: &'static str = "Recommended team compositions for different characters";

    fn content(store: &KnowledgeStore) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(store.teams())
    }
}
