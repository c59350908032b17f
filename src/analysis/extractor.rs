use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::inference::LevelInferencer;
use crate::catalog::Catalog;
use crate::models::skill::ExtractedSkill;

/// Scans document text against the catalog and assigns each distinct
/// skill an inferred proficiency level.
pub struct SkillExtractor {
    catalog: Arc<Catalog>,
    inferencer: LevelInferencer,
}

impl SkillExtractor {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            inferencer: LevelInferencer::new(Arc::clone(&catalog)),
            catalog,
        }
    }

    /// All distinct skills mentioned in `text`, in catalog order of first
    /// match. Dedup is by display name: the first synonym that matches
    /// decides the level, later synonyms of the same name are skipped.
    pub fn extract(&self, text: &str) -> Vec<ExtractedSkill> {
        // Padding keeps the token-boundary check uniform at the text edges.
        let padded = format!(" {} ", text.to_lowercase());

        let mut found = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();

        for def in self.catalog.skills() {
            if seen.contains(def.display_name.as_str()) {
                continue;
            }
            if def.matches(&padded) {
                let level = self.inferencer.infer(text, &def.keyword);
                tracing::debug!(
                    "keyword {:?} matched as {} ({})",
                    def.keyword,
                    def.display_name,
                    level
                );
                seen.insert(def.display_name.as_str());
                found.push(ExtractedSkill {
                    name: def.display_name.clone(),
                    level,
                });
            }
        }

        found
    }
}
