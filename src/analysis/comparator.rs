use std::collections::{HashMap, HashSet};

use crate::models::comparison::{
    ComparisonCategory, ComparisonEntry, LevelSnapshot, SkillComparison,
};
use crate::models::skill::{numeric_level, ExtractedSkill};

/// Produces a structured, per-skill diff between two extracted skill sets.
pub struct SkillComparator;

impl SkillComparator {
    pub fn new() -> Self {
        Self
    }

    /// One entry per skill name present on either side. Names from A come
    /// first in A's order, then names only B has in B's order, so the
    /// output is deterministic.
    pub fn compare(
        &self,
        skills_a: &[ExtractedSkill],
        skills_b: &[ExtractedSkill],
    ) -> SkillComparison {
        let map_a: HashMap<&str, &ExtractedSkill> =
            skills_a.iter().map(|s| (s.name.as_str(), s)).collect();
        let map_b: HashMap<&str, &ExtractedSkill> =
            skills_b.iter().map(|s| (s.name.as_str(), s)).collect();

        let mut names: Vec<&str> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        for skill in skills_a.iter().chain(skills_b.iter()) {
            if seen.insert(skill.name.as_str()) {
                names.push(skill.name.as_str());
            }
        }

        let comparison = names
            .into_iter()
            .map(|name| {
                let side_a = map_a.get(name).copied();
                let side_b = map_b.get(name).copied();

                // An absent side counts as numeric 0, so the difference
                // equals the present side's numeric value.
                let num_a = side_a.map_or(0, |s| numeric_level(&s.level));
                let num_b = side_b.map_or(0, |s| numeric_level(&s.level));

                let comparison = match (side_a, side_b) {
                    (None, _) => ComparisonCategory::ExclusiveB,
                    (_, None) => ComparisonCategory::ExclusiveA,
                    _ if num_a > num_b => ComparisonCategory::StrongerA,
                    _ if num_b > num_a => ComparisonCategory::StrongerB,
                    _ => ComparisonCategory::Equal,
                };

                ComparisonEntry {
                    name: name.to_string(),
                    cv_a: side_a.map(|s| LevelSnapshot {
                        level: s.level.clone(),
                        numeric_level: num_a,
                    }),
                    cv_b: side_b.map(|s| LevelSnapshot {
                        level: s.level.clone(),
                        numeric_level: num_b,
                    }),
                    comparison,
                    difference: num_a.abs_diff(num_b),
                }
            })
            .collect();

        SkillComparison {
            skills_a: skills_a.to_vec(),
            skills_b: skills_b.to_vec(),
            comparison,
        }
    }
}

impl Default for SkillComparator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str, level: &str) -> ExtractedSkill {
        ExtractedSkill::new(name, level)
    }

    #[test]
    fn test_stronger_and_exclusive_sides() {
        let a = vec![skill("Java", "Advanced")];
        let b = vec![skill("Java", "Intermediate"), skill("Python", "Basic")];

        let result = SkillComparator::new().compare(&a, &b);
        assert_eq!(result.comparison.len(), 2);

        let java = &result.comparison[0];
        assert_eq!(java.name, "Java");
        assert_eq!(java.comparison, ComparisonCategory::StrongerA);
        assert_eq!(java.difference, 2);
        assert_eq!(java.cv_a.as_ref().unwrap().numeric_level, 4);
        assert_eq!(java.cv_b.as_ref().unwrap().numeric_level, 2);

        let python = &result.comparison[1];
        assert_eq!(python.name, "Python");
        assert_eq!(python.comparison, ComparisonCategory::ExclusiveB);
        assert_eq!(python.difference, 1);
        assert!(python.cv_a.is_none());
    }

    #[test]
    fn test_exclusive_difference_equals_present_side() {
        let a = vec![skill("Rust", "Advanced")];
        let result = SkillComparator::new().compare(&a, &[]);

        let entry = &result.comparison[0];
        assert_eq!(entry.comparison, ComparisonCategory::ExclusiveA);
        assert_eq!(entry.difference, 4);
        assert!(entry.cv_b.is_none());
    }

    #[test]
    fn test_equal_levels() {
        let a = vec![skill("Docker", "Intermediate")];
        let b = vec![skill("Docker", "Intermediate")];

        let result = SkillComparator::new().compare(&a, &b);
        assert_eq!(result.comparison[0].comparison, ComparisonCategory::Equal);
        assert_eq!(result.comparison[0].difference, 0);
    }

    #[test]
    fn test_swapping_inputs_mirrors_categories() {
        let a = vec![skill("Java", "Expert"), skill("Rust", "Basic")];
        let b = vec![skill("Java", "Basic"), skill("Python", "Advanced")];

        let forward = SkillComparator::new().compare(&a, &b);
        let backward = SkillComparator::new().compare(&b, &a);

        let category = |result: &SkillComparison, name: &str| {
            result
                .comparison
                .iter()
                .find(|e| e.name == name)
                .map(|e| e.comparison)
                .unwrap()
        };

        assert_eq!(category(&forward, "Java"), ComparisonCategory::StrongerA);
        assert_eq!(category(&backward, "Java"), ComparisonCategory::StrongerB);
        assert_eq!(category(&forward, "Rust"), ComparisonCategory::ExclusiveA);
        assert_eq!(category(&backward, "Rust"), ComparisonCategory::ExclusiveB);
        assert_eq!(category(&forward, "Python"), ComparisonCategory::ExclusiveB);
        assert_eq!(category(&backward, "Python"), ComparisonCategory::ExclusiveA);
    }

    #[test]
    fn test_union_order_is_a_then_b() {
        let a = vec![skill("Java", "Basic"), skill("Rust", "Basic")];
        let b = vec![skill("Python", "Basic"), skill("Java", "Basic")];

        let result = SkillComparator::new().compare(&a, &b);
        let names: Vec<&str> = result.comparison.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Java", "Rust", "Python"]);
    }

    #[test]
    fn test_unknown_level_string_defaults_to_mid_scale() {
        let a = vec![skill("Java", "Wizard")];
        let b = vec![skill("Java", "Basic")];

        let result = SkillComparator::new().compare(&a, &b);
        let entry = &result.comparison[0];
        assert_eq!(entry.cv_a.as_ref().unwrap().numeric_level, 2);
        assert_eq!(entry.comparison, ComparisonCategory::StrongerA);
        assert_eq!(entry.difference, 1);
    }

    #[test]
    fn test_empty_inputs_yield_empty_comparison() {
        let result = SkillComparator::new().compare(&[], &[]);
        assert!(result.comparison.is_empty());
        assert!(result.skills_a.is_empty());
        assert!(result.skills_b.is_empty());
    }
}
