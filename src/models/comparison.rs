use serde::{Deserialize, Serialize};

use crate::models::skill::ExtractedSkill;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonCategory {
    Equal,
    StrongerA,
    StrongerB,
    ExclusiveA,
    ExclusiveB,
}

impl std::fmt::Display for ComparisonCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComparisonCategory::Equal => write!(f, "equal"),
            ComparisonCategory::StrongerA => write!(f, "stronger_a"),
            ComparisonCategory::StrongerB => write!(f, "stronger_b"),
            ComparisonCategory::ExclusiveA => write!(f, "exclusive_a"),
            ComparisonCategory::ExclusiveB => write!(f, "exclusive_b"),
        }
    }
}

/// Level of one side of a comparison, with its numeric value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelSnapshot {
    pub level: String,
    pub numeric_level: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonEntry {
    pub name: String,
    pub cv_a: Option<LevelSnapshot>,
    pub cv_b: Option<LevelSnapshot>,
    pub comparison: ComparisonCategory,
    pub difference: u8,
}

impl ComparisonEntry {
    pub fn is_exclusive(&self) -> bool {
        matches!(
            self.comparison,
            ComparisonCategory::ExclusiveA | ComparisonCategory::ExclusiveB
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillComparison {
    pub skills_a: Vec<ExtractedSkill>,
    pub skills_b: Vec<ExtractedSkill>,
    pub comparison: Vec<ComparisonEntry>,
}
