use serde::{Deserialize, Serialize};

/// Level reported when no proficiency wording is found near a skill.
pub const DEFAULT_LEVEL: &str = "Intermediate";

/// Numeric value given to a level string that is not in the fixed table.
pub const DEFAULT_NUMERIC_LEVEL: u8 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedSkill {
    pub name: String,
    pub level: String,
}

impl ExtractedSkill {
    pub fn new(name: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: level.into(),
        }
    }
}

/// Numeric strength of a level string, used when diffing two skill sets.
pub fn numeric_level(level: &str) -> u8 {
    match level {
        "Expert" => 5,
        "Advanced" => 4,
        "Proficient" => 3,
        "Intermediate" => 2,
        "Basic" | "Beginner" | "Familiar" => 1,
        _ => DEFAULT_NUMERIC_LEVEL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_level_table() {
        assert_eq!(numeric_level("Expert"), 5);
        assert_eq!(numeric_level("Advanced"), 4);
        assert_eq!(numeric_level("Proficient"), 3);
        assert_eq!(numeric_level("Intermediate"), 2);
        assert_eq!(numeric_level("Basic"), 1);
        assert_eq!(numeric_level("Beginner"), 1);
        assert_eq!(numeric_level("Familiar"), 1);
    }

    #[test]
    fn test_unknown_level_counts_as_mid_scale() {
        assert_eq!(numeric_level("Wizard"), 2);
        assert_eq!(numeric_level(""), 2);
    }
}
