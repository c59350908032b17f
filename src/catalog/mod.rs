pub mod skills;

use regex::Regex;
use serde::Deserialize;

use crate::error::{Error, Result};

/// One recognizable skill: a literal keyword tied to the canonical name
/// reported for it. Several keywords may share a display name (synonyms).
#[derive(Debug, Clone)]
pub struct SkillDefinition {
    pub keyword: String,
    pub display_name: String,
    matcher: Regex,
}

impl SkillDefinition {
    pub fn new(keyword: &str, display_name: &str) -> Result<Self> {
        if keyword.trim().is_empty() {
            return Err(Error::Catalog("skill keyword must not be empty".to_string()));
        }
        if display_name.trim().is_empty() {
            return Err(Error::Catalog(format!(
                "skill keyword {:?} has an empty display name",
                keyword
            )));
        }

        // Whole-token match: the keyword must not touch a word character
        // or a period on either side, so "go" cannot fire inside "django"
        // and ".net" cannot fire inside "asp.net".
        let escaped = regex::escape(keyword);
        let matcher = Regex::new(&format!(r"(?i)(?:^|[^\w.]){}(?:[^\w.]|$)", escaped))?;

        Ok(Self {
            keyword: keyword.to_string(),
            display_name: display_name.to_string(),
            matcher,
        })
    }

    pub fn matches(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }
}

/// One proficiency wording rule. Rules are kept in priority order; the
/// first rule matching a line or window decides the level, regardless of
/// how close other wording sits to the keyword.
#[derive(Debug, Clone)]
pub struct LevelRule {
    pub phrase: String,
    pub level: String,
    pattern: Regex,
}

impl LevelRule {
    pub fn new(phrase: &str, level: &str) -> Result<Self> {
        if phrase.trim().is_empty() {
            return Err(Error::Catalog("level phrase must not be empty".to_string()));
        }
        if level.trim().is_empty() {
            return Err(Error::Catalog(format!(
                "level phrase {:?} has an empty level name",
                phrase
            )));
        }

        let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(phrase)))?;

        Ok(Self {
            phrase: phrase.to_string(),
            level: level.to_string(),
            pattern,
        })
    }

    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Immutable skill vocabulary: an ordered keyword table plus an ordered
/// list of proficiency rules. Loaded once and shared read-only; extending
/// the recognized vocabulary means appending entries here.
#[derive(Debug, Clone)]
pub struct Catalog {
    skills: Vec<SkillDefinition>,
    level_rules: Vec<LevelRule>,
}

impl Catalog {
    /// Built-in vocabulary covering the common developer stack.
    pub fn builtin() -> Self {
        Self::from_entries(&skills::builtin_skills(), builtin_level_rules())
            .expect("built-in catalog entries are valid")
    }

    pub fn from_entries(
        skills: &[(&str, &str)],
        rules: &[(&str, &str)],
    ) -> Result<Self> {
        let skills = skills
            .iter()
            .map(|(keyword, name)| SkillDefinition::new(keyword, name))
            .collect::<Result<Vec<_>>>()?;

        let level_rules = rules
            .iter()
            .map(|(phrase, level)| LevelRule::new(phrase, level))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            skills,
            level_rules,
        })
    }

    /// Load a custom catalog from a JSON document. An omitted or empty
    /// `levelRules` array falls back to the built-in rules, so a
    /// vocabulary-only catalog stays usable.
    pub fn from_json(raw: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(raw)?;

        if file.skills.is_empty() {
            return Err(Error::Catalog(
                "catalog must define at least one skill".to_string(),
            ));
        }

        let skills: Vec<(&str, &str)> = file
            .skills
            .iter()
            .map(|entry| (entry.keyword.as_str(), entry.name.as_str()))
            .collect();

        if file.level_rules.is_empty() {
            Self::from_entries(&skills, builtin_level_rules())
        } else {
            let rules: Vec<(&str, &str)> = file
                .level_rules
                .iter()
                .map(|entry| (entry.phrase.as_str(), entry.level.as_str()))
                .collect();
            Self::from_entries(&skills, &rules)
        }
    }

    pub fn skills(&self) -> &[SkillDefinition] {
        &self.skills
    }

    pub fn level_rules(&self) -> &[LevelRule] {
        &self.level_rules
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Proficiency wording, strongest first. List order is priority order.
fn builtin_level_rules() -> &'static [(&'static str, &'static str)] {
    &[
        ("expert", "Expert"),
        ("advanced", "Advanced"),
        ("proficient", "Proficient"),
        ("intermediate", "Intermediate"),
        ("basic", "Basic"),
        ("familiar", "Familiar"),
        ("beginner", "Beginner"),
        ("working knowledge", "Intermediate"),
        ("strong", "Advanced"),
    ]
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogFile {
    skills: Vec<KeywordEntry>,
    #[serde(default)]
    level_rules: Vec<RuleEntry>,
}

#[derive(Debug, Deserialize)]
struct KeywordEntry {
    keyword: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct RuleEntry {
    phrase: String,
    level: String,
}
