use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::models::comparison::{
    ComparisonCategory, ComparisonEntry, LevelSnapshot, SkillComparison,
};
use crate::models::skill::ExtractedSkill;

/// Ordering of comparison entries in rendered reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Difference,
    Alphabetical,
}

/// Which comparison entries a rendered report keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryFilter {
    All,
    Differences,
    Exclusive,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SkillsReport<'a> {
    generated_at: DateTime<Utc>,
    skills: &'a [ExtractedSkill],
}

pub fn skills_json(skills: &[ExtractedSkill]) -> Result<String> {
    let report = SkillsReport {
        generated_at: Utc::now(),
        skills,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

pub fn skills_text(skills: &[ExtractedSkill]) -> String {
    let mut output = String::new();

    output.push_str(&format!("\n=== Extracted Skills ({}) ===\n\n", skills.len()));

    if skills.is_empty() {
        output.push_str("No known skills found.\n");
        return output;
    }

    for skill in skills {
        output.push_str(&format!("  - {}: {}\n", skill.name, skill.level));
    }

    output
}

pub fn skills_markdown(skills: &[ExtractedSkill]) -> String {
    let mut output = String::new();

    output.push_str("# Extracted Skills\n\n");

    if skills.is_empty() {
        output.push_str("No known skills found.\n");
        return output;
    }

    output.push_str("| Skill | Level |\n|-------|-------|\n");
    for skill in skills {
        output.push_str(&format!("| {} | {} |\n", skill.name, skill.level));
    }

    output.push_str(&format!(
        "\n---\n*Generated on {}*\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

/// Standalone HTML report with one table row per skill.
pub fn skills_html(skills: &[ExtractedSkill]) -> String {
    let mut output = String::new();

    output.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    output.push_str("<meta charset=\"utf-8\">\n<title>Skills Report</title>\n");
    output.push_str(
        "<style>body{font-family:sans-serif;margin:2rem}table{border-collapse:collapse}\
         td,th{border:1px solid #ccc;padding:0.4rem 0.8rem;text-align:left}</style>\n",
    );
    output.push_str("</head>\n<body>\n<h1>Extracted Skills</h1>\n");

    if skills.is_empty() {
        output.push_str("<p>No known skills found.</p>\n");
    } else {
        output.push_str("<table>\n<tr><th>Skill</th><th>Level</th></tr>\n");
        for skill in skills {
            output.push_str(&format!(
                "<tr><td>{}</td><td>{}</td></tr>\n",
                escape_html(&skill.name),
                escape_html(&skill.level)
            ));
        }
        output.push_str("</table>\n");
    }

    output.push_str(&format!(
        "<p><em>Generated on {}</em></p>\n</body>\n</html>\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

pub fn comparison_json(result: &SkillComparison) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

pub fn comparison_text(
    result: &SkillComparison,
    sort: SortOrder,
    filter: EntryFilter,
) -> String {
    let entries = arrange_entries(&result.comparison, sort, filter);
    let mut output = String::new();

    output.push_str(&format!(
        "\n=== Skill Comparison (A: {} skills, B: {} skills) ===\n\n",
        result.skills_a.len(),
        result.skills_b.len()
    ));

    if entries.is_empty() {
        output.push_str("No entries to show.\n");
        return output;
    }

    for entry in &entries {
        let side = |snapshot: &Option<LevelSnapshot>| {
            snapshot
                .as_ref()
                .map(|s| format!("{} ({})", s.level, s.numeric_level))
                .unwrap_or_else(|| "-".to_string())
        };
        output.push_str(&format!(
            "  {:<12} {}: A={} B={} (difference {})\n",
            format!("[{}]", entry.comparison),
            entry.name,
            side(&entry.cv_a),
            side(&entry.cv_b),
            entry.difference
        ));
    }

    output
}

pub fn comparison_markdown(
    result: &SkillComparison,
    sort: SortOrder,
    filter: EntryFilter,
) -> String {
    let entries = arrange_entries(&result.comparison, sort, filter);
    let mut output = String::new();

    output.push_str("# Skill Comparison\n\n");
    output.push_str(&format!(
        "CV A: {} skills, CV B: {} skills\n\n",
        result.skills_a.len(),
        result.skills_b.len()
    ));

    if entries.is_empty() {
        output.push_str("No entries to show.\n");
        return output;
    }

    output.push_str("| Skill | CV A | CV B | Outcome | Difference |\n");
    output.push_str("|-------|------|------|---------|------------|\n");
    for entry in &entries {
        let side = |snapshot: &Option<LevelSnapshot>| {
            snapshot
                .as_ref()
                .map(|s| s.level.clone())
                .unwrap_or_else(|| "-".to_string())
        };
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            entry.name,
            side(&entry.cv_a),
            side(&entry.cv_b),
            entry.comparison,
            entry.difference
        ));
    }

    output
}

/// Filter, then order, the comparison entries for presentation. Sorting
/// is stable, so equal keys keep the comparator's deterministic order.
pub fn arrange_entries(
    entries: &[ComparisonEntry],
    sort: SortOrder,
    filter: EntryFilter,
) -> Vec<ComparisonEntry> {
    let mut entries: Vec<ComparisonEntry> = entries
        .iter()
        .filter(|entry| match filter {
            EntryFilter::All => true,
            EntryFilter::Differences => entry.comparison != ComparisonCategory::Equal,
            EntryFilter::Exclusive => entry.is_exclusive(),
        })
        .cloned()
        .collect();

    match sort {
        SortOrder::Difference => entries.sort_by(|a, b| b.difference.cmp(&a.difference)),
        SortOrder::Alphabetical => entries.sort_by(|a, b| a.name.cmp(&b.name)),
    }

    entries
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
