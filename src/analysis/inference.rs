use std::sync::Arc;

use crate::catalog::Catalog;
use crate::models::skill::DEFAULT_LEVEL;

/// Characters inspected on each side of a keyword occurrence when no
/// line-level signal exists. Changing this changes which level is chosen
/// for ambiguous documents.
const CONTEXT_RADIUS: usize = 80;

/// Infers a proficiency level for one keyword from the wording around its
/// mentions. Pure over the shared read-only catalog.
pub struct LevelInferencer {
    catalog: Arc<Catalog>,
}

impl LevelInferencer {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Best-guess level for `keyword` in `text`. Lines containing the
    /// keyword are checked first, then a character window around each
    /// occurrence; rules apply in catalog priority order and the first
    /// match wins. Falls back to the default level, never fails.
    pub fn infer(&self, text: &str, keyword: &str) -> String {
        let keyword = keyword.to_lowercase();

        // Phase 1: the line holding the mention is the most precise signal.
        for line in text.lines() {
            if line.to_lowercase().contains(&keyword) {
                for rule in self.catalog.level_rules() {
                    if rule.matches(line) {
                        return rule.level.clone();
                    }
                }
            }
        }

        // Phase 2: widen to a window around each occurrence, which also
        // captures wording on neighboring lines.
        let lower = text.to_lowercase();
        let mut from = 0;
        while let Some(found) = lower[from..].find(&keyword) {
            let pos = from + found;
            let window = context_window(&lower, pos, keyword.len());
            for rule in self.catalog.level_rules() {
                if rule.matches(window) {
                    return rule.level.clone();
                }
            }
            from = pos + char_width(&lower, pos);
        }

        DEFAULT_LEVEL.to_string()
    }
}

/// Up to CONTEXT_RADIUS characters on each side of the match, clamped to
/// the text bounds and never splitting a UTF-8 sequence.
fn context_window(text: &str, pos: usize, match_len: usize) -> &str {
    let start = text[..pos]
        .char_indices()
        .rev()
        .nth(CONTEXT_RADIUS - 1)
        .map(|(i, _)| i)
        .unwrap_or(0);

    let tail = pos + match_len;
    let end = text[tail..]
        .char_indices()
        .nth(CONTEXT_RADIUS)
        .map(|(i, _)| tail + i)
        .unwrap_or(text.len());

    &text[start..end]
}

fn char_width(text: &str, pos: usize) -> usize {
    text[pos..].chars().next().map_or(1, char::len_utf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inferencer() -> LevelInferencer {
        LevelInferencer::new(Arc::new(Catalog::builtin()))
    }

    #[test]
    fn test_line_signal_wins() {
        let text = "Backend work in Java.\nAdvanced Python skills.";
        assert_eq!(inferencer().infer(text, "python"), "Advanced");
    }

    #[test]
    fn test_priority_order_beats_proximity() {
        // "basic" sits right next to the keyword, but "expert" is checked
        // first, so it decides the level for the whole line.
        let text = "Expert developer, basic Python knowledge";
        assert_eq!(inferencer().infer(text, "python"), "Expert");
    }

    #[test]
    fn test_later_qualifying_line_can_match() {
        let text = "java on the first line\nexpert java usage on the second";
        assert_eq!(inferencer().infer(text, "java"), "Expert");
    }

    #[test]
    fn test_window_reaches_neighboring_lines() {
        let text = "Skills:\nPython\nExpert level tooling";
        assert_eq!(inferencer().infer(text, "python"), "Expert");
    }

    #[test]
    fn test_window_is_bounded() {
        // The level word sits more than 80 characters past the occurrence,
        // on another line, so neither phase can see it.
        let filler = "x".repeat(100);
        let text = format!("python\n{}\nexpert", filler);
        assert_eq!(inferencer().infer(&text, "python"), "Intermediate");

        let near = "x".repeat(50);
        let text = format!("python\n{}\nexpert", near);
        assert_eq!(inferencer().infer(&text, "python"), "Expert");
    }

    #[test]
    fn test_default_level_without_signal() {
        let text = "5 years of Java experience";
        assert_eq!(inferencer().infer(text, "java"), "Intermediate");
    }

    #[test]
    fn test_working_knowledge_and_strong_phrases() {
        assert_eq!(
            inferencer().infer("Working knowledge of Docker", "docker"),
            "Intermediate"
        );
        assert_eq!(
            inferencer().infer("Strong Kubernetes background", "kubernetes"),
            "Advanced"
        );
    }

    #[test]
    fn test_multibyte_text_near_window_edges() {
        // A byte-counted window would land inside a 4-byte emoji here;
        // the window must count characters and stay on boundaries.
        let text = format!("{}xpython\nexpert", "🚀".repeat(25));
        assert_eq!(inferencer().infer(&text, "python"), "Expert");
    }

    #[test]
    fn test_no_occurrence_yields_default() {
        assert_eq!(inferencer().infer("nothing relevant here", "java"), "Intermediate");
        assert_eq!(inferencer().infer("", "java"), "Intermediate");
    }
}
