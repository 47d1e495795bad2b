pub mod rules;


use rules::{create_default_rules, CleanRule};

/// Speaker marker reserved for the child speaker in the transcripts.
const CHILD_MARKER: char = 'C';

/// Strips the annotation markup from raw transcript lines, producing plain
/// natural-language text for the tagger. The markup layers overlap, so the
/// rules are an ordered list and each run exactly once; see
/// `rules::create_default_rules` for the order and what each layer is.
pub struct Cleaner {
    rules: Vec<CleanRule>,
}

impl Cleaner {
    pub fn new() -> Self {
        Cleaner { rules: create_default_rules() }
    }

    /// Cleans one raw line. Returns `None` when the line does not start with
    /// the child speaker marker; that is a normal filtering outcome, and
    /// callers check it before using the text.
    pub fn clean(&self, raw: &str) -> Option<String> {
        if !raw.starts_with(CHILD_MARKER) {
            return None;
        }
        let mut text = raw.strip_prefix("C ").unwrap_or(raw).to_string();
        for rule in &self.rules {
            text = rule.apply(&text);
        }
        Some(text)
    }
}

impl Default for Cleaner {
    fn default() -> Self {
        Cleaner::new()
    }
}
