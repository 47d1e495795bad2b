use regex::Regex;

enum RuleAction {
    /// Regex rewrite applied to every match.
    Rewrite { pattern: Regex, replacement: &'static str },
    /// Plain string transformation for the layers regex handles poorly.
    Transform(fn(&str) -> String),
}

/// One markup layer to strip, named so ordering bugs show up in tests rather
/// than in silently wrong output.
pub struct CleanRule {
    pub name: &'static str,
    action: RuleAction,
}

impl CleanRule {
    fn rewrite(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        CleanRule {
            name,
            // Patterns are fixed literals; a failure here is a programming error.
            action: RuleAction::Rewrite { pattern: Regex::new(pattern).unwrap(), replacement },
        }
    }

    fn transform(name: &'static str, f: fn(&str) -> String) -> Self {
        CleanRule { name, action: RuleAction::Transform(f) }
    }

    pub fn apply(&self, text: &str) -> String {
        match &self.action {
            RuleAction::Rewrite { pattern, replacement } => {
                pattern.replace_all(text, *replacement).into_owned()
            }
            RuleAction::Transform(f) => f(text),
        }
    }
}

/// The ordered markup layers. Order matters: mazes can contain pipes and
/// slashes, bracket codes must outlive code-based extraction (which runs on
/// the raw line, before cleaning), and whitespace collapse has to come last.
pub fn create_default_rules() -> Vec<CleanRule> {
    vec![
        // Parenthesized false-start/repair material, removed with its
        // trailing whitespace.
        CleanRule::rewrite("maze spans", r"\(.+?\)\s", ""),
        // A word ending in | is a code-carrier prefix for the word after it.
        CleanRule::rewrite("pipe carriers", r"\s\w*?\|", " "),
        // Reconstruct surface word forms from stem/suffix annotations.
        CleanRule::transform("morpheme slashes", normalize_morphemes),
        // Tokens starting with * are transcriber-flagged errors.
        CleanRule::rewrite("asterisk tokens", r"\*.*?\s", ""),
        // Overlap markers enclose speech overlapping another speaker; the
        // enclosed text is kept.
        CleanRule::transform("overlap markers", |text| text.replace(['<', '>'], "")),
        CleanRule::rewrite("explanatory braces", r"\{.*\}", ""),
        CleanRule::rewrite("bracket codes", r"\[.*?\]", ""),
        CleanRule::transform("doubled whitespace", |text| text.replace("  ", " ")),
    ]
}

/// Rebuilds surface forms from morphemic slash annotation: the `/*3` pause
/// marker is dropped, vowel-preceded stop consonants geminate before
/// -ing/-ed (`sit/ing` -> `sitting` but `want/ed` -> `wanted`), and the
/// generic `-ing`/`-ed`/`-s` suffixes attach directly.
fn normalize_morphemes(text: &str) -> String {
    let text = text.replace("/*3", "");

    let gemination = Regex::new(r"([aeiou])([pbtd])/(ing|ed)").unwrap();
    let mut text = gemination.replace_all(&text, "${1}${2}${2}${3}").into_owned();

    for suffix in ["/ing", "/ed", "/s"] {
        text = text.replace(suffix, &suffix[1..]);
    }

    text
}
