use regex::Regex;

/// Verb-marking annotation codes, in lookup priority order. The first code
/// type present anywhere in the line decides which token is the verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbCode {
    /// `[0]` - zero-inflection (bare-stem) marker.
    ZeroInflection,
    /// `/ed` - past-tense morpheme code.
    Past,
    /// `/ing` - progressive morpheme code.
    Progressive,
    /// `[i3:o]` - irregular/infinitive marker.
    Irregular,
}

impl VerbCode {
    pub const PRIORITY: [VerbCode; 4] =
        [VerbCode::ZeroInflection, VerbCode::Past, VerbCode::Progressive, VerbCode::Irregular];

    pub fn marker(&self) -> &'static str {
        match self {
            VerbCode::ZeroInflection => "[0]",
            VerbCode::Past => "/ed",
            VerbCode::Progressive => "/ing",
            VerbCode::Irregular => "[i3:o]",
        }
    }
}

/// Reads grammatical roles straight out of the annotation codes of a raw
/// line. Must run before cleaning, which destroys the bracket codes it
/// depends on. Code-based lookup beats re-deriving roles from a noisy
/// dependency parse, so the pipeline always tries it first.
pub struct CodeExtractor {
    copula: Regex,
    subject: Regex,
}

impl CodeExtractor {
    pub fn new() -> Self {
        // Fixed code vocabulary; a failure here is a programming error.
        CodeExtractor {
            copula: Regex::new(r"\[SC:\d\]").unwrap(),
            subject: Regex::new(r"\[SV:\dP?\]").unwrap(),
        }
    }

    /// Copula lines are linking-verb constructions and never ADS candidates.
    /// This is the first check the pipeline runs on any line.
    pub fn is_copula(&self, raw: &str) -> bool {
        self.copula.is_match(raw)
    }

    /// First whitespace-delimited token carrying a subject-verb-agreement
    /// code `[SV:<digit>[P]?]`; the subject is that token's text before the
    /// code bracket, with morpheme slashes removed.
    pub fn find_subject(&self, raw: &str) -> Option<String> {
        raw.split_whitespace()
            .find(|word| self.subject.is_match(word))
            .map(|word| {
                let text = word.split('[').next().unwrap_or(word);
                text.replace('/', "")
            })
            .filter(|subject| !subject.is_empty())
    }

    /// Verb by code priority: the first marker present anywhere in the line
    /// selects the token containing it, text preceding the marker.
    pub fn find_verb(&self, raw: &str) -> Option<String> {
        let code = VerbCode::PRIORITY.iter().find(|code| raw.contains(code.marker()))?;
        let marker = code.marker();

        raw.split_whitespace()
            .find(|word| word.contains(marker))
            .map(|word| word.split(marker).next().unwrap_or("").to_string())
            .filter(|verb| !verb.is_empty())
    }
}

impl Default for CodeExtractor {
    fn default() -> Self {
        CodeExtractor::new()
    }
}
