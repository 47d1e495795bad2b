use core::fmt;

#[derive(Debug, Clone)]
pub struct Utterance {
    pub id: u32,      // Position in the flattened transcript
    pub text: String, // Raw coded line as it appears in the table
}

/// A resolved subject-verb role pair from one utterance. Both fields are
/// non-empty; construction through `new` enforces this.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct SvPair {
    pub subject: String,
    pub verb: String,
}

impl SvPair {
    pub fn new(subject: String, verb: String) -> Option<Self> {
        if subject.is_empty() || verb.is_empty() {
            return None;
        }
        Some(SvPair { subject, verb })
    }
}

/// Why a line was dropped before reaching the aggregator. None of these are
/// errors; they are normal filtering outcomes reviewed by researchers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Line carries a copula code and is excluded from subject-verb analysis.
    CopulaExcluded,
    /// No subject-verb-agreement code present; subject has no fallback.
    NoCodedSubject,
    /// Line does not start with the child speaker marker.
    NotChildUtterance,
    /// Failed the active-declarative-sentence structural test.
    ClassificationRejected,
    /// No coded verb and no VERB/AUX lemma in the parse.
    NoVerbFound,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let readable = match self {
            RejectReason::CopulaExcluded => "copula excluded",
            RejectReason::NoCodedSubject => "no coded subject",
            RejectReason::NotChildUtterance => "not a child utterance",
            RejectReason::ClassificationRejected => "not an active declarative sentence",
            RejectReason::NoVerbFound => "no verb found",
        };
        write!(f, "{}", readable)
    }
}

#[derive(Debug, Clone)]
pub struct RejectedLine {
    pub utterance: Utterance,
    pub cleaned: Option<String>, // Present when the line survived cleaning
    pub reason: RejectReason,
}
