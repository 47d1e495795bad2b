use log::{debug, info};

use super::{
    models::{RejectReason, RejectedLine, SvPair, Utterance},
    SvmineError,
};
use crate::{
    aggregate::FrequencyTable,
    classify::is_ads,
    cleaning::Cleaner,
    codes::CodeExtractor,
    roles,
    tagging::Tagger,
};

/// Everything one run produces: the co-occurrence table, the accepted pairs
/// behind it, and every rejected line with its reason. Researchers review
/// the rejections for false negatives, so they are first-class output, not
/// just log noise.
#[derive(Debug)]
pub struct PipelineReport {
    pub pairs: Vec<SvPair>,
    pub table: FrequencyTable,
    pub rejected: Vec<RejectedLine>,
}

enum LineOutcome {
    Accepted(SvPair),
    Rejected { cleaned: Option<String>, reason: RejectReason },
}

/// The per-line subject-verb extraction pipeline. The tagger is an injected
/// collaborator, loaded once by the caller and reused per call; the cleaner
/// and code extractor are built once here.
pub struct Pipeline<'a> {
    cleaner: Cleaner,
    codes: CodeExtractor,
    tagger: &'a dyn Tagger,
}

impl<'a> Pipeline<'a> {
    pub fn new(tagger: &'a dyn Tagger) -> Self {
        Pipeline { cleaner: Cleaner::new(), codes: CodeExtractor::new(), tagger }
    }

    /// Folds the transcript into a frequency table. Per-line failures are
    /// independent skips; only infrastructure errors (I/O, a tagged corpus
    /// that does not match the transcript) abort the batch.
    pub fn process(&self, lines: &[Utterance]) -> Result<PipelineReport, SvmineError> {
        let mut pairs = Vec::new();
        let mut rejected = Vec::new();

        for utterance in lines {
            match self.process_line(utterance)? {
                LineOutcome::Accepted(pair) => pairs.push(pair),
                LineOutcome::Rejected { cleaned, reason } => {
                    debug!("line {} skipped ({}): {}", utterance.id, reason, utterance.text);
                    rejected.push(RejectedLine {
                        utterance: utterance.clone(),
                        cleaned,
                        reason,
                    });
                }
            }
        }

        let table = FrequencyTable::accumulate(pairs.iter().cloned());
        info!(
            "processed {} lines: {} pairs accepted, {} rejected",
            lines.len(),
            pairs.len(),
            rejected.len()
        );

        Ok(PipelineReport { pairs, table, rejected })
    }

    /// Copula filter, then coded subject (hard gate), then coded verb, then
    /// clean -> tag -> ADS gate, with the parse-based verb as fallback. The
    /// code reads run on the raw line because cleaning destroys the codes.
    fn process_line(&self, utterance: &Utterance) -> Result<LineOutcome, SvmineError> {
        let raw = utterance.text.as_str();

        if self.codes.is_copula(raw) {
            return Ok(LineOutcome::Rejected {
                cleaned: None,
                reason: RejectReason::CopulaExcluded,
            });
        }

        let Some(subject) = self.codes.find_subject(raw) else {
            return Ok(LineOutcome::Rejected {
                cleaned: None,
                reason: RejectReason::NoCodedSubject,
            });
        };

        let coded_verb = self.codes.find_verb(raw);

        let Some(cleaned) = self.cleaner.clean(raw) else {
            return Ok(LineOutcome::Rejected {
                cleaned: None,
                reason: RejectReason::NotChildUtterance,
            });
        };

        let tokens = self.tagger.tag(&cleaned)?;

        if !is_ads(&tokens) {
            return Ok(LineOutcome::Rejected {
                cleaned: Some(cleaned),
                reason: RejectReason::ClassificationRejected,
            });
        }

        let verb = coded_verb.or_else(|| roles::find_verb(&tokens).map(str::to_string));

        match verb.and_then(|verb| SvPair::new(subject, verb)) {
            Some(pair) => Ok(LineOutcome::Accepted(pair)),
            None => Ok(LineOutcome::Rejected {
                cleaned: Some(cleaned),
                reason: RejectReason::NoVerbFound,
            }),
        }
    }
}

/// Cleaned text of the lines that would reach the tagger: everything except
/// copula lines, lines without a coded subject, and non-child lines. Used to
/// hand the candidate sentences to an external tagger run.
pub fn cleaned_candidates(lines: &[Utterance]) -> Vec<String> {
    let cleaner = Cleaner::new();
    let codes = CodeExtractor::new();

    lines
        .iter()
        .filter(|u| !codes.is_copula(&u.text) && codes.find_subject(&u.text).is_some())
        .filter_map(|u| cleaner.clean(&u.text))
        .collect()
}
