use std::{collections::HashMap, fs, path::Path};

use super::{TaggedToken, Tagger};
use crate::core::SvmineError;

/// Tagger backed by pre-tagged output from an external parser run (e.g. a
/// spaCy script over the cleaned sentences). Format is CoNLL-like: one token
/// per line as four tab-separated columns (text, upos, deprel, lemma), blank
/// line between sentences, and an optional `# text = ...` comment naming the
/// sentence a block belongs to. Blocks without the comment are keyed by their
/// token texts joined with single spaces.
pub struct PretaggedCorpus {
    sentences: HashMap<String, Vec<TaggedToken>>,
}

impl PretaggedCorpus {
    pub fn from_file(path: &Path) -> Result<Self, SvmineError> {
        Self::parse(&fs::read_to_string(path)?)
    }

    pub fn parse(content: &str) -> Result<Self, SvmineError> {
        let mut sentences = HashMap::new();
        let mut text_key: Option<String> = None;
        let mut tokens: Vec<TaggedToken> = Vec::new();

        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim_end();

            if line.is_empty() {
                Self::flush(&mut sentences, &mut text_key, &mut tokens);
                continue;
            }

            if let Some(rest) = line.strip_prefix('#') {
                if let Some(text) = rest.trim().strip_prefix("text =") {
                    text_key = Some(text.trim().to_string());
                }
                continue;
            }

            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() != 4 {
                return Err(SvmineError::MalformedTokenRow {
                    line: line_no + 1,
                    row: line.to_string(),
                });
            }
            tokens.push(TaggedToken::new(fields[0], fields[1], fields[2], fields[3]));
        }
        Self::flush(&mut sentences, &mut text_key, &mut tokens);

        Ok(PretaggedCorpus { sentences })
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    fn flush(
        sentences: &mut HashMap<String, Vec<TaggedToken>>,
        text_key: &mut Option<String>,
        tokens: &mut Vec<TaggedToken>,
    ) {
        if tokens.is_empty() {
            *text_key = None;
            return;
        }
        let key = text_key.take().unwrap_or_else(|| {
            tokens.iter().map(|t| t.text.as_str()).collect::<Vec<_>>().join(" ")
        });
        sentences.insert(key, std::mem::take(tokens));
    }
}

impl Tagger for PretaggedCorpus {
    fn tag(&self, sentence: &str) -> Result<Vec<TaggedToken>, SvmineError> {
        self.sentences
            .get(sentence.trim())
            .cloned()
            .ok_or_else(|| SvmineError::UntaggedSentence(sentence.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagging::{DepTag, UPos};

    #[test]
    fn parses_blocks_with_text_comments() {
        let corpus = PretaggedCorpus::parse(
            "# text = the dog runs fast\n\
             the\tDET\tdet\tthe\n\
             dog\tNOUN\tnsubj\tdog\n\
             runs\tVERB\tROOT\trun\n\
             fast\tADV\tadvmod\tfast\n\
             \n\
             he\tPRON\tnsubj\the\n\
             ate\tVERB\tROOT\teat\n",
        )
        .unwrap();

        assert_eq!(corpus.len(), 2);

        let tokens = corpus.tag("the dog runs fast").unwrap();
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[1].pos, UPos::Noun);
        assert_eq!(tokens[1].dep, DepTag::Nsubj);
        assert_eq!(tokens[2].lemma, "run");

        // Uncommented block is keyed by joined token texts.
        assert!(corpus.tag("he ate").is_ok());
    }

    #[test]
    fn missing_sentence_is_an_error() {
        let corpus = PretaggedCorpus::parse("a\tDET\tdet\ta\n").unwrap();
        assert!(matches!(
            corpus.tag("something else"),
            Err(SvmineError::UntaggedSentence(_))
        ));
    }

    #[test]
    fn rejects_short_rows() {
        let result = PretaggedCorpus::parse("dog\tNOUN\tnsubj\n");
        assert!(matches!(
            result,
            Err(SvmineError::MalformedTokenRow { line: 1, .. })
        ));
    }
}
