use crate::tagging::{TaggedToken, UPos};

/// Copular lemma that is never a valid main-verb answer.
const COPULA_LEMMA: &str = "be";

/// Lemma of the first token with the given POS whose lemma is not the
/// copular "be".
pub fn lemma_of_first(tokens: &[TaggedToken], pos: UPos) -> Option<&str> {
    tokens
        .iter()
        .find(|token| token.pos == pos && token.lemma != COPULA_LEMMA)
        .map(|token| token.lemma.as_str())
}

/// Verb fallback when no verb code was present: main verbs first, auxiliaries
/// only if the parse has no VERB at all. Subject has no parse-based fallback;
/// a line without a coded subject was already rejected upstream.
pub fn find_verb(tokens: &[TaggedToken]) -> Option<&str> {
    lemma_of_first(tokens, UPos::Verb).or_else(|| lemma_of_first(tokens, UPos::Aux))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagging::TaggedToken;

    fn token(text: &str, pos: &str, lemma: &str) -> TaggedToken {
        TaggedToken::new(text, pos, "dep", lemma)
    }

    #[test]
    fn first_matching_lemma_wins() {
        let tokens = [
            token("dog", "NOUN", "dog"),
            token("runs", "VERB", "run"),
            token("jumps", "VERB", "jump"),
        ];
        assert_eq!(find_verb(&tokens), Some("run"));
    }

    #[test]
    fn copular_be_is_skipped() {
        let tokens = [token("is", "VERB", "be"), token("going", "VERB", "go")];
        assert_eq!(find_verb(&tokens), Some("go"));
    }

    #[test]
    fn falls_back_to_aux() {
        let tokens = [token("dog", "NOUN", "dog"), token("can", "AUX", "can")];
        assert_eq!(find_verb(&tokens), Some("can"));
    }

    #[test]
    fn no_verb_at_all() {
        let tokens = [token("dog", "NOUN", "dog"), token("is", "AUX", "be")];
        assert_eq!(find_verb(&tokens), None);
    }
}
