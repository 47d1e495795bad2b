use crate::tagging::{TaggedToken, UPos};

/// Active-declarative-sentence test: one left-to-right scan over the tagged
/// tokens, requiring a nominal subject, then a verb, then an object or
/// adverbial, in that causal order.
///
/// The checks are sequential per token, not exclusive: a token can both mark
/// the verb and, via its dependency relation, end the scan. An adverbial
/// modifier seen before any verb is skipped rather than rejecting, while an
/// object-family relation before any verb rejects outright. Known accepted
/// false positive: demonstrative pronouns the tagger mis-labels as nominal
/// subjects satisfy the subject flag (an upstream tagger limitation).
pub fn is_ads(tokens: &[TaggedToken]) -> bool {
    let mut has_subject = false;
    let mut has_verb = false;
    let mut has_object = false;

    for token in tokens {
        if token.dep.is_nominal_subject() {
            has_subject = true;
        }

        if matches!(token.pos, UPos::Verb | UPos::Aux) {
            if !has_subject {
                return false;
            }
            has_verb = true;
        }

        if token.dep.is_adverbial_modifier() && !has_verb {
            continue;
        }

        if token.dep.in_object_family() || token.dep.is_adverbial_modifier() {
            if !has_verb {
                return false;
            }
            has_object = true;
            break;
        }
    }

    has_subject && has_verb && has_object
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(text: &str, pos: &str, dep: &str) -> TaggedToken {
        TaggedToken::new(text, pos, dep, text)
    }

    #[test]
    fn subject_verb_object_is_ads() {
        let tokens =
            [token("dog", "NOUN", "nsubj"), token("eats", "VERB", "ROOT"), token("food", "NOUN", "dobj")];
        assert!(is_ads(&tokens));
    }

    #[test]
    fn verb_before_subject_rejects() {
        let tokens =
            [token("eats", "VERB", "ROOT"), token("dog", "NOUN", "nsubj"), token("food", "NOUN", "dobj")];
        assert!(!is_ads(&tokens));
    }

    #[test]
    fn subject_verb_without_object_rejects() {
        let tokens = [token("dog", "NOUN", "nsubj"), token("eats", "VERB", "ROOT")];
        assert!(!is_ads(&tokens));
    }

    #[test]
    fn adverbial_after_verb_counts_as_object() {
        let tokens =
            [token("dog", "NOUN", "nsubj"), token("runs", "VERB", "ROOT"), token("fast", "ADV", "advmod")];
        assert!(is_ads(&tokens));
    }

    #[test]
    fn adverbial_before_verb_is_ignored() {
        let tokens = [
            token("dog", "NOUN", "nsubj"),
            token("always", "ADV", "advmod"),
            token("chases", "VERB", "ROOT"),
            token("cats", "NOUN", "dobj"),
        ];
        assert!(is_ads(&tokens));
    }

    #[test]
    fn object_before_verb_rejects() {
        let tokens = [
            token("dog", "NOUN", "nsubj"),
            token("food", "NOUN", "dobj"),
            token("eats", "VERB", "ROOT"),
        ];
        assert!(!is_ads(&tokens));
    }

    #[test]
    fn aux_counts_as_verb() {
        let tokens = [
            token("dog", "NOUN", "nsubj"),
            token("is", "AUX", "ROOT"),
            token("here", "ADV", "advmod"),
        ];
        assert!(is_ads(&tokens));
    }

    #[test]
    fn scan_stops_at_first_object() {
        // Tokens after the first qualifying object are never examined, so a
        // trailing stray verb cannot flip the result.
        let tokens = [
            token("dog", "NOUN", "nsubj"),
            token("eats", "VERB", "ROOT"),
            token("food", "NOUN", "dobj"),
            token("run", "VERB", "xcomp"),
        ];
        assert!(is_ads(&tokens));
    }

    #[test]
    fn empty_sentence_rejects() {
        assert!(!is_ads(&[]));
    }
}
