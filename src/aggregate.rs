use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::SvPair;

/// Two-level co-occurrence count, subject -> verb -> occurrences. Absent
/// pairs read as zero; present pairs are always >= 1. Keys are compared by
/// exact case-sensitive string equality, so surface-form variants of the
/// same subject stay separate (a deliberate limitation kept from the study's
/// counting scheme). BTreeMap keeps iteration, printing, and JSON export
/// deterministic.
#[derive(Debug, Default, Clone, Serialize)]
pub struct FrequencyTable {
    counts: BTreeMap<String, BTreeMap<String, u32>>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        FrequencyTable::default()
    }

    /// Fold a sequence of pairs into a table. Pure associative accumulation:
    /// any permutation of the input yields the same table.
    pub fn accumulate<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = SvPair>,
    {
        let mut table = FrequencyTable::new();
        for pair in pairs {
            table.increment(&pair);
        }
        table
    }

    pub fn increment(&mut self, pair: &SvPair) {
        *self
            .counts
            .entry(pair.subject.clone())
            .or_default()
            .entry(pair.verb.clone())
            .or_insert(0) += 1;
    }

    /// Default-zero read.
    pub fn count(&self, subject: &str, verb: &str) -> u32 {
        self.counts.get(subject).and_then(|verbs| verbs.get(verb)).copied().unwrap_or(0)
    }

    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(|s| s.as_str())
    }

    /// All distinct verbs across every subject, deduplicated and ordered.
    pub fn verbs(&self) -> Vec<&str> {
        let mut verbs: Vec<&str> =
            self.counts.values().flat_map(|m| m.keys().map(|v| v.as_str())).collect();
        verbs.sort_unstable();
        verbs.dedup();
        verbs
    }

    pub fn total(&self) -> u32 {
        self.counts.values().flat_map(|verbs| verbs.values()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(subject: &str, verb: &str) -> SvPair {
        SvPair::new(subject.to_string(), verb.to_string()).unwrap()
    }

    #[test]
    fn accumulates_counts() {
        let table =
            FrequencyTable::accumulate([pair("dog", "run"), pair("dog", "run"), pair("cat", "sit")]);

        assert_eq!(table.count("dog", "run"), 2);
        assert_eq!(table.count("cat", "sit"), 1);
        assert_eq!(table.count("cat", "run"), 0);
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn order_independent() {
        let forward =
            FrequencyTable::accumulate([pair("dog", "run"), pair("dog", "run"), pair("cat", "sit")]);
        let backward =
            FrequencyTable::accumulate([pair("cat", "sit"), pair("dog", "run"), pair("dog", "run")]);

        assert_eq!(forward.count("dog", "run"), backward.count("dog", "run"));
        assert_eq!(forward.count("cat", "sit"), backward.count("cat", "sit"));
        assert_eq!(
            forward.subjects().collect::<Vec<_>>(),
            backward.subjects().collect::<Vec<_>>()
        );
    }

    #[test]
    fn surface_variants_stay_separate() {
        let table = FrequencyTable::accumulate([pair("Dog", "run"), pair("dog", "run")]);
        assert_eq!(table.count("Dog", "run"), 1);
        assert_eq!(table.count("dog", "run"), 1);
    }

    #[test]
    fn verbs_are_deduplicated_across_subjects() {
        let table = FrequencyTable::accumulate([pair("dog", "run"), pair("cat", "run")]);
        assert_eq!(table.verbs(), vec!["run"]);
    }
}
