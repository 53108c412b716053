//! N-gram generation and phrase frequency counting.
//!
//! N-grams are generated per sentence so that no phrase spans a sentence
//! boundary. Each generated n-gram is joined with single spaces and counted
//! into a [`FrequencyTable`], which also remembers where every phrase was
//! first seen. That position is the ranking tie-breaker.

use rayon::prelude::*;
use std::collections::HashMap;

/// Where a phrase was first recorded: sentence index, then generation
/// order within that sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub sentence: usize,
    pub index: usize,
}

impl Position {
    pub fn new(sentence: usize, index: usize) -> Self {
        Self { sentence, index }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseStats {
    pub count: usize,
    pub first_seen: Position,
}

/// Phrase → occurrence count, accumulated across a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: HashMap<String, PhraseStats>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `phrase` seen at `at`.
    pub fn record(&mut self, phrase: String, at: Position) {
        self.add(phrase, 1, at);
    }

    fn add(&mut self, phrase: String, count: usize, at: Position) {
        self.entries
            .entry(phrase)
            .and_modify(|stats| {
                stats.count += count;
                stats.first_seen = stats.first_seen.min(at);
            })
            .or_insert(PhraseStats {
                count,
                first_seen: at,
            });
    }

    /// Fold another table into this one.
    ///
    /// Counts add up and the earliest first-seen position wins, so merging
    /// per-sentence tables in any order gives the same result.
    pub fn merge(&mut self, other: FrequencyTable) {
        for (phrase, stats) in other.entries {
            self.add(phrase, stats.count, stats.first_seen);
        }
    }

    /// Occurrence count of `phrase`, zero when it was never seen.
    pub fn count(&self, phrase: &str) -> usize {
        self.entries.get(phrase).map_or(0, |stats| stats.count)
    }

    pub fn get(&self, phrase: &str) -> Option<&PhraseStats> {
        self.entries.get(phrase)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PhraseStats)> {
        self.entries.iter().map(|(phrase, stats)| (phrase.as_str(), stats))
    }

    /// Entries ordered by first-seen position.
    pub fn in_order(&self) -> Vec<(&str, &PhraseStats)> {
        let mut ordered: Vec<_> = self.iter().collect();
        ordered.sort_by_key(|(_, stats)| stats.first_seen);
        ordered
    }

    /// Build a table from precomputed counts. Iteration order becomes the
    /// first-seen order.
    pub fn from_counts<S, I>(counts: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, usize)>,
    {
        let mut table = Self::new();
        for (index, (phrase, count)) in counts.into_iter().enumerate() {
            table.add(phrase.into(), count, Position::new(0, index));
        }
        table
    }
}

impl<S: Into<String>> FromIterator<(S, usize)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (S, usize)>>(iter: I) -> Self {
        Self::from_counts(iter)
    }
}

/// Every contiguous run of `tokens` whose length lies in
/// `[min_len, max_len]`, shortest lengths first and left to right within a
/// length.
///
/// Lengths above `tokens.len()` are skipped, and so is length zero.
///
/// ```rust
/// use phrasemap::phrases::ngram::ngrams_in_range;
///
/// let grams = ngrams_in_range(&["1", "2", "3"], 2, 2);
/// assert_eq!(grams, vec![&["1", "2"][..], &["2", "3"][..]]);
/// ```
pub fn ngrams_in_range<T>(tokens: &[T], min_len: usize, max_len: usize) -> Vec<&[T]> {
    let lower = min_len.max(1);
    let upper = max_len.min(tokens.len());
    (lower..=upper).flat_map(|n| tokens.windows(n)).collect()
}

/// Join tokens into the phrase key used for counting.
pub fn join_phrase<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Count the n-grams of a single tokenized sentence.
pub fn count_sentence<S: AsRef<str>>(
    sentence_index: usize,
    tokens: &[S],
    min_len: usize,
    max_len: usize,
) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for (index, gram) in ngrams_in_range(tokens, min_len, max_len).into_iter().enumerate() {
        table.record(join_phrase(gram), Position::new(sentence_index, index));
    }
    table
}

/// Count n-grams across all sentences of a document.
pub fn count_phrases<S: AsRef<str>>(
    sentences: &[Vec<S>],
    min_len: usize,
    max_len: usize,
) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for (sentence_index, tokens) in sentences.iter().enumerate() {
        table.merge(count_sentence(sentence_index, tokens, min_len, max_len));
    }
    log::debug!(
        "Counted {} distinct phrases over {} sentences",
        table.len(),
        sentences.len()
    );
    table
}

/// Same as [`count_phrases`], counting sentences on the rayon pool.
pub fn count_phrases_parallel<S: AsRef<str> + Sync>(
    sentences: &[Vec<S>],
    min_len: usize,
    max_len: usize,
) -> FrequencyTable {
    let table = sentences
        .par_iter()
        .enumerate()
        .map(|(sentence_index, tokens)| count_sentence(sentence_index, tokens, min_len, max_len))
        .reduce(FrequencyTable::new, |mut acc, table| {
            acc.merge(table);
            acc
        });
    log::debug!(
        "Counted {} distinct phrases over {} sentences (parallel)",
        table.len(),
        sentences.len()
    );
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIGITS: [&str; 5] = ["1", "2", "3", "4", "5"];

    fn owned(grams: Vec<&[&str]>) -> Vec<Vec<String>> {
        grams
            .into_iter()
            .map(|g| g.iter().map(|t| t.to_string()).collect())
            .collect()
    }

    fn expected(grams: &[&[&str]]) -> Vec<Vec<String>> {
        grams
            .iter()
            .map(|g| g.iter().map(|t| t.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_unigrams() {
        assert_eq!(
            owned(ngrams_in_range(&DIGITS, 1, 1)),
            expected(&[&["1"], &["2"], &["3"], &["4"], &["5"]])
        );
    }

    #[test]
    fn test_bigrams() {
        assert_eq!(
            owned(ngrams_in_range(&DIGITS, 2, 2)),
            expected(&[&["1", "2"], &["2", "3"], &["3", "4"], &["4", "5"]])
        );
    }

    #[test]
    fn test_range_orders_by_length_then_position() {
        let all = expected(&[
            &["1", "2"],
            &["2", "3"],
            &["3", "4"],
            &["4", "5"],
            &["1", "2", "3"],
            &["2", "3", "4"],
            &["3", "4", "5"],
            &["1", "2", "3", "4"],
            &["2", "3", "4", "5"],
            &["1", "2", "3", "4", "5"],
        ]);
        assert_eq!(owned(ngrams_in_range(&DIGITS, 2, 5)), all);
        // max above the token count is clamped
        assert_eq!(owned(ngrams_in_range(&DIGITS, 2, 7)), all);
    }

    #[test]
    fn test_inverted_or_oversized_range_is_empty() {
        assert!(ngrams_in_range(&DIGITS, 3, 2).is_empty());
        assert!(ngrams_in_range(&DIGITS, 6, 9).is_empty());
        assert!(ngrams_in_range::<&str>(&[], 1, 3).is_empty());
    }

    #[test]
    fn test_zero_length_is_never_generated() {
        assert_eq!(ngrams_in_range(&DIGITS, 0, 1).len(), 5);
        assert!(ngrams_in_range(&DIGITS, 0, 0).is_empty());
    }

    #[test]
    fn test_join_phrase_keeps_empty_tokens() {
        assert_eq!(join_phrase(&["a", "", "b"]), "a  b");
    }

    #[test]
    fn test_count_phrases_tallies_across_sentences() {
        let sentences = vec![vec!["a", "b", "c"], vec!["a", "b"]];
        let table = count_phrases(&sentences, 2, 3);
        assert_eq!(table.count("a b"), 2);
        assert_eq!(table.count("b c"), 1);
        assert_eq!(table.count("a b c"), 1);
        assert_eq!(table.count("b a"), 0);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_count_phrases_never_crosses_sentences() {
        let sentences = vec![vec!["x", "y"], vec!["z"]];
        let table = count_phrases(&sentences, 2, 2);
        assert_eq!(table.count("y z"), 0);
    }

    #[test]
    fn test_first_seen_keeps_earliest_position() {
        let sentences = vec![vec!["p", "q", "p", "q"]];
        let table = count_phrases(&sentences, 2, 2);
        let stats = table.get("p q").unwrap();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.first_seen, Position::new(0, 0));
        assert_eq!(table.get("q p").unwrap().first_seen, Position::new(0, 1));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let sentences: Vec<Vec<String>> = (0..50)
            .map(|i| {
                (0..8)
                    .map(|j| ["alpha", "beta", "gamma"][(i + j) % 3].to_string())
                    .collect()
            })
            .collect();
        assert_eq!(
            count_phrases(&sentences, 2, 4),
            count_phrases_parallel(&sentences, 2, 4)
        );
    }

    #[test]
    fn test_from_counts_uses_iteration_order() {
        let table: FrequencyTable = vec![("later", 1), ("earlier", 1)].into_iter().collect();
        let order: Vec<&str> = table.in_order().into_iter().map(|(p, _)| p).collect();
        assert_eq!(order, vec!["later", "earlier"]);
    }
}
