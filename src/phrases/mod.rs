//! Repeated phrase extraction.
//!
//! The pipeline has three stages:
//!
//! 1. [`segment`] splits a document into sentences and cleaned tokens.
//! 2. [`ngram`] generates n-grams per sentence and counts them.
//! 3. [`filter`] thresholds the counts, drops phrases contained in longer
//!    qualifying phrases, and ranks the rest.
//!
//! # Example
//!
//! ```rust
//! use phrasemap::phrases::common_phrases;
//!
//! let document = "The quick brown fox jumped over the lazy dog. \
//!     The lazy dog, peeved to be labeled lazy, jumped over a snoring turtle. \
//!     In retaliation the quick brown fox jumped over ten snoring turtles. \
//!     Then the quick brown fox refueled with some ice cream.";
//!
//! assert_eq!(
//!     common_phrases(document, 3, 10, 2, 10),
//!     vec!["the lazy dog", "the quick brown fox jumped over"]
//! );
//! ```

pub mod filter;
pub mod ngram;
pub mod segment;

pub use filter::{phrase_filter, rank_phrases, RankedPhrase};
pub use ngram::{count_phrases, count_phrases_parallel, ngrams_in_range, FrequencyTable};
pub use segment::{clean, clean_word};

use serde::{Deserialize, Serialize};

/// Parameters of a phrase extraction run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseParams {
    /// Shortest phrase length, in tokens
    pub min_len: usize,
    /// Longest phrase length, in tokens
    pub max_len: usize,
    /// Minimum number of occurrences for a phrase to qualify
    pub min_occurrences: usize,
    /// Maximum number of phrases returned
    pub top: usize,
    /// Count sentences on the rayon pool
    #[serde(default)]
    pub parallel: bool,
}

impl Default for PhraseParams {
    fn default() -> Self {
        Self {
            min_len: 3,
            max_len: 10,
            min_occurrences: 2,
            top: 10,
            parallel: false,
        }
    }
}

impl PhraseParams {
    pub fn new(min_len: usize, max_len: usize, min_occurrences: usize, top: usize) -> Self {
        Self {
            min_len,
            max_len,
            min_occurrences,
            top,
            parallel: false,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Document-level summary of a phrase extraction run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseReport {
    pub params: PhraseParams,
    pub sentence_count: usize,
    /// Distinct phrases counted before any filtering
    pub distinct_phrases: usize,
    /// Phrases meeting the occurrence threshold, before subsumption
    pub qualifying_phrases: usize,
    pub phrases: Vec<RankedPhrase>,
}

/// Tokenize every sentence of `document`.
pub fn tokenize_document(document: &str) -> Vec<Vec<String>> {
    segment::split_sentences(document)
        .into_iter()
        .map(segment::tokenize)
        .collect()
}

/// Count the phrases of `document` for the given length range.
pub fn frequency_table(document: &str, params: &PhraseParams) -> FrequencyTable {
    count_tokenized(&tokenize_document(document), params)
}

fn count_tokenized(sentences: &[Vec<String>], params: &PhraseParams) -> FrequencyTable {
    if params.parallel {
        count_phrases_parallel(sentences, params.min_len, params.max_len)
    } else {
        count_phrases(sentences, params.min_len, params.max_len)
    }
}

/// The `top_n` most frequent phrases of `document`, excluding any phrase
/// contained in a longer qualifying one.
///
/// Bad ranges are not reported: an inverted length range or `top_n == 0`
/// gives an empty result.
pub fn common_phrases(
    document: &str,
    min_phrase_len: usize,
    max_phrase_len: usize,
    min_occurrences: usize,
    top_n: usize,
) -> Vec<String> {
    let params = PhraseParams::new(min_phrase_len, max_phrase_len, min_occurrences, top_n);
    let table = frequency_table(document, &params);
    phrase_filter(&table, params.min_occurrences, params.top)
}

/// Run the full pipeline and collect the counts alongside the phrases.
pub fn analyze_document(document: &str, params: &PhraseParams) -> PhraseReport {
    let sentences = tokenize_document(document);
    let table = count_tokenized(&sentences, params);
    let candidates = filter::apply_threshold(&table, params.min_occurrences);
    let qualifying_phrases = candidates.len();
    let phrases = filter::rank_candidates(candidates, params.top);

    log::info!(
        "Extracted {} phrases from {} sentences ({} distinct, {} qualifying)",
        phrases.len(),
        sentences.len(),
        table.len(),
        qualifying_phrases
    );

    PhraseReport {
        params: *params,
        sentence_count: sentences.len(),
        distinct_phrases: table.len(),
        qualifying_phrases,
        phrases,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    const FOX_DOCUMENT: &str = "The quick brown fox jumped over the lazy dog. \
        The lazy dog, peeved to be labeled lazy, jumped over a snoring turtle. \
        In retaliation the quick brown fox jumped over ten snoring turtles. \
        Then the quick brown fox refueled with some ice cream.";

    #[test]
    fn test_common_phrases_fox_document() {
        assert_eq!(
            common_phrases(FOX_DOCUMENT, 3, 10, 2, 10),
            vec!["the lazy dog", "the quick brown fox jumped over"]
        );
    }

    #[test]
    fn test_analyze_document_reports_counts() {
        let report = analyze_document(FOX_DOCUMENT, &PhraseParams::default());
        assert_eq!(report.sentence_count, 4);
        assert_eq!(
            report.phrases,
            vec![
                RankedPhrase { phrase: "the lazy dog".into(), count: 2 },
                RankedPhrase { phrase: "the quick brown fox jumped over".into(), count: 2 },
            ]
        );
        assert!(report.qualifying_phrases > report.phrases.len());
        assert!(report.distinct_phrases >= report.qualifying_phrases);
    }

    #[test]
    fn test_report_counts_threshold_candidates_once() {
        let params = PhraseParams::default();
        let report = analyze_document(FOX_DOCUMENT, &params);
        let table = frequency_table(FOX_DOCUMENT, &params);
        assert_eq!(
            report.qualifying_phrases,
            filter::apply_threshold(&table, params.min_occurrences).len()
        );
        assert_eq!(report.phrases, rank_phrases(&table, params.min_occurrences, params.top));
    }

    #[test]
    fn test_parallel_run_matches_sequential() {
        let sequential = analyze_document(FOX_DOCUMENT, &PhraseParams::default());
        let parallel = analyze_document(FOX_DOCUMENT, &PhraseParams::default().with_parallel(true));
        assert_eq!(sequential.phrases, parallel.phrases);
        assert_eq!(sequential.distinct_phrases, parallel.distinct_phrases);
    }

    #[test]
    fn test_empty_document() {
        assert!(common_phrases("", 3, 10, 2, 10).is_empty());
        // a lone empty token still counts as a unigram
        assert_eq!(common_phrases("", 1, 1, 1, 10), vec![""]);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        assert!(common_phrases(FOX_DOCUMENT, 5, 3, 1, 10).is_empty());
    }

    #[test]
    fn test_newlines_are_not_sentence_breaks() {
        let document = indoc! {"
            red fish blue fish
            red fish blue fish"};
        // the newline is deleted during cleaning and glues two words together
        let table = frequency_table(document, &PhraseParams::new(1, 1, 1, 10));
        assert_eq!(table.count("fishred"), 1);
        assert_eq!(table.count("red"), 1);
    }
}
