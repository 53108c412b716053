//! Threshold, subsumption and ranking over a [`FrequencyTable`].
//!
//! The subsumption check works on joined phrase text. A survivor is dropped
//! when its text occurs anywhere inside another survivor's text, aligned on
//! token boundaries or not.

use super::ngram::{FrequencyTable, PhraseStats};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashSet;

/// A phrase that made it into the result, with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedPhrase {
    pub phrase: String,
    pub count: usize,
}

type Candidate<'a> = (&'a str, &'a PhraseStats);

/// Phrases counted at least `phrase_count` times, in first-seen order.
pub fn apply_threshold(table: &FrequencyTable, phrase_count: usize) -> Vec<Candidate<'_>> {
    table
        .in_order()
        .into_iter()
        .filter(|(_, stats)| stats.count >= phrase_count)
        .collect()
}

/// Drop every candidate whose text is contained in another candidate.
///
/// Candidates are sorted by ascending text length and each one is checked
/// against every candidate after it. A phrase is dropped even when the
/// phrase containing it is dropped as well.
pub fn remove_subsumed(candidates: Vec<Candidate<'_>>) -> Vec<Candidate<'_>> {
    let mut by_length: Vec<&str> = candidates.iter().map(|(phrase, _)| *phrase).collect();
    by_length.sort_by_key(|phrase| phrase.len());

    let subsumed: HashSet<&str> = by_length
        .iter()
        .enumerate()
        .filter(|(i, shorter)| {
            by_length[i + 1..]
                .iter()
                .any(|longer| longer.contains(**shorter))
        })
        .map(|(_, phrase)| *phrase)
        .collect();

    log::debug!(
        "Subsumption removed {} of {} candidate phrases",
        subsumed.len(),
        candidates.len()
    );

    candidates
        .into_iter()
        .filter(|(phrase, _)| !subsumed.contains(phrase))
        .collect()
}

/// Threshold, drop subsumed phrases, and keep the `top_n` most frequent.
///
/// Equal counts keep first-seen order.
pub fn rank_phrases(table: &FrequencyTable, phrase_count: usize, top_n: usize) -> Vec<RankedPhrase> {
    rank_candidates(apply_threshold(table, phrase_count), top_n)
}

/// Drop subsumed phrases from already thresholded candidates and keep the
/// `top_n` most frequent.
pub fn rank_candidates(candidates: Vec<Candidate<'_>>, top_n: usize) -> Vec<RankedPhrase> {
    let mut survivors = remove_subsumed(candidates);
    survivors.sort_by_key(|(_, stats)| (Reverse(stats.count), stats.first_seen));

    survivors
        .into_iter()
        .take(top_n)
        .map(|(phrase, stats)| RankedPhrase {
            phrase: phrase.to_string(),
            count: stats.count,
        })
        .collect()
}

/// [`rank_phrases`] without the counts.
pub fn phrase_filter(table: &FrequencyTable, phrase_count: usize, top_n: usize) -> Vec<String> {
    rank_phrases(table, phrase_count, top_n)
        .into_iter()
        .map(|ranked| ranked.phrase)
        .collect()
}
