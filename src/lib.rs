// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod io;
pub mod phrases;

// Re-export commonly used types
pub use crate::errors::PhrasemapError;

pub use crate::phrases::{
    analyze_document, common_phrases, frequency_table, tokenize_document, PhraseParams,
    PhraseReport,
};

pub use crate::phrases::filter::{phrase_filter, rank_phrases, RankedPhrase};
pub use crate::phrases::ngram::{
    count_phrases, count_phrases_parallel, ngrams_in_range, FrequencyTable, Position,
};
pub use crate::phrases::segment::{clean, clean_word, split_sentences, tokenize};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
