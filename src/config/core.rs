use serde::{Deserialize, Serialize};

use super::parallel::ParallelConfig;
use crate::io::output::OutputFormat;
use crate::phrases::PhraseParams;

/// Root configuration structure for phrasemap
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PhrasemapConfig {
    /// Phrase extraction parameters
    #[serde(default)]
    pub phrases: Option<PhrasesConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,

    /// Parallel counting configuration
    #[serde(default)]
    pub parallel: Option<ParallelConfig>,
}

/// `[phrases]` table. Unset fields fall back to [`PhraseParams::default`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PhrasesConfig {
    pub min_len: Option<usize>,
    pub max_len: Option<usize>,
    pub min_occurrences: Option<usize>,
    pub top: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    pub default_format: Option<OutputFormat>,
}

impl PhrasemapConfig {
    /// Resolve configured values over the built-in defaults.
    pub fn phrase_params(&self) -> PhraseParams {
        let defaults = PhraseParams::default();
        let phrases = self.phrases.clone().unwrap_or_default();
        PhraseParams {
            min_len: phrases.min_len.unwrap_or(defaults.min_len),
            max_len: phrases.max_len.unwrap_or(defaults.max_len),
            min_occurrences: phrases.min_occurrences.unwrap_or(defaults.min_occurrences),
            top: phrases.top.unwrap_or(defaults.top),
            parallel: self.parallel.as_ref().is_some_and(|p| p.enabled),
        }
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.default_format)
    }
}
