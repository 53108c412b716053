//! Parallelism configuration for phrase counting.

use serde::{Deserialize, Serialize};

/// Configuration for parallel phrase counting.
///
/// When enabled, sentences are counted on rayon's thread pool and merged.
/// The merged table is identical to a sequential count.
///
/// # Example
///
/// ```rust
/// use phrasemap::config::ParallelConfig;
///
/// let config = ParallelConfig { enabled: true };
/// assert!(config.enabled);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ParallelConfig {
    /// Enable parallel counting (default: false)
    #[serde(default)]
    pub enabled: bool,
}
