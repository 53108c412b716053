//! CLI command implementations for phrasemap.
//!
//! - **analyze**: extract repeated phrases from a document
//! - **init**: write a default `.phrasemap.toml`
//!
//! `analyze` goes through the type-state config in [`state`], so only a
//! validated configuration can run.

pub mod analyze;
pub mod init;
pub mod state;

pub use analyze::{handle_analyze, resolve_config, AnalyzeOptions};
pub use init::init_config;
pub use state::{AnalyzeConfig, Unvalidated, Validated};
