//! Type-state pattern for validating configuration before execution
//!
//! An `AnalyzeConfig<Unvalidated>` has to go through [`AnalyzeConfig::validate`]
//! before it can be executed.
//!
//! ```ignore
//! let config: AnalyzeConfig<Unvalidated> = AnalyzeConfig::new(path, format, output, params, color);
//! let validated = config.validate()?;
//! validated.execute()?;
//! ```

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::validate_params;
use crate::io::OutputFormat;
use crate::phrases::PhraseParams;

/// Marker type representing unvalidated state
#[derive(Debug, Clone, Copy)]
pub struct Unvalidated;

/// Marker type representing validated state
#[derive(Debug, Clone, Copy)]
pub struct Validated;

#[derive(Debug, Clone)]
pub struct AnalyzeConfig<State = Unvalidated> {
    /// Document path, `None` or `-` for stdin
    pub path: Option<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub params: PhraseParams,
    pub color: bool,

    _state: PhantomData<State>,
}

impl AnalyzeConfig<Unvalidated> {
    pub fn new(
        path: Option<PathBuf>,
        format: OutputFormat,
        output: Option<PathBuf>,
        params: PhraseParams,
        color: bool,
    ) -> Self {
        AnalyzeConfig {
            path,
            format,
            output,
            params,
            color,
            _state: PhantomData,
        }
    }

    pub fn validate(self) -> Result<AnalyzeConfig<Validated>> {
        if let Some(ref path) = self.path {
            if path.as_path() != Path::new("-") && !path.is_file() {
                anyhow::bail!("Document does not exist: {}", path.display());
            }
        }

        if let Some(ref output) = self.output {
            if let Some(parent) = output.parent() {
                // "file.json" has an empty parent, meaning the current directory
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    anyhow::bail!("Output directory does not exist: {}", parent.display());
                }
            }
        }

        validate_params(&self.params)?;

        Ok(AnalyzeConfig {
            path: self.path,
            format: self.format,
            output: self.output,
            params: self.params,
            color: self.color,
            _state: PhantomData,
        })
    }
}

impl AnalyzeConfig<Validated> {
    /// Run the analysis and write the report
    pub fn execute(self) -> Result<()> {
        super::analyze::run_analysis(&self).map(|_| ())
    }
}
