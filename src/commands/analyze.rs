use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, IsTerminal, Write};
use std::path::PathBuf;

use super::state::{AnalyzeConfig, Unvalidated, Validated};
use crate::config::{load_config, load_config_from_path, PhrasemapConfig};
use crate::io::{self, create_writer, OutputFormat};
use crate::phrases::{analyze_document, PhraseParams, PhraseReport};

/// Raw `analyze` flags as given on the command line
#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    pub path: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub min_len: Option<usize>,
    pub max_len: Option<usize>,
    pub min_occurrences: Option<usize>,
    pub top: Option<usize>,
    pub parallel: bool,
    pub plain: bool,
}

/// Pure merge: flags win over the config file, which wins over defaults.
///
/// `stdout_is_terminal` comes from the caller so the merge stays pure.
pub fn resolve_config(
    options: AnalyzeOptions,
    file_config: &PhrasemapConfig,
    stdout_is_terminal: bool,
) -> AnalyzeConfig<Unvalidated> {
    let base = file_config.phrase_params();
    let params = PhraseParams {
        min_len: options.min_len.unwrap_or(base.min_len),
        max_len: options.max_len.unwrap_or(base.max_len),
        min_occurrences: options.min_occurrences.unwrap_or(base.min_occurrences),
        top: options.top.unwrap_or(base.top),
        parallel: options.parallel || base.parallel,
    };
    let format = options
        .format
        .or_else(|| file_config.output_format())
        .unwrap_or(OutputFormat::Terminal);
    // color only for the terminal writer on an interactive stdout
    let color = !options.plain && options.output.is_none() && stdout_is_terminal;

    AnalyzeConfig::new(options.path, format, options.output, params, color)
}

pub fn handle_analyze(options: AnalyzeOptions) -> Result<()> {
    let file_config = match options.config {
        Some(ref path) => load_config_from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => load_config(),
    };

    let stdout_is_terminal = std::io::stdout().is_terminal();
    resolve_config(options, &file_config, stdout_is_terminal)
        .validate()?
        .execute()
}

pub(crate) fn run_analysis(config: &AnalyzeConfig<Validated>) -> Result<PhraseReport> {
    let document = io::read_document(config.path.as_deref())?;
    log::debug!(
        "Read document of {} bytes with params {:?}",
        document.len(),
        config.params
    );

    let report = analyze_document(&document, &config.params);

    match config.output {
        Some(ref path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            create_writer(config.format, &mut writer, false).write_report(&report)?;
            writer.flush()?;
            log::info!("Wrote report to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            create_writer(config.format, &mut handle, config.color).write_report(&report)?;
            handle.flush()?;
        }
    }

    Ok(report)
}
