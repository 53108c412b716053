use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::PhrasemapConfig;
use super::validation::params_problems;
use crate::errors::{PhrasemapError, Result};

pub const CONFIG_FILE_NAME: &str = ".phrasemap.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse a TOML string and validate the phrase parameters it resolves to
pub fn parse_and_validate_config(contents: &str) -> Result<PhrasemapConfig> {
    let config = toml::from_str::<PhrasemapConfig>(contents)?;

    let problems = params_problems(&config.phrase_params());
    if !problems.is_empty() {
        return Err(PhrasemapError::config(format!(
            "invalid [phrases] table: {}",
            problems.join("; ")
        )));
    }

    Ok(config)
}

/// Try loading config from a discovered path. Missing or broken files are
/// skipped with a log line.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<PhrasemapConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!(
                "Ignoring {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            None
        }
    }
}

pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // "not found" is the normal case while walking ancestors
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` and its ancestors, at most `max_depth` directories
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Find the nearest `.phrasemap.toml` walking up from `start`
pub fn discover_config(start: PathBuf) -> PhrasemapConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            PhrasemapConfig::default()
        })
}

/// Discover configuration from the current directory upwards
pub fn load_config() -> PhrasemapConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            PhrasemapConfig::default()
        }
    }
}

/// Load an explicitly named config file. Unlike discovery, the file must
/// exist and be valid.
pub fn load_config_from_path(path: &Path) -> Result<PhrasemapConfig> {
    let contents = read_config_file(path).map_err(|e| {
        PhrasemapError::file_system_io("Failed to read config file", path, e)
    })?;
    parse_and_validate_config(&contents)
}
