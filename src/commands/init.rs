use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r#"# Phrasemap Configuration

[phrases]
min_len = 3
max_len = 10
min_occurrences = 2
top = 10

[output]
default_format = "terminal"

[parallel]
enabled = false
"#;

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force).map(|_| ())
}

/// Write the default config into `dir`, returning the written path
pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);

    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_and_validate_config;
    use crate::phrases::PhraseParams;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_matches_defaults() {
        let config = parse_and_validate_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.phrase_params(), PhraseParams::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let temp = TempDir::new().unwrap();
        let path = init_config_in(temp.path(), false).unwrap();
        fs::write(&path, "# edited\n").unwrap();

        assert!(init_config_in(temp.path(), false).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "# edited\n");

        init_config_in(temp.path(), true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
