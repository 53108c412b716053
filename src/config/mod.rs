mod core;
mod loader;
mod parallel;
pub mod validation;

pub use self::core::{OutputConfig, PhrasemapConfig, PhrasesConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from_path,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use parallel::ParallelConfig;
pub use validation::validate_params;
