//! Parsing of the optional `routecfg.toml` tool configuration.
//!
//! The file only carries presentation defaults for the `routecfg` command
//! line; every setting has a default and can be overridden by a flag.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, load_project_config, CONFIG_FILE_NAME};
pub use types::*;

#[cfg(test)]
mod tests {
    #[test]
    fn package_metadata_from_workspace() {
        assert_eq!(
            env!("CARGO_PKG_REPOSITORY"),
            "https://github.com/routecfg/routecfg"
        );
        assert!(!env!("CARGO_PKG_DESCRIPTION").is_empty());
    }
}
