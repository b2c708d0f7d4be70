//! File access shared by the subcommands.

use std::path::Path;

use routecfg_config::ToolConfig;

use crate::GlobalArgs;

/// Reads an entire input file, naming the path on failure.
pub fn read_input(path: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    std::fs::read(path).map_err(|e| format!("cannot read {path}: {e}").into())
}

/// Writes an entire output file, naming the path on failure.
pub fn write_output(path: &str, data: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::write(path, data).map_err(|e| format!("cannot write {path}: {e}").into())
}

/// Loads the tool configuration.
///
/// An explicit `--config` path must exist. Without one, `routecfg.toml` in
/// the working directory is used when present, otherwise the defaults.
pub fn load_tool_config(global: &GlobalArgs) -> Result<ToolConfig, Box<dyn std::error::Error>> {
    let config = match &global.config {
        Some(path) => routecfg_config::load_config(Path::new(path))
            .map_err(|e| format!("{path}: {e}"))?,
        None => routecfg_config::load_project_config(&std::env::current_dir()?)?,
    };
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn global(config: Option<String>) -> GlobalArgs {
        GlobalArgs {
            quiet: true,
            verbose: false,
            config,
        }
    }

    #[test]
    fn read_missing_file_names_path() {
        let err = read_input("/nonexistent/fpga_config.bin").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("cannot read /nonexistent/fpga_config.bin"), "{msg}");
    }

    #[test]
    fn write_then_read() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.bin");
        let path = path.to_str().unwrap();
        write_output(path, &[1, 2, 3]).unwrap();
        assert_eq!(read_input(path).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn explicit_config_is_loaded() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("custom.toml");
        fs::write(&path, "[inspect]\nshow_reserved = true\n").unwrap();
        let path = path.to_str().unwrap().to_string();
        let config = load_tool_config(&global(Some(path))).unwrap();
        assert!(config.inspect.show_reserved);
    }

    #[test]
    fn explicit_missing_config_errors() {
        let result = load_tool_config(&global(Some("/nonexistent/routecfg.toml".to_string())));
        let msg = result.unwrap_err().to_string();
        assert!(msg.starts_with("/nonexistent/routecfg.toml:"), "{msg}");
    }
}
