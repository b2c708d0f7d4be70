//! routecfg CLI — tooling for FPGA routing configuration files.
//!
//! Provides `routecfg generate` to build a binary configuration from a YAML
//! topology, `routecfg hex` to convert it into `$readmemh` hex words,
//! `routecfg unhex` for the reverse direction, and `routecfg inspect` to print
//! the decoded header and connection records.

#![warn(missing_docs)]

mod files;
mod generate;
mod hex;
mod inspect;

use std::io::IsTerminal;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;

/// routecfg — inspect and convert FPGA routing configuration files.
#[derive(Parser, Debug)]
#[command(name = "routecfg", version, about = "FPGA routing configuration tools")]
pub struct Cli {
    /// Suppress informational output; warnings and errors are still shown.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a custom `routecfg.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a binary configuration from a YAML switch topology.
    Generate(GenerateArgs),
    /// Convert a binary configuration into one hex word per line.
    Hex(ConvertArgs),
    /// Convert hex words back into a binary file.
    Unhex(ConvertArgs),
    /// Print the decoded header and connection records.
    Inspect(InspectArgs),
}

/// Arguments shared by `routecfg hex` and `routecfg unhex`.
#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Input file path.
    pub input: String,

    /// Output file path.
    pub output: String,
}

/// Arguments for the `routecfg generate` subcommand.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// YAML topology file.
    pub topology: String,

    /// Output binary path.
    #[arg(default_value = "fpga_config.bin")]
    pub output: String,

    /// Print the topology summary only; nothing is validated or written.
    #[arg(short, long)]
    pub summary: bool,

    /// Header timestamp in seconds since the epoch (default: now).
    #[arg(long)]
    pub timestamp: Option<u32>,
}

/// Arguments for the `routecfg inspect` subcommand.
#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Binary configuration file to decode.
    pub file: String,

    /// Output format (default from `routecfg.toml`, else text).
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Also print each record's reserved bytes.
    #[arg(long)]
    pub show_reserved: bool,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

impl From<ReportFormat> for routecfg_config::ReportFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Text => routecfg_config::ReportFormat::Text,
            ReportFormat::Json => routecfg_config::ReportFormat::Json,
        }
    }
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress informational output.
    pub quiet: bool,
    /// Whether to print verbose/debug information.
    pub verbose: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

impl GlobalArgs {
    /// The most detailed log level to emit.
    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::WARN
        } else if self.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        config: cli.config,
    };

    init_logging(&global);

    let result = match cli.command {
        Command::Generate(ref args) => generate::run(args, &global),
        Command::Hex(ref args) => hex::run_hex(args, &global),
        Command::Unhex(ref args) => hex::run_unhex(args, &global),
        Command::Inspect(ref args) => inspect::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Installs a stderr log subscriber so stdout carries only report output.
fn init_logging(global: &GlobalArgs) {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(global.log_level())
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("warning: logging unavailable: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_hex() {
        let cli = Cli::parse_from(["routecfg", "hex", "fpga_config.bin", "fpga_config.hex"]);
        match cli.command {
            Command::Hex(ref args) => {
                assert_eq!(args.input, "fpga_config.bin");
                assert_eq!(args.output, "fpga_config.hex");
            }
            _ => panic!("expected Hex command"),
        }
    }

    #[test]
    fn parse_generate_defaults() {
        let cli = Cli::parse_from(["routecfg", "generate", "topology.yaml"]);
        match cli.command {
            Command::Generate(ref args) => {
                assert_eq!(args.topology, "topology.yaml");
                assert_eq!(args.output, "fpga_config.bin");
                assert!(!args.summary);
                assert!(args.timestamp.is_none());
            }
            _ => panic!("expected Generate command"),
        }
    }

    #[test]
    fn parse_generate_with_args() {
        let cli = Cli::parse_from([
            "routecfg",
            "generate",
            "topology.yaml",
            "out.bin",
            "--summary",
            "--timestamp",
            "1700000000",
        ]);
        match cli.command {
            Command::Generate(ref args) => {
                assert_eq!(args.output, "out.bin");
                assert!(args.summary);
                assert_eq!(args.timestamp, Some(1_700_000_000));
            }
            _ => panic!("expected Generate command"),
        }
    }

    #[test]
    fn parse_hex_missing_output() {
        assert!(Cli::try_parse_from(["routecfg", "hex", "fpga_config.bin"]).is_err());
    }

    #[test]
    fn parse_hex_extra_argument() {
        assert!(Cli::try_parse_from(["routecfg", "hex", "a.bin", "a.hex", "b.hex"]).is_err());
    }

    #[test]
    fn parse_unhex() {
        let cli = Cli::parse_from(["routecfg", "unhex", "in.hex", "out.bin"]);
        match cli.command {
            Command::Unhex(ref args) => {
                assert_eq!(args.input, "in.hex");
                assert_eq!(args.output, "out.bin");
            }
            _ => panic!("expected Unhex command"),
        }
    }

    #[test]
    fn parse_inspect_default() {
        let cli = Cli::parse_from(["routecfg", "inspect", "fpga_config.bin"]);
        match cli.command {
            Command::Inspect(ref args) => {
                assert_eq!(args.file, "fpga_config.bin");
                assert!(args.format.is_none());
                assert!(!args.show_reserved);
            }
            _ => panic!("expected Inspect command"),
        }
    }

    #[test]
    fn parse_inspect_with_args() {
        let cli = Cli::parse_from([
            "routecfg",
            "inspect",
            "cfg.bin",
            "--format",
            "json",
            "--show-reserved",
        ]);
        match cli.command {
            Command::Inspect(ref args) => {
                assert_eq!(args.format, Some(ReportFormat::Json));
                assert!(args.show_reserved);
            }
            _ => panic!("expected Inspect command"),
        }
    }

    #[test]
    fn parse_inspect_requires_file() {
        assert!(Cli::try_parse_from(["routecfg", "inspect"]).is_err());
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::parse_from(["routecfg", "--quiet", "inspect", "cfg.bin"]);
        assert!(cli.quiet);
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_config_path() {
        let cli = Cli::parse_from([
            "routecfg",
            "--config",
            "/path/to/routecfg.toml",
            "inspect",
            "cfg.bin",
        ]);
        assert_eq!(cli.config.as_deref(), Some("/path/to/routecfg.toml"));
    }

    #[test]
    fn log_level_from_flags() {
        let mut global = GlobalArgs {
            quiet: false,
            verbose: false,
            config: None,
        };
        assert_eq!(global.log_level(), Level::INFO);
        global.verbose = true;
        assert_eq!(global.log_level(), Level::DEBUG);
        global.quiet = true;
        assert_eq!(global.log_level(), Level::WARN);
    }

    #[test]
    fn package_metadata_from_workspace() {
        assert_eq!(
            env!("CARGO_PKG_REPOSITORY"),
            "https://github.com/routecfg/routecfg"
        );
        assert!(!env!("CARGO_PKG_DESCRIPTION").is_empty());
    }

    #[test]
    fn report_format_converts() {
        assert_eq!(
            routecfg_config::ReportFormat::from(ReportFormat::Json),
            routecfg_config::ReportFormat::Json
        );
        assert_eq!(
            routecfg_config::ReportFormat::from(ReportFormat::Text),
            routecfg_config::ReportFormat::Text
        );
    }
}
