//! `routecfg inspect` — decode and print a routing configuration.

use routecfg_config::{ReportFormat, ToolConfig};
use routecfg_format::{decode_config, render_text, ReportOptions, RoutingConfig};
use tracing::debug;

use crate::files::{load_tool_config, read_input};
use crate::{GlobalArgs, InspectArgs};

/// Runs the `routecfg inspect` command.
///
/// Decodes the file and prints the report to stdout. A buffer too short for
/// its declared record count is an error and nothing is printed.
/// `routecfg.toml` is only read when a flag leaves a report option unset.
pub fn run(args: &InspectArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let data = read_input(&args.file)?;
    debug!("read {} bytes from {}", data.len(), args.file);

    let config = decode_config(&data).map_err(|e| format!("{}: {e}", args.file))?;

    let tool_config = if needs_tool_config(args) {
        load_tool_config(global)?
    } else {
        ToolConfig::default()
    };
    let report = render(&config, args, &tool_config)?;
    print!("{report}");
    Ok(0)
}

/// Whether any report option still has to come from `routecfg.toml`.
fn needs_tool_config(args: &InspectArgs) -> bool {
    match args.format {
        None => true,
        Some(crate::ReportFormat::Text) => !args.show_reserved,
        Some(crate::ReportFormat::Json) => false,
    }
}

/// Renders the report, with CLI flags taking precedence over `routecfg.toml`.
fn render(
    config: &RoutingConfig,
    args: &InspectArgs,
    tool_config: &ToolConfig,
) -> Result<String, serde_json::Error> {
    let format = args
        .format
        .map(ReportFormat::from)
        .unwrap_or(tool_config.inspect.format);

    match format {
        ReportFormat::Text => {
            let options = ReportOptions {
                show_reserved: args.show_reserved || tool_config.inspect.show_reserved,
            };
            Ok(render_text(config, &options))
        }
        ReportFormat::Json => Ok(serde_json::to_string_pretty(config)? + "\n"),
    }
}
