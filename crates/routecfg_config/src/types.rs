//! Configuration types deserialized from `routecfg.toml`.

use serde::Deserialize;

/// The top-level tool configuration.
#[derive(Debug, Default, Deserialize)]
pub struct ToolConfig {
    /// Defaults for `routecfg inspect`.
    #[serde(default)]
    pub inspect: InspectConfig,
}

/// Defaults for the inspection report.
#[derive(Debug, Default, Deserialize)]
pub struct InspectConfig {
    /// Report output format.
    #[serde(default)]
    pub format: ReportFormat,
    /// Whether to print each record's reserved bytes.
    #[serde(default)]
    pub show_reserved: bool,
}

/// Output format of the inspection report.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}
