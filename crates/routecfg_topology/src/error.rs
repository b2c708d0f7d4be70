//! Error types for topology parsing, validation and conversion.

use crate::{MAX_CONNECTIONS_PER_SWITCH, MAX_SWITCHES};

/// The result type returned by fallible topology operations.
pub type TopologyResult<T> = Result<T, TopologyError>;

/// Errors that can occur while reading or converting a topology.
#[derive(Debug, thiserror::Error)]
pub enum TopologyError {
    /// The YAML text could not be parsed into a topology.
    #[error("invalid topology: {0}")]
    Parse(String),

    /// The topology lists no switches.
    #[error("topology has no switches")]
    NoSwitches,

    /// The topology lists more switches than the hardware supports.
    #[error("topology has {count} switches, at most {} allowed", MAX_SWITCHES)]
    TooManySwitches {
        /// Number of switches listed.
        count: usize,
    },

    /// A switch lists more connections than the hardware supports.
    #[error(
        "switch {switch} has {count} connections, at most {} allowed",
        MAX_CONNECTIONS_PER_SWITCH
    )]
    TooManyConnections {
        /// The switch id.
        switch: u32,
        /// Number of connections listed.
        count: usize,
    },

    /// The topology does not have exactly one root switch.
    #[error("must have exactly one root switch (found {found})")]
    RootCount {
        /// Number of switches marked as root.
        found: usize,
    },

    /// An IP or MAC address field could not be parsed.
    #[error("switch {switch} connection {connection}: invalid {field} '{value}'")]
    InvalidAddress {
        /// The switch id.
        switch: u32,
        /// 0-based index of the connection within the switch.
        connection: usize,
        /// The YAML key, e.g. `my_mac`.
        field: &'static str,
        /// The offending value.
        value: String,
    },
}
