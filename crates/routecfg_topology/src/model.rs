//! Topology document types and structural validation.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{TopologyError, TopologyResult};
use crate::{MAX_CONNECTIONS_PER_SWITCH, MAX_SWITCHES};

/// A switch topology as written in YAML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    /// Switches in document order.
    #[serde(default)]
    pub switches: Vec<SwitchConfig>,
}

/// One switch and its host connections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchConfig {
    /// Switch identifier, written to every record of this switch.
    #[serde(default)]
    pub id: u32,
    /// Whether this switch is the root of the topology.
    #[serde(rename = "root", default, deserialize_with = "flag")]
    pub is_root: bool,
    /// Connections in document order.
    #[serde(default)]
    pub connections: Vec<Connection>,
}

/// One queue-pair connection between a switch port and a host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// Host identifier.
    #[serde(default)]
    pub host_id: u32,
    /// Local IPv4 address, dotted quad.
    pub my_ip: String,
    /// Local MAC address, `aa:bb:cc:dd:ee:ff`.
    pub my_mac: String,
    /// Local UDP port.
    #[serde(default)]
    pub my_port: u16,
    /// Local queue pair number.
    #[serde(default)]
    pub my_qp: u16,
    /// Peer IPv4 address, dotted quad.
    pub peer_ip: String,
    /// Peer MAC address, `aa:bb:cc:dd:ee:ff`.
    pub peer_mac: String,
    /// Peer UDP port.
    #[serde(default)]
    pub peer_port: u16,
    /// Peer queue pair number.
    #[serde(default)]
    pub peer_qp: u16,
    /// Link state.
    #[serde(default, deserialize_with = "flag")]
    pub up: bool,
}

/// Accepts `true`/`false`, `1`/`0`, or the strings `"true"`/`"1"`.
fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(u64),
        Text(String),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => value,
        Flag::Int(value) => value == 1,
        Flag::Text(value) => value == "true" || value == "1",
    })
}

/// Parses a topology from YAML text.
///
/// Unknown keys are ignored. Structural rules are checked separately by
/// [`Topology::validate`].
pub fn parse_topology(text: &str) -> TopologyResult<Topology> {
    serde_yaml::from_str(text).map_err(|e| TopologyError::Parse(e.to_string()))
}

impl Topology {
    /// Total number of connections across all switches.
    pub fn total_connections(&self) -> usize {
        self.switches.iter().map(|sw| sw.connections.len()).sum()
    }

    /// Number of switches marked as root.
    pub fn root_count(&self) -> usize {
        self.switches.iter().filter(|sw| sw.is_root).count()
    }

    /// Checks the switch and connection limits and the single-root rule.
    pub fn validate(&self) -> TopologyResult<()> {
        if self.switches.is_empty() {
            return Err(TopologyError::NoSwitches);
        }
        if self.switches.len() > MAX_SWITCHES {
            return Err(TopologyError::TooManySwitches {
                count: self.switches.len(),
            });
        }
        if let Some(sw) = self
            .switches
            .iter()
            .find(|sw| sw.connections.len() > MAX_CONNECTIONS_PER_SWITCH)
        {
            return Err(TopologyError::TooManyConnections {
                switch: sw.id,
                count: sw.connections.len(),
            });
        }

        match self.root_count() {
            1 => Ok(()),
            found => Err(TopologyError::RootCount { found }),
        }
    }
}
