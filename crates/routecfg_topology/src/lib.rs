//! Switch topology model and routing configuration generator.
//!
//! A topology is a YAML document listing switches, exactly one of which is the
//! root, each with up to [`MAX_CONNECTIONS_PER_SWITCH`] host connections:
//!
//! ```yaml
//! switches:
//!   - id: 1
//!     root: true
//!     connections:
//!       - host_id: 10
//!         my_ip: 192.168.0.1
//!         my_mac: "02:00:00:00:00:01"
//!         my_port: 4791
//!         my_qp: 1
//!         peer_ip: 192.168.0.2
//!         peer_mac: "02:00:00:00:00:02"
//!         peer_port: 4791
//!         peer_qp: 2
//!         up: true
//! ```
//!
//! [`build_config`] flattens it into a [`routecfg_format::RoutingConfig`] with
//! one record per connection in switch order, ready for
//! [`routecfg_format::encode_config`].

#![warn(missing_docs)]

pub mod convert;
pub mod error;
pub mod model;
pub mod summary;

pub use convert::{build_config, parse_mac, CONFIG_MAGIC, CONFIG_VERSION};
pub use error::{TopologyError, TopologyResult};
pub use model::{parse_topology, Connection, SwitchConfig, Topology};
pub use summary::render_summary;

/// Maximum number of switches in one topology.
pub const MAX_SWITCHES: usize = 64;

/// Maximum number of connections on one switch.
pub const MAX_CONNECTIONS_PER_SWITCH: usize = 32;
