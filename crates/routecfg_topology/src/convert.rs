//! Flattening a topology into routing configuration records.
//!
//! Each record's reserved span carries the link state and both MAC addresses:
//! `up` at byte 0, the local MAC at bytes 1..7, the peer MAC at bytes 7..13,
//! and zeros after that. The decoder treats the span as opaque.

use std::net::Ipv4Addr;

use routecfg_format::{ConfigHeader, ConnectionRecord, RoutingConfig, RESERVED_SIZE};
use tracing::debug;

use crate::error::{TopologyError, TopologyResult};
use crate::model::{Connection, SwitchConfig, Topology};

/// Magic number written by the generator.
pub const CONFIG_MAGIC: u32 = 0x4647_5441;

/// Format version written by the generator.
pub const CONFIG_VERSION: u32 = 1;

const UP_OFFSET: usize = 0;
const LOCAL_MAC_OFFSET: usize = 1;
const PEER_MAC_OFFSET: usize = 7;
const MAC_LEN: usize = 6;

/// Validates the topology and builds the routing configuration.
///
/// Records are emitted switch by switch, connections in document order.
/// `timestamp` is stored in the header as given.
pub fn build_config(topology: &Topology, timestamp: u32) -> TopologyResult<RoutingConfig> {
    topology.validate()?;

    let records = topology
        .switches
        .iter()
        .flat_map(|sw| {
            sw.connections
                .iter()
                .enumerate()
                .map(move |(index, conn)| build_record(sw, index, conn))
        })
        .collect::<TopologyResult<Vec<_>>>()?;

    debug!(
        switches = topology.switches.len(),
        records = records.len(),
        "built routing configuration"
    );

    // validate() caps the count at 64 * 32 records
    let total_connections = records.len() as u32;

    Ok(RoutingConfig {
        header: ConfigHeader {
            magic: CONFIG_MAGIC,
            version: CONFIG_VERSION,
            total_connections,
            timestamp,
        },
        records,
    })
}

fn build_record(
    sw: &SwitchConfig,
    index: usize,
    conn: &Connection,
) -> TopologyResult<ConnectionRecord> {
    let invalid = |field: &'static str, value: &str| TopologyError::InvalidAddress {
        switch: sw.id,
        connection: index,
        field,
        value: value.to_string(),
    };

    let local_ip = conn
        .my_ip
        .parse::<Ipv4Addr>()
        .map_err(|_| invalid("my_ip", &conn.my_ip))?;
    let peer_ip = conn
        .peer_ip
        .parse::<Ipv4Addr>()
        .map_err(|_| invalid("peer_ip", &conn.peer_ip))?;
    let local_mac = parse_mac(&conn.my_mac).ok_or_else(|| invalid("my_mac", &conn.my_mac))?;
    let peer_mac = parse_mac(&conn.peer_mac).ok_or_else(|| invalid("peer_mac", &conn.peer_mac))?;

    let mut reserved = [0u8; RESERVED_SIZE];
    reserved[UP_OFFSET] = u8::from(conn.up);
    reserved[LOCAL_MAC_OFFSET..LOCAL_MAC_OFFSET + MAC_LEN].copy_from_slice(&local_mac);
    reserved[PEER_MAC_OFFSET..PEER_MAC_OFFSET + MAC_LEN].copy_from_slice(&peer_mac);

    Ok(ConnectionRecord {
        switch_id: sw.id,
        host_id: conn.host_id,
        local_ip: u32::from(local_ip),
        peer_ip: u32::from(peer_ip),
        local_port: conn.my_port,
        peer_port: conn.peer_port,
        local_qp: conn.my_qp,
        peer_qp: conn.peer_qp,
        reserved,
    })
}

/// Parses a colon-separated MAC address of six 1–2 digit hex octets.
pub fn parse_mac(text: &str) -> Option<[u8; MAC_LEN]> {
    let mut mac = [0u8; MAC_LEN];
    let mut parts = text.split(':');
    for byte in &mut mac {
        let part = parts.next()?;
        if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        *byte = u8::from_str_radix(part, 16).ok()?;
    }
    parts.next().is_none().then_some(mac)
}
