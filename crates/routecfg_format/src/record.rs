//! The fixed 42-byte connection record.

use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

use crate::{read_u16_le, read_u32_le, RECORD_FIELDS_SIZE, RECORD_SIZE, RESERVED_SIZE};

/// One switch-to-peer connection.
///
/// The first 24 bytes of the record are decoded into typed fields. The
/// remaining 18 bytes are carried verbatim in [`reserved`](Self::reserved)
/// and never reinterpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionRecord {
    /// Switch that owns this connection.
    pub switch_id: u32,
    /// Host identifier on the far side.
    pub host_id: u32,
    /// Local IPv4 address as raw bits.
    pub local_ip: u32,
    /// Peer IPv4 address as raw bits.
    pub peer_ip: u32,
    /// Local UDP port.
    pub local_port: u16,
    /// Peer UDP port.
    pub peer_port: u16,
    /// Local RDMA queue pair.
    pub local_qp: u16,
    /// Peer RDMA queue pair.
    pub peer_qp: u16,
    /// Opaque trailing bytes.
    pub reserved: [u8; RESERVED_SIZE],
}

impl ConnectionRecord {
    /// Decodes a record from exactly [`RECORD_SIZE`] bytes.
    pub fn from_bytes(bytes: &[u8; RECORD_SIZE]) -> Self {
        let mut reserved = [0u8; RESERVED_SIZE];
        reserved.copy_from_slice(&bytes[RECORD_FIELDS_SIZE..]);
        Self {
            switch_id: read_u32_le(bytes, 0),
            host_id: read_u32_le(bytes, 4),
            local_ip: read_u32_le(bytes, 8),
            peer_ip: read_u32_le(bytes, 12),
            local_port: read_u16_le(bytes, 16),
            peer_port: read_u16_le(bytes, 18),
            local_qp: read_u16_le(bytes, 20),
            peer_qp: read_u16_le(bytes, 22),
            reserved,
        }
    }

    /// Encodes the record into its on-disk form.
    pub fn to_bytes(&self) -> [u8; RECORD_SIZE] {
        let mut out = [0u8; RECORD_SIZE];
        out[0..4].copy_from_slice(&self.switch_id.to_le_bytes());
        out[4..8].copy_from_slice(&self.host_id.to_le_bytes());
        out[8..12].copy_from_slice(&self.local_ip.to_le_bytes());
        out[12..16].copy_from_slice(&self.peer_ip.to_le_bytes());
        out[16..18].copy_from_slice(&self.local_port.to_le_bytes());
        out[18..20].copy_from_slice(&self.peer_port.to_le_bytes());
        out[20..22].copy_from_slice(&self.local_qp.to_le_bytes());
        out[22..24].copy_from_slice(&self.peer_qp.to_le_bytes());
        out[RECORD_FIELDS_SIZE..].copy_from_slice(&self.reserved);
        out
    }

    /// The local address, most-significant byte as the first octet.
    pub fn local_addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.local_ip)
    }

    /// The peer address, most-significant byte as the first octet.
    pub fn peer_addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.peer_ip)
    }
}
