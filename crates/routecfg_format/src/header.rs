//! The 16-byte file header.

use serde::{Deserialize, Serialize};

use crate::error::{FormatError, FormatResult};
use crate::{read_u32_le, HEADER_SIZE};

/// The fixed header at the start of every routing configuration file.
///
/// | offset | field |
/// |---|---|
/// | 0 | `magic` |
/// | 4 | `version` |
/// | 8 | `total_connections` |
/// | 12 | `timestamp` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigHeader {
    /// Format signature.
    pub magic: u32,
    /// Format version.
    pub version: u32,
    /// Number of connection records that follow the header.
    pub total_connections: u32,
    /// Generation time, seconds since the Unix epoch.
    pub timestamp: u32,
}

impl ConfigHeader {
    /// Decodes a header from exactly [`HEADER_SIZE`] bytes.
    pub fn from_bytes(bytes: &[u8; HEADER_SIZE]) -> Self {
        Self {
            magic: read_u32_le(bytes, 0),
            version: read_u32_le(bytes, 4),
            total_connections: read_u32_le(bytes, 8),
            timestamp: read_u32_le(bytes, 12),
        }
    }

    /// Decodes the header from the start of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::TruncatedHeader`] if `bytes` is shorter than
    /// [`HEADER_SIZE`].
    pub fn parse(bytes: &[u8]) -> FormatResult<Self> {
        let head: &[u8; HEADER_SIZE] = bytes
            .get(..HEADER_SIZE)
            .and_then(|s| s.try_into().ok())
            .ok_or(FormatError::TruncatedHeader {
                actual: bytes.len(),
            })?;
        Ok(Self::from_bytes(head))
    }

    /// Encodes the header into its on-disk form.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        out[0..4].copy_from_slice(&self.magic.to_le_bytes());
        out[4..8].copy_from_slice(&self.version.to_le_bytes());
        out[8..12].copy_from_slice(&self.total_connections.to_le_bytes());
        out[12..16].copy_from_slice(&self.timestamp.to_le_bytes());
        out
    }

    /// Renders the magic value as four characters, most-significant byte first.
    ///
    /// Bytes outside printable ASCII are shown as `.`.
    pub fn magic_chars(&self) -> String {
        self.magic
            .to_be_bytes()
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '.'
                }
            })
            .collect()
    }
}
