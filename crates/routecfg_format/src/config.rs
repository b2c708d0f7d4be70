//! Whole-file decoding and encoding of routing configurations.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FormatError, FormatResult};
use crate::header::ConfigHeader;
use crate::record::ConnectionRecord;
use crate::{HEADER_SIZE, RECORD_SIZE};

/// A decoded routing configuration: the header and its records in file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// The file header.
    pub header: ConfigHeader,
    /// Connection records, index `i` taken from offset `16 + i * 42`.
    pub records: Vec<ConnectionRecord>,
}

impl RoutingConfig {
    /// Minimum buffer length for a header declaring `count` records.
    pub fn required_len(count: u32) -> u64 {
        HEADER_SIZE as u64 + RECORD_SIZE as u64 * u64::from(count)
    }
}

/// Decodes a routing configuration from a memory-resident buffer.
///
/// Reads the header, then exactly `total_connections` records starting at
/// offset 16. Bytes after the last declared record are ignored.
///
/// # Errors
///
/// Returns [`FormatError::TruncatedHeader`] if the buffer cannot hold the
/// header, or [`FormatError::TruncatedRecords`] if it cannot hold every
/// record the header declares.
pub fn decode_config(bytes: &[u8]) -> FormatResult<RoutingConfig> {
    let header = ConfigHeader::parse(bytes)?;
    let declared = header.total_connections;
    let required = RoutingConfig::required_len(declared);

    let truncated = || FormatError::TruncatedRecords {
        declared,
        required,
        actual: bytes.len(),
    };

    let end = usize::try_from(required).map_err(|_| truncated())?;
    let body = bytes.get(HEADER_SIZE..end).ok_or_else(truncated)?;

    let records = body
        .chunks_exact(RECORD_SIZE)
        .map(|chunk| {
            chunk
                .try_into()
                .map(ConnectionRecord::from_bytes)
                .map_err(|_| truncated())
        })
        .collect::<FormatResult<Vec<_>>>()?;

    debug!(
        magic = %format!("{:#010x}", header.magic),
        version = header.version,
        records = records.len(),
        trailing = bytes.len() - end,
        "decoded routing configuration"
    );

    Ok(RoutingConfig { header, records })
}

/// Encodes a routing configuration into the on-disk layout.
///
/// `header.total_connections` is written as stored; it is not recomputed
/// from `records`.
pub fn encode_config(config: &RoutingConfig) -> Vec<u8> {
    let mut data = Vec::with_capacity(HEADER_SIZE + config.records.len() * RECORD_SIZE);
    data.extend_from_slice(&config.header.to_bytes());
    for record in &config.records {
        data.extend_from_slice(&record.to_bytes());
    }
    data
}
