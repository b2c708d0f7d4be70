//! Binary layout and codecs for FPGA routing configuration files.
//!
//! A routing configuration file is a 16-byte [`ConfigHeader`] followed by
//! `total_connections` fixed-size [`ConnectionRecord`]s of 42 bytes each. All
//! multi-byte integers are little-endian.
//!
//! The crate provides two operations over a memory-resident buffer:
//!
//! - [`encode_to_hex`] re-encodes any buffer as 32-bit little-endian words,
//!   one per line, for simulator `$readmemh` loading ([`decode_hex`] is the
//!   inverse);
//! - [`decode_config`] parses the header and records into a
//!   [`RoutingConfig`], failing with a [`FormatError`] when the buffer is too
//!   short for the declared record count.
//!
//! [`render_text`] produces the human-readable inspection report.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod header;
pub mod hex;
pub mod record;
pub mod report;

pub use config::{decode_config, encode_config, RoutingConfig};
pub use error::{FormatError, FormatResult};
pub use header::ConfigHeader;
pub use hex::{decode_hex, encode_to_hex, HexImage};
pub use record::ConnectionRecord;
pub use report::{render_text, ReportOptions};

/// Size of the file header in bytes.
pub const HEADER_SIZE: usize = 16;

/// Size of one connection record in bytes.
pub const RECORD_SIZE: usize = 42;

/// Number of decoded bytes at the start of each record.
pub const RECORD_FIELDS_SIZE: usize = 24;

/// Number of opaque trailing bytes in each record.
pub const RESERVED_SIZE: usize = RECORD_SIZE - RECORD_FIELDS_SIZE;

/// Size of one hex word in bytes.
pub const WORD_SIZE: usize = 4;

/// Reads a little-endian `u32` at `offset`. The caller guarantees the bounds.
pub(crate) fn read_u32_le(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

/// Reads a little-endian `u16` at `offset`. The caller guarantees the bounds.
pub(crate) fn read_u16_le(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}
