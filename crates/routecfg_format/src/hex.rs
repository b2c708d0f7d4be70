//! Hex-word text encoding for simulator memory loading.
//!
//! The encoding treats the input as an undifferentiated sequence of 32-bit
//! little-endian words and writes one word per line as 8 lowercase hex
//! digits, the form `$readmemh` expects. It knows nothing about the header
//! or record layout.
//!
//! ```text
//! 04030201
//! 00000605
//! ```

use std::io::Write;

use rayon::prelude::*;

use crate::error::{FormatError, FormatResult};
use crate::WORD_SIZE;

/// The word sequence produced by [`encode_to_hex`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexImage {
    /// Words in file order.
    pub words: Vec<u32>,
    /// Zero bytes appended to reach word alignment. Non-zero means the input
    /// length was not a multiple of 4, which callers should report as a
    /// warning.
    pub padding: usize,
}

impl HexImage {
    /// Returns true if the input had to be padded.
    pub fn was_padded(&self) -> bool {
        self.padding != 0
    }

    /// Number of padded input bytes, i.e. `words.len() * 4`.
    pub fn padded_len(&self) -> usize {
        self.words.len() * WORD_SIZE
    }

    /// Formats each word as an 8-digit lowercase hex line, without newline.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.words.iter().map(|word| format!("{word:08x}"))
    }

    /// Writes every word as a newline-terminated line to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Io`] if the sink fails.
    pub fn write_to<W: Write>(&self, mut out: W) -> FormatResult<()> {
        for word in &self.words {
            writeln!(out, "{word:08x}")?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Encodes `bytes` as 32-bit little-endian words.
///
/// A trailing partial word is completed with zero bytes and the count is
/// reported in [`HexImage::padding`]. The output always has
/// `ceil(bytes.len() / 4)` words.
pub fn encode_to_hex(bytes: &[u8]) -> HexImage {
    let tail_len = bytes.len() % WORD_SIZE;
    let (body, tail) = bytes.split_at(bytes.len() - tail_len);

    let mut words: Vec<u32> = body
        .par_chunks_exact(WORD_SIZE)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect();

    let padding = if tail.is_empty() {
        0
    } else {
        let mut last = [0u8; WORD_SIZE];
        last[..tail.len()].copy_from_slice(tail);
        words.push(u32::from_le_bytes(last));
        WORD_SIZE - tail.len()
    };

    HexImage { words, padding }
}

/// Decodes hex-word text back into bytes, 4 little-endian bytes per word.
///
/// Surrounding whitespace is trimmed. Blank lines and `//` comment lines are
/// skipped.
///
/// # Errors
///
/// Returns [`FormatError::InvalidHexLine`] for any other line that is not
/// 1 to 8 hex digits.
pub fn decode_hex(text: &str) -> FormatResult<Vec<u8>> {
    let mut data = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }

        let invalid = || FormatError::InvalidHexLine {
            line: line_no + 1,
            text: line.to_string(),
        };

        if line.len() > 8 || !line.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let word = u32::from_str_radix(line, 16).map_err(|_| invalid())?;
        data.extend_from_slice(&word.to_le_bytes());
    }

    Ok(data)
}
