//! `routecfg hex` and `routecfg unhex` — binary to `$readmemh` text and back.

use std::fs::File;
use std::io::BufWriter;

use routecfg_format::{decode_hex, encode_to_hex, WORD_SIZE};
use tracing::{info, warn};

use crate::files::{read_input, write_output};
use crate::{ConvertArgs, GlobalArgs};

/// Runs the `routecfg hex` command.
///
/// Reads the whole input, pads it to a word boundary if needed (with a
/// warning), and writes one 8-digit hex word per line.
pub fn run_hex(
    args: &ConvertArgs,
    _global: &GlobalArgs,
) -> Result<i32, Box<dyn std::error::Error>> {
    let data = read_input(&args.input)?;
    let image = encode_to_hex(&data);

    if image.was_padded() {
        warn!(
            "input size {} is not a multiple of {WORD_SIZE}, padded with {} zero byte(s)",
            data.len(),
            image.padding
        );
    }

    info!("input: {}", args.input);
    info!(
        "size: {} bytes ({} words)",
        image.padded_len(),
        image.words.len()
    );

    let file = File::create(&args.output)
        .map_err(|e| format!("cannot write {}: {e}", args.output))?;
    image.write_to(BufWriter::new(file))?;

    info!("output: {}", args.output);
    Ok(0)
}

/// Runs the `routecfg unhex` command.
pub fn run_unhex(
    args: &ConvertArgs,
    _global: &GlobalArgs,
) -> Result<i32, Box<dyn std::error::Error>> {
    let raw = read_input(&args.input)?;
    let text = String::from_utf8(raw).map_err(|e| format!("{}: {e}", args.input))?;
    let data = decode_hex(&text).map_err(|e| format!("{}: {e}", args.input))?;

    write_output(&args.output, &data)?;

    info!(
        "wrote {} bytes ({} words) to {}",
        data.len(),
        data.len() / WORD_SIZE,
        args.output
    );
    Ok(0)
}
