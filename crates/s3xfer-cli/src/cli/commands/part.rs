//! `s3xfer part` – show one part of a byte range.

use anyhow::Result;
use s3xfer_core::config::XferConfig;
use s3xfer_core::get_part_range;

use super::resolve_part_size;

pub fn run_part(
    cfg: &XferConfig,
    start: u64,
    end: u64,
    number: u32,
    part_size: Option<u64>,
) -> Result<()> {
    let part_size = resolve_part_size(part_size, cfg)?;
    let range = get_part_range(start, end, part_size, number)?;
    println!(
        "part {}: {} ({} bytes)  Range: {}",
        number,
        range,
        range.len(),
        range.range_header_value()
    );
    Ok(())
}
