//! `s3xfer content-range` – parse a raw Content-Range value.

use anyhow::Result;
use s3xfer_core::headers::parse_content_range_value;

pub fn run_content_range(value: &str) -> Result<()> {
    let cr = parse_content_range_value(value)?;
    println!("range_start: {}", cr.range_start);
    println!("range_end:   {}", cr.range_end);
    println!("object_size: {}", cr.object_size);
    println!("length:      {}", cr.len());
    Ok(())
}
