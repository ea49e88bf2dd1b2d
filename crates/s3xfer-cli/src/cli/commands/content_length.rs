//! `s3xfer content-length` – parse a raw Content-Length value.

use anyhow::Result;
use s3xfer_core::headers::parse_content_length_value;

pub fn run_content_length(value: &str) -> Result<()> {
    let len = parse_content_length_value(value)?;
    println!("{}", len);
    Ok(())
}
