//! CLI command handlers, one per file.

mod content_length;
mod content_range;
mod inspect;
mod part;
pub(crate) mod plan;

pub use content_length::run_content_length;
pub use content_range::run_content_range;
pub use inspect::run_inspect;
pub use part::run_part;
pub use plan::run_plan;

use anyhow::{bail, Result};
use s3xfer_core::config::XferConfig;

/// Part size from the command line, else from config. Must not exceed the configured maximum.
pub(crate) fn resolve_part_size(arg: Option<u64>, cfg: &XferConfig) -> Result<u64> {
    let part_size = arg.unwrap_or(cfg.part_size);
    if part_size > cfg.max_part_size {
        bail!(
            "part size {} exceeds max_part_size {}",
            part_size,
            cfg.max_part_size
        );
    }
    Ok(part_size)
}
