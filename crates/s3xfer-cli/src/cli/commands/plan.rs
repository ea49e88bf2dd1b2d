//! `s3xfer plan` – list the parts of an object or byte range.

use anyhow::{bail, Result};
use s3xfer_core::config::XferConfig;
use s3xfer_core::{PartPlan, PartRange};

use super::resolve_part_size;

/// Range to plan: `--size`, else `--start/--end`, else the config `[range]`.
pub(crate) fn resolve_range(
    cfg: &XferConfig,
    size: Option<u64>,
    bounds: Option<(u64, u64)>,
) -> Result<PartRange> {
    if let Some(size) = size {
        if size == 0 {
            bail!("object size must be nonzero");
        }
        return Ok(PartRange::new(0, size - 1));
    }
    match (bounds, cfg.range) {
        (Some((start, end)), _) => Ok(PartRange::new(start, end)),
        (None, Some(r)) => Ok(r.into()),
        (None, None) => bail!("no range given; pass --size or --start/--end, or set [range] in config"),
    }
}

pub(crate) fn print_plan(plan: &PartPlan) {
    println!(
        "  {:>6}  {:>20}  {:>20}  {:>12}  {}",
        "Part", "Start", "End", "Bytes", "Range"
    );
    println!(
        "  {}  {}  {}  {}  {}",
        "------", "--------------------", "--------------------", "------------", "-----"
    );
    for part in plan.parts() {
        println!(
            "  {:>6}  {:>20}  {:>20}  {:>12}  {}",
            part.number,
            part.range.start,
            part.range.end,
            part.range.len(),
            part.range.range_header_value()
        );
    }
}

pub fn run_plan(
    cfg: &XferConfig,
    size: Option<u64>,
    bounds: Option<(u64, u64)>,
    part_size: Option<u64>,
) -> Result<()> {
    let range = resolve_range(cfg, size, bounds)?;
    let part_size = resolve_part_size(part_size, cfg)?;
    let plan = PartPlan::new(range.start, range.end, part_size)?;
    tracing::debug!(
        "planned {} parts for {} with part size {}",
        plan.num_parts(),
        range,
        part_size
    );
    println!(
        "Range {} ({} bytes), part size {}: {} parts",
        range,
        range.len(),
        part_size,
        plan.num_parts()
    );
    print_plan(&plan);
    Ok(())
}
