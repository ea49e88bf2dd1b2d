//! `s3xfer inspect <file>` – size and plan the object behind a header dump.

use anyhow::{Context, Result};
use s3xfer_core::config::XferConfig;
use s3xfer_core::{discover_object_size, HeaderList, SizeSource};

use super::plan::print_plan;
use super::resolve_part_size;

pub async fn run_inspect(
    cfg: &XferConfig,
    path: &str,
    part_size: Option<u64>,
    list: bool,
) -> Result<()> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("read header dump {}", path))?;
    let headers = HeaderList::parse(&text);
    tracing::debug!("read {} headers from {}", headers.len(), path);

    let size = discover_object_size(&headers).with_context(|| format!("size object from {}", path))?;
    let source = match size.source {
        SizeSource::ContentRange => "Content-Range",
        SizeSource::ContentLength => "Content-Length",
    };
    println!("object size: {} bytes (from {})", size.object_size, source);
    match size.served {
        Some(r) => println!("served:      {} ({} bytes)", r, r.len()),
        None => println!("served:      nothing"),
    }
    if size.object_size == 0 {
        println!("empty object, nothing to plan");
        return Ok(());
    }

    let part_size = resolve_part_size(part_size, cfg)?;
    let plan = size.plan(part_size)?;
    println!(
        "part size {}: {} parts{}",
        part_size,
        plan.num_parts(),
        if size.is_complete() {
            " (already complete in this response)"
        } else {
            ""
        }
    );
    if list {
        print_plan(&plan);
    }
    Ok(())
}
