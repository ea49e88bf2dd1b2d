//! Header names, method names and transfer constants shared by the client.
//!
//! Header names are written in their canonical casing; lookups through
//! [`HeaderLookup`](super::HeaderLookup) ignore case.

pub const CONTENT_MD5: &str = "Content-MD5";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_LENGTH: &str = "Content-Length";
pub const CONTENT_RANGE: &str = "Content-Range";
pub const ACCEPT_RANGES: &str = "Accept-Ranges";
pub const RANGE: &str = "Range";
pub const ETAG: &str = "ETag";
pub const HOST: &str = "Host";
pub const USER_AGENT: &str = "User-Agent";
pub const ACL: &str = "x-amz-acl";

pub const POST_METHOD: &str = "POST";
pub const HEAD_METHOD: &str = "HEAD";
pub const DELETE_METHOD: &str = "DELETE";

/// Range unit used by `Range` / `Content-Range`.
pub const BYTES_UNIT: &str = "bytes";

const MIB: u64 = 1024 * 1024;

/// Part size used when none is configured.
pub const DEFAULT_PART_SIZE: u64 = 8 * MIB;

/// Largest part size accepted by the service.
pub const DEFAULT_MAX_PART_SIZE: u64 = 5_000_000_000_000;

/// Smallest part an upload may use (except the last part).
pub const MIN_UPLOAD_PART_SIZE: u64 = 5 * MIB;

/// Most parts a single multipart upload may have.
pub const MAX_UPLOAD_PARTS: u32 = 10_000;
