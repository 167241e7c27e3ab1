//! `Content-Range` parsing for exact counts.

/// Total row count from a PostgREST `Content-Range` header.
///
/// The header looks like `0-2/17` for a populated range or `*/0` when no rows
/// are in range. Returns `None` when the total is unknown (`*`) or malformed.
pub fn parse_content_range(header: &str) -> Option<u64> {
    let (_, total) = header.trim().rsplit_once('/')?;
    total.trim().parse().ok()
}
