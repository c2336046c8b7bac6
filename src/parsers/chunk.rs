use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::RawChunk;
use crate::parsers::{escape_control_chars, repair_mojibake};

/// Decode the raw bytes of a chunk file
///
/// Applies the mojibake repair, escapes raw control characters inside strings and then
/// decodes the result as a [`RawChunk`].
///
/// # Errors
///
/// Returns an error if the repaired bytes are still not valid JSON for a chunk.
pub fn parse_chunk_bytes(bytes: &[u8]) -> Result<RawChunk> {
    let repaired = repair_mojibake(bytes);
    let escaped = escape_control_chars(&repaired);

    serde_json::from_slice(&escaped).context("Failed to decode chunk JSON")
}

/// Read and decode a `message_*.json` chunk file
pub fn parse_chunk_file(path: &Path) -> Result<RawChunk> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to open chunk file: {}", path.display()))?;

    parse_chunk_bytes(&bytes).with_context(|| format!("Malformed chunk file: {}", path.display()))
}
