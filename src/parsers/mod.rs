//! Decoding of Messenger `message_*.json` chunk files
//!
//! # Decoding Pipeline
//!
//! Chunk files go through three byte-level stages before any message is looked at:
//!
//! - **Mojibake repair** ([`repair_mojibake`]): the exporter writes every byte of non-ASCII
//!   UTF-8 text as a separate `\u00XX` escape. Those escapes are turned back into raw bytes
//!   so the original UTF-8 is reconstructed.
//!
//! - **Control character escaping** ([`escape_control_chars`]): raw control bytes inside
//!   string literals (present in real exports, and produced by the repair for `\u000a`)
//!   are re-escaped so that `serde_json` accepts them.
//!
//! - **Typed decoding** ([`parse_chunk_bytes`]): the result is decoded into
//!   [`RawChunk`](crate::models::RawChunk). Only the consumed fields are modelled and
//!   unknown fields are ignored.
//!
//! A chunk that still fails to decode is returned as an error carrying the file path.
//! Whether that aborts the run is decided by the caller.

pub mod chunk;
pub mod lenient;
pub mod repair;

pub use chunk::{parse_chunk_bytes, parse_chunk_file};
pub use lenient::escape_control_chars;
pub use repair::repair_mojibake;
