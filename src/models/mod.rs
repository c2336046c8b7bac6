//! Data models for Messenger archive exports and the dialogues built from them.
//!
//! - [`RawChunk`] / [`RawMessage`] - the fields of a `message_*.json` chunk that are consumed
//! - [`NormalizedMessage`] / [`MessageMap`] - filtered messages keyed by timestamp
//! - [`Dialogue`] - a gap-bounded run of speaker-prefixed lines
//! - [`ConversationInfo`] - a discovered conversation directory and its chunk files

pub mod conversation;
pub mod dialogue;
pub mod raw;

pub use conversation::ConversationInfo;
pub use dialogue::{ArchiveSummary, Dialogue, MessageMap, NormalizedMessage};
pub use raw::{RawChunk, RawMessage, RawParticipant, RawSticker};
