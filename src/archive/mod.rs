//! Inbox traversal: conversation discovery and dialogue building
//!
//! An inbox holds one directory per conversation, each with one or more `message_*.json`
//! chunk files. [`discover_conversations`] lists them and [`DialogueBuilder`] runs extraction
//! and segmentation per conversation, concatenating the results. Conversations are processed
//! independently and their intermediate message maps are dropped once segmented.

pub mod builder;
pub mod discovery;

pub use builder::{DialogueBuilder, get_all_dialogues, get_dialogues};
pub use discovery::{discover_conversations, is_chunk_file_name, read_conversation};
