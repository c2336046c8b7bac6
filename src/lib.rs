//! Messenger Dialogues - split Messenger archive exports into dialogues
//!
//! This library reads the `inbox` directory of a Messenger data export and turns each
//! conversation into dialogues: runs of messages with no silence longer than a configured
//! delay, every line prefixed with a speaker token. It supports:
//!
//! - Repairing the `\u00XX` mojibake escapes the exporter writes for non-ASCII text
//! - Decoding chunk files that contain raw control characters inside strings
//! - Replacing known sticker attachments with short text substitutes
//! - Segmenting conversations by the gap between consecutive messages
//!
//! # Example
//!
//! ```no_run
//! use messenger_dialogues::{DialogueConfig, get_all_dialogues};
//! use std::path::PathBuf;
//!
//! let inbox = PathBuf::from("/home/alice/Downloads/messages/inbox");
//! let dialogues = get_all_dialogues(&inbox, &DialogueConfig::default())?;
//! let messages: usize = dialogues.iter().map(|d| d.len()).sum();
//! println!("{} dialogues, {} messages", dialogues.len(), messages);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod archive;
pub mod cli;
pub mod config;
pub mod extractor;
pub mod models;
pub mod parsers;
pub mod segmenter;
pub mod utils;

// Re-export commonly used types
pub use archive::{DialogueBuilder, get_all_dialogues, get_dialogues};
pub use config::{DialogueConfig, SpeakerTokens};
pub use models::{Dialogue, NormalizedMessage};
pub use parsers::repair_mojibake;
pub use segmenter::segment_dialogues;
