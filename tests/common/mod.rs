//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const ME: &str = "Ofek Gila";
pub const SMILE_STICKER: &str =
    "messages/stickers_used/851586_126361877548609_1351776047_n_126361874215276.png";
pub const HOUR_MS: i64 = 3_600_000;

/// Builder for test inbox directory structures
pub struct InboxBuilder {
    temp_dir: TempDir,
}

impl InboxBuilder {
    /// Create a new builder with an empty inbox directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the inbox directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a conversation directory containing the given chunk files
    pub fn with_conversation(self, name: &str, chunks: &[ChunkBuilder]) -> Self {
        let conversation_dir = self.temp_dir.path().join(name);
        fs::create_dir(&conversation_dir).expect("Failed to create conversation dir");

        for (i, chunk) in chunks.iter().enumerate() {
            chunk.create_in(&conversation_dir, &format!("message_{}.json", i + 1));
        }

        self
    }

    /// Add a raw file inside a conversation directory (created if needed)
    pub fn with_raw_file(self, conversation: &str, filename: &str, content: &[u8]) -> Self {
        let conversation_dir = self.temp_dir.path().join(conversation);
        fs::create_dir_all(&conversation_dir).expect("Failed to create conversation dir");
        fs::write(conversation_dir.join(filename), content).expect("Failed to write raw file");
        self
    }

    /// Add a regular file directly in the inbox
    pub fn with_inbox_file(self, filename: &str, content: &str) -> Self {
        fs::write(self.temp_dir.path().join(filename), content).expect("Failed to write file");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }

    pub fn conversation_path(dir: &TempDir, name: &str) -> PathBuf {
        dir.path().join(name)
    }
}

impl Default for InboxBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one `message_*.json` chunk
pub struct ChunkBuilder {
    participants: Vec<String>,
    messages: Vec<MessageBuilder>,
}

impl ChunkBuilder {
    /// A one-on-one chunk between [`ME`] and `other`
    pub fn between(other: &str) -> Self {
        Self { participants: vec![ME.to_string(), other.to_string()], messages: Vec::new() }
    }

    /// A chunk with an explicit participant list
    pub fn with_participants(names: &[&str]) -> Self {
        Self { participants: names.iter().map(|n| n.to_string()).collect(), messages: Vec::new() }
    }

    pub fn message(mut self, message: MessageBuilder) -> Self {
        self.messages.push(message);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> String {
        let participants = self
            .participants
            .iter()
            .map(|name| format!(r#"{{"name":"{}"}}"#, name))
            .collect::<Vec<_>>()
            .join(",");
        let messages = self.messages.iter().map(|m| m.to_json()).collect::<Vec<_>>().join(",");

        format!(
            r#"{{"participants":[{}],"messages":[{}],"title":"test","is_still_participant":true}}"#,
            participants, messages
        )
    }

    pub fn create_in(&self, dir: &Path, filename: &str) {
        fs::write(dir.join(filename), self.to_json()).expect("Failed to write chunk file");
    }
}

/// Builder for message objects inside a chunk
#[derive(Clone)]
pub struct MessageBuilder {
    sender_name: Option<String>,
    timestamp_ms: Option<i64>,
    content: Option<String>,
    sticker_uri: Option<String>,
    is_unsent: bool,
}

impl MessageBuilder {
    /// A message sent by [`ME`]
    pub fn mine(timestamp_ms: i64, content: &str) -> Self {
        Self::from_sender(ME, timestamp_ms, content)
    }

    pub fn from_sender(sender: &str, timestamp_ms: i64, content: &str) -> Self {
        Self {
            sender_name: Some(sender.to_string()),
            timestamp_ms: Some(timestamp_ms),
            content: Some(content.to_string()),
            sticker_uri: None,
            is_unsent: false,
        }
    }

    /// A sticker-only message (no content field)
    pub fn sticker(sender: &str, timestamp_ms: i64, uri: &str) -> Self {
        Self {
            sender_name: Some(sender.to_string()),
            timestamp_ms: Some(timestamp_ms),
            content: None,
            sticker_uri: Some(uri.to_string()),
            is_unsent: false,
        }
    }

    pub fn unsent(mut self) -> Self {
        self.is_unsent = true;
        self
    }

    pub fn without_timestamp(mut self) -> Self {
        self.timestamp_ms = None;
        self
    }

    /// Convert to JSON string (content is inserted verbatim, escape it yourself)
    pub fn to_json(&self) -> String {
        let mut fields = Vec::new();
        if let Some(sender) = &self.sender_name {
            fields.push(format!(r#""sender_name":"{}""#, sender));
        }
        if let Some(timestamp) = self.timestamp_ms {
            fields.push(format!(r#""timestamp_ms":{}"#, timestamp));
        }
        if let Some(content) = &self.content {
            fields.push(format!(r#""content":"{}""#, content));
        }
        if let Some(uri) = &self.sticker_uri {
            fields.push(format!(r#""sticker":{{"uri":"{}"}}"#, uri));
        }
        fields.push(format!(r#""is_unsent":{}"#, self.is_unsent));

        format!("{{{}}}", fields.join(","))
    }
}

/// Inbox with two one-on-one conversations:
/// `bob_abc` yields `[["<me> hi"], ["<other> bye"]]`,
/// `carol_def` yields `[["<me> a", "<other> b"]]`
pub fn two_conversation_inbox() -> TempDir {
    InboxBuilder::new()
        .with_conversation(
            "bob_abc",
            &[ChunkBuilder::between("Bob")
                .message(MessageBuilder::mine(1_000, "hi"))
                .message(MessageBuilder::from_sender("Bob", 1_000 + 2 * HOUR_MS, "bye"))],
        )
        .with_conversation(
            "carol_def",
            &[ChunkBuilder::between("Carol")
                .message(MessageBuilder::from_sender("Carol", 5_000, "b"))
                .message(MessageBuilder::mine(4_000, "a"))],
        )
        .build()
}
