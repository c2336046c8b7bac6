use std::path::Path;

use anyhow::Result;

use crate::archive::discovery::read_conversation;
use crate::config::DialogueConfig;
use crate::extractor::AttachmentResolver;
use crate::models::{ConversationInfo, MessageMap, NormalizedMessage, RawChunk, RawMessage};
use crate::parsers::parse_chunk_file;

/// Turns the chunk files of one conversation into a [`MessageMap`]
pub struct MessageExtractor<'a> {
    config: &'a DialogueConfig,
    resolver: AttachmentResolver,
}

impl<'a> MessageExtractor<'a> {
    pub fn new(config: &'a DialogueConfig) -> Self {
        Self { config, resolver: AttachmentResolver::new(config.sticker_map.clone()) }
    }

    /// Extract the messages of every chunk file of a conversation
    ///
    /// Messages are keyed by `timestamp_ms`. When two messages share a timestamp the one
    /// processed last replaces the earlier one. Chunk files are processed in the order they
    /// are listed in `conversation.chunk_files`.
    ///
    /// # Errors
    ///
    /// Returns an error if a chunk file cannot be read, or cannot be decoded while
    /// `skip_malformed_files` is off.
    pub fn extract_conversation(&self, conversation: &ConversationInfo) -> Result<MessageMap> {
        let mut messages = MessageMap::new();

        for path in &conversation.chunk_files {
            let chunk = match parse_chunk_file(path) {
                Ok(chunk) => chunk,
                Err(e) if self.config.skip_malformed_files => {
                    log::warn!("Skipping chunk file {}: {:#}", path.display(), e);
                    continue;
                }
                Err(e) => return Err(e),
            };

            // Participant metadata is duplicated per chunk, so the limit is checked per chunk
            if chunk.participants.len() > self.config.max_participants {
                log::debug!(
                    "Skipping chunk file {}: {} participants (max {})",
                    path.display(),
                    chunk.participants.len(),
                    self.config.max_participants
                );
                continue;
            }

            let added = self.extract_chunk(chunk, &mut messages);
            log::debug!("Extracted {} messages from {}", added, path.display());
        }

        Ok(messages)
    }

    /// Extract the messages of the conversation stored in `directory`
    pub fn extract_directory(&self, directory: &Path) -> Result<MessageMap> {
        let conversation = read_conversation(directory)?;
        self.extract_conversation(&conversation)
    }

    /// Insert the usable messages of one decoded chunk, returning how many were inserted
    ///
    /// The participant limit is not applied here; see [`Self::extract_conversation`].
    pub fn extract_chunk(&self, chunk: RawChunk, messages: &mut MessageMap) -> usize {
        let mut added = 0;

        for message in chunk.messages {
            if let Some(normalized) = self.normalize(message) {
                messages.insert(normalized.timestamp, normalized);
                added += 1;
            }
        }

        added
    }

    /// Apply the substitution and filtering rules to a single message
    ///
    /// Returns `None` for unsent messages, messages without text, the platform notice, and
    /// messages missing `timestamp_ms` or `sender_name` (logged as a warning).
    pub fn normalize(&self, message: RawMessage) -> Option<NormalizedMessage> {
        let substitute = message.sticker_uri().and_then(|uri| self.resolver.resolve(uri));
        let text = match substitute {
            Some(text) => text.to_string(),
            None => message.content?,
        };

        if message.is_unsent || text.is_empty() || text == self.config.connected_notice {
            return None;
        }

        let (Some(timestamp), Some(sender_name)) = (message.timestamp_ms, message.sender_name)
        else {
            log::warn!("Skipping message without timestamp_ms or sender_name: {:?}", text);
            return None;
        };

        Some(NormalizedMessage { timestamp, is_self: sender_name == self.config.self_name, text })
    }
}
