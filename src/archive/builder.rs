//! Dialogue building across a whole Messenger inbox.
//!
//! # Error Handling Strategy
//!
//! - **Malformed chunk files**: abort the run by default. With `skip_malformed_files` the file
//!   is logged at warn level and the rest of the conversation is still used.
//! - **Malformed messages**: messages missing `timestamp_ms` or `sender_name` are skipped with
//!   a warning and never fail the run.
//! - **Empty conversations**: a conversation whose messages are all filtered out contributes
//!   no dialogues and is not an error.
//! - **Summary reporting**: an info-level line reports conversation, dialogue and message counts.

use std::path::Path;

use anyhow::{Context, Result};

use crate::archive::discovery::{discover_conversations, read_conversation};
use crate::config::DialogueConfig;
use crate::extractor::MessageExtractor;
use crate::models::{ArchiveSummary, ConversationInfo, Dialogue};
use crate::segmenter::segment_dialogues;

/// Runs extraction and segmentation with one configuration
pub struct DialogueBuilder<'a> {
    config: &'a DialogueConfig,
    extractor: MessageExtractor<'a>,
}

impl<'a> DialogueBuilder<'a> {
    pub fn new(config: &'a DialogueConfig) -> Self {
        Self { config, extractor: MessageExtractor::new(config) }
    }

    /// Dialogues of one discovered conversation, in chronological order
    pub fn build_conversation(&self, conversation: &ConversationInfo) -> Result<Vec<Dialogue>> {
        let messages = self.extractor.extract_conversation(conversation).with_context(|| {
            format!("Failed to extract conversation: {}", conversation.name)
        })?;

        let dialogues = segment_dialogues(
            messages,
            self.config.max_message_delay_ms,
            &self.config.tokens,
        );
        log::debug!("{}: {} dialogues", conversation.name, dialogues.len());

        Ok(dialogues)
    }

    /// Dialogues of the conversation stored in `directory`
    pub fn dialogues_for_directory(&self, directory: &Path) -> Result<Vec<Dialogue>> {
        let conversation = read_conversation(directory)?;
        self.build_conversation(&conversation)
    }

    /// Dialogues of every conversation in the inbox, concatenated
    ///
    /// Each conversation's dialogues keep their chronological order. Conversations follow
    /// directory iteration order and are not interleaved.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use messenger_dialogues::DialogueConfig;
    /// use messenger_dialogues::archive::DialogueBuilder;
    ///
    /// let config = DialogueConfig::default();
    /// let (dialogues, summary) = DialogueBuilder::new(&config).build_all(Path::new("inbox"))?;
    /// println!("{} dialogues, {} messages", summary.dialogues, summary.messages);
    /// # let _ = dialogues;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn build_all(&self, inbox: &Path) -> Result<(Vec<Dialogue>, ArchiveSummary)> {
        let conversations = discover_conversations(inbox)?;
        let mut dialogues = Vec::new();

        for conversation in &conversations {
            dialogues.extend(self.build_conversation(conversation)?);
        }

        let summary = ArchiveSummary::from_dialogues(conversations.len(), &dialogues);
        log::info!(
            "Built {} dialogues ({} messages) from {} conversations",
            summary.dialogues,
            summary.messages,
            summary.conversations
        );

        Ok((dialogues, summary))
    }
}

/// Dialogues of a single conversation directory
pub fn get_dialogues(directory: &Path, config: &DialogueConfig) -> Result<Vec<Dialogue>> {
    DialogueBuilder::new(config).dialogues_for_directory(directory)
}

/// Dialogues of every conversation in an inbox
pub fn get_all_dialogues(inbox: &Path, config: &DialogueConfig) -> Result<Vec<Dialogue>> {
    let (dialogues, _) = DialogueBuilder::new(config).build_all(inbox)?;
    Ok(dialogues)
}
