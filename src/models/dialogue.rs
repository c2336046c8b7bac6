use std::collections::HashMap;
use std::ops::Deref;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::SpeakerTokens;

/// A message that survived filtering, keyed by its timestamp in [`MessageMap`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedMessage {
    pub timestamp: i64,
    pub is_self: bool,
    pub text: String,
}

/// Unsorted extractor output: at most one message per timestamp
pub type MessageMap = HashMap<i64, NormalizedMessage>;

/// Consecutive token-prefixed lines with no gap above the configured delay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialogue {
    /// Timestamp of the first message, in milliseconds since the epoch
    pub started_at: i64,
    lines: Vec<String>,
}

impl Dialogue {
    pub fn new(started_at: i64, first_line: String) -> Self {
        Self { started_at, lines: vec![first_line] }
    }

    pub fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn started_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.started_at)
    }

    /// Lines wrapped in the start/end-of-sequence tokens
    pub fn framed(&self, tokens: &SpeakerTokens) -> Vec<String> {
        let mut framed = Vec::with_capacity(self.lines.len() + 2);
        framed.push(tokens.sos.clone());
        framed.extend(self.lines.iter().cloned());
        framed.push(tokens.eos.clone());
        framed
    }
}

impl Deref for Dialogue {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.lines
    }
}

/// Counts reported by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ArchiveSummary {
    pub conversations: usize,
    pub dialogues: usize,
    pub messages: usize,
}

impl ArchiveSummary {
    pub fn from_dialogues(conversations: usize, dialogues: &[Dialogue]) -> Self {
        Self {
            conversations,
            dialogues: dialogues.len(),
            messages: dialogues.iter().map(|d| d.len()).sum(),
        }
    }
}
