//! Splitting a conversation's messages into dialogues
//!
//! Messages are ordered by timestamp and a new dialogue starts whenever the gap to the
//! previous message is strictly greater than the configured delay. A gap exactly equal to
//! the delay keeps both messages in the same dialogue.

use crate::config::SpeakerTokens;
use crate::models::{Dialogue, MessageMap, NormalizedMessage};

/// Group one conversation's messages into chronologically ordered dialogues
///
/// Each line is the speaker token followed by a single space and the message text.
///
/// # Examples
///
/// ```
/// use messenger_dialogues::config::SpeakerTokens;
/// use messenger_dialogues::models::{MessageMap, NormalizedMessage};
/// use messenger_dialogues::segmenter::segment_dialogues;
///
/// let mut messages = MessageMap::new();
/// let sample = [(0, true, "hi"), (1000, false, "hey"), (3_601_000, true, "back")];
/// for (timestamp, is_self, text) in sample {
///     let text = text.to_string();
///     messages.insert(timestamp, NormalizedMessage { timestamp, is_self, text });
/// }
///
/// let dialogues = segment_dialogues(messages, 3_600_000, &SpeakerTokens::default());
/// assert_eq!(dialogues.len(), 1);
/// assert_eq!(dialogues[0].lines(), ["<me> hi", "<other> hey", "<me> back"]);
/// ```
pub fn segment_dialogues(
    messages: MessageMap,
    max_message_delay_ms: i64,
    tokens: &SpeakerTokens,
) -> Vec<Dialogue> {
    let mut sorted: Vec<NormalizedMessage> = messages.into_values().collect();
    // Keys of a MessageMap are unique, so this order is total
    sorted.sort_by_key(|m| m.timestamp);

    let mut dialogues: Vec<Dialogue> = Vec::new();
    let mut last_timestamp: Option<i64> = None;

    for message in sorted {
        let line = format!("{} {}", tokens.for_speaker(message.is_self), message.text);

        let starts_new = match last_timestamp {
            Some(last) => is_new_dialogue(last, message.timestamp, max_message_delay_ms),
            None => true,
        };

        match dialogues.last_mut() {
            Some(current) if !starts_new => current.push(line),
            _ => dialogues.push(Dialogue::new(message.timestamp, line)),
        }

        last_timestamp = Some(message.timestamp);
    }

    dialogues
}

fn is_new_dialogue(last_timestamp: i64, timestamp: i64, max_message_delay_ms: i64) -> bool {
    timestamp.saturating_sub(last_timestamp) > max_message_delay_ms
}
