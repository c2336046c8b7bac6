//! Message extraction for a single conversation
//!
//! Decoded chunks are filtered down to [`NormalizedMessage`](crate::models::NormalizedMessage)
//! records keyed by timestamp:
//!
//! 1. a known sticker attachment replaces the message content with its text substitute
//! 2. messages without content, or flagged `is_unsent`, are dropped
//! 3. the platform "connected" notice is dropped
//! 4. messages missing `timestamp_ms` or `sender_name` are skipped with a warning
//!
//! Chunks listing more participants than the configured maximum contribute nothing.

pub mod attachments;
pub mod messages;

pub use attachments::AttachmentResolver;
pub use messages::MessageExtractor;
