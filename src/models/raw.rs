use serde::{Deserialize, Deserializer, Serialize};

/// One `message_*.json` chunk of a Messenger export
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawChunk {
    #[serde(default)]
    pub participants: Vec<RawParticipant>,
    #[serde(default)]
    pub messages: Vec<RawMessage>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawParticipant {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawMessage {
    #[serde(default)]
    pub sender_name: Option<String>,
    #[serde(default)]
    pub timestamp_ms: Option<i64>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_unsent: bool,
    #[serde(default)]
    pub sticker: Option<RawSticker>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSticker {
    #[serde(default)]
    pub uri: Option<String>,
}

impl RawMessage {
    pub fn sticker_uri(&self) -> Option<&str> {
        self.sticker.as_ref().and_then(|s| s.uri.as_deref())
    }
}

/// Some exports write `null` for flags that were never set
fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}
