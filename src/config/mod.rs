//! Configuration for dialogue extraction.
//!
//! Every constant the pipeline consults lives in [`DialogueConfig`]: the self identity,
//! the platform notice to drop, the sticker substitution table, the participant limit,
//! the dialogue gap threshold and the speaker tokens. Values can be loaded from a TOML
//! file; fields missing from the file keep their defaults.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const MILLISECONDS: i64 = 1;
pub const SECONDS: i64 = MILLISECONDS * 1000;
pub const MINUTES: i64 = SECONDS * 60;
pub const HOURS: i64 = MINUTES * 60;
pub const DAYS: i64 = HOURS * 24;

pub const DEFAULT_SELF_NAME: &str = "Ofek Gila";
pub const DEFAULT_CONNECTED_NOTICE: &str = "You are now connected on Messenger";
pub const DEFAULT_MAX_PARTICIPANTS: usize = 2;
pub const DEFAULT_MAX_MESSAGE_DELAY_MS: i64 = HOURS;

const CONFIG_DIR_NAME: &str = "messenger-dialogues";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Sticker URIs from Messenger exports and the text each one stands for
const DEFAULT_STICKERS: [(&str, &str); 10] = [
    (
        "messages/stickers_used/39178562_1505197616293642_5411344281094848512_n_369239263222822.png",
        "👍",
    ),
    ("messages/stickers_used/851587_369239346556147_162929011_n_369239343222814.png", "👍"),
    ("messages/stickers_used/851582_369239386556143_1497813874_n_369239383222810.png", "👍"),
    ("messages/stickers_used/851577_246547505491999_862435009_n_227878347358915.png", "👍"),
    ("messages/stickers_used/851586_126361877548609_1351776047_n_126361874215276.png", "🙂"),
    ("messages/stickers_used/851575_126361970881933_2050936102_n_126361967548600.png", "😄"),
    (
        "messages/stickers_used/69979540_1554334978031524_4210588200999059456_n_526120230853009.png",
        "LGTM",
    ),
    (
        "messages/stickers_used/69999026_1554333024698386_411738139342667776_n_526120200853012.png",
        "HOTFIX",
    ),
    ("messages/stickers_used/851586_126362104215253_1651254063_n_126362100881920.png", "<3"),
    ("messages/stickers_used/10173489_298592853654247_1888832205_n_298592850320914.png", "YAY!"),
];

/// Settings shared by the extractor, segmenter and archive walker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogueConfig {
    /// Sender name treated as "me"
    pub self_name: String,

    /// Platform-generated line that is never real conversation
    pub connected_notice: String,

    /// Sticker URI to substitute text
    pub sticker_map: HashMap<String, String>,

    /// Chunks listing more participants than this are skipped
    pub max_participants: usize,

    /// Largest gap between two messages of the same dialogue
    pub max_message_delay_ms: i64,

    pub tokens: SpeakerTokens,

    /// Log and skip chunk files that fail to decode instead of aborting the run
    pub skip_malformed_files: bool,
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            self_name: DEFAULT_SELF_NAME.to_string(),
            connected_notice: DEFAULT_CONNECTED_NOTICE.to_string(),
            sticker_map: default_sticker_map(),
            max_participants: DEFAULT_MAX_PARTICIPANTS,
            max_message_delay_ms: DEFAULT_MAX_MESSAGE_DELAY_MS,
            tokens: SpeakerTokens::default(),
            skip_malformed_files: false,
        }
    }
}

impl DialogueConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML for this struct.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: DialogueConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load from an explicit path, else from the user config directory, else defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match Self::default_config_path() {
            Some(path) if path.exists() => {
                log::debug!("Loading config from {}", path.display());
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// `<config_dir>/messenger-dialogues/config.toml`, if the platform has a config dir
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }
}

/// Prefixes marking who sent a line, plus sequence delimiters reserved for consumers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeakerTokens {
    pub me: String,
    pub other: String,
    pub sos: String,
    pub eos: String,
}

impl Default for SpeakerTokens {
    fn default() -> Self {
        Self {
            me: "<me>".to_string(),
            other: "<other>".to_string(),
            sos: "<sos>".to_string(),
            eos: "<eos>".to_string(),
        }
    }
}

impl SpeakerTokens {
    pub fn for_speaker(&self, is_self: bool) -> &str {
        if is_self { &self.me } else { &self.other }
    }
}

pub fn default_sticker_map() -> HashMap<String, String> {
    DEFAULT_STICKERS.iter().map(|(uri, text)| (uri.to_string(), text.to_string())).collect()
}
