use std::path::PathBuf;

/// A conversation directory found in the inbox
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationInfo {
    pub name: String,
    pub directory: PathBuf,
    pub chunk_files: Vec<PathBuf>,
}
