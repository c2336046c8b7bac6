use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use walkdir::WalkDir;

use crate::models::ConversationInfo;

const CHUNK_FILE_PREFIX: &str = "message_";
const CHUNK_FILE_SUFFIX: &str = ".json";

/// Whether a file name matches the `message_*.json` chunk pattern
pub fn is_chunk_file_name(name: &str) -> bool {
    name.len() >= CHUNK_FILE_PREFIX.len() + CHUNK_FILE_SUFFIX.len()
        && name.starts_with(CHUNK_FILE_PREFIX)
        && name.ends_with(CHUNK_FILE_SUFFIX)
}

/// Discover every conversation directory in a Messenger inbox
///
/// Each direct subdirectory of `inbox` is one conversation. Symlinks are followed when
/// they resolve to a directory; regular files and dangling links are ignored.
/// Conversations are returned in directory iteration order.
///
/// # Errors
///
/// Returns an error if `inbox` is not a directory or an entry cannot be read.
pub fn discover_conversations(inbox: &Path) -> Result<Vec<ConversationInfo>> {
    if !inbox.is_dir() {
        bail!("Inbox directory not found: {}", inbox.display());
    }

    let mut conversations = Vec::new();

    for entry in WalkDir::new(inbox).min_depth(1).max_depth(1) {
        let entry = entry
            .with_context(|| format!("Failed to read inbox directory: {}", inbox.display()))?;

        // `Path::is_dir` resolves links and is false for a dangling one
        if !entry.path().is_dir() {
            continue;
        }

        conversations.push(read_conversation(entry.path())?);
    }

    Ok(conversations)
}

/// Describe the conversation stored in `directory`
///
/// Chunk files are sorted by file name so repeated runs see them in the same order.
pub fn read_conversation(directory: &Path) -> Result<ConversationInfo> {
    let name = directory
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(ConversationInfo {
        name,
        directory: directory.to_path_buf(),
        chunk_files: find_chunk_files(directory)?,
    })
}

fn find_chunk_files(directory: &Path) -> Result<Vec<PathBuf>> {
    let mut chunk_files = Vec::new();

    for entry in WalkDir::new(directory).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.with_context(|| {
            format!("Failed to read conversation directory: {}", directory.display())
        })?;

        if entry.path().is_file() && is_chunk_file_name(&entry.file_name().to_string_lossy()) {
            chunk_files.push(entry.into_path());
        }
    }

    Ok(chunk_files)
}
