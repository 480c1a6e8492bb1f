/// Shared data structures for the application state
/// 
/// These structs represent the data model that flows between
/// the ingestion layer and the UI layer.

use std::path::PathBuf;

/// A file as handed over by the file picker, before any bytes are read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFile {
    /// Full path on disk
    pub path: PathBuf,
    /// Filename only (e.g., "clip.mp4")
    pub name: String,
    /// MIME type reported by the picker, empty when unknown
    pub mime_type: String,
}

/// One successfully ingested file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// `blob:` handle resolving to the file's bytes
    pub url: String,
    /// MIME type as reported at selection time (never validated)
    pub mime_type: String,
    /// Display name, not guaranteed unique
    pub name: String,
}

/// Copy of the record currently shown in the preview modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedPreview {
    pub url: String,
    pub mime_type: String,
    pub name: String,
}

impl From<&FileRecord> for SelectedPreview {
    fn from(record: &FileRecord) -> Self {
        Self {
            url: record.url.clone(),
            mime_type: record.mime_type.clone(),
            name: record.name.clone(),
        }
    }
}
