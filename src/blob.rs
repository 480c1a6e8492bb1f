/// In-memory blob store backing the `blob:` handles shown in the table
///
/// Every successfully decoded file gets one handle. Handles are never
/// revoked: they stay resolvable for the whole session.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// URL scheme prefix for minted handles
pub const BLOB_SCHEME: &str = "blob:file-previewer/";

/// Bytes bound to a handle, plus the MIME type they were registered with
#[derive(Clone)]
pub struct Blob {
    pub bytes: Arc<[u8]>,
    pub mime_type: String,
}

impl Blob {
    /// Size of the content in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }
}

impl fmt::Debug for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blob")
            .field("len", &self.bytes.len())
            .field("mime_type", &self.mime_type)
            .finish()
    }
}

/// Session-scoped registry of handles
#[derive(Debug, Default)]
pub struct BlobStore {
    blobs: HashMap<String, Blob>,
}

impl BlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `bytes` to a fresh handle and return its URL
    pub fn create(&mut self, bytes: Arc<[u8]>, mime_type: &str) -> String {
        let url = format!("{}{}", BLOB_SCHEME, Uuid::new_v4());
        tracing::debug!(%url, len = bytes.len(), mime_type, "minted blob handle");

        self.blobs.insert(
            url.clone(),
            Blob {
                bytes,
                mime_type: mime_type.to_string(),
            },
        );
        url
    }

    /// Dereference a handle
    pub fn resolve(&self, url: &str) -> Option<&Blob> {
        self.blobs.get(url)
    }

    /// Number of live handles
    pub fn len(&self) -> usize {
        self.blobs.len()
    }
}
