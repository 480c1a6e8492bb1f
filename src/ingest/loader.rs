/// Asynchronous file reader
///
/// Reads the full contents of an accepted file so a blob handle can be
/// bound to them. Runs on the iced runtime's tokio executor; each file
/// is its own task.

use std::fmt;
use std::sync::Arc;

use crate::error::IngestError;
use crate::state::data::RawFile;

/// Bytes of one file, ready to be bound to a handle
#[derive(Clone)]
pub struct DecodedFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Arc<[u8]>,
}

impl fmt::Debug for DecodedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodedFile")
            .field("name", &self.name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Read a file's bytes
///
/// # Returns
/// * `Ok(DecodedFile)` - the file's bytes with its reported name and MIME type
/// * `Err(IngestError::Decode)` - the read failed
pub async fn decode(file: RawFile) -> Result<DecodedFile, IngestError> {
    let bytes = tokio::fs::read(&file.path)
        .await
        .map_err(|e| IngestError::Decode {
            name: file.name.clone(),
            reason: e.to_string(),
        })?;

    tracing::debug!(name = %file.name, len = bytes.len(), "read file");

    Ok(DecodedFile {
        name: file.name,
        mime_type: file.mime_type,
        bytes: Arc::from(bytes),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_decode_reads_bytes() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(b"\x89PNG fake").unwrap();

        let file = RawFile {
            path: tmp.path().to_path_buf(),
            name: "a.png".into(),
            mime_type: "image/png".into(),
        };

        let decoded = decode(file).await.unwrap();
        assert_eq!(&*decoded.bytes, b"\x89PNG fake");
        assert_eq!(decoded.name, "a.png");
        assert_eq!(decoded.mime_type, "image/png");
    }

    #[tokio::test]
    async fn test_decode_missing_file() {
        let file = RawFile {
            path: PathBuf::from("/nonexistent/path/clip.mp4"),
            name: "clip.mp4".into(),
            mime_type: "video/mp4".into(),
        };

        let err = decode(file).await.unwrap_err();
        assert!(matches!(err, IngestError::Decode { ref name, .. } if name == "clip.mp4"));
    }
}
