/// Suffix-based rejection rule applied before any bytes are read
///
/// Only the file name is inspected; the reported MIME type plays no part.

use crate::error::IngestError;
use crate::state::data::RawFile;

/// Files whose names end with this suffix are rejected
pub const REJECTED_SUFFIX: &str = ".jpg";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuffixFilter {
    case_insensitive: bool,
}

impl SuffixFilter {
    pub fn new(case_insensitive: bool) -> Self {
        Self { case_insensitive }
    }

    /// Check a single file
    pub fn check(&self, file: &RawFile) -> Result<(), IngestError> {
        if self.is_rejected(&file.name) {
            return Err(IngestError::UnsupportedFileType {
                name: file.name.clone(),
            });
        }
        Ok(())
    }

    fn is_rejected(&self, name: &str) -> bool {
        if self.case_insensitive {
            name.to_lowercase().ends_with(REJECTED_SUFFIX)
        } else {
            name.ends_with(REJECTED_SUFFIX)
        }
    }
}
