/// Native multi-file picker
///
/// Turns the paths chosen in the dialog into `RawFile`s. The MIME type is
/// reported from the extension alone, the way a browser's file input does;
/// nothing is read from disk here.

use rfd::FileDialog;
use std::path::{Path, PathBuf};

use crate::state::data::RawFile;

/// Show the native picker; `None` when the user cancels
pub fn pick_files() -> Option<Vec<RawFile>> {
    let paths = FileDialog::new()
        .set_title("Select Files to Preview")
        .pick_files()?;

    Some(paths.into_iter().map(RawFile::from_path).collect())
}

impl RawFile {
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let mime_type = mime_for_path(&path).to_string();

        RawFile {
            path,
            name,
            mime_type,
        }
    }
}

/// Reported MIME type for a path, empty when the extension is unknown
pub fn mime_for_path(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return "";
    };

    match ext.to_lowercase().as_str() {
        // Images
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "ico" => "image/x-icon",
        "tif" | "tiff" => "image/tiff",
        "avif" => "image/avif",
        "svg" => "image/svg+xml",
        // Video
        "mp4" | "m4v" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "mkv" => "video/x-matroska",
        "avi" => "video/x-msvideo",
        // Audio
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" | "oga" => "audio/ogg",
        "flac" => "audio/flac",
        "m4a" => "audio/mp4",
        "aac" => "audio/aac",
        // Everything else we know about
        "pdf" => "application/pdf",
        "json" => "application/json",
        "zip" => "application/zip",
        "txt" => "text/plain",
        "html" | "htm" => "text/html",
        "csv" => "text/csv",
        _ => "",
    }
}
