use rfd::{MessageButtons, MessageDialog, MessageLevel};

use crate::error::{IngestError, UNSUPPORTED_DESCRIPTION, UNSUPPORTED_TITLE};

/// Blocking error dialog for a rejected file
///
/// One dialog per rejected file; the text is fixed regardless of which
/// file triggered it.
pub fn unsupported_file(err: &IngestError) {
    tracing::debug!("Showing rejection dialog for {}", err.file_name());

    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(UNSUPPORTED_TITLE)
        .set_description(UNSUPPORTED_DESCRIPTION)
        .set_buttons(MessageButtons::Ok)
        .show();
}
