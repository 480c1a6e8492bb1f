/// Open/closed state of the preview modal
///
/// Closed → Open on `select`; Open → Open on `select` (selection replaced);
/// any state → Closed on `close`.

use super::data::{FileRecord, SelectedPreview};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PreviewState {
    #[default]
    Closed,
    Open(SelectedPreview),
}

impl PreviewState {
    /// Show `record` in the modal, replacing any current selection
    pub fn select(&mut self, record: &FileRecord) {
        *self = PreviewState::Open(SelectedPreview::from(record));
    }

    /// Dismiss the modal
    pub fn close(&mut self) {
        *self = PreviewState::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, PreviewState::Open(_))
    }

    /// The selected record, if the modal is open
    pub fn selected(&self) -> Option<&SelectedPreview> {
        match self {
            PreviewState::Open(selected) => Some(selected),
            PreviewState::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, mime_type: &str) -> FileRecord {
        FileRecord {
            url: format!("blob:test/{}", name),
            mime_type: mime_type.into(),
            name: name.into(),
        }
    }

    #[test]
    fn test_initially_closed() {
        let state = PreviewState::default();
        assert!(!state.is_open());
        assert!(state.selected().is_none());
    }

    #[test]
    fn test_select_opens_with_record() {
        let mut state = PreviewState::default();
        let a = record("a.png", "image/png");

        state.select(&a);

        assert!(state.is_open());
        let selected = state.selected().unwrap();
        assert_eq!(selected.url, a.url);
        assert_eq!(selected.mime_type, "image/png");
    }

    #[test]
    fn test_select_while_open_replaces() {
        let mut state = PreviewState::default();
        state.select(&record("a.png", "image/png"));
        state.select(&record("c.mp4", "video/mp4"));

        assert!(state.is_open());
        assert_eq!(state.selected().unwrap().name, "c.mp4");
    }

    #[test]
    fn test_close_always_clears() {
        let mut state = PreviewState::default();
        state.close();
        assert_eq!(state, PreviewState::Closed);

        state.select(&record("a.png", "image/png"));
        state.close();
        assert_eq!(state, PreviewState::Closed);
        assert!(state.selected().is_none());
    }
}
