use super::data::FileRecord;

/// The Library holds every record ingested during this session.
/// It is append-only and keeps insertion order; the only writer is
/// the batch-append step of ingestion.
#[derive(Debug, Default)]
pub struct Library {
    records: Vec<FileRecord>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a whole published batch in one step
    pub fn append_batch(&mut self, batch: Vec<FileRecord>) {
        if batch.is_empty() {
            return;
        }

        tracing::info!(
            "📁 Appended {} records ({} total)",
            batch.len(),
            self.records.len() + batch.len()
        );
        self.records.extend(batch);
    }

    /// All records in insertion order
    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    /// Get a single record by row index
    pub fn get(&self, index: usize) -> Option<&FileRecord> {
        self.records.get(index)
    }

    /// Number of records in the library
    pub fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> FileRecord {
        FileRecord {
            url: format!("blob:test/{}", name),
            mime_type: "image/png".into(),
            name: name.into(),
        }
    }

    #[test]
    fn test_append_preserves_order() {
        let mut library = Library::new();
        library.append_batch(vec![record("a.png"), record("b.png")]);
        library.append_batch(vec![record("c.png")]);

        let names: Vec<_> = library.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["a.png", "b.png", "c.png"]);
        assert_eq!(library.get(2).unwrap().name, "c.png");
        assert!(library.get(3).is_none());
    }

    #[test]
    fn test_duplicate_names_are_kept() {
        let mut library = Library::new();
        library.append_batch(vec![record("same.png")]);
        library.append_batch(vec![record("same.png")]);
        assert_eq!(library.len(), 2);
    }

    #[test]
    fn test_empty_batch_is_noop() {
        let mut library = Library::new();
        library.append_batch(Vec::new());
        assert_eq!(library.len(), 0);
    }
}
