/// File ingestion module
///
/// This module handles:
/// - Picking files with the native dialog (picker.rs)
/// - Rejecting files by name suffix (filter.rs)
/// - Reading accepted files asynchronously (loader.rs)
/// - Tracking batch completion and publishing records (batch.rs)
///
/// `Ingestor` ties these together. It is driven by the UI update loop:
/// `begin` splits a selection into rejections and decode jobs, and each
/// finished decode is fed back through `complete`.

pub mod batch;
pub mod filter;
pub mod loader;
pub mod picker;

use std::collections::HashMap;

use crate::blob::BlobStore;
use crate::config::IngestSettings;
use crate::error::IngestError;
use crate::state::data::{FileRecord, RawFile};

use batch::{BatchId, BatchProgress, CompletionPolicy, IngestionBatch};
use filter::SuffixFilter;
use loader::DecodedFile;

/// One accepted file waiting to be read
#[derive(Debug, Clone)]
pub struct DecodeJob {
    pub batch: BatchId,
    pub slot: usize,
    pub file: RawFile,
}

/// Outcome of starting a batch
#[derive(Debug)]
pub struct Dispatch {
    pub batch: BatchId,
    /// One entry per rejected file, in selection order
    pub rejected: Vec<IngestError>,
    /// One job per accepted file, in selection order
    pub jobs: Vec<DecodeJob>,
}

#[derive(Debug)]
pub struct Ingestor {
    filter: SuffixFilter,
    policy: CompletionPolicy,
    next_batch: u64,
    in_flight: HashMap<BatchId, IngestionBatch>,
}

impl Ingestor {
    pub fn new(settings: &IngestSettings) -> Self {
        Self {
            filter: SuffixFilter::new(settings.case_insensitive_suffix),
            policy: settings.completion_policy,
            next_batch: 0,
            in_flight: HashMap::new(),
        }
    }

    /// Start a batch from one selection event
    pub fn begin(&mut self, files: Vec<RawFile>) -> Dispatch {
        self.next_batch += 1;
        let id = BatchId(self.next_batch);
        let selected = files.len();

        let mut rejected = Vec::new();
        let mut jobs = Vec::new();

        for file in files {
            match self.filter.check(&file) {
                Ok(()) => jobs.push(DecodeJob {
                    batch: id,
                    slot: jobs.len(),
                    file,
                }),
                Err(err) => {
                    tracing::warn!("⚠️  {}", err);
                    rejected.push(err);
                }
            }
        }

        tracing::info!(
            batch = id.0,
            "🔍 Selected {} files, {} accepted, {} rejected",
            selected,
            jobs.len(),
            rejected.len()
        );

        if !jobs.is_empty() {
            let batch = IngestionBatch::new(id, self.policy, selected, jobs.len());
            self.in_flight.insert(id, batch);
        }

        Dispatch {
            batch: id,
            rejected,
            jobs,
        }
    }

    /// Feed one finished decode back in
    ///
    /// Returns the batch's records exactly once, when it is published.
    pub fn complete(
        &mut self,
        id: BatchId,
        slot: usize,
        outcome: Result<DecodedFile, IngestError>,
        blobs: &mut BlobStore,
    ) -> Option<Vec<FileRecord>> {
        let Some(batch) = self.in_flight.get_mut(&id) else {
            tracing::warn!(batch = id.0, slot, "completion for unknown batch");
            return None;
        };

        let progress = match outcome {
            Ok(decoded) => {
                let url = blobs.create(decoded.bytes, &decoded.mime_type);
                batch.record_success(
                    slot,
                    FileRecord {
                        url,
                        mime_type: decoded.mime_type,
                        name: decoded.name,
                    },
                )
            }
            Err(err) => {
                tracing::error!("Error reading file: {}", err);
                batch.record_failure(slot)
            }
        };

        match progress {
            BatchProgress::Pending => None,
            BatchProgress::Ready(records) => {
                self.in_flight.remove(&id);
                tracing::info!(batch = id.0, "✅ Batch complete with {} records", records.len());
                Some(records)
            }
            BatchProgress::Abandoned => {
                self.in_flight.remove(&id);
                tracing::warn!(
                    batch = id.0,
                    "Batch never reached its completion threshold; nothing appended"
                );
                None
            }
        }
    }

    /// Batches still waiting on decodes
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }
}
