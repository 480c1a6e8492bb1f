/// Completion tracking for one selection event
///
/// Decodes finish in arbitrary order. Each accepted file owns a slot;
/// records are published in slot order, all at once, when the batch's
/// completion threshold is reached.

use serde::{Deserialize, Serialize};

use crate::state::data::FileRecord;

/// Identifies one selection event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BatchId(pub u64);

/// What a batch's completion threshold is measured against
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CompletionPolicy {
    /// Threshold = number of accepted files. Every completion counts,
    /// failed decodes included; successful records are published.
    #[default]
    AcceptedCount,
    /// Threshold = number of selected files, rejected ones included,
    /// and only successful decodes count toward it. A batch with any
    /// rejection or decode failure is never published.
    SelectedCount,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot {
    Pending,
    Decoded(FileRecord),
    Failed,
}

/// Result of feeding one completion into a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchProgress {
    /// Still waiting on decodes
    Pending,
    /// Threshold reached; these records go into the library
    Ready(Vec<FileRecord>),
    /// Every decode finished without reaching the threshold
    Abandoned,
}

#[derive(Debug)]
pub struct IngestionBatch {
    id: BatchId,
    policy: CompletionPolicy,
    selected: usize,
    slots: Vec<Slot>,
}

impl IngestionBatch {
    /// `selected` counts every file of the selection event,
    /// `accepted` only those that passed the filter
    pub fn new(id: BatchId, policy: CompletionPolicy, selected: usize, accepted: usize) -> Self {
        Self {
            id,
            policy,
            selected,
            slots: vec![Slot::Pending; accepted],
        }
    }

    /// A slot finished decoding and got a handle
    pub fn record_success(&mut self, slot: usize, record: FileRecord) -> BatchProgress {
        self.fill(slot, Slot::Decoded(record))
    }

    /// A slot's decode failed; the file is dropped from the batch
    pub fn record_failure(&mut self, slot: usize) -> BatchProgress {
        self.fill(slot, Slot::Failed)
    }

    fn fill(&mut self, slot: usize, state: Slot) -> BatchProgress {
        match self.slots.get_mut(slot) {
            Some(current) if *current == Slot::Pending => *current = state,
            _ => {
                tracing::warn!(batch = self.id.0, slot, "ignoring unexpected completion");
                return BatchProgress::Pending;
            }
        }

        let completed = self.completed();
        let decoded = self.decoded();

        let ready = match self.policy {
            CompletionPolicy::AcceptedCount => completed == self.slots.len(),
            CompletionPolicy::SelectedCount => decoded == self.selected,
        };

        if ready {
            BatchProgress::Ready(self.take_records())
        } else if completed == self.slots.len() {
            BatchProgress::Abandoned
        } else {
            BatchProgress::Pending
        }
    }

    fn completed(&self) -> usize {
        self.slots.iter().filter(|s| !matches!(s, Slot::Pending)).count()
    }

    fn decoded(&self) -> usize {
        self.slots.iter().filter(|s| matches!(s, Slot::Decoded(_))).count()
    }

    fn take_records(&mut self) -> Vec<FileRecord> {
        self.slots
            .iter()
            .filter_map(|slot| match slot {
                Slot::Decoded(record) => Some(record.clone()),
                _ => None,
            })
            .collect()
    }
}
