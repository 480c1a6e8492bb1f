use chrono::Local;
use iced::widget::image::Handle;
use iced::widget::{button, column, container, horizontal_space, row, text, Column};
use iced::{Alignment, Element, Length, Task, Theme};

mod blob;
mod config;
mod error;
mod ingest;
mod logging;
mod preview;
mod state;
mod ui;

use blob::BlobStore;
use config::Settings;
use error::IngestError;
use ingest::batch::BatchId;
use ingest::loader::{self, DecodedFile};
use ingest::{picker, Ingestor};
use preview::decode::decode_preview;
use preview::renderer::{renderer_for, Renderer};
use state::data::RawFile;
use state::library::Library;
use state::preview::PreviewState;
use ui::modal::ImageState;

/// Main application state
struct FilePreviewer {
    /// Every record ingested this session
    library: Library,
    /// Bytes behind the `blob:` handles
    blobs: BlobStore,
    /// Batches still being read
    ingestor: Ingestor,
    /// Modal open/closed
    preview: PreviewState,
    /// Decoded image for the open modal, if it shows an image
    preview_image: Option<ImageState>,
    /// Longest edge of decoded image previews
    max_dimension: u32,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked the "Select Files" button
    SelectFiles,
    /// One file of a batch finished reading
    FileDecoded {
        batch: BatchId,
        slot: usize,
        result: Result<DecodedFile, IngestError>,
    },
    /// User clicked "View" on a table row
    OpenPreview(usize),
    /// User dismissed the modal
    ClosePreview,
    /// Background image decode for the modal finished
    PreviewDecoded {
        url: String,
        result: Result<Handle, String>,
    },
    /// User clicked a handle
    CopyUrl(String),
}

impl FilePreviewer {
    /// Create a new instance of the application
    fn new(settings: Settings) -> (Self, Task<Message>) {
        (Self::with_settings(&settings), Task::none())
    }

    fn with_settings(settings: &Settings) -> Self {
        FilePreviewer {
            library: Library::new(),
            blobs: BlobStore::new(),
            ingestor: Ingestor::new(&settings.ingest),
            preview: PreviewState::default(),
            preview_image: None,
            max_dimension: settings.preview.max_dimension,
            status: stamped("Ready. Select files to preview."),
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectFiles => {
                let Some(files) = picker::pick_files() else {
                    return Task::none();
                };
                if files.is_empty() {
                    return Task::none();
                }

                let (rejected, task) = self.start_batch(files);
                for err in &rejected {
                    ui::notify::unsupported_file(err);
                }
                task
            }
            Message::FileDecoded { batch, slot, result } => {
                if let Some(records) = self.ingestor.complete(batch, slot, result, &mut self.blobs) {
                    let added = records.len();
                    self.library.append_batch(records);
                    self.status = if added == 0 {
                        stamped("No files added: none of the selected files could be read.")
                    } else {
                        stamped(&format!(
                            "✅ Added {} files. {} files in the list.",
                            added,
                            self.library.len()
                        ))
                    };
                    tracing::debug!("{} blob handles live", self.blobs.len());
                }
                Task::none()
            }
            Message::OpenPreview(index) => {
                let Some(record) = self.library.get(index).cloned() else {
                    return Task::none();
                };
                if self.preview.is_open() {
                    tracing::debug!("replacing open preview with {}", record.name);
                }
                self.preview.select(&record);

                if renderer_for(&record.mime_type) != Some(Renderer::Image) {
                    self.preview_image = None;
                    return Task::none();
                }

                let Some(blob) = self.blobs.resolve(&record.url) else {
                    self.preview_image = Some(ImageState::Failed("handle does not resolve".into()));
                    return Task::none();
                };

                self.preview_image = Some(ImageState::Loading);
                let url = record.url;
                Task::perform(
                    decode_preview(blob.bytes.clone(), self.max_dimension),
                    move |result| Message::PreviewDecoded {
                        url: url.clone(),
                        result,
                    },
                )
            }
            Message::ClosePreview => {
                self.preview.close();
                self.preview_image = None;
                Task::none()
            }
            Message::PreviewDecoded { url, result } => {
                let current = self.preview.selected().is_some_and(|s| s.url == url);
                if !current {
                    tracing::debug!(%url, "dropping stale preview decode");
                    return Task::none();
                }

                self.preview_image = Some(match result {
                    Ok(handle) => ImageState::Ready(handle),
                    Err(reason) => {
                        tracing::warn!("⚠️  Preview failed for {}: {}", url, reason);
                        ImageState::Failed(reason)
                    }
                });
                Task::none()
            }
            Message::CopyUrl(url) => {
                self.status = stamped(&format!("Copied {}", url));
                iced::clipboard::write(url)
            }
        }
    }

    /// Run a selection through the ingestor and spawn one read per accepted file
    ///
    /// Rejections are returned so the caller can show the dialogs.
    fn start_batch(&mut self, files: Vec<RawFile>) -> (Vec<IngestError>, Task<Message>) {
        let dispatch = self.ingestor.begin(files);

        if dispatch.jobs.is_empty() {
            self.status = stamped("No files added: every selected file was rejected.");
            return (dispatch.rejected, Task::none());
        }

        self.status = stamped(&format!(
            "Reading {} files ({} batches in progress)...",
            dispatch.jobs.len(),
            self.ingestor.in_flight()
        ));
        tracing::debug!(batch = dispatch.batch.0, "dispatching decodes");

        let task = Task::batch(dispatch.jobs.into_iter().map(|job| {
            let (batch, slot) = (job.batch, job.slot);
            Task::perform(loader::decode(job.file), move |result| {
                Message::FileDecoded { batch, slot, result }
            })
        }));
        (dispatch.rejected, task)
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let header = row![
            text("File Previewer").size(32),
            horizontal_space(),
            button("Select Files")
                .on_press(Message::SelectFiles)
                .padding(10),
        ]
        .align_y(Alignment::Center);

        let content: Column<Message> = column![
            header,
            text(&self.status).size(14),
            ui::table::view(self.library.records()),
        ]
        .spacing(20)
        .padding(40);

        let base: Element<Message> = container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into();

        match self.preview.selected() {
            Some(selected) => ui::modal::overlay(
                base,
                selected,
                self.blobs.resolve(&selected.url),
                self.preview_image.as_ref(),
            ),
            None => base,
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Prefix a status message with the local time
fn stamped(message: &str) -> String {
    format!("[{}] {}", Local::now().format("%H:%M:%S"), message)
}

/// Read the settings file, falling back to defaults
///
/// Logging is not up yet, so problems are returned for the caller to report.
fn load_settings() -> (Settings, Option<String>) {
    let Some(path) = Settings::path() else {
        return (
            Settings::default(),
            Some("could not determine config directory".to_string()),
        );
    };

    match Settings::load_from(&path) {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(format!("{} ({})", e, path.display()))),
    }
}

fn main() -> iced::Result {
    let (settings, problem) = load_settings();
    logging::init(&settings.log);

    if let Some(problem) = problem {
        tracing::warn!("⚠️  Using default settings: {}", problem);
    }
    tracing::info!(
        "🎨 File Previewer starting (completion policy: {:?})",
        settings.ingest.completion_policy
    );

    iced::application(
        "File Previewer",
        FilePreviewer::update,
        FilePreviewer::view,
    )
    .theme(FilePreviewer::theme)
    .centered()
    .run_with(move || FilePreviewer::new(settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Arc;

    use crate::ingest::batch::CompletionPolicy;

    fn raw(name: &str, mime_type: &str) -> RawFile {
        RawFile {
            path: PathBuf::from(name),
            name: name.into(),
            mime_type: mime_type.into(),
        }
    }

    fn app(policy: CompletionPolicy) -> FilePreviewer {
        let mut settings = Settings::default();
        settings.ingest.completion_policy = policy;
        FilePreviewer::with_settings(&settings)
    }

    /// Run a selection through the ingestor and feed every decode back
    /// through `update`, in reverse order
    fn ingest(app: &mut FilePreviewer, files: Vec<RawFile>) -> usize {
        let dispatch = app.ingestor.begin(files);
        for job in dispatch.jobs.into_iter().rev() {
            let result = Ok(DecodedFile {
                name: job.file.name.clone(),
                mime_type: job.file.mime_type.clone(),
                bytes: Arc::from(job.file.name.as_bytes()),
            });
            let _ = app.update(Message::FileDecoded {
                batch: job.batch,
                slot: job.slot,
                result,
            });
        }
        dispatch.rejected.len()
    }

    fn scenario() -> Vec<RawFile> {
        vec![
            raw("a.png", "image/png"),
            raw("b.jpg", "image/jpeg"),
            raw("c.mp4", "video/mp4"),
        ]
    }

    #[test]
    fn test_scenario_accepted_count_appends_two() {
        let mut app = app(CompletionPolicy::AcceptedCount);
        let rejected = ingest(&mut app, scenario());

        assert_eq!(rejected, 1);
        let names: Vec<_> = app.library.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["a.png", "c.mp4"]);
    }

    #[test]
    fn test_scenario_selected_count_appends_nothing() {
        let mut app = app(CompletionPolicy::SelectedCount);
        let rejected = ingest(&mut app, scenario());

        assert_eq!(rejected, 1);
        assert_eq!(app.library.len(), 0);
    }

    #[test]
    fn test_preview_open_and_close() {
        let mut app = app(CompletionPolicy::AcceptedCount);
        ingest(&mut app, vec![raw("c.mp4", "video/mp4"), raw("a.png", "image/png")]);

        let _ = app.update(Message::OpenPreview(0));
        assert_eq!(app.preview.selected().unwrap().name, "c.mp4");
        assert!(app.preview_image.is_none());

        let _ = app.update(Message::OpenPreview(1));
        assert_eq!(app.preview.selected().unwrap().name, "a.png");
        assert!(matches!(app.preview_image, Some(ImageState::Loading)));

        let _ = app.update(Message::ClosePreview);
        assert!(!app.preview.is_open());
        assert!(app.preview_image.is_none());
    }

    #[test]
    fn test_open_preview_out_of_range_is_ignored() {
        let mut app = app(CompletionPolicy::AcceptedCount);
        let _ = app.update(Message::OpenPreview(3));
        assert!(!app.preview.is_open());
    }

    #[test]
    fn test_stale_image_decode_is_dropped() {
        let mut app = app(CompletionPolicy::AcceptedCount);
        ingest(&mut app, vec![raw("a.png", "image/png"), raw("b.gif", "image/gif")]);

        let _ = app.update(Message::OpenPreview(0));
        let stale_url = app.library.get(0).unwrap().url.clone();
        let _ = app.update(Message::OpenPreview(1));

        let _ = app.update(Message::PreviewDecoded {
            url: stale_url,
            result: Ok(Handle::from_rgba(1, 1, vec![0u8; 4])),
        });
        assert!(matches!(app.preview_image, Some(ImageState::Loading)));

        let current_url = app.library.get(1).unwrap().url.clone();
        let _ = app.update(Message::PreviewDecoded {
            url: current_url,
            result: Err("Failed to decode image".into()),
        });
        assert!(matches!(app.preview_image, Some(ImageState::Failed(_))));
    }

    #[test]
    fn test_all_rejected_batch_status() {
        let mut app = app(CompletionPolicy::AcceptedCount);
        let (rejected, _) = app.start_batch(vec![raw("x.jpg", "image/jpeg"), raw("y.jpg", "image/jpeg")]);

        assert_eq!(rejected.len(), 2);
        assert!(app.status.ends_with("No files added: every selected file was rejected."));
        assert_eq!(app.ingestor.in_flight(), 0);
    }

    #[test]
    fn test_start_batch_status_counts_accepted_files() {
        let mut app = app(CompletionPolicy::AcceptedCount);
        let (rejected, _) = app.start_batch(scenario());

        assert_eq!(rejected.len(), 1);
        assert!(app.status.contains("Reading 2 files (1 batches in progress)..."));
    }

    #[test]
    fn test_all_reads_failed_status() {
        let mut app = app(CompletionPolicy::AcceptedCount);
        let dispatch = app.ingestor.begin(vec![raw("gone.wav", "audio/wav")]);
        let job = &dispatch.jobs[0];

        let _ = app.update(Message::FileDecoded {
            batch: job.batch,
            slot: job.slot,
            result: Err(IngestError::Decode {
                name: "gone.wav".into(),
                reason: "No such file or directory".into(),
            }),
        });

        assert_eq!(app.library.len(), 0);
        assert!(app.status.ends_with("No files added: none of the selected files could be read."));
    }

    #[test]
    fn test_status_is_timestamped() {
        let status = stamped("Ready.");
        assert!(status.starts_with('['));
        assert_eq!(&status[9..], "] Ready.");
    }
}
