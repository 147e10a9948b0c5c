use iced::widget::{column, text, text_editor};
use iced::{event, window, Event, Font, Length, Subscription, Task, Theme};
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod gallery;
mod ingest;
mod state;
mod ui;

use config::Config;
use ingest::IngestOptions;
use state::{AppendOutcome, GalleryStore, Submission};
use ui::Status;

/// How long "Saved!" stays up before the drop zone goes back to idle
const SAVED_STATUS_DURATION: Duration = Duration::from_secs(2);

/// Main application state
struct PromptGallery {
    /// Where images and the gallery document live
    store: GalleryStore,
    /// Resize/encode settings from the config
    options: IngestOptions,
    /// The prompt being typed
    prompt: text_editor::Content,
    /// What the drop zone shows
    status: Status,
    /// Bumped on every save so stale status resets are ignored
    status_generation: u64,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// The prompt editor changed
    PromptEdited(text_editor::Action),
    /// User clicked the drop zone
    PickFile,
    /// A file was dropped on the window
    FileDropped(PathBuf),
    /// A file is being dragged over the window
    FileHovered,
    /// The drag left the window without dropping
    FilesHoveredLeft,
    /// Background submission finished
    SubmitComplete(Result<Submission, String>),
    /// Time to put the drop zone back to idle
    ResetStatus(u64),
}

impl PromptGallery {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = Config::load();
        let options = config.ingest_options();

        let store = match GalleryStore::open(&config.library_root) {
            Ok(store) => store,
            Err(e) => {
                // Appends recreate the document, so keep going with the handle
                error!("❌ Could not prepare gallery: {}", e);
                GalleryStore::new(&config.library_root)
            }
        };

        let card_count = store.card_count().unwrap_or(0);
        info!(
            "🎨 Prompt Gallery initialized with {} cards at {}",
            card_count,
            store.root().display()
        );

        (
            PromptGallery {
                store,
                options,
                prompt: text_editor::Content::new(),
                status: Status::Idle,
                status_generation: 0,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PromptEdited(action) => {
                self.prompt.perform(action);
                Task::none()
            }
            Message::PickFile => {
                if !self.status.accepts_input() {
                    return Task::none();
                }

                // Show the native file picker dialog
                let file = FileDialog::new()
                    .set_title("Select Image")
                    .add_filter("Images", &ingest::path::SUPPORTED_EXTENSIONS)
                    .pick_file();

                match file {
                    Some(path) => self.start_submission(path),
                    None => Task::none(),
                }
            }
            Message::FileDropped(path) => {
                if !self.status.accepts_input() {
                    warn!("⏳ Ignoring drop of {} while busy", path.display());
                    return Task::none();
                }

                let path = ingest::clean_drop_path(&path.to_string_lossy());
                if !ingest::is_supported_extension(&path) {
                    info!("🤔 {} is not a picker format, trying anyway", path.display());
                }
                self.start_submission(path)
            }
            Message::FileHovered => {
                if self.status.accepts_input() {
                    self.status = Status::Hovering;
                }
                Task::none()
            }
            Message::FilesHoveredLeft => {
                if self.status == Status::Hovering {
                    self.status = Status::Idle;
                }
                Task::none()
            }
            Message::SubmitComplete(Ok(submission)) => {
                if submission.outcome == AppendOutcome::MarkerMissing {
                    warn!(
                        "⚠️  {} stored but the gallery has no marker",
                        submission.image.filename
                    );
                }

                self.prompt = text_editor::Content::new();
                self.status = Status::Saved;
                self.status_generation += 1;

                let generation = self.status_generation;
                Task::perform(tokio::time::sleep(SAVED_STATUS_DURATION), move |_| {
                    Message::ResetStatus(generation)
                })
            }
            Message::SubmitComplete(Err(message)) => {
                error!("❌ Image process failed: {}", message);
                self.status = Status::Idle;

                MessageDialog::new()
                    .set_level(MessageLevel::Error)
                    .set_title("Error")
                    .set_description(format!("Image process failed: {}", message))
                    .set_buttons(MessageButtons::Ok)
                    .show();

                Task::none()
            }
            Message::ResetStatus(generation) => {
                if generation == self.status_generation && self.status == Status::Saved {
                    self.status = Status::Idle;
                }
                Task::none()
            }
        }
    }

    /// Validate the prompt and hand the image off to a background task
    fn start_submission(&mut self, path: PathBuf) -> Task<Message> {
        let prompt = self.prompt.text().trim().to_string();
        if prompt.is_empty() {
            self.status = Status::Idle;

            MessageDialog::new()
                .set_level(MessageLevel::Warning)
                .set_title("Wait!")
                .set_description("Write the prompt first!")
                .set_buttons(MessageButtons::Ok)
                .show();

            return Task::none();
        }

        info!("📥 Processing {}", path.display());
        self.status = Status::Working;

        Task::perform(
            submit_async(self.store.clone(), path, prompt, self.options),
            Message::SubmitComplete,
        )
    }

    /// Build the user interface
    fn view(&self) -> iced::Element<'_, Message> {
        let label = text("Paste Prompt:").size(14).font(Font {
            weight: iced::font::Weight::Bold,
            ..Font::DEFAULT
        });

        let editor = text_editor(&self.prompt)
            .on_action(Message::PromptEdited)
            .font(Font::MONOSPACE)
            .height(Length::Fixed(110.0));

        column![label, editor, ui::drop_zone::view(self.status)]
            .spacing(12)
            .padding(20)
            .into()
    }

    /// Listen for files dragged onto the window
    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(handle_window_event)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

/// Map window drag-and-drop events to messages
fn handle_window_event(event: Event, _status: event::Status, _id: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        Event::Window(window::Event::FileHovered(_)) => Some(Message::FileHovered),
        Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FilesHoveredLeft),
        _ => None,
    }
}

/// Run a submission on the blocking pool so the UI stays responsive
async fn submit_async(
    store: GalleryStore,
    path: PathBuf,
    prompt: String,
    options: IngestOptions,
) -> Result<Submission, String> {
    tokio::task::spawn_blocking(move || ingest::submit(&store, &path, &prompt, options))
        .await
        .map_err(|e| format!("Task join error: {}", e))?
        .map_err(|e| e.to_string())
}

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prompt_gallery=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    iced::application(
        "Visual Prompt Library",
        PromptGallery::update,
        PromptGallery::view,
    )
    .subscription(PromptGallery::subscription)
    .theme(PromptGallery::theme)
    .window_size((400.0, 350.0))
    .centered()
    .run_with(PromptGallery::new)
}
