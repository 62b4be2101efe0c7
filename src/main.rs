use iced::widget::image::Handle;
use iced::{Element, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;

mod config;
mod logging;
mod portrait;
mod state;
mod ui;

use config::Settings;
use portrait::Thumbnails;
use state::{format_grade, Roster};
use ui::Dialog;

/// Main application state
struct GradeTracker {
    /// Every student recorded this session
    roster: Roster<Handle>,
    settings: Settings,
    /// Raw text of the name field
    name_input: String,
    /// Raw text of the grade field
    grade_input: String,
    /// Portrait picked for the next student, if any
    selected: Option<Thumbnails>,
    /// Bumped on every pick; only the latest load may fill `selected`
    load_generation: u64,
    /// A picked portrait is still decoding
    loading: bool,
    /// Modal currently covering the form
    dialog: Option<Dialog>,
    /// Status line under the form
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    GradeChanged(String),
    /// User clicked "Upload Image"
    UploadImage,
    /// Background decode finished for the given pick
    PortraitLoaded(u64, Result<Thumbnails, String>),
    AddStudent,
    ShowSummary,
    DismissDialog,
}

impl GradeTracker {
    /// Create a new instance of the application
    fn new(settings: Settings) -> (Self, Task<Message>) {
        tracing::info!(
            preview = settings.preview_size,
            display = settings.display_size,
            "grade tracker ready"
        );

        (
            GradeTracker {
                roster: Roster::new(),
                settings,
                name_input: String::new(),
                grade_input: String::new(),
                selected: None,
                load_generation: 0,
                loading: false,
                dialog: None,
                status: String::from("Ready. No students yet."),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NameChanged(value) => {
                self.name_input = value;
                Task::none()
            }
            Message::GradeChanged(value) => {
                self.grade_input = value;
                Task::none()
            }
            Message::UploadImage => {
                // Show the native file picker
                let file = FileDialog::new()
                    .set_title("Select a Portrait")
                    .add_filter("Images", portrait::IMAGE_EXTENSIONS)
                    .pick_file();

                match file {
                    Some(path) => self.load_portrait(path),
                    None => Task::none(),
                }
            }
            Message::PortraitLoaded(generation, _) if generation != self.load_generation => {
                tracing::debug!(generation, latest = self.load_generation, "dropping superseded portrait");
                Task::none()
            }
            Message::PortraitLoaded(_, Ok(thumbnails)) => {
                self.loading = false;
                self.selected = Some(thumbnails);
                self.status = String::from("Portrait selected.");
                Task::none()
            }
            Message::PortraitLoaded(_, Err(error)) => {
                tracing::warn!(%error, "portrait failed to load");
                self.loading = false;
                self.status = format!("Could not load image: {}", error);
                Task::none()
            }
            // Enter while a dialog is up closes it
            Message::AddStudent if self.dialog.is_some() => {
                self.dialog = None;
                Task::none()
            }
            Message::AddStudent if self.loading => {
                self.status = String::from("Still loading the portrait, try again in a moment.");
                Task::none()
            }
            Message::AddStudent => {
                self.add_student();
                Task::none()
            }
            Message::ShowSummary => {
                self.show_summary();
                Task::none()
            }
            Message::DismissDialog => {
                self.dialog = None;
                Task::none()
            }
        }
    }

    /// Start decoding a picked file in the background
    fn load_portrait(&mut self, path: PathBuf) -> Task<Message> {
        if !portrait::is_supported(&path) {
            tracing::warn!(path = %path.display(), "unsupported image type");
            self.status = format!("Unsupported image type: {}", path.display());
            return Task::none();
        }

        self.load_generation += 1;
        self.loading = true;
        self.status = format!("Loading {}...", path.display());

        let generation = self.load_generation;
        let sizes = self.settings.thumbnail_sizes();

        Task::perform(
            async move { portrait::load(path, sizes).await.map_err(|e| e.to_string()) },
            move |result| Message::PortraitLoaded(generation, result),
        )
    }

    fn add_student(&mut self) {
        let portrait = self.selected.as_ref().map(|t| t.display.clone());

        match self.roster.add_student(&self.name_input, &self.grade_input, portrait) {
            Ok(record) => {
                let message = format!("Student added: {} ({})", record.name, format_grade(record.grade));
                tracing::info!(
                    name = %record.name,
                    grade = record.grade,
                    portrait = record.portrait.is_some(),
                    "student added"
                );

                self.name_input.clear();
                self.grade_input.clear();
                self.selected = None;
                self.status = format!("{} student(s) recorded.", self.roster.len());
                self.dialog = Some(Dialog::Notice {
                    title: String::from("Message"),
                    message,
                });
            }
            Err(error) => {
                tracing::debug!(%error, "form input rejected");
                self.dialog = Some(Dialog::InputError(error.to_string()));
            }
        }
    }

    fn show_summary(&mut self) {
        self.dialog = Some(match self.roster.compute_summary() {
            Some(summary) => {
                tracing::info!(
                    count = summary.count,
                    average = summary.average,
                    "summary computed"
                );
                Dialog::Summary(summary)
            }
            None => Dialog::Notice {
                title: String::from("Summary Report"),
                message: String::from("No students to display."),
            },
        });
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let form = ui::form::FormView {
            name: &self.name_input,
            grade: &self.grade_input,
            selected: self.selected.as_ref(),
            preview_size: self.settings.preview_size,
            status: &self.status,
            loading: self.loading,
            dialog_open: self.dialog.is_some(),
        }
        .view();

        match &self.dialog {
            Some(dialog) => ui::dialog::modal(
                form,
                dialog.view(&self.roster, self.settings.display_size),
                Message::DismissDialog,
            ),
            None => form,
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        self.settings.theme()
    }
}

fn main() -> iced::Result {
    logging::init();

    let settings = Settings::load();
    let window_size = settings.window_size();

    iced::application(
        "Student Grade Tracker",
        GradeTracker::update,
        GradeTracker::view,
    )
    .theme(GradeTracker::theme)
    .window_size(window_size)
    .centered()
    .run_with(move || GradeTracker::new(settings))
}
