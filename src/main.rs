use iced::event::{self, Event};
use iced::widget::{button, column, container, image, scrollable, text, text_editor, text_input, Column};
use iced::{window, Element, Length, Subscription, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod error;
mod state;
mod ui;

use api::HotelResponse;
use error::{ImageError, SubmitError};
use state::data::{Field, ImageFile, ImagePreview, ImageSource};
use state::form::{FormController, SelectionToken, SubmissionToken, SubmitRejected};
use state::preview::{decode_data_uri, load_preview};

/// Extensions offered by the file picker
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Widest the form column gets
const FORM_MAX_WIDTH: f32 = 640.0;

/// Main application state
struct HotelForm {
    /// Field values, image selection and submission lifecycle
    controller: FormController,
    /// Editor buffer backing the description field
    description: text_editor::Content,
    /// Decoded preview ready for the image widget
    preview_handle: Option<image::Handle>,
    /// A file is being dragged over the window
    hovering: bool,
    /// Shared HTTP connection pool
    http: reqwest::Client,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    NameChanged(String),
    DescriptionEdited(text_editor::Action),
    LocationChanged(String),
    /// User clicked the drop zone
    PickImage,
    FileHovered,
    FilesHoveredLeft,
    ImageDropped(PathBuf),
    /// Background decode finished
    PreviewLoaded(SelectionToken, Result<ImagePreview, ImageError>),
    Submit,
    /// Network call settled
    SubmitFinished(SubmissionToken, Result<HotelResponse, SubmitError>),
}

impl HotelForm {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        // The endpoint is resolved again on every submit; this is only an early warning
        match config::Config::load().and_then(|c| c.endpoint()) {
            Ok(endpoint) => tracing::info!("🏨 Hotel form ready, submitting to {}", endpoint),
            Err(e) => tracing::warn!("⚠️  {}", e),
        }

        (
            HotelForm {
                controller: FormController::new(),
                description: text_editor::Content::new(),
                preview_handle: None,
                hovering: false,
                http: reqwest::Client::new(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NameChanged(value) => {
                self.controller.update_field(Field::Name, value);
                Task::none()
            }
            Message::DescriptionEdited(action) => {
                let is_edit = action.is_edit();
                self.description.perform(action);
                if is_edit {
                    let text = self.description.text();
                    // The editor always reports a trailing line break
                    let text = text.strip_suffix('\n').unwrap_or(&text);
                    self.controller.update_field(Field::Description, text);
                }
                Task::none()
            }
            Message::LocationChanged(value) => {
                self.controller.update_field(Field::Location, value);
                Task::none()
            }
            Message::PickImage => {
                // Show the native file picker dialog
                let file = FileDialog::new()
                    .set_title("Select Hotel Image")
                    .add_filter("Images", IMAGE_EXTENSIONS)
                    .pick_file();

                match file {
                    Some(path) => self.select_image(ImageFile::from_path(path), ImageSource::Picker),
                    None => Task::none(),
                }
            }
            Message::FileHovered => {
                self.hovering = true;
                Task::none()
            }
            Message::FilesHoveredLeft => {
                self.hovering = false;
                Task::none()
            }
            Message::ImageDropped(path) => {
                // One drop delivers one event per file; only the first one counts
                if !self.hovering {
                    tracing::debug!("Ignoring extra dropped file {}", path.display());
                    return Task::none();
                }
                self.hovering = false;
                self.select_image(ImageFile::from_path(path), ImageSource::Drop)
            }
            Message::PreviewLoaded(token, result) => {
                if self.controller.apply_preview(token, result) {
                    self.preview_handle = self
                        .controller
                        .preview()
                        .and_then(|preview| decode_data_uri(&preview.data_uri))
                        .map(image::Handle::from_bytes);
                }
                Task::none()
            }
            Message::Submit => match self.controller.begin_submit() {
                Ok(ticket) => {
                    let token = ticket.token;
                    Task::perform(
                        api::submit_hotel(self.http.clone(), ticket.form),
                        move |result| Message::SubmitFinished(token, result),
                    )
                }
                Err(SubmitRejected::Busy) => {
                    tracing::debug!("Submit ignored, a submission is already in flight");
                    Task::none()
                }
                Err(SubmitRejected::MissingFields(fields)) => {
                    tracing::debug!("Submit ignored, missing {:?}", fields);
                    Task::none()
                }
            },
            Message::SubmitFinished(token, result) => {
                self.controller.finish_submit(token, result);
                Task::none()
            }
        }
    }

    /// Store a new selection and start decoding its preview
    fn select_image(&mut self, file: ImageFile, source: ImageSource) -> Task<Message> {
        match self.controller.select_image(file, source) {
            Some(request) => {
                let token = request.token;
                Task::perform(load_preview(request.file), move |result| {
                    Message::PreviewLoaded(token, result)
                })
            }
            None => Task::none(),
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let form = self.controller.form();
        let lifecycle = self.controller.lifecycle();

        let mut content: Column<Message> = column![
            text("Add New Hotel").size(32),
            labeled(
                Field::Name.label(),
                text_input("Enter hotel name", &form.name)
                    .on_input(Message::NameChanged)
                    .padding(10),
            ),
            labeled(
                Field::Description.label(),
                text_editor(&self.description)
                    .placeholder("Describe your hotel")
                    .on_action(Message::DescriptionEdited)
                    .height(Length::Fixed(120.0))
                    .padding(10),
            ),
            labeled(
                Field::Location.label(),
                text_input("Hotel address", &form.location)
                    .on_input(Message::LocationChanged)
                    .padding(10),
            ),
            labeled(
                "Upload Image",
                ui::drop_zone(
                    self.hovering,
                    form.image.as_ref().map(|file| file.file_name.as_str()),
                ),
            ),
        ]
        .spacing(20)
        .padding(40)
        .max_width(FORM_MAX_WIDTH);

        if let Some(preview) = ui::preview_panel(self.preview_handle.as_ref()) {
            content = content.push(preview);
        }

        content = content
            .push(
                button(
                    container(text(lifecycle.button_label()).size(16)).center_x(Length::Fill),
                )
                .on_press_maybe(self.controller.can_submit().then_some(Message::Submit))
                .padding(12)
                .width(Length::Fill),
            )
            .push(ui::notice_line(self.controller.notice()));

        scrollable(
            container(content)
                .width(Length::Fill)
                .center_x(Length::Fill),
        )
        .into()
    }

    /// Window-level file drag and drop
    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(window_file_event)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Map file drag events to messages
fn window_file_event(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::FileHovered(_)) => Some(Message::FileHovered),
        Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FilesHoveredLeft),
        Event::Window(window::Event::FileDropped(path)) => Some(Message::ImageDropped(path)),
        _ => None,
    }
}

/// A field with its label above it
fn labeled<'a>(label: &'a str, input: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    column![text(label).size(14), input.into()].spacing(8).into()
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hotel_form=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    init_logging();

    iced::application("Add New Hotel", HotelForm::update, HotelForm::view)
        .subscription(HotelForm::subscription)
        .theme(HotelForm::theme)
        .centered()
        .run_with(HotelForm::new)
}
