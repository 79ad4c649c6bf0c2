/// Shared data structures for the form state
///
/// These structs represent the data model that flows between
/// the controller, the background tasks and the UI layer.

use std::path::{Path, PathBuf};

/// Media type used when the extension does not name an image format
pub const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// The text fields of the hotel form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Description,
    Location,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Description, Field::Location];

    /// Multipart field name
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
            Field::Location => "location",
        }
    }

    /// Human readable label
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Hotel Name",
            Field::Description => "Description",
            Field::Location => "Location",
        }
    }
}

/// Handle to an image file on disk
///
/// Only the path and the declared media type are held here. The bytes are
/// read lazily by the preview decoder and again when the payload is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    /// Full path to the file
    pub path: PathBuf,
    /// Filename only (e.g., "lobby.jpg")
    pub file_name: String,
    /// Media type declared by the extension (e.g., "image/jpeg")
    pub media_type: String,
}

impl ImageFile {
    /// Build a handle, deriving the media type from the extension
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let media_type = media_type_for(&path).to_string();

        ImageFile { path, file_name, media_type }
    }

    /// Whether the declared media type is an image type
    pub fn is_image(&self) -> bool {
        self.media_type.starts_with("image/")
    }
}

/// Declared media type of a path, judged by its extension
pub fn media_type_for(path: &Path) -> &'static str {
    image::ImageFormat::from_path(path)
        .map(|format| format.to_mime_type())
        .unwrap_or(FALLBACK_MEDIA_TYPE)
}

/// How an image reached the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    /// Native file picker (already filtered to image extensions)
    Picker,
    /// Dropped onto the window
    Drop,
}

/// Everything the user has typed or selected
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub description: String,
    pub location: String,
    pub image: Option<ImageFile>,
}

impl FormState {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Description => &self.description,
            Field::Location => &self.location,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Description => self.description = value,
            Field::Location => self.location = value,
        }
    }

    /// Required fields that are still empty
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }
}

/// Displayable rendering of the selected image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePreview {
    /// `data:<media type>;base64,<bytes>`
    pub data_uri: String,
    pub width: u32,
    pub height: u32,
}

/// Whether a submission is in flight
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionLifecycle {
    #[default]
    Idle,
    Submitting,
}

impl SubmissionLifecycle {
    /// Label for the submit trigger
    pub fn button_label(self) -> &'static str {
        match self {
            SubmissionLifecycle::Idle => "Submit",
            SubmissionLifecycle::Submitting => "Creating...",
        }
    }
}

/// Severity of a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// Status line shown under the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Notice { kind: NoticeKind::Info, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Notice { kind: NoticeKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice { kind: NoticeKind::Error, message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_from_extension() {
        assert_eq!(ImageFile::from_path("/tmp/lobby.png").media_type, "image/png");
        assert_eq!(ImageFile::from_path("/tmp/pool.JPG").media_type, "image/jpeg");
        assert_eq!(ImageFile::from_path("/tmp/notes.txt").media_type, FALLBACK_MEDIA_TYPE);
        assert_eq!(ImageFile::from_path("/tmp/no_extension").media_type, FALLBACK_MEDIA_TYPE);
    }

    #[test]
    fn test_is_image() {
        assert!(ImageFile::from_path("a.gif").is_image());
        assert!(!ImageFile::from_path("a.pdf").is_image());
    }

    #[test]
    fn test_file_name() {
        let file = ImageFile::from_path("/srv/photos/front.webp");
        assert_eq!(file.file_name, "front.webp");
    }

    #[test]
    fn test_missing_fields() {
        let mut form = FormState::default();
        assert_eq!(form.missing_fields(), Field::ALL.to_vec());

        form.set(Field::Name, "Grand Plaza".to_string());
        form.set(Field::Location, "123 Main St".to_string());
        assert_eq!(form.missing_fields(), vec![Field::Description]);

        form.set(Field::Description, "Luxury downtown hotel".to_string());
        assert!(form.missing_fields().is_empty());
    }

    #[test]
    fn test_button_label() {
        assert_eq!(SubmissionLifecycle::default(), SubmissionLifecycle::Idle);
        assert_eq!(SubmissionLifecycle::Idle.button_label(), "Submit");
        assert_eq!(SubmissionLifecycle::Submitting.button_label(), "Creating...");
    }
}
