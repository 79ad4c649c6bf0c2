/// Transport payload for one hotel submission
use reqwest::multipart::{Form, Part};

use crate::error::{ImageError, SubmitError};
use crate::state::data::{Field, FormState, ImageFile};
use crate::state::preview::read_image_bytes_async;

/// Multipart key of the image part
pub const IMAGE_KEY: &str = "image";

/// Binary content of the selected image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePart {
    pub file_name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl ImagePart {
    /// Read the file behind a handle
    pub async fn read(file: &ImageFile) -> Result<Self, ImageError> {
        let bytes = read_image_bytes_async(&file.path).await?;
        Ok(ImagePart {
            file_name: file.file_name.clone(),
            media_type: file.media_type.clone(),
            bytes,
        })
    }
}

/// Field values plus the optional image, ready to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelPayload {
    pub name: String,
    pub description: String,
    pub location: String,
    pub image: Option<ImagePart>,
}

impl HotelPayload {
    /// Assemble the payload, reading the image bytes if one is selected
    pub async fn from_form(form: &FormState) -> Result<Self, ImageError> {
        let image = match &form.image {
            Some(file) => Some(ImagePart::read(file).await?),
            None => None,
        };

        Ok(HotelPayload {
            name: form.name.clone(),
            description: form.description.clone(),
            location: form.location.clone(),
            image,
        })
    }

    /// Text fields in the order they are sent
    pub fn text_fields(&self) -> [(&'static str, &str); 3] {
        [
            (Field::Name.key(), self.name.as_str()),
            (Field::Description.key(), self.description.as_str()),
            (Field::Location.key(), self.location.as_str()),
        ]
    }

    /// Every multipart key this payload produces
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = self.text_fields().iter().map(|(key, _)| *key).collect();
        if self.image.is_some() {
            keys.push(IMAGE_KEY);
        }
        keys
    }

    /// One-line description for logs (no raw bytes)
    pub fn summary(&self) -> String {
        let image = match &self.image {
            Some(part) => format!("{} ({}, {} bytes)", part.file_name, part.media_type, part.bytes.len()),
            None => "none".to_string(),
        };
        format!(
            "name={:?} description={} chars location={:?} image={}",
            self.name,
            self.description.chars().count(),
            self.location,
            image
        )
    }

    /// Encode as `multipart/form-data`
    pub fn into_multipart(self) -> Result<Form, SubmitError> {
        let mut form = Form::new()
            .text(Field::Name.key(), self.name)
            .text(Field::Description.key(), self.description)
            .text(Field::Location.key(), self.location);

        if let Some(image) = self.image {
            let part = Part::bytes(image.bytes)
                .file_name(image.file_name)
                .mime_str(&image.media_type)?;
            form = form.part(IMAGE_KEY, part);
        }

        Ok(form)
    }
}
