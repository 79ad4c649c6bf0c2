/// Hotel API module
///
/// This module handles:
/// - Building the multipart payload from the form (payload.rs)
/// - Sending it to the remote endpoint (client.rs)

pub mod client;
pub mod payload;
#[cfg(test)]
mod stub;

pub use client::{HttpSubmissionClient, SubmissionClient};
pub use payload::HotelPayload;

use crate::config::Config;
use crate::error::SubmitError;
use crate::state::data::FormState;

/// Parsed body of a successful response. The shape is owned by the server.
#[derive(Debug, Clone, PartialEq)]
pub struct HotelResponse {
    pub body: serde_json::Value,
}

impl HotelResponse {
    /// Short text for the status line
    pub fn summary(&self) -> String {
        let field = |key: &str| self.body.get(key).filter(|v| !v.is_null());

        if let Some(id) = field("id").or_else(|| field("_id")) {
            return format!("id {}", id);
        }
        if let Some(name) = field("name").and_then(|v| v.as_str()) {
            return name.to_string();
        }

        let mut text = self.body.to_string();
        if text.chars().count() > 80 {
            text = text.chars().take(77).collect::<String>() + "...";
        }
        text
    }
}

/// Build the payload from a form snapshot and hand it to `client`
pub async fn submit_with(
    client: &dyn SubmissionClient,
    form: FormState,
) -> Result<HotelResponse, SubmitError> {
    let payload = HotelPayload::from_form(&form).await?;
    client.create_hotel(payload).await
}

/// Submit over HTTP, resolving the endpoint from the current config
pub async fn submit_hotel(
    http: reqwest::Client,
    form: FormState,
) -> Result<HotelResponse, SubmitError> {
    let endpoint = Config::load()?.endpoint()?;
    let client = HttpSubmissionClient::new(http, endpoint);
    submit_with(&client, form).await
}
