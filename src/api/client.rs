use async_trait::async_trait;
use std::sync::Arc;

use super::payload::HotelPayload;
use super::HotelResponse;
use crate::error::SubmitError;

/// Boundary between the form and whatever creates hotels
///
/// One call to `create_hotel` is one outbound request. No retries, no
/// timeouts beyond what the transport itself imposes.
#[async_trait]
pub trait SubmissionClient: Send + Sync {
    async fn create_hotel(&self, payload: HotelPayload) -> Result<HotelResponse, SubmitError>;
}

/// Sends the payload as `multipart/form-data` to `POST {base_url}/hotel`
#[derive(Debug, Clone)]
pub struct HttpSubmissionClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpSubmissionClient {
    pub fn new(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        HttpSubmissionClient {
            http,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl SubmissionClient for HttpSubmissionClient {
    async fn create_hotel(&self, payload: HotelPayload) -> Result<HotelResponse, SubmitError> {
        tracing::info!("🌐 POST {} {}", self.endpoint, payload.summary());
        tracing::debug!("multipart keys: {:?}", payload.keys());

        let form = payload.into_multipart()?;
        let response = self.http.post(&self.endpoint).multipart(form).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(SubmitError::Status {
                status: status.as_u16(),
                body,
            });
        }

        match serde_json::from_str(&body) {
            Ok(json) => Ok(HotelResponse { body: json }),
            Err(e) => Err(SubmitError::Decode {
                body,
                source: Arc::new(e),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::payload::ImagePart;
    use crate::api::stub::serve_once;
    use tokio::net::TcpListener;

    fn plaza(image: Option<ImagePart>) -> HotelPayload {
        HotelPayload {
            name: "Grand Plaza".to_string(),
            description: "Luxury downtown hotel".to_string(),
            location: "123 Main St".to_string(),
            image,
        }
    }

    #[tokio::test]
    async fn test_posts_multipart_to_hotel() {
        let (base, server) = serve_once("201 Created", r#"{"id":1,"name":"Grand Plaza"}"#).await;
        let client = HttpSubmissionClient::new(reqwest::Client::new(), format!("{}/hotel", base));

        let response = client.create_hotel(plaza(None)).await.unwrap();
        let request = server.await.unwrap();

        assert!(request.starts_with("POST /hotel HTTP/1.1\r\n"));
        assert!(request.to_lowercase().contains("content-type: multipart/form-data; boundary="));
        assert!(request.contains("name=\"name\"\r\n\r\nGrand Plaza"));
        assert!(request.contains("name=\"description\"\r\n\r\nLuxury downtown hotel"));
        assert!(request.contains("name=\"location\"\r\n\r\n123 Main St"));
        assert!(!request.contains("name=\"image\""));
        assert_eq!(response.body["id"], 1);
    }

    #[tokio::test]
    async fn test_image_part_is_sent() {
        let (base, server) = serve_once("200 OK", r#"{"ok":true}"#).await;
        let client = HttpSubmissionClient::new(reqwest::Client::new(), format!("{}/hotel", base));

        let image = ImagePart {
            file_name: "lobby.png".to_string(),
            media_type: "image/png".to_string(),
            bytes: b"PNGDATA".to_vec(),
        };
        client.create_hotel(plaza(Some(image))).await.unwrap();
        let request = server.await.unwrap();

        assert!(request.contains("name=\"image\"; filename=\"lobby.png\""));
        assert!(request.to_lowercase().contains("content-type: image/png"));
        assert!(request.contains("PNGDATA"));
    }

    #[tokio::test]
    async fn test_non_success_status_fails() {
        let (base, server) = serve_once("500 Internal Server Error", r#"{"error":"db down"}"#).await;
        let client = HttpSubmissionClient::new(reqwest::Client::new(), format!("{}/hotel", base));

        let result = client.create_hotel(plaza(None)).await;
        server.await.unwrap();

        match result {
            Err(SubmitError::Status { status, body }) => {
                assert_eq!(status, 500);
                assert!(body.contains("db down"));
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_fails() {
        let (base, server) = serve_once("200 OK", "<html>not json</html>").await;
        let client = HttpSubmissionClient::new(reqwest::Client::new(), format!("{}/hotel", base));

        let result = client.create_hotel(plaza(None)).await;
        server.await.unwrap();

        assert!(matches!(result, Err(SubmitError::Decode { .. })));
    }

    #[tokio::test]
    async fn test_unreachable_server_fails() {
        // Bind then drop to get a port nobody listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpSubmissionClient::new(reqwest::Client::new(), format!("http://{}/hotel", addr));
        let result = client.create_hotel(plaza(None)).await;

        assert!(matches!(result, Err(SubmitError::Transport(_))));
    }
}
