//! HTTP client used by the contact form to reach `POST /api/contact`

use reqwest::multipart::Form;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use crate::features::contact::dtos::ContactFormDto;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Invalid form: {0}")]
    Invalid(String),

    #[error("A submission is already in progress")]
    InFlight,

    #[error("Failed to send the form: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Failed to read the server response: {0}")]
    Decode(#[source] reqwest::Error),

    /// Non-success status; `body` is the server's JSON payload, untouched
    #[error("Submission rejected with HTTP {status}")]
    Rejected { status: u16, body: Value },
}

impl SubmitError {
    /// Value surfaced to the user: the server payload when there is one,
    /// otherwise the error description.
    pub fn payload(&self) -> Value {
        match self {
            SubmitError::Rejected { body, .. } => body.clone(),
            other => Value::String(other.to_string()),
        }
    }
}

pub struct ContactFormClient {
    http_client: Client,
    endpoint: String,
}

impl ContactFormClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Send the form as `multipart/form-data`.
    ///
    /// The response body is parsed as JSON whatever the status; a
    /// non-success status turns it into [`SubmitError::Rejected`].
    pub async fn submit(&self, form: &ContactFormDto) -> Result<Value, SubmitError> {
        let multipart = Form::new()
            .text("name", form.name.clone())
            .text("phone", form.phone.clone())
            .text("email", form.email.clone())
            .text("message", form.message.clone());

        let response = self
            .http_client
            .post(&self.endpoint)
            .multipart(multipart)
            .send()
            .await
            .map_err(SubmitError::Transport)?;

        let status = response.status();
        let body = response.json::<Value>().await.map_err(SubmitError::Decode)?;

        if !status.is_success() {
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form() -> ContactFormDto {
        ContactFormDto {
            name: "Ada".to_string(),
            phone: "+1 555 0100".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_sends_multipart_fields() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/contact")
            .match_header(
                "content-type",
                mockito::Matcher::Regex("^multipart/form-data; boundary=".to_string()),
            )
            .match_body(mockito::Matcher::AllOf(vec![
                mockito::Matcher::Regex(r#"name="name"\r\n\r\nAda"#.to_string()),
                mockito::Matcher::Regex(r#"name="phone"\r\n\r\n\+1 555 0100"#.to_string()),
                mockito::Matcher::Regex(r#"name="email"\r\n\r\nada@example.com"#.to_string()),
                mockito::Matcher::Regex(r#"name="message"\r\n\r\nHello"#.to_string()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success":true}"#)
            .create_async()
            .await;

        let client = ContactFormClient::new(format!("{}/api/contact", server.url()));
        let body = client.submit(&form()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(body, json!({ "success": true }));
    }

    #[tokio::test]
    async fn test_rejected_keeps_body_verbatim() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/contact")
            .with_status(500)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":"mail failure"}"#)
            .create_async()
            .await;

        let client = ContactFormClient::new(format!("{}/api/contact", server.url()));
        let err = client.submit(&form()).await.unwrap_err();

        match &err {
            SubmitError::Rejected { status, body } => {
                assert_eq!(*status, 500);
                assert_eq!(body, &json!({ "error": "mail failure" }));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(err.payload(), json!({ "error": "mail failure" }));
    }

    #[tokio::test]
    async fn test_non_json_body_is_decode_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/contact")
            .with_status(502)
            .with_body("<html>Bad Gateway</html>")
            .create_async()
            .await;

        let client = ContactFormClient::new(format!("{}/api/contact", server.url()));
        let err = client.submit(&form()).await.unwrap_err();

        assert!(matches!(err, SubmitError::Decode(_)));
        assert!(err.payload().is_string());
    }
}
