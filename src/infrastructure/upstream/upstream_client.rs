use std::time::Duration;

use reqwest::multipart;
use serde::Serialize;

use crate::application::ports::RelayError;

/// Shared outbound HTTP client for every relay.
#[derive(Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
}

impl UpstreamClient {
    pub fn new(timeout: Duration) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| request_failed("client", e))?;
        Ok(Self { client })
    }

    pub async fn post_multipart(
        &self,
        url: &str,
        form: multipart::Form,
    ) -> Result<String, RelayError> {
        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| request_failed("request", e))?;

        Self::read_body(response).await
    }

    pub async fn post_json<T>(&self, url: &str, body: &T) -> Result<String, RelayError>
    where
        T: Serialize + ?Sized,
    {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| request_failed("request", e))?;

        Self::read_body(response).await
    }

    async fn read_body(response: reqwest::Response) -> Result<String, RelayError> {
        let status = response.status();

        if !status.is_success() {
            let body = response
                .bytes()
                .await
                .map(|b| String::from_utf8_lossy(&b).into_owned())
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(RelayError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| request_failed("body", e))?;

        // Success bodies are passed on untouched, so no lossy decoding here.
        String::from_utf8(body.to_vec())
            .map_err(|e| RelayError::InvalidResponse(format!("body is not UTF-8: {}", e)))
    }
}

fn request_failed(stage: &str, error: reqwest::Error) -> RelayError {
    let kind = if error.is_timeout() {
        "timed out"
    } else if error.is_connect() {
        "connection failed"
    } else {
        "failed"
    };
    RelayError::RequestFailed(format!("{} {}: {}", stage, kind, error))
}
