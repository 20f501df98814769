// HTTP client for a text-generation commentary service

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use super::{CommentaryError, CommentaryRequest, Commentator};

/// Body posted to the service: the scoreline plus a free-text prompt
#[derive(Debug, Serialize)]
struct GenerateBody<'a> {
    prompt: String,
    #[serde(flatten)]
    request: &'a CommentaryRequest,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    text: Option<String>,
}

/// Posts the match summary as JSON and reads `{"text": "..."}` back
pub struct HttpCommentator {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpCommentator {
    pub fn new(endpoint: String, api_key: Option<String>, timeout: Duration) -> Result<Self, CommentaryError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CommentaryError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }
}

/// Pull the commentary text out of a raw response body
fn parse_response(body: &str) -> Result<String, CommentaryError> {
    let response: GenerateResponse =
        serde_json::from_str(body).map_err(|e| CommentaryError::Parse(e.to_string()))?;
    match response.text.map(|text| text.trim().to_string()) {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(CommentaryError::Empty),
    }
}

impl Commentator for HttpCommentator {
    fn commentate(&self, request: &CommentaryRequest) -> Result<String, CommentaryError> {
        let body = GenerateBody {
            prompt: request.summary(),
            request,
        };

        let mut builder = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder
            .send()
            .map_err(|e| CommentaryError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(CommentaryError::Status(status.as_u16()));
        }

        let text = response
            .text()
            .map_err(|e| CommentaryError::Transport(e.to_string()))?;
        parse_response(&text)
    }
}
