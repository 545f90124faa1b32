use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sidekick_tools::FunctionDeclaration;
use thiserror::Error;

use crate::config::Config;
use crate::conversation::Turn;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("[{status}] {message}")]
    Rejected { status: u16, message: String },

    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

// ============================================================================
// WIRE TYPES
// ============================================================================

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_call: Option<FunctionCall>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    #[serde(default)]
    pub args: Value,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<ToolSet<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ToolSet<'a> {
    function_declarations: &'a [FunctionDeclaration],
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// What a single response part asks for.
#[derive(Debug, PartialEq)]
pub enum PartKind<'a> {
    FunctionCall(&'a FunctionCall),
    Text(&'a str),
    Unrecognized,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: Some(text.into()), function_call: None }
    }

    pub fn function_call(name: impl Into<String>, args: Value) -> Self {
        Self {
            text: None,
            function_call: Some(FunctionCall { name: name.into(), args }),
        }
    }

    pub fn kind(&self) -> PartKind<'_> {
        if let Some(call) = &self.function_call {
            return PartKind::FunctionCall(call);
        }
        match self.text.as_deref() {
            Some(text) if !text.is_empty() => PartKind::Text(text),
            _ => PartKind::Unrecognized,
        }
    }
}

impl From<&Turn> for Content {
    fn from(turn: &Turn) -> Self {
        Self {
            role: Some(turn.role.as_str().to_string()),
            parts: vec![Part::text(turn.content.clone())],
        }
    }
}

impl GenerateResponse {
    /// Parts of the first candidate, the only one this agent reads.
    pub fn first_parts(&self) -> Option<&[Part]> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.as_slice())
    }
}

// ============================================================================
// CLIENT
// ============================================================================

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// One round trip: the whole conversation plus the advertised tools.
    async fn complete(
        &self,
        turns: &[Turn],
        tools: &[FunctionDeclaration],
    ) -> Result<GenerateResponse, CompletionError>;
}

#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        }
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn complete(
        &self,
        turns: &[Turn],
        tools: &[FunctionDeclaration],
    ) -> Result<GenerateResponse, CompletionError> {
        let request = GenerateRequest {
            contents: turns.iter().map(Content::from).collect(),
            tools: if tools.is_empty() {
                vec![]
            } else {
                vec![ToolSet { function_declarations: tools }]
            },
        };

        tracing::debug!(model = %self.model, turns = turns.len(), tools = tools.len(), "Calling generateContent");

        let response = self.client
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(CompletionError::Rejected { status: status.as_u16(), message });
        }

        let response: GenerateResponse = serde_json::from_str(&body)?;
        tracing::debug!(candidates = response.candidates.len(), "Received response");
        Ok(response)
    }
}
