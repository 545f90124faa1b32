use async_trait::async_trait;
use serde_json::Value;
use sidekick_tools::FunctionDeclaration;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::client::{Candidate, CompletionClient, CompletionError, Content, GenerateResponse, Part};
use crate::conversation::Turn;

/// Replays canned responses and records every snapshot it was sent.
pub struct ScriptedClient {
    responses: Mutex<VecDeque<Result<GenerateResponse, CompletionError>>>,
    pub requests: Mutex<Vec<Vec<Turn>>>,
}

impl ScriptedClient {
    pub fn new(responses: Vec<Result<GenerateResponse, CompletionError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    async fn complete(
        &self,
        turns: &[Turn],
        tools: &[FunctionDeclaration],
    ) -> Result<GenerateResponse, CompletionError> {
        assert_eq!(tools.len(), 3, "every registered tool is advertised");
        self.requests.lock().unwrap().push(turns.to_vec());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(rejected()))
    }
}

pub fn rejected() -> CompletionError {
    CompletionError::Rejected { status: 403, message: "permission denied".to_string() }
}

pub fn respond(parts: Vec<Part>) -> Result<GenerateResponse, CompletionError> {
    Ok(GenerateResponse {
        candidates: vec![Candidate {
            content: Some(Content { role: Some("model".to_string()), parts }),
        }],
    })
}

pub fn call(name: &str, args: Value) -> Result<GenerateResponse, CompletionError> {
    respond(vec![Part::function_call(name, args)])
}

