use sidekick_tools::{registry as tool_registry, ToolError};

use crate::client::{CompletionClient, FunctionCall, PartKind};
use crate::conversation::{Conversation, Turn};
use crate::events::TurnEvent;

pub struct Dispatcher<C> {
    client: C,
}

impl<C: CompletionClient> Dispatcher<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Runs one user turn: record the input, ask the model, act on the first
    /// part of its first candidate.
    ///
    /// The user turn stays recorded whatever the outcome.
    pub async fn handle(&self, conversation: &mut Conversation, user_text: &str) -> TurnEvent {
        conversation.append(Turn::user(user_text));

        let tools = tool_registry::get_tools();
        let response = match self.client.complete(conversation.snapshot(), &tools).await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("Completion failed: {}", e);
                return TurnEvent::RemoteFailure { message: e.to_string() };
            }
        };

        if response.candidates.is_empty() {
            return TurnEvent::NoCandidates;
        }

        let parts = match response.first_parts() {
            Some(parts) if !parts.is_empty() => parts,
            _ => return TurnEvent::NoContentParts,
        };

        if parts.len() > 1 {
            tracing::debug!(ignored = parts.len() - 1, "Only the first response part is handled");
        }

        let event = match parts[0].kind() {
            PartKind::FunctionCall(call) => self.dispatch_call(conversation, call),
            PartKind::Text(text) => {
                conversation.append(Turn::model(text));
                TurnEvent::Reply { content: text.to_string() }
            }
            PartKind::Unrecognized => TurnEvent::UnexpectedFormat,
        };

        tracing::debug!(recorded = event.recorded(), turns = conversation.len(), "Turn complete");
        event
    }

    fn dispatch_call(&self, conversation: &mut Conversation, call: &FunctionCall) -> TurnEvent {
        tracing::info!(tool = %call.name, args = %call.args, "Calling tool");

        match tool_registry::use_tool(&call.name, &call.args) {
            Ok(result) => {
                conversation.append(Turn::function(result.to_string()));
                TurnEvent::ToolResult { tool: call.name.clone(), result }
            }
            Err(ToolError::InvalidArguments { tool, reason }) => {
                tracing::debug!(tool, %reason, "Rejected tool arguments");
                TurnEvent::InvalidArguments { tool: tool.to_string(), reason }
            }
            Err(ToolError::NotFound(tool)) => {
                tracing::debug!(%tool, "Model requested unknown tool");
                TurnEvent::ToolNotFound { tool }
            }
        }
    }
}
