use serde_json::Value;

/// How a single turn ended. Every variant is terminal for that turn; the
/// loop reads the next line whatever happened.
#[derive(Clone, Debug, PartialEq)]
pub enum TurnEvent {
    ToolResult {
        tool: String,
        result: Value,
    },
    Reply {
        content: String,
    },
    RemoteFailure {
        message: String,
    },
    NoCandidates,
    NoContentParts,
    ToolNotFound {
        tool: String,
    },
    InvalidArguments {
        tool: String,
        reason: String,
    },
    UnexpectedFormat,
}

impl TurnEvent {
    /// Whether the turn added anything beyond the user's own message.
    pub fn recorded(&self) -> bool {
        matches!(self, TurnEvent::ToolResult { .. } | TurnEvent::Reply { .. })
    }
}
