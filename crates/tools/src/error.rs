use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Tool '{0}' not found")]
    NotFound(String),

    #[error("invalid arguments for '{tool}': {reason}")]
    InvalidArguments { tool: &'static str, reason: String },
}
