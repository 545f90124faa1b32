use anyhow::Result;
use serde_json::Value;
use std::io::{self, BufRead, Write};

use crate::client::CompletionClient;
use crate::conversation::Conversation;
use crate::dispatcher::Dispatcher;
use crate::events::TurnEvent;

pub const BANNER: &str = "🤖 Gemini Agent Ready! (type 'exit' to quit)";
pub const PROMPT: &str = "👉 Ask me anything: ";
pub const EXIT_COMMAND: &str = "exit";

pub async fn interactive_chat<C: CompletionClient>(dispatcher: &Dispatcher<C>) -> Result<()> {
    let mut conversation = Conversation::new();
    let stdin = io::stdin();
    let stdout = io::stdout();

    run(dispatcher, &mut conversation, &mut stdin.lock(), &mut stdout.lock()).await
}

/// Reads one line at a time until `exit` (any case) or end of input. Turns
/// are handled strictly one after another.
pub async fn run<C, R, W>(
    dispatcher: &Dispatcher<C>,
    conversation: &mut Conversation,
    input: &mut R,
    output: &mut W,
) -> Result<()>
where
    C: CompletionClient,
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}\n", BANNER)?;

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        // Bytes that are not UTF-8 are replaced rather than ending the session
        let mut buf = Vec::new();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(output)?;
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\r', '\n']);

        if line.eq_ignore_ascii_case(EXIT_COMMAND) {
            break;
        }

        let event = dispatcher.handle(conversation, line).await;
        render(&event, output)?;
    }

    tracing::debug!(turns = conversation.len(), "Chat loop finished");
    Ok(())
}

pub fn render(event: &TurnEvent, out: &mut impl Write) -> io::Result<()> {
    match event {
        TurnEvent::ToolResult { tool, result } => {
            writeln!(out, "🔧 {} => {}", tool, display_value(result))
        }
        TurnEvent::Reply { content } => writeln!(out, "🤖 {}", content),
        TurnEvent::RemoteFailure { message } => {
            writeln!(out, "⚠️ Error calling Gemini: {}", message)
        }
        TurnEvent::NoCandidates => writeln!(out, "⚠️ No valid response from Gemini"),
        TurnEvent::NoContentParts => writeln!(out, "⚠️ No content parts in response"),
        TurnEvent::ToolNotFound { tool } => writeln!(out, "❌ Function not found: {}", tool),
        TurnEvent::InvalidArguments { tool, reason } => {
            writeln!(out, "⚠️ Invalid arguments for {}: {}", tool, reason)
        }
        TurnEvent::UnexpectedFormat => writeln!(out, "⚠️ Unexpected response format"),
    }
}

// Strings print bare, like the console would show them.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
