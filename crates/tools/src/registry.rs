use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;

use crate::error::ToolError;
use crate::schemas::{FunctionDeclaration, ToolHandler, ToolSchema};
use crate::toolbelts::{calculator, market};

static TOOL_REGISTRY: Lazy<HashMap<&'static str, ToolHandler>> = Lazy::new(|| {
    let mut map = HashMap::new();

    for (name, handler) in calculator::TOOL_ENTRIES {
        map.insert(*name, *handler);
    }
    for (name, handler) in market::TOOL_ENTRIES {
        map.insert(*name, *handler);
    }

    map
});

static TOOL_SCHEMAS: Lazy<Vec<ToolSchema>> = Lazy::new(|| {
    let mut schemas = Vec::new();
    schemas.extend(calculator::TOOL_SCHEMAS.iter().cloned());
    schemas.extend(market::TOOL_SCHEMAS.iter().cloned());
    schemas
});

/// Looks up the handler for `name`. `None` means the tool is not registered.
pub fn get_tool(name: &str) -> Option<ToolHandler> {
    TOOL_REGISTRY.get(name).copied()
}

pub fn use_tool(name: &str, args: &Value) -> Result<Value, ToolError> {
    get_tool(name)
        .ok_or_else(|| ToolError::NotFound(name.to_string()))
        .and_then(|handler| handler(args))
}

pub fn get_tools() -> Vec<FunctionDeclaration> {
    TOOL_SCHEMAS.iter().map(|s| s.to_declaration()).collect()
}
