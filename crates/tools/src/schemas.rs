// crates/tools/src/schemas.rs
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::ToolError;

#[derive(Debug, Clone)]
pub struct ToolSchema {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: Vec<ParameterSchema>,
}

#[derive(Debug, Clone)]
pub struct ParameterSchema {
    pub name: &'static str,
    pub type_name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

/// A tool as advertised to Gemini inside `tools[].functionDeclarations`.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct FunctionDeclaration {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

impl ToolSchema {
    pub fn to_declaration(&self) -> FunctionDeclaration {
        let mut properties = json!({});
        let mut required = vec![];

        for param in &self.parameters {
            properties[param.name] = json!({
                "type": param.type_name,
                "description": param.description
            });
            if param.required {
                required.push(param.name);
            }
        }

        FunctionDeclaration {
            name: self.name.to_string(),
            description: self.description.to_string(),
            parameters: json!({
                "type": "object",
                "properties": properties,
                "required": required
            }),
        }
    }
}

pub type ToolHandler = fn(&Value) -> Result<Value, ToolError>;

/// JSON number for a tool result. Integral values drop the fractional part so
/// `7 + 5` goes back to the model as `12` rather than `12.0`.
pub fn number(value: f64) -> Value {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        json!(value as i64)
    } else {
        json!(value)
    }
}
