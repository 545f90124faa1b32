pub mod error;
pub mod macros;
pub mod registry;
pub mod schemas;
pub mod toolbelts;

pub use error::ToolError;
pub use registry::{get_tool, get_tools, use_tool};
pub use schemas::{FunctionDeclaration, ParameterSchema, ToolHandler, ToolSchema};
