// crates/tools/src/macros.rs

/// Declares the tools a toolbelt exposes.
///
/// Every tool names the toolbelt method that implements it and the typed
/// record its arguments deserialize into. The expansion provides a lazily
/// built `INSTANCE`, one `<method>_handler` per tool that validates the raw
/// arguments before calling the method, and the `TOOL_ENTRIES` and
/// `TOOL_SCHEMAS` tables the registry is assembled from.
#[macro_export]
macro_rules! register_toolbelt {
    (
        $toolbelt_type:ty {
            description: $toolbelt_desc:literal,
            tools: {
                $(
                    $name:literal => $method:ident($args:ty) {
                        description: $desc:literal,
                        params: [$($param_name:literal: $param_type:literal => $param_desc:literal),* $(,)?]
                    }
                ),* $(,)?
            }
        }
    ) => {
        use once_cell::sync::Lazy;

        pub static INSTANCE: Lazy<$toolbelt_type> = Lazy::new(<$toolbelt_type>::default);

        $(
            paste::paste! {
                pub fn [<$method _handler>](
                    args: &serde_json::Value,
                ) -> Result<serde_json::Value, $crate::error::ToolError> {
                    let args = <$args as serde::Deserialize>::deserialize(args).map_err(|e| {
                        $crate::error::ToolError::InvalidArguments {
                            tool: $name,
                            reason: e.to_string(),
                        }
                    })?;
                    Ok(INSTANCE.$method(args))
                }
            }
        )*

        paste::paste! {
            pub static TOOL_ENTRIES: &[(&str, $crate::schemas::ToolHandler)] = &[
                $(($name, [<$method _handler>])),*
            ];
        }

        pub static TOOL_SCHEMAS: Lazy<Vec<$crate::schemas::ToolSchema>> = Lazy::new(|| vec![
            $(
                $crate::schemas::ToolSchema {
                    name: $name,
                    description: $desc,
                    parameters: vec![
                        $(
                            $crate::schemas::ParameterSchema {
                                name: $param_name,
                                type_name: $param_type,
                                description: $param_desc,
                                required: true,
                            }
                        ),*
                    ],
                }
            ),*
        ]);
    };
}
