//! Turns [`BindingSpec`]s into Swift declarations.

use lanebridge_codegen::{
    BindingSpec, CodeFragment, MappedParam, ParamSpec, PlainBinding, ResolvedOption,
    ToolBinding, TypeMapper,
};
use lanebridge_core::{escape_string, to_camel_case};

use crate::{
    ast::{Func, Param, Property, Protocol},
    decoders::decoder_for,
    naming,
    type_mapper::SwiftTypeMapper,
};

/// Swift declarations for one action.
#[derive(Debug, Clone)]
pub struct EmittedBinding {
    pub action: String,
    /// The call-through function placed in the aggregate file.
    pub function: Func,
    pub tool: Option<EmittedTool>,
    /// Unrecognized type notes, already phrased for the user.
    pub warnings: Vec<String>,
}

/// The extra artifacts of a tool binding.
#[derive(Debug, Clone)]
pub struct EmittedTool {
    pub protocol: Protocol,
    pub class_name: String,
    pub object_name: String,
}

/// Emits Swift functions and tool protocols.
#[derive(Default)]
pub struct BindingEmitter {
    mapper: SwiftTypeMapper,
}

impl BindingEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&self, spec: &BindingSpec) -> EmittedBinding {
        let binding = spec.function();
        let warnings = warnings(binding);

        match spec {
            BindingSpec::Plain(plain) => EmittedBinding {
                action: plain.action.clone(),
                function: self.function(plain, None),
                tool: None,
                warnings,
            },
            BindingSpec::Tool(tool) => EmittedBinding {
                action: tool.function.action.clone(),
                function: self.function(&tool.function, Some(tool)),
                tool: Some(self.tool(tool)),
                warnings,
            },
        }
    }

    fn function(&self, binding: &PlainBinding, tool: Option<&ToolBinding>) -> Func {
        let mut func = Func::new(naming::identifier(&binding.action));

        let description = binding
            .description
            .as_deref()
            .map(single_line)
            .filter(|d| !d.is_empty());
        let has_description = description.is_some();
        if let Some(description) = description {
            func = func.doc(description);
        }
        if has_description && !binding.params.is_empty() {
            func = func.doc("");
        }
        for param in &binding.params {
            let name = to_camel_case(&param.key);
            let description = single_line(&param.description);
            func = func.doc(if description.is_empty() {
                format!("- parameter {}", name)
            } else {
                format!("- parameter {}: {}", name, description)
            });
        }

        for (key, tag) in binding.unrecognized_types() {
            func = func.comment(unrecognized(tag, key));
        }
        if let Some(tag) = &binding.unrecognized_return {
            func = func.comment(format!(
                "unrecognized return type '{}' for '{}', using String",
                tag, binding.action
            ));
        }

        for param in &binding.params {
            let name = naming::identifier(&param.key);
            let param = match tool {
                Some(tool) => {
                    let mapped = self.tool_param(param);
                    Param::new(&name, mapped.ty)
                        .default_value(format!("{}.{}", tool.object_name(), name))
                }
                None => {
                    let mapped = self.mapper.map_option(&param.option);
                    let swift = Param::new(&name, mapped.ty);
                    match mapped.default {
                        Some(default) => swift.default_value(default),
                        None => swift,
                    }
                }
            };
            func = func.param(param);
        }

        func = func.body(command(binding));

        match binding.returns {
            Some(ty) => {
                let call = "runner.executeCommand(command)";
                let value = match decoder_for(ty) {
                    Some(decoder) => format!("{}(fromString: {})", decoder, call),
                    None => call.to_string(),
                };
                func.returns(self.mapper.map_type(ty))
                    .discardable()
                    .body_line(format!("return {}", value))
            }
            None => func.body_line("_ = runner.executeCommand(command)"),
        }
    }

    fn tool(&self, tool: &ToolBinding) -> EmittedTool {
        let properties = tool.function.params.iter().map(|param| {
            let mapped = self.tool_param(param);
            let default = mapped
                .default
                .unwrap_or_else(|| self.mapper.none_literal().to_string());
            let mut property = Property::new(naming::identifier(&param.key), mapped.ty, default);

            let description = single_line(&param.description);
            if !description.is_empty() {
                property = property.doc(description);
            }
            if let Some(tag) = &param.option.unrecognized {
                property = property.comment(unrecognized(tag, &param.key));
            }
            property
        });

        EmittedTool {
            protocol: Protocol::new(tool.protocol_name()).properties(properties),
            class_name: tool.class_name(),
            object_name: tool.object_name(),
        }
    }

    /// A tool property always has an implementation in the protocol
    /// extension, so options without a default become nilable.
    fn tool_param(&self, param: &ParamSpec) -> MappedParam {
        let option = if param.option.default.is_none() {
            ResolvedOption {
                optional: true,
                ..param.option.clone()
            }
        } else {
            param.option.clone()
        };
        self.mapper.map_option(&option)
    }
}

fn command(binding: &PlainBinding) -> CodeFragment {
    let head = format!(
        "let command = RunnerCommand(commandID: \"\", methodName: \"{}\", className: nil, args: [",
        escape_string(&binding.action)
    );

    if binding.params.is_empty() {
        return CodeFragment::line(format!("{}])", head));
    }

    let args = binding
        .params
        .iter()
        .map(|param| {
            CodeFragment::line(format!(
                "RunnerCommand.Argument(name: \"{}\", value: {}),",
                escape_string(&param.key),
                naming::identifier(&param.key)
            ))
        })
        .collect();

    CodeFragment::Block {
        header: head,
        body: args,
        close: Some("])".to_string()),
    }
}

fn warnings(binding: &PlainBinding) -> Vec<String> {
    let mut warnings: Vec<String> = binding
        .unrecognized_types()
        .map(|(key, tag)| format!("{}: {}", binding.action, unrecognized(tag, key)))
        .collect();
    if let Some(tag) = &binding.unrecognized_return {
        warnings.push(format!(
            "{}: unrecognized return type '{}', using String",
            binding.action, tag
        ));
    }
    warnings
}

fn unrecognized(tag: &str, key: &str) -> String {
    format!("unrecognized type '{}' for '{}', using String", tag, key)
}

/// Collapse a multi-line description so it fits a single comment line.
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
