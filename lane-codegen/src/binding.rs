//! Binding specifications derived from action descriptors.
//!
//! A [`BindingSpec`] is the language-agnostic plan for one action: its
//! parameters after ignore rules and type resolution, and whether it is a
//! plain function or a tool with an overridable configuration surface.

use lanebridge_ir::{ActionDescriptor, IgnoreRules, ToolCatalog, ToolConfig};

use crate::types::{ResolvedOption, ValueType, resolve_option};

/// One emitted parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    /// Option key as the registry knows it (sent across the process boundary).
    pub key: String,
    pub description: String,
    pub option: ResolvedOption,
}

/// A free function binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainBinding {
    /// Action name.
    pub action: String,
    pub description: Option<String>,
    pub params: Vec<ParamSpec>,
    pub returns: Option<ValueType>,
    /// Unrecognized return type tag, reported like unrecognized option types.
    pub unrecognized_return: Option<String>,
}

impl PlainBinding {
    /// `(key, tag)` pairs of options whose declared type was not recognised.
    pub fn unrecognized_types(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().filter_map(|param| {
            param
                .option
                .unrecognized
                .as_deref()
                .map(|tag| (param.key.as_str(), tag))
        })
    }
}

/// A tool binding: an interface with default implementations, a concrete
/// adapter class and a registry object, plus the function itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolBinding {
    pub function: PlainBinding,
    pub tool: ToolConfig,
}

impl ToolBinding {
    pub fn protocol_name(&self) -> String {
        self.tool.protocol_name()
    }

    pub fn class_name(&self) -> String {
        self.tool.class_name()
    }

    pub fn object_name(&self) -> String {
        self.tool.object_name()
    }
}

/// The binding planned for one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingSpec {
    Plain(PlainBinding),
    Tool(ToolBinding),
}

impl BindingSpec {
    /// Plan the binding for an action.
    ///
    /// Returns `None` when the action exposes no option metadata at all.
    pub fn from_action(
        action: &ActionDescriptor,
        ignore: &IgnoreRules,
        catalog: &ToolCatalog,
    ) -> Option<Self> {
        let options = action.available_options.as_ref()?;

        let params = options
            .iter()
            .filter(|option| !ignore.is_ignored(&action.name, &option.key))
            .map(|option| ParamSpec {
                key: option.key.clone(),
                description: option.description.clone(),
                option: resolve_option(option),
            })
            .collect();

        let (returns, unrecognized_return) = match &action.return_type {
            None => (None, None),
            Some(ty) => match ValueType::from_semantic(ty) {
                Some(value_type) => (Some(value_type), None),
                None => (Some(ValueType::String), Some(ty.as_str().to_string())),
            },
        };

        let function = PlainBinding {
            action: action.name.clone(),
            description: action.description.clone(),
            params,
            returns,
            unrecognized_return,
        };

        Some(match catalog.tool_for(&action.name) {
            Some(tool) => BindingSpec::Tool(ToolBinding {
                function,
                tool: tool.clone(),
            }),
            None => BindingSpec::Plain(function),
        })
    }

    /// The function part, shared by both kinds.
    pub fn function(&self) -> &PlainBinding {
        match self {
            BindingSpec::Plain(function) => function,
            BindingSpec::Tool(tool) => &tool.function,
        }
    }

    pub fn as_tool(&self) -> Option<&ToolBinding> {
        match self {
            BindingSpec::Tool(tool) => Some(tool),
            BindingSpec::Plain(_) => None,
        }
    }

    pub fn is_tool(&self) -> bool {
        self.as_tool().is_some()
    }
}

#[cfg(test)]
mod tests {
    use lanebridge_ir::{OptionDescriptor, SemanticType};

    use super::*;
    use crate::testing;

    #[test]
    fn test_plain_binding_keeps_option_order() {
        let spec = BindingSpec::from_action(
            &testing::upload_action(),
            &IgnoreRules::none(),
            &ToolCatalog::defaults(),
        )
        .unwrap();

        assert!(!spec.is_tool());
        let keys: Vec<_> = spec.function().params.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, ["path", "verbose"]);
    }

    #[test]
    fn test_ignored_options_are_dropped() {
        let ignore = IgnoreRules::none().ignore("upload", ["verbose"]);
        let spec =
            BindingSpec::from_action(&testing::upload_action(), &ignore, &ToolCatalog::empty())
                .unwrap();

        assert!(spec.function().params.iter().all(|p| p.key != "verbose"));
        assert_eq!(spec.function().params.len(), 1);
    }

    #[test]
    fn test_tool_classification_is_case_insensitive() {
        let action = ActionDescriptor::new("Gym").option(OptionDescriptor::new("scheme"));
        let spec =
            BindingSpec::from_action(&action, &IgnoreRules::none(), &ToolCatalog::defaults())
                .unwrap();

        let tool = spec.as_tool().unwrap();
        assert_eq!(tool.class_name(), "Gymfile");
        assert_eq!(tool.protocol_name(), "GymfileProtocol");
        assert_eq!(tool.object_name(), "gymfile");
    }

    #[test]
    fn test_catalog_removal_demotes_to_plain() {
        let mut catalog = ToolCatalog::defaults();
        catalog.remove("gym");
        let spec =
            BindingSpec::from_action(&testing::gym_action(), &IgnoreRules::none(), &catalog)
                .unwrap();
        assert!(!spec.is_tool());
    }

    #[test]
    fn test_action_without_options_is_skipped() {
        let action = ActionDescriptor::without_options("puts");
        assert!(
            BindingSpec::from_action(&action, &IgnoreRules::none(), &ToolCatalog::defaults())
                .is_none()
        );
    }

    #[test]
    fn test_empty_option_list_still_binds() {
        let action = ActionDescriptor::new("clear_derived_data");
        let spec =
            BindingSpec::from_action(&action, &IgnoreRules::none(), &ToolCatalog::defaults())
                .unwrap();
        assert!(spec.function().params.is_empty());
    }

    #[test]
    fn test_unrecognized_types_are_reported() {
        let action = ActionDescriptor::new("measure")
            .option(OptionDescriptor::new("ratio").typed(SemanticType::parse("float")))
            .returns(SemanticType::parse("object"));
        let spec =
            BindingSpec::from_action(&action, &IgnoreRules::none(), &ToolCatalog::empty())
                .unwrap();

        let unrecognized: Vec<_> = spec.function().unrecognized_types().collect();
        assert_eq!(unrecognized, [("ratio", "float")]);
        assert_eq!(spec.function().returns, Some(ValueType::String));
        assert_eq!(spec.function().unrecognized_return.as_deref(), Some("object"));
    }
}
