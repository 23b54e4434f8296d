//! Action and option descriptors as exported by the action registry.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Semantic type of an option or return value.
///
/// The registry hands out open-ended string tags; they are resolved once into
/// this closed set, with [`SemanticType::Unknown`] keeping the original tag
/// for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SemanticType {
    String,
    Bool,
    Int,
    Array,
    Map,
    Unknown(String),
}

impl SemanticType {
    /// Resolve a registry type tag.
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "string" | "str" => SemanticType::String,
            "bool" | "boolean" => SemanticType::Bool,
            "int" | "integer" => SemanticType::Int,
            "array" | "list" => SemanticType::Array,
            "map" | "hash" | "dictionary" => SemanticType::Map,
            _ => SemanticType::Unknown(tag.to_string()),
        }
    }

    /// Infer the type from the runtime shape of a default value.
    ///
    /// Returns `None` for `null`; floats have no semantic counterpart and
    /// resolve to `String`.
    pub fn of_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Bool(_) => Some(SemanticType::Bool),
            Value::Number(n) if n.is_i64() || n.is_u64() => Some(SemanticType::Int),
            Value::Number(_) | Value::String(_) => Some(SemanticType::String),
            Value::Array(_) => Some(SemanticType::Array),
            Value::Object(_) => Some(SemanticType::Map),
        }
    }

    /// Get the tag used in the registry export.
    pub fn as_str(&self) -> &str {
        match self {
            SemanticType::String => "string",
            SemanticType::Bool => "bool",
            SemanticType::Int => "int",
            SemanticType::Array => "array",
            SemanticType::Map => "map",
            SemanticType::Unknown(tag) => tag,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, SemanticType::Unknown(_))
    }
}

impl From<String> for SemanticType {
    fn from(tag: String) -> Self {
        SemanticType::parse(&tag)
    }
}

impl From<SemanticType> for String {
    fn from(ty: SemanticType) -> Self {
        ty.as_str().to_string()
    }
}

/// One configurable option of an action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionDescriptor {
    /// Option key, unique within its action.
    pub key: String,
    /// Human readable description.
    #[serde(default)]
    pub description: String,
    /// Untyped default value; `None` when absent or `null`.
    #[serde(default, alias = "default")]
    pub default_value: Option<Value>,
    /// Whether the option may be omitted.
    #[serde(default)]
    pub optional: bool,
    /// Declared type; `None` means infer from `default_value`.
    #[serde(default, rename = "type", alias = "data_type")]
    pub declared_type: Option<SemanticType>,
}

impl OptionDescriptor {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: String::new(),
            default_value: None,
            optional: false,
            declared_type: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn typed(mut self, ty: SemanticType) -> Self {
        self.declared_type = Some(ty);
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// Metadata describing one automatable action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionDescriptor {
    /// Lowercase action identifier (e.g. `gym`, `upload_to_testflight`).
    pub name: String,
    /// One-line description used in generated doc comments.
    #[serde(default)]
    pub description: Option<String>,
    /// Ordered options; `None` means the action exposes no option metadata.
    #[serde(default)]
    pub available_options: Option<Vec<OptionDescriptor>>,
    /// Declared return type, if the action returns a value.
    #[serde(default)]
    pub return_type: Option<SemanticType>,
}

impl ActionDescriptor {
    /// Create an action with an empty option list.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            available_options: Some(Vec::new()),
            return_type: None,
        }
    }

    /// Create an action that exposes no option metadata at all.
    pub fn without_options(name: impl Into<String>) -> Self {
        Self {
            available_options: None,
            ..Self::new(name)
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn option(mut self, option: OptionDescriptor) -> Self {
        self.available_options
            .get_or_insert_with(Vec::new)
            .push(option);
        self
    }

    pub fn returns(mut self, ty: SemanticType) -> Self {
        self.return_type = Some(ty);
        self
    }
}
