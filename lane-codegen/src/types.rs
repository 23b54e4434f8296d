//! Option type resolution.
//!
//! [`resolve_option`] turns one [`OptionDescriptor`] into a language-agnostic
//! [`ResolvedOption`]: the value type, a default literal coerced to that
//! type, and optionality. A [`TypeMapper`] then renders it for a target
//! language.

use lanebridge_ir::{OptionDescriptor, SemanticType};
use serde_json::Value;

/// The value types the scripting surface understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    String,
    Bool,
    Int,
    /// Sequence of strings.
    Array,
    /// Mapping of string to string.
    Map,
}

impl ValueType {
    /// Map a known semantic type; `None` for [`SemanticType::Unknown`].
    pub fn from_semantic(ty: &SemanticType) -> Option<Self> {
        match ty {
            SemanticType::String => Some(ValueType::String),
            SemanticType::Bool => Some(ValueType::Bool),
            SemanticType::Int => Some(ValueType::Int),
            SemanticType::Array => Some(ValueType::Array),
            SemanticType::Map => Some(ValueType::Map),
            SemanticType::Unknown(_) => None,
        }
    }
}

/// A default value, already coerced to its option's [`ValueType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    String(String),
    Bool(bool),
    Int(i64),
    Array(Vec<String>),
    Map(Vec<(String, String)>),
}

/// Result of resolving one option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOption {
    pub ty: ValueType,
    pub default: Option<Literal>,
    pub optional: bool,
    /// The declared tag, when it was not recognised and `String` was used instead.
    pub unrecognized: Option<String>,
}

impl ResolvedOption {
    /// Whether the rendered parameter carries the "no value" default.
    pub fn is_nilable(&self) -> bool {
        self.optional && self.default.is_none()
    }
}

/// Resolve an option's type, default literal and optionality.
///
/// A declared type wins; otherwise the type is inferred from the default
/// value's shape, falling back to `String`. Options without declared type and
/// default, and options whose default cannot be coerced, become optional.
pub fn resolve_option(option: &OptionDescriptor) -> ResolvedOption {
    let (ty, unrecognized) = match &option.declared_type {
        Some(SemanticType::Unknown(tag)) => (ValueType::String, Some(tag.clone())),
        Some(declared) => (
            ValueType::from_semantic(declared).unwrap_or(ValueType::String),
            None,
        ),
        None => (
            option
                .default_value
                .as_ref()
                .and_then(SemanticType::of_value)
                .as_ref()
                .and_then(ValueType::from_semantic)
                .unwrap_or(ValueType::String),
            None,
        ),
    };

    let default = option
        .default_value
        .as_ref()
        .and_then(|value| coerce(value, ty));

    let untyped_without_default = option.default_value.is_none() && option.declared_type.is_none();
    let dropped_default = option.default_value.is_some() && default.is_none();

    ResolvedOption {
        ty,
        default,
        optional: option.optional || untyped_without_default || dropped_default,
        unrecognized,
    }
}

fn coerce(value: &Value, ty: ValueType) -> Option<Literal> {
    match (ty, value) {
        (_, Value::Null) => None,
        (ValueType::String, Value::String(s)) => Some(Literal::String(s.clone())),
        (ValueType::String, other) => Some(Literal::String(other.to_string())),
        (ValueType::Bool, Value::Bool(b)) => Some(Literal::Bool(*b)),
        (ValueType::Bool, Value::String(s)) => match s.to_ascii_lowercase().as_str() {
            "true" => Some(Literal::Bool(true)),
            "false" => Some(Literal::Bool(false)),
            _ => None,
        },
        (ValueType::Bool, _) => None,
        (ValueType::Int, Value::Number(n)) => n.as_i64().map(Literal::Int),
        (ValueType::Int, Value::String(s)) => s.trim().parse().ok().map(Literal::Int),
        (ValueType::Int, _) => None,
        (ValueType::Array, Value::Array(items)) => {
            Some(Literal::Array(items.iter().map(scalar_text).collect()))
        }
        (ValueType::Array, Value::Object(_)) => None,
        (ValueType::Array, scalar) => Some(Literal::Array(vec![scalar_text(scalar)])),
        (ValueType::Map, Value::Object(map)) => {
            let mut pairs: Vec<(String, String)> = map
                .iter()
                .map(|(k, v)| (k.clone(), scalar_text(v)))
                .collect();
            pairs.sort();
            Some(Literal::Map(pairs))
        }
        (ValueType::Map, _) => None,
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// A parameter rendered for a target language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedParam {
    pub ty: String,
    pub default: Option<String>,
    pub optional: bool,
}

/// Trait for rendering resolved types and literals in a target language.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Map a value type to a language-specific type string
    fn map_type(&self, ty: ValueType) -> &'static str;

    /// Map an optional value type (e.g. `String?` in Swift)
    fn map_optional_type(&self, ty: ValueType) -> String;

    /// Render a default literal
    fn literal(&self, literal: &Literal) -> String;

    /// The "no value" token
    fn none_literal(&self) -> &'static str;

    /// Render a resolved option as `(type, default literal, optional)`.
    fn map_option(&self, option: &ResolvedOption) -> MappedParam {
        if option.is_nilable() {
            MappedParam {
                ty: self.map_optional_type(option.ty),
                default: Some(self.none_literal().to_string()),
                optional: true,
            }
        } else {
            MappedParam {
                ty: self.map_type(option.ty).to_string(),
                default: option.default.as_ref().map(|lit| self.literal(lit)),
                optional: option.optional,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_declared_type_wins() {
        let resolved = resolve_option(
            &OptionDescriptor::new("path").typed(SemanticType::String),
        );
        assert_eq!(resolved.ty, ValueType::String);
        assert_eq!(resolved.default, None);
        assert!(!resolved.optional);
        assert!(!resolved.is_nilable());
    }

    #[test]
    fn test_infer_bool_from_default() {
        let resolved = resolve_option(&OptionDescriptor::new("clean").default_value(true));
        assert_eq!(resolved.ty, ValueType::Bool);
        assert_eq!(resolved.default, Some(Literal::Bool(true)));
        assert!(!resolved.optional);
    }

    #[test]
    fn test_infer_array_from_default() {
        let resolved =
            resolve_option(&OptionDescriptor::new("devices").default_value(json!(["a", "b"])));
        assert_eq!(resolved.ty, ValueType::Array);
        assert_eq!(
            resolved.default,
            Some(Literal::Array(vec!["a".to_string(), "b".to_string()]))
        );
    }

    #[test]
    fn test_no_type_no_default_is_optional_string() {
        let resolved = resolve_option(&OptionDescriptor::new("workspace"));
        assert_eq!(resolved.ty, ValueType::String);
        assert!(resolved.optional);
        assert!(resolved.is_nilable());
    }

    #[test]
    fn test_optional_with_default_is_not_nilable() {
        let resolved = resolve_option(
            &OptionDescriptor::new("output_directory")
                .optional()
                .default_value("."),
        );
        assert!(resolved.optional);
        assert!(!resolved.is_nilable());
        assert_eq!(resolved.default, Some(Literal::String(".".to_string())));
    }

    #[test]
    fn test_unknown_tag_falls_back_to_string() {
        let resolved = resolve_option(
            &OptionDescriptor::new("timeout").typed(SemanticType::parse("float")),
        );
        assert_eq!(resolved.ty, ValueType::String);
        assert_eq!(resolved.unrecognized.as_deref(), Some("float"));
        assert!(!resolved.optional);
    }

    #[test]
    fn test_coercions() {
        let int_from_string = resolve_option(
            &OptionDescriptor::new("retries")
                .typed(SemanticType::Int)
                .default_value("3"),
        );
        assert_eq!(int_from_string.default, Some(Literal::Int(3)));

        let string_from_number = resolve_option(
            &OptionDescriptor::new("version")
                .typed(SemanticType::String)
                .default_value(2),
        );
        assert_eq!(string_from_number.default, Some(Literal::String("2".to_string())));

        let float_default = resolve_option(&OptionDescriptor::new("ratio").default_value(1.5));
        assert_eq!(float_default.ty, ValueType::String);
        assert_eq!(float_default.default, Some(Literal::String("1.5".to_string())));

        let scalar_array = resolve_option(
            &OptionDescriptor::new("only_testing")
                .typed(SemanticType::Array)
                .default_value("UITests"),
        );
        assert_eq!(
            scalar_array.default,
            Some(Literal::Array(vec!["UITests".to_string()]))
        );
    }

    #[test]
    fn test_uncoercible_default_becomes_optional() {
        let resolved = resolve_option(
            &OptionDescriptor::new("clean")
                .typed(SemanticType::Bool)
                .default_value("sometimes"),
        );
        assert_eq!(resolved.default, None);
        assert!(resolved.is_nilable());
    }

    #[test]
    fn test_map_default_is_sorted_by_key() {
        let resolved = resolve_option(
            &OptionDescriptor::new("env").default_value(json!({"b": "2", "a": 1})),
        );
        assert_eq!(resolved.ty, ValueType::Map);
        assert_eq!(
            resolved.default,
            Some(Literal::Map(vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string()),
            ]))
        );
    }
}
