//! Swift type mapper implementation.

use lanebridge_codegen::{Literal, TypeMapper, ValueType};
use lanebridge_core::escape_string;

/// Swift type mapper implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct SwiftTypeMapper;

impl TypeMapper for SwiftTypeMapper {
    fn language(&self) -> &'static str {
        "swift"
    }

    fn map_type(&self, ty: ValueType) -> &'static str {
        match ty {
            ValueType::String => "String",
            ValueType::Bool => "Bool",
            ValueType::Int => "Int",
            ValueType::Array => "[String]",
            ValueType::Map => "[String : String]",
        }
    }

    fn map_optional_type(&self, ty: ValueType) -> String {
        format!("{}?", self.map_type(ty))
    }

    fn literal(&self, literal: &Literal) -> String {
        match literal {
            Literal::String(s) => quote(s),
            Literal::Bool(b) => b.to_string(),
            Literal::Int(i) => i.to_string(),
            Literal::Array(items) => {
                let items: Vec<String> = items.iter().map(|item| quote(item)).collect();
                format!("[{}]", items.join(", "))
            }
            Literal::Map(pairs) if pairs.is_empty() => "[:]".to_string(),
            Literal::Map(pairs) => {
                let pairs: Vec<String> = pairs
                    .iter()
                    .map(|(k, v)| format!("{}: {}", quote(k), quote(v)))
                    .collect();
                format!("[{}]", pairs.join(", "))
            }
        }
    }

    fn none_literal(&self) -> &'static str {
        "nil"
    }
}

fn quote(s: &str) -> String {
    format!("\"{}\"", escape_string(s))
}

#[cfg(test)]
mod tests {
    use lanebridge_codegen::{ResolvedOption, resolve_option};
    use lanebridge_ir::{OptionDescriptor, SemanticType};

    use super::*;

    #[test]
    fn test_swift_types() {
        let mapper = SwiftTypeMapper;

        assert_eq!(mapper.map_type(ValueType::String), "String");
        assert_eq!(mapper.map_type(ValueType::Bool), "Bool");
        assert_eq!(mapper.map_type(ValueType::Int), "Int");
        assert_eq!(mapper.map_type(ValueType::Array), "[String]");
        assert_eq!(mapper.map_type(ValueType::Map), "[String : String]");
        assert_eq!(mapper.map_optional_type(ValueType::Array), "[String]?");
    }

    #[test]
    fn test_swift_literals() {
        let mapper = SwiftTypeMapper;

        assert_eq!(
            mapper.literal(&Literal::String(r#"say "hi""#.to_string())),
            r#""say \"hi\"""#
        );
        assert_eq!(mapper.literal(&Literal::Bool(false)), "false");
        assert_eq!(mapper.literal(&Literal::Int(-3)), "-3");
        assert_eq!(mapper.literal(&Literal::Array(vec![])), "[]");
        assert_eq!(
            mapper.literal(&Literal::Array(vec!["a".into(), "b".into()])),
            r#"["a", "b"]"#
        );
        assert_eq!(mapper.literal(&Literal::Map(vec![])), "[:]");
        assert_eq!(
            mapper.literal(&Literal::Map(vec![("k".into(), "v".into())])),
            r#"["k": "v"]"#
        );
    }

    #[test]
    fn test_map_option() {
        let mapper = SwiftTypeMapper;

        let required = mapper.map_option(&resolve_option(
            &OptionDescriptor::new("path").typed(SemanticType::String),
        ));
        assert_eq!(required.ty, "String");
        assert_eq!(required.default, None);
        assert!(!required.optional);

        let nilable = mapper.map_option(&resolve_option(&OptionDescriptor::new("workspace")));
        assert_eq!(nilable.ty, "String?");
        assert_eq!(nilable.default.as_deref(), Some("nil"));

        let defaulted = mapper.map_option(&ResolvedOption {
            ty: ValueType::Bool,
            default: Some(Literal::Bool(false)),
            optional: true,
            unrecognized: None,
        });
        assert_eq!(defaulted.ty, "Bool");
        assert_eq!(defaulted.default.as_deref(), Some("false"));
    }
}
