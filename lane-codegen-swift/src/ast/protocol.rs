//! Swift protocols and their default-implementing extensions.

use lanebridge_codegen::{CodeFragment, Renderable};

/// A read-only property requirement.
#[derive(Debug, Clone)]
pub struct Property {
    pub name: String,
    pub ty: String,
    /// Value returned by the default implementation.
    pub default: String,
    pub doc: Option<String>,
    pub comment: Option<String>,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            default: default.into(),
            doc: None,
            comment: None,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// A class-bound protocol listing read-only properties.
#[derive(Debug, Clone)]
pub struct Protocol {
    name: String,
    properties: Vec<Property>,
}

impl Protocol {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    pub fn properties(mut self, properties: impl IntoIterator<Item = Property>) -> Self {
        self.properties.extend(properties);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The extension giving every property its default value.
    pub fn default_extension(&self) -> Extension {
        Extension {
            name: self.name.clone(),
            properties: self.properties.clone(),
        }
    }
}

impl Renderable for Protocol {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let header = format!("protocol {}: AnyObject", self.name);
        if self.properties.is_empty() {
            return vec![CodeFragment::line(format!("{} {{}}", header))];
        }

        let mut body = Vec::new();
        for property in &self.properties {
            if let Some(doc) = &property.doc {
                body.push(CodeFragment::doc(doc));
            }
            if let Some(comment) = &property.comment {
                body.push(CodeFragment::comment(comment));
            }
            body.push(CodeFragment::line(format!(
                "var {}: {} {{ get }}",
                property.name, property.ty
            )));
        }
        vec![CodeFragment::braced(format!("{} {{", header), body)]
    }
}

/// `extension <Protocol> { var x: T { return <default> } ... }`.
#[derive(Debug, Clone)]
pub struct Extension {
    name: String,
    properties: Vec<Property>,
}

impl Renderable for Extension {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let header = format!("extension {}", self.name);
        if self.properties.is_empty() {
            return vec![CodeFragment::line(format!("{} {{}}", header))];
        }

        let body = self
            .properties
            .iter()
            .map(|p| {
                CodeFragment::line(format!("var {}: {} {{ return {} }}", p.name, p.ty, p.default))
            })
            .collect();
        vec![CodeFragment::braced(format!("{} {{", header), body)]
    }
}

#[cfg(test)]
mod tests {
    use lanebridge_codegen::CodeBuilder;

    use super::*;

    #[test]
    fn test_protocol_and_extension() {
        let protocol = Protocol::new("GymfileProtocol")
            .property(Property::new("workspace", "String?", "nil").doc("Path to the workspace file"))
            .property(Property::new("clean", "Bool", "false"));

        let mut builder = CodeBuilder::swift();
        builder.emit(&protocol);
        builder.push_blank();
        builder.emit(&protocol.default_extension());

        insta::assert_snapshot!(builder.build(), @r"
        protocol GymfileProtocol: AnyObject {
          /// Path to the workspace file
          var workspace: String? { get }
          var clean: Bool { get }
        }

        extension GymfileProtocol {
          var workspace: String? { return nil }
          var clean: Bool { return false }
        }
        ");
    }

    #[test]
    fn test_empty_protocol() {
        let protocol = Protocol::new("AppfileProtocol");
        let mut builder = CodeBuilder::swift();
        builder.emit(&protocol).emit(&protocol.default_extension());
        assert_eq!(
            builder.build(),
            "protocol AppfileProtocol: AnyObject {}\nextension AppfileProtocol {}\n"
        );
    }
}
