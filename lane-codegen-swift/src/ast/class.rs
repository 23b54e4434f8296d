//! Swift class declarations.

use lanebridge_codegen::{CodeFragment, Renderable};

/// An empty class conforming to one protocol.
#[derive(Debug, Clone)]
pub struct Class {
    name: String,
    conforms_to: Option<String>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            conforms_to: None,
        }
    }

    pub fn conforms_to(mut self, protocol: impl Into<String>) -> Self {
        self.conforms_to = Some(protocol.into());
        self
    }
}

impl Renderable for Class {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let line = match &self.conforms_to {
            Some(protocol) => format!("class {}: {} {{}}", self.name, protocol),
            None => format!("class {} {{}}", self.name),
        };
        vec![CodeFragment::line(line)]
    }
}
