//! Actions.swift aggregate file generator.

use std::path::{Path, PathBuf};

use lanebridge_core::{FileRules, GeneratedFile};

use crate::{
    ast::Func,
    decoders::DECODERS,
    swift_file::{RawCode, SwiftFile},
};

/// The aggregate file: every function, the decoders and the tool registry objects.
pub struct ActionsSwift {
    functions: Vec<Func>,
    /// `(object name, class name)` per tool, in registry order.
    tools: Vec<(String, String)>,
}

impl ActionsSwift {
    pub const FILE_NAME: &'static str = "Actions.swift";

    pub fn new(functions: Vec<Func>) -> Self {
        Self {
            functions,
            tools: Vec::new(),
        }
    }

    pub fn tool(mut self, object_name: impl Into<String>, class_name: impl Into<String>) -> Self {
        self.tools.push((object_name.into(), class_name.into()));
        self
    }
}

impl GeneratedFile for ActionsSwift {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(Self::FILE_NAME)
    }

    fn rules(&self) -> FileRules {
        FileRules::always()
    }

    fn render(&self) -> String {
        let registry = RawCode::lines(
            self.tools
                .iter()
                .map(|(object, class)| format!("let {}: {} = {}()", object, class, class)),
        );

        let mut file = SwiftFile::new()
            .import("Foundation")
            .add(RawCode::new(
                "// Generated by lanebridge. Changes are discarded on the next generation pass.",
            ))
            .add_all(self.functions.iter().cloned())
            .add(RawCode::new(DECODERS));
        if !self.tools.is_empty() {
            file = file.add(registry);
        }
        file.render()
    }
}
