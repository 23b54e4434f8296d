//! `<Tool>file.swift` concrete adapter generator.

use std::path::{Path, PathBuf};

use lanebridge_core::{FileRules, GeneratedFile, GenerationStamp};

use crate::{ast::Class, swift_file::SwiftFile};

/// The empty class adopting a tool protocol.
///
/// Users replace it by placing a file with the same name in their
/// configuration folder; the generated copy is then not written.
pub struct AdapterSwift {
    class_name: String,
    protocol_name: String,
    stamp: GenerationStamp,
    override_dir: Option<PathBuf>,
}

impl AdapterSwift {
    pub fn new(
        class_name: impl Into<String>,
        protocol_name: impl Into<String>,
        stamp: GenerationStamp,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            protocol_name: protocol_name.into(),
            stamp,
            override_dir: None,
        }
    }

    /// Folder holding user-authored replacements.
    pub fn override_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.override_dir = Some(dir.into());
        self
    }

    pub fn file_name(&self) -> String {
        format!("{}.swift", self.class_name)
    }
}

impl GeneratedFile for AdapterSwift {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.file_name())
    }

    fn rules(&self) -> FileRules {
        match &self.override_dir {
            Some(dir) => FileRules::unless_overridden(dir.join(self.file_name())),
            None => FileRules::always(),
        }
    }

    fn render(&self) -> String {
        SwiftFile::new()
            .header("This class is automatically included in the runner during build")
            .header(format!(
                "If you have a custom {}, this file will be replaced by it",
                self.file_name()
            ))
            .header("Don't modify this file unless you know what you're doing")
            .header("*** This file will be overwritten or replaced during build time ***")
            .header("")
            .header(format!(
                "Generated at {} with lanebridge {}",
                self.stamp.timestamp(),
                self.stamp.version()
            ))
            .add(Class::new(&self.class_name).conforms_to(&self.protocol_name))
            .render()
    }
}
