//! `<Tool>fileProtocol.swift` generator.

use std::path::{Path, PathBuf};

use lanebridge_core::{FileRules, GeneratedFile};

use crate::{ast::Protocol, swift_file::SwiftFile};

/// A tool's protocol and its default-implementing extension.
pub struct ProtocolSwift {
    protocol: Protocol,
}

impl ProtocolSwift {
    pub fn new(protocol: Protocol) -> Self {
        Self { protocol }
    }

    pub fn file_name(&self) -> String {
        format!("{}.swift", self.protocol.name())
    }
}

impl GeneratedFile for ProtocolSwift {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.file_name())
    }

    fn rules(&self) -> FileRules {
        FileRules::always()
    }

    fn render(&self) -> String {
        SwiftFile::new()
            .header("Generated by lanebridge. Changes are discarded on the next generation pass.")
            .add(self.protocol.clone())
            .add(self.protocol.default_extension())
            .render()
    }
}
