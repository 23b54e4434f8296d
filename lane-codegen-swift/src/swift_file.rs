//! SwiftFile abstraction for structured Swift file generation.
//!
//! Organizes a file into a comment header, `import` lines and body
//! declarations, separated by blank lines.

use lanebridge_codegen::{CodeBuilder, CodeFragment, Indent, Renderable};

/// A structured representation of a Swift source file.
///
/// # Example
///
/// ```
/// use lanebridge_codegen_swift::{RawCode, SwiftFile};
///
/// let code = SwiftFile::new()
///     .header("Generated")
///     .import("Foundation")
///     .add(RawCode::new("let gymfile: Gymfile = Gymfile()"))
///     .render();
///
/// assert_eq!(code, "// Generated\n\nimport Foundation\n\nlet gymfile: Gymfile = Gymfile()\n");
/// ```
#[derive(Default)]
pub struct SwiftFile {
    header: Vec<String>,
    imports: Vec<String>,
    body: Vec<Vec<CodeFragment>>,
}

impl SwiftFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `//` comment line to the file header.
    pub fn header(mut self, line: impl Into<String>) -> Self {
        self.header.push(line.into());
        self
    }

    /// Add an `import <module>` line.
    pub fn import(mut self, module: impl Into<String>) -> Self {
        self.imports.push(module.into());
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add multiple body elements.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Render with Swift indentation (2 spaces).
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::SWIFT)
    }

    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);

        for line in &self.header {
            builder.push_comment("//", line);
        }

        if !self.header.is_empty() && (!self.imports.is_empty() || !self.body.is_empty()) {
            builder.push_blank();
        }

        for module in &self.imports {
            builder.push_line(&format!("import {}", module));
        }

        if !self.imports.is_empty() && !self.body.is_empty() {
            builder.push_blank();
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.imports.is_empty() && self.body.is_empty()
    }
}

/// Raw Swift source added to a [`SwiftFile`] body verbatim.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Create a raw code fragment from multiple lines.
    pub fn lines(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(
            lines
                .into_iter()
                .map(Into::into)
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0
            .lines()
            .map(|line| {
                if line.is_empty() {
                    CodeFragment::Blank
                } else {
                    CodeFragment::Line(line.to_string())
                }
            })
            .collect()
    }
}
