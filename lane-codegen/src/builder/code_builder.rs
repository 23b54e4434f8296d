//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Builds indented code line by line or from [`Renderable`] nodes.
///
/// # Example
///
/// ```
/// use lanebridge_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::swift();
/// builder
///     .push_line("func main() {")
///     .push_indent()
///     .push_line("print(\"Hello\")")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "func main() {\n  print(\"Hello\")\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 2-space indentation (Swift output).
    pub fn swift() -> Self {
        Self::new(Indent::SWIFT)
    }

    /// Add a line of code with current indentation (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level (mutable).
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level (mutable).
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a comment line with the given prefix (mutable).
    pub fn push_comment(&mut self, prefix: &str, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(prefix);
        if !text.is_empty() {
            self.buffer.push(' ');
            self.buffer.push_str(text);
        }
        self.buffer.push('\n');
        self
    }

    /// Emit a Renderable node (mutable).
    pub fn emit(&mut self, node: &(impl Renderable + ?Sized)) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Doc(text) => {
                self.push_comment("///", &text);
            }
            CodeFragment::Comment(text) => {
                self.push_comment("//", &text);
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::swift()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut builder = CodeBuilder::swift();
        builder.push_line("let x = 1");
        assert_eq!(builder.build(), "let x = 1\n");
    }

    #[test]
    fn test_indentation() {
        let mut builder = CodeBuilder::swift();
        builder
            .push_line("func main() {")
            .push_indent()
            .push_line("print(\"Hello\")")
            .push_dedent()
            .push_line("}");

        assert_eq!(builder.build(), "func main() {\n  print(\"Hello\")\n}\n");
    }

    #[test]
    fn test_wide_block() {
        let mut builder = CodeBuilder::new(Indent::WIDE);
        builder.emit(&CodeFragment::braced(
            "extension Foo {",
            vec![CodeFragment::line("var bar: Int { return 1 }")],
        ));

        assert_eq!(builder.build(), "extension Foo {\n    var bar: Int { return 1 }\n}\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::swift();
        builder.push_dedent().push_line("x");
        assert_eq!(builder.build(), "x\n");
    }

    #[test]
    fn test_blank_lines_are_not_indented() {
        let mut builder = CodeBuilder::swift();
        builder.push_indent().push_line("a").push_blank().push_line("b");
        assert_eq!(builder.build(), "  a\n\n  b\n");
    }

    #[test]
    fn test_emit_block_fragment() {
        struct BlockNode;
        impl Renderable for BlockNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::doc("Says hello"),
                    CodeFragment::braced(
                        "func hello() {",
                        vec![CodeFragment::line("print(\"Hello\")")],
                    ),
                ]
            }
        }

        let mut builder = CodeBuilder::swift();
        builder.emit(&BlockNode);
        insta::assert_snapshot!(builder.build(), @r#"
        /// Says hello
        func hello() {
          print("Hello")
        }
        "#);
    }

    #[test]
    fn test_comment_fragments() {
        let mut builder = CodeBuilder::swift();
        builder.emit(&vec![
            CodeFragment::comment("generated"),
            CodeFragment::doc(""),
            CodeFragment::Blank,
        ]);
        assert_eq!(builder.build(), "// generated\n///\n\n");
    }
}
