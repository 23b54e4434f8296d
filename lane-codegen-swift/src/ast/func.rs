//! Swift function declarations.

use lanebridge_codegen::{CodeFragment, Renderable};

/// A labelled function parameter.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
    pub default: Option<String>,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            default: None,
        }
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    fn render(&self) -> String {
        match &self.default {
            Some(default) => format!("{}: {} = {}", self.name, self.ty, default),
            None => format!("{}: {}", self.name, self.ty),
        }
    }
}

/// Builder for a free Swift function.
#[derive(Debug, Clone)]
pub struct Func {
    name: String,
    doc: Vec<String>,
    comments: Vec<String>,
    params: Vec<Param>,
    returns: Option<String>,
    discardable: bool,
    body: Vec<CodeFragment>,
}

impl Func {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: Vec::new(),
            comments: Vec::new(),
            params: Vec::new(),
            returns: None,
            discardable: false,
            body: Vec::new(),
        }
    }

    /// Append a `///` doc line. An empty string renders a bare `///`.
    pub fn doc(mut self, line: impl Into<String>) -> Self {
        self.doc.push(line.into());
        self
    }

    /// Append a `//` comment placed between the docs and the signature.
    pub fn comment(mut self, line: impl Into<String>) -> Self {
        self.comments.push(line.into());
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.returns = Some(ty.into());
        self
    }

    /// Mark with `@discardableResult`.
    pub fn discardable(mut self) -> Self {
        self.discardable = true;
        self
    }

    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::line(line));
        self
    }

    pub fn body(mut self, fragment: CodeFragment) -> Self {
        self.body.push(fragment);
        self
    }

    fn signature(&self) -> String {
        let params: Vec<String> = self.params.iter().map(Param::render).collect();
        match &self.returns {
            Some(ret) => format!("func {}({}) -> {} {{", self.name, params.join(", "), ret),
            None => format!("func {}({}) {{", self.name, params.join(", ")),
        }
    }
}

impl Renderable for Func {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> = self.doc.iter().map(CodeFragment::doc).collect();
        fragments.extend(self.comments.iter().map(CodeFragment::comment));
        if self.discardable {
            fragments.push(CodeFragment::line("@discardableResult"));
        }
        fragments.push(CodeFragment::braced(self.signature(), self.body.clone()));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use lanebridge_codegen::CodeBuilder;

    use super::*;

    fn render(node: &impl Renderable) -> String {
        let mut builder = CodeBuilder::swift();
        builder.emit(node);
        builder.build()
    }

    #[test]
    fn test_simple_func() {
        let func = Func::new("clearDerivedData").body_line("_ = runner.executeCommand(command)");
        assert_eq!(
            render(&func),
            "func clearDerivedData() {\n  _ = runner.executeCommand(command)\n}\n"
        );
    }

    #[test]
    fn test_func_with_everything() {
        let func = Func::new("gym")
            .doc("Build the app")
            .doc("")
            .doc("- parameter clean: Clean first")
            .comment("unrecognized type 'float' for 'ratio', using String")
            .param(Param::new("clean", "Bool").default_value("false"))
            .param(Param::new("ratio", "String"))
            .returns("String")
            .discardable()
            .body_line("return \"\"");

        insta::assert_snapshot!(render(&func), @r#"
        /// Build the app
        ///
        /// - parameter clean: Clean first
        // unrecognized type 'float' for 'ratio', using String
        @discardableResult
        func gym(clean: Bool = false, ratio: String) -> String {
          return ""
        }
        "#);
    }
}
