//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Fluent API for building code with proper indentation.
///
/// Supports both consuming methods (returning `Self`) for chaining and
/// mutable methods (prefixed with `push_`) for loop-heavy call sites.
///
/// # Example
///
/// ```
/// use classgen_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::java()
///     .line("public final class Mod {")
///     .indent()
///     .line("public final long zip;")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "public final class Mod {\n  public final long zip;\n}\n");
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

    /// Create a new CodeBuilder with 2-space indentation (Java default).
    pub fn java() -> Self {
        Self::new(Indent::JAVA)
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

    /// Add a single-line doc comment (mutable).
    pub fn push_doc(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("/** ");
        self.buffer.push_str(text);
        self.buffer.push_str(" */\n");
        self
    }

    /// Emit a Renderable node (mutable).
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
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
            CodeFragment::Indent(fragments) => {
                self.push_indent();
                for f in fragments {
                    self.apply_fragment(f);
                }
                self.push_dedent();
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
            CodeFragment::Doc(text) => {
                self.push_doc(&text);
            }
        }
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
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
        Self::java()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::java().line("int x = 1;").build();
        assert_eq!(code, "int x = 1;\n");
    }

    #[test]
    fn test_indentation() {
        let code = CodeBuilder::java()
            .line("class Foo {")
            .indent()
            .line("int x;")
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "class Foo {\n  int x;\n}\n");
    }

    #[test]
    fn test_blank_line() {
        let code = CodeBuilder::java()
            .line("import java.util.List;")
            .blank()
            .line("class Foo {}")
            .build();

        assert_eq!(code, "import java.util.List;\n\nclass Foo {}\n");
    }

    #[test]
    fn test_mutable_api() {
        let mut builder = CodeBuilder::java();
        builder
            .push_line("class Foo {")
            .push_indent()
            .push_line("int x;")
            .push_dedent()
            .push_line("}");
        assert_eq!(builder.build(), "class Foo {\n  int x;\n}\n");
    }

    #[test]
    fn test_emit_with_fragments() {
        struct SimpleNode;
        impl Renderable for SimpleNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::Line("// comment".to_string()),
                    CodeFragment::Line("int x = 1;".to_string()),
                ]
            }
        }

        let mut builder = CodeBuilder::java();
        builder.emit(&SimpleNode);
        assert_eq!(builder.build(), "// comment\nint x = 1;\n");
    }

    #[test]
    fn test_emit_block_fragment() {
        struct BlockNode;
        impl Renderable for BlockNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::Block {
                    header: "class Foo {".to_string(),
                    body: vec![CodeFragment::Line("int x;".to_string())],
                    close: Some("}".to_string()),
                }]
            }
        }

        let mut builder = CodeBuilder::java();
        builder.emit(&BlockNode);
        assert_eq!(builder.build(), "class Foo {\n  int x;\n}\n");
    }

    #[test]
    fn test_nested_blocks_indent_twice() {
        let inner = CodeFragment::Block {
            header: "static final class Inner {".to_string(),
            body: vec![CodeFragment::Line("int y;".to_string())],
            close: Some("}".to_string()),
        };
        let outer = CodeFragment::Block {
            header: "class Outer {".to_string(),
            body: vec![inner],
            close: Some("}".to_string()),
        };

        let mut builder = CodeBuilder::java();
        builder.apply_fragment(outer);
        assert_eq!(
            builder.build(),
            "class Outer {\n  static final class Inner {\n    int y;\n  }\n}\n"
        );
    }

    #[test]
    fn test_doc_fragment() {
        let mut builder = CodeBuilder::java();
        builder.apply_fragment(CodeFragment::Doc("A person.".to_string()));
        assert_eq!(builder.build(), "/** A person. */\n");
    }
}
