//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! AST nodes convert themselves to fragments, which the [`CodeBuilder`]
//! turns into indented text. This keeps the Java AST builders free of
//! any direct coupling to the output buffer.
//!
//! [`CodeBuilder`]: super::CodeBuilder

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// A block with header, body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// Indent the contained fragments.
    Indent(Vec<CodeFragment>),
    /// A sequence of fragments.
    Sequence(Vec<CodeFragment>),
    /// A single-line doc comment (`/** text */`).
    Doc(String),
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a block fragment.
    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: impl Into<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: Some(close.into()),
        }
    }
}

/// Trait for types that can be rendered as code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_constructors() {
        assert_eq!(
            CodeFragment::line("int x;"),
            CodeFragment::Line("int x;".to_string())
        );
        let block = CodeFragment::block("class Foo {", vec![CodeFragment::Blank], "}");
        assert!(matches!(
            block,
            CodeFragment::Block { close: Some(c), .. } if c == "}"
        ));
    }
}
