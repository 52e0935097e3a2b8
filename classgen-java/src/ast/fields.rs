//! Java field and parameter builders.

use classgen_codegen::builder::{CodeFragment, Renderable};

/// A `public final` field in a generated Java class.
#[derive(Debug, Clone)]
pub struct JavaField {
    pub name: String,
    pub ty: String,
    /// Rendered inline before the type (e.g. `@Nonnull`).
    pub annotation: Option<String>,
}

impl JavaField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            annotation: None,
        }
    }

    pub fn annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    fn declaration(&self) -> String {
        match &self.annotation {
            Some(annotation) => {
                format!("public final @{} {} {};", annotation, self.ty, self.name)
            }
            None => format!("public final {} {};", self.ty, self.name),
        }
    }
}

impl Renderable for JavaField {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.declaration())]
    }
}

/// A constructor parameter.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
    pub annotations: Vec<String>,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            annotations: Vec::new(),
        }
    }

    /// Add a rendered annotation (e.g. `Named("name")`).
    pub fn annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotations.push(annotation.into());
        self
    }

    /// Render as it appears in a parameter list.
    pub fn render(&self) -> String {
        let mut parts: Vec<String> = self
            .annotations
            .iter()
            .map(|a| format!("@{}", a))
            .collect();
        parts.push(format!("{} {}", self.ty, self.name));
        parts.join(" ")
    }
}
