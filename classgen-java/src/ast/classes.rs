//! Java class builder.

use classgen_codegen::builder::{CodeFragment, Renderable};

use super::{JavaField, Param};

/// A constructor taking one parameter per field, assigning each.
#[derive(Debug, Clone, Default)]
pub struct Constructor {
    params: Vec<Param>,
}

impl Constructor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    fn to_fragments(&self, class_name: &str) -> Vec<CodeFragment> {
        let signature: Vec<String> = self.params.iter().map(Param::render).collect();
        let body: Vec<CodeFragment> = self
            .params
            .iter()
            .map(|p| CodeFragment::Line(format!("this.{} = {};", p.name, p.name)))
            .collect();

        vec![CodeFragment::block(
            format!("public {}({}) {{", class_name, signature.join(", ")),
            body,
            "}",
        )]
    }
}

/// Builder for a generated Java class.
///
/// Members render in insertion order: fields, then the constructor, then
/// nested classes, separated by blank lines.
#[derive(Debug, Clone)]
pub struct JavaClass {
    name: String,
    nested: bool,
    fields: Vec<JavaField>,
    constructor: Option<Constructor>,
    classes: Vec<JavaClass>,
}

impl JavaClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nested: false,
            fields: Vec::new(),
            constructor: None,
            classes: Vec::new(),
        }
    }

    /// Mark as a `static` member class of its enclosing class.
    pub fn nested(mut self) -> Self {
        self.nested = true;
        self
    }

    pub fn field(mut self, field: JavaField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn constructor(mut self, constructor: Constructor) -> Self {
        self.constructor = Some(constructor);
        self
    }

    pub fn class(mut self, class: JavaClass) -> Self {
        self.classes.push(class);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn header(&self) -> String {
        if self.nested {
            format!("public static final class {} {{", self.name)
        } else {
            format!("public final class {} {{", self.name)
        }
    }

    fn body_fragments(&self) -> Vec<CodeFragment> {
        let mut body = Vec::new();

        for field in &self.fields {
            if !body.is_empty() {
                body.push(CodeFragment::Blank);
            }
            body.extend(field.to_fragments());
        }

        if let Some(constructor) = &self.constructor
            && !constructor.is_empty()
        {
            if !body.is_empty() {
                body.push(CodeFragment::Blank);
            }
            body.extend(constructor.to_fragments(&self.name));
        }

        for class in &self.classes {
            if !body.is_empty() {
                body.push(CodeFragment::Blank);
            }
            body.extend(class.to_fragments());
        }

        body
    }
}

impl Renderable for JavaClass {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let body = self.body_fragments();
        if body.is_empty() {
            return vec![CodeFragment::Line(format!("{}}}", self.header()))];
        }
        vec![CodeFragment::block(self.header(), body, "}")]
    }
}
