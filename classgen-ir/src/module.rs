//! Module model.
//!
//! ```text
//! classgen.toml → Manifest (parsing) → Module (model) → Generator (codegen)
//! ```
//!
//! A module has a qualified name, top-level properties, and nested class
//! declarations. Declaration order is preserved everywhere; generation
//! never reorders or deduplicates members.

use serde::{Deserialize, Serialize};

/// A single schema module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    /// Qualified module name (e.g. `org.mod`).
    pub name: ModuleName,
    /// Top-level properties, in declaration order.
    pub properties: Vec<FieldDecl>,
    /// Nested class declarations, in declaration order.
    pub classes: Vec<ClassDecl>,
}

impl Module {
    /// Returns true if a class with the given name is declared in this module.
    pub fn declares_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c.name == name)
    }
}

/// A dot-separated qualified module name.
///
/// The last segment names the generated outer class; the leading
/// segments form the package.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleName(String);

impl ModuleName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The full dot-separated name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The package part: everything before the last segment, or the
    /// empty string for single-segment names.
    pub fn package(&self) -> &str {
        match self.0.rfind('.') {
            Some(idx) => &self.0[..idx],
            None => "",
        }
    }

    /// The last segment, the base for the generated class name.
    pub fn last_segment(&self) -> &str {
        match self.0.rfind('.') {
            Some(idx) => &self.0[idx + 1..],
            None => &self.0,
        }
    }

    /// Iterate over the dot-separated segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }
}

impl std::fmt::Display for ModuleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModuleName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A class declared inside a module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDecl {
    /// Class name, unique within its module.
    pub name: String,
    /// Fields, in declaration order.
    pub fields: Vec<FieldDecl>,
}

/// A named, typed field (or module-level property).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDecl {
    /// Field name.
    pub name: String,
    /// Declared type.
    pub ty: SchemaType,
}

impl FieldDecl {
    pub fn new(name: impl Into<String>, ty: SchemaType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Declared type of a field or property.
///
/// A closed union: one variant per case of the generator's type mapping
/// table. Class references resolve within the declaring module only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SchemaType {
    /// Text scalar.
    String,
    /// Integer scalar.
    Int,
    /// Floating-point scalar.
    Float,
    /// Boolean scalar.
    Boolean,
    /// Unconstrained value.
    Any,
    /// Reference to a class declared in the same module.
    Class(String),
    /// Nullable wrapper around another type.
    Nullable(Box<SchemaType>),
    /// Ordered sequence of another type.
    List(Box<SchemaType>),
}

impl SchemaType {
    /// Wrap a type in a nullable wrapper.
    pub fn nullable(ty: SchemaType) -> Self {
        Self::Nullable(Box::new(ty))
    }

    /// Wrap a type in a list.
    pub fn list(ty: SchemaType) -> Self {
        Self::List(Box::new(ty))
    }

    /// Returns true if this type is a nullable wrapper.
    pub fn is_nullable(&self) -> bool {
        matches!(self, Self::Nullable(_))
    }

    /// Visit this type and every type nested inside it.
    pub fn walk(&self, visit: &mut impl FnMut(&SchemaType)) {
        visit(self);
        match self {
            Self::Nullable(inner) | Self::List(inner) => inner.walk(visit),
            _ => {}
        }
    }
}
