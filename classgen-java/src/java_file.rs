//! JavaFile abstraction for structured compilation-unit generation.
//!
//! Organizes a generated unit into header, package statement, imports,
//! and type declarations.

use std::collections::BTreeSet;

use classgen_codegen::builder::CodeBuilder;

use crate::ast::JavaClass;

const HEADER: &str = "// Generated by classgen - DO NOT EDIT";

/// A structured representation of a Java compilation unit.
///
/// Imports are deduplicated and rendered in sorted order; type
/// declarations keep insertion order.
#[derive(Default)]
pub struct JavaFile {
    package: Option<String>,
    imports: BTreeSet<String>,
    types: Vec<JavaClass>,
}

impl JavaFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the package statement. An empty package means none.
    pub fn package(mut self, package: impl Into<String>) -> Self {
        let package = package.into();
        if !package.is_empty() {
            self.package = Some(package);
        }
        self
    }

    /// Add a fully qualified import.
    pub fn import(mut self, import: impl Into<String>) -> Self {
        self.imports.insert(import.into());
        self
    }

    /// Add multiple fully qualified imports.
    pub fn imports(mut self, imports: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.imports.extend(imports.into_iter().map(Into::into));
        self
    }

    /// Add a top-level type declaration.
    pub fn add(mut self, class: JavaClass) -> Self {
        self.types.push(class);
        self
    }

    /// Render the compilation unit.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::java();
        builder.push_line(HEADER);

        if let Some(package) = &self.package {
            builder.push_blank();
            builder.push_line(&format!("package {};", package));
        }

        if !self.imports.is_empty() {
            builder.push_blank();
            for import in &self.imports {
                builder.push_line(&format!("import {};", import));
            }
        }

        for class in &self.types {
            builder.push_blank();
            builder.emit(class);
        }

        builder.build()
    }
}
