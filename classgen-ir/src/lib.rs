//! Module model types for the classgen Java class generator.
//!
//! This crate defines the in-memory representation of a parsed module
//! set. Instances are built once (by `classgen-manifest` or by hand in
//! tests) and read-only afterwards; code generation never mutates them.

mod module;

pub use module::{ClassDecl, FieldDecl, Module, ModuleName, SchemaType};
