//! Java class generator for classgen.
//!
//! Translates a module set into Java compilation units: one outer class
//! per module, one nested class per declared class, members in
//! declaration order.

pub mod ast;

mod generator;
mod java_file;
mod type_mapper;

pub use classgen_codegen::{ClassCodegen, TypeMapper};
pub use generator::JavaGenerator;
pub use java_file::JavaFile;
pub use type_mapper::JavaTypeMapper;
