//! Shared code generation utilities for the classgen Java class generator.
//!
//! This crate provides the language-agnostic pieces used by
//! `classgen-java`:
//!
//! - [`builder`] - code generation building blocks (CodeBuilder, fragments)
//! - [`GeneratorConfig`] / [`PackageMapping`] - one validated configuration per run
//! - [`Error`] - the generation error taxonomy
//! - [`GeneratedFiles`] - ordered mapping from relative path to rendered text
//! - [`validate_modules`] - schema-validity checks shared by all generators
//! - [`ClassCodegen`] / [`TypeMapper`] - the seams a language backend implements

pub mod builder;

mod config;
mod error;
mod files;
mod naming;
mod traits;
mod validate;

pub use config::{GeneratorConfig, PackageMapping};
pub use error::Error;
pub use files::GeneratedFiles;
pub use naming::to_pascal_case;
pub use traits::{ClassCodegen, MappedType, TypeMapper};
pub use validate::validate_modules;
