//! Declarative manifest for the classgen Java class generator.
//!
//! `classgen.toml` declares the modules (with typed properties and
//! nested classes) and the generator settings. This crate is the
//! external parser collaborator: it produces the read-only module model
//! and a validated configuration; the generators never parse text.

mod error;
mod manifest;
mod types;

pub use error::{Error, Result, SourceContext};
pub use manifest::Manifest;
pub use types::parse_type;
