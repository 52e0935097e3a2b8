//! Language-agnostic code generation traits.

use classgen_ir::{Module, SchemaType};

use crate::{Error, GeneratedFiles, GeneratorConfig};

/// Trait for language-specific class generators.
///
/// Implement this trait to emit class definitions in a new target
/// language. Generation is a pure function from a module set and a
/// configuration to a file map; no state is retained between calls.
pub trait ClassCodegen {
    /// Language identifier (e.g., "java").
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "java").
    fn file_extension(&self) -> &'static str;

    /// Render one compilation unit per module, or fail atomically.
    fn generate(
        &self,
        modules: &[Module],
        config: &GeneratorConfig,
    ) -> Result<GeneratedFiles, Error>;
}

/// Trait for mapping schema types to language-specific type strings.
pub trait TypeMapper {
    /// The target language name.
    fn language(&self) -> &'static str;

    /// Map a declared schema type to its target representation.
    fn map_type(&self, ty: &SchemaType) -> MappedType;
}

/// A mapped target-language type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedType {
    /// Rendered type text (e.g., `List<Address>`).
    pub rendered: String,
    /// True for unboxed primitives, which are inherently non-nullable.
    pub primitive: bool,
    /// Fully qualified imports the rendered type requires.
    pub imports: Vec<String>,
}

impl MappedType {
    /// A primitive type with no imports.
    pub fn primitive(rendered: impl Into<String>) -> Self {
        Self {
            rendered: rendered.into(),
            primitive: true,
            imports: Vec::new(),
        }
    }

    /// A reference type with no imports.
    pub fn reference(rendered: impl Into<String>) -> Self {
        Self {
            rendered: rendered.into(),
            primitive: false,
            imports: Vec::new(),
        }
    }

    /// Attach a required import.
    pub fn with_import(mut self, import: impl Into<String>) -> Self {
        self.imports.push(import.into());
        self
    }
}
