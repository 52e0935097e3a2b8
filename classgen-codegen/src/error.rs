use miette::Diagnostic;
use thiserror::Error;

/// Errors produced by a generation run.
///
/// Generation is all-or-nothing: every input element either produces a
/// corresponding output member or causes the whole run to fail with one
/// of these.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// The configured module sequence was empty. Reported to the caller
    /// as a single-line diagnostic; the surrounding run still completes,
    /// just with no generated output.
    #[error("No source modules specified.")]
    #[diagnostic(
        code(classgen::no_source_modules),
        help("add module names to `source-modules` in classgen.toml")
    )]
    NoSourceModules,

    /// A field's declared type is neither a primitive nor a class
    /// declared in the same module.
    #[error("cannot resolve type `{ty}` of `{property}` in module `{module}`")]
    #[diagnostic(
        code(classgen::type_resolution),
        help("a class reference must name a class declared in the same module")
    )]
    TypeResolution {
        module: String,
        /// `Class.field` for class fields, the bare name for module properties.
        property: String,
        ty: String,
    },

    /// Two classes in the same module share a name.
    #[error("duplicate class `{class}` in module `{module}`")]
    #[diagnostic(code(classgen::duplicate_declaration))]
    DuplicateDeclaration { module: String, class: String },
}

impl Error {
    pub fn type_resolution(
        module: impl Into<String>,
        property: impl Into<String>,
        ty: impl Into<String>,
    ) -> Self {
        Self::TypeResolution {
            module: module.into(),
            property: property.into(),
            ty: ty.into(),
        }
    }

    pub fn duplicate_declaration(module: impl Into<String>, class: impl Into<String>) -> Self {
        Self::DuplicateDeclaration {
            module: module.into(),
            class: class.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_source_modules_message_is_exact() {
        // Downstream tooling greps for this literal line.
        assert_eq!(
            Error::NoSourceModules.to_string(),
            "No source modules specified."
        );
    }

    #[test]
    fn test_type_resolution_names_the_offender() {
        let err = Error::type_resolution("org.mod", "Person.spouse", "Spouse");
        let msg = err.to_string();
        assert!(msg.contains("org.mod"));
        assert!(msg.contains("Person.spouse"));
        assert!(msg.contains("`Spouse`"));
    }

    #[test]
    fn test_duplicate_declaration_names_module_and_class() {
        let err = Error::duplicate_declaration("org.mod", "Person");
        assert_eq!(
            err.to_string(),
            "duplicate class `Person` in module `org.mod`"
        );
    }
}
