//! Schema-validity checks shared by all generators.

use std::collections::HashSet;

use classgen_ir::{FieldDecl, Module, SchemaType};

use crate::Error;

/// Validate a module set before generation.
///
/// Rejects duplicate class declarations and class references that do not
/// resolve within the declaring module. Runs before any rendering so a
/// failing run produces no output at all.
pub fn validate_modules(modules: &[Module]) -> Result<(), Error> {
    for module in modules {
        let mut seen: HashSet<&str> = HashSet::new();
        for class in &module.classes {
            if !seen.insert(class.name.as_str()) {
                return Err(Error::duplicate_declaration(
                    module.name.as_str(),
                    &class.name,
                ));
            }
        }

        for property in &module.properties {
            check_resolvable(module, &property.name, property)?;
        }
        for class in &module.classes {
            for field in &class.fields {
                let property = format!("{}.{}", class.name, field.name);
                check_resolvable(module, &property, field)?;
            }
        }
    }

    Ok(())
}

fn check_resolvable(module: &Module, property: &str, field: &FieldDecl) -> Result<(), Error> {
    let mut unresolved: Option<String> = None;
    field.ty.walk(&mut |ty| {
        if let SchemaType::Class(name) = ty
            && unresolved.is_none()
            && !module.declares_class(name)
        {
            unresolved = Some(name.clone());
        }
    });

    match unresolved {
        Some(name) => Err(Error::type_resolution(module.name.as_str(), property, name)),
        None => Ok(()),
    }
}
