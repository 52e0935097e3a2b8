//! Java type mapper implementation.

use classgen_codegen::{MappedType, TypeMapper};
use classgen_ir::SchemaType;

const JAVA_UTIL_LIST: &str = "java.util.List";

/// Maps schema types to Java types.
///
/// Non-nullable scalars map to unboxed primitives; nullable wrappers and
/// generic arguments use the boxed equivalents. Unconstrained values map
/// to `Object`.
#[derive(Debug, Default)]
pub struct JavaTypeMapper;

impl JavaTypeMapper {
    /// Map a type, boxing primitives when required (nullable position or
    /// generic argument).
    pub fn map(&self, ty: &SchemaType, boxed: bool) -> MappedType {
        match ty {
            SchemaType::String => MappedType::reference("String"),
            SchemaType::Int if boxed => MappedType::reference("Long"),
            SchemaType::Int => MappedType::primitive("long"),
            SchemaType::Float if boxed => MappedType::reference("Double"),
            SchemaType::Float => MappedType::primitive("double"),
            SchemaType::Boolean if boxed => MappedType::reference("Boolean"),
            SchemaType::Boolean => MappedType::primitive("boolean"),
            SchemaType::Any => MappedType::reference("Object"),
            SchemaType::Class(name) => MappedType::reference(name),
            SchemaType::Nullable(inner) => self.map(inner, true),
            SchemaType::List(element) => {
                let element = self.map(element, true);
                let mut mapped = MappedType::reference(format!("List<{}>", element.rendered))
                    .with_import(JAVA_UTIL_LIST);
                mapped.imports.extend(element.imports);
                mapped
            }
        }
    }
}

impl TypeMapper for JavaTypeMapper {
    fn language(&self) -> &'static str {
        "java"
    }

    fn map_type(&self, ty: &SchemaType) -> MappedType {
        self.map(ty, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_primitives() {
        let mapper = JavaTypeMapper;

        assert_eq!(mapper.map_type(&SchemaType::Int).rendered, "long");
        assert_eq!(mapper.map_type(&SchemaType::Float).rendered, "double");
        assert_eq!(mapper.map_type(&SchemaType::Boolean).rendered, "boolean");
        assert!(mapper.map_type(&SchemaType::Int).primitive);
    }

    #[test]
    fn test_reference_scalars() {
        let mapper = JavaTypeMapper;

        let string = mapper.map_type(&SchemaType::String);
        assert_eq!(string.rendered, "String");
        assert!(!string.primitive);

        let any = mapper.map_type(&SchemaType::Any);
        assert_eq!(any.rendered, "Object");
        assert!(!any.primitive);
    }

    #[test]
    fn test_nullable_boxes_primitives() {
        let mapper = JavaTypeMapper;

        let ty = SchemaType::nullable(SchemaType::Int);
        let mapped = mapper.map_type(&ty);
        assert_eq!(mapped.rendered, "Long");
        assert!(!mapped.primitive);
    }

    #[test]
    fn test_list_boxes_element() {
        let mapper = JavaTypeMapper;

        let ty = SchemaType::list(SchemaType::Int);
        let mapped = mapper.map_type(&ty);
        assert_eq!(mapped.rendered, "List<Long>");
        assert_eq!(mapped.imports, vec![JAVA_UTIL_LIST.to_string()]);
    }

    #[test]
    fn test_nullable_list_element_uses_plain_element_type() {
        // Element nullability of List<T?> shows up as the boxed, plain
        // element type; the list itself stays as-is.
        let mapper = JavaTypeMapper;

        let ty = SchemaType::list(SchemaType::nullable(SchemaType::Class("Address".into())));
        assert_eq!(mapper.map_type(&ty).rendered, "List<Address>");
    }

    #[test]
    fn test_nested_lists() {
        let mapper = JavaTypeMapper;

        let ty = SchemaType::list(SchemaType::list(SchemaType::String));
        let mapped = mapper.map_type(&ty);
        assert_eq!(mapped.rendered, "List<List<String>>");
    }

    #[test]
    fn test_class_reference() {
        let mapper = JavaTypeMapper;

        let mapped = mapper.map_type(&SchemaType::Class("Person".into()));
        assert_eq!(mapped.rendered, "Person");
        assert!(mapped.imports.is_empty());
    }
}
