use classgen_codegen::{
    ClassCodegen, Error, GeneratedFiles, GeneratorConfig, to_pascal_case, validate_modules,
};
use classgen_ir::{FieldDecl, Module};

use crate::{
    JavaFile, JavaTypeMapper,
    ast::{Constructor, JavaClass, JavaField, Param},
};

/// Java code generator producing one compilation unit per module.
///
/// Generation is a pure function over the module set and configuration:
/// identical inputs render byte-identical file maps, and a failing run
/// renders nothing.
#[derive(Default)]
pub struct JavaGenerator {
    mapper: JavaTypeMapper,
}

impl JavaGenerator {
    pub fn new() -> Self {
        Self {
            mapper: JavaTypeMapper,
        }
    }

    fn render_module(&self, module: &Module, config: &GeneratorConfig) -> (String, String) {
        let package = config.package_mapping.remap(module.name.package());
        let class_name = to_pascal_case(module.name.last_segment());

        let mut imports: Vec<String> = Vec::new();
        let mut outer = self.build_class(&class_name, false, &module.properties, config, &mut imports);
        for class in &module.classes {
            outer = outer.class(
                self.build_class(&class.name, true, &class.fields, config, &mut imports),
            );
        }

        let content = JavaFile::new()
            .package(package.clone())
            .imports(imports)
            .add(outer)
            .render();

        let path = if package.is_empty() {
            format!("{}.java", class_name)
        } else {
            format!("{}/{}.java", package.replace('.', "/"), class_name)
        };

        (path, content)
    }

    /// Build one class, collecting the imports its member types require.
    fn build_class(
        &self,
        name: &str,
        nested: bool,
        fields: &[FieldDecl],
        config: &GeneratorConfig,
        imports: &mut Vec<String>,
    ) -> JavaClass {
        let mut class = JavaClass::new(name);
        if nested {
            class = class.nested();
        }

        let mut constructor = Constructor::new();

        for field in fields {
            let mapped = self.mapper.map(&field.ty, false);
            imports.extend(mapped.imports.iter().cloned());

            let mut java_field = JavaField::new(&field.name, &mapped.rendered);
            // Primitives cannot be null; nullable members stay bare.
            if !mapped.primitive && !field.ty.is_nullable() {
                if let Some(annotation) = &config.non_null_annotation {
                    java_field = java_field.annotation(simple_name(annotation));
                    push_annotation_import(imports, annotation);
                }
            }
            class = class.field(java_field);

            let mut param = Param::new(&field.name, &mapped.rendered);
            if let Some(annotation) = &config.params_annotation {
                param = param.annotation(format!("{}(\"{}\")", simple_name(annotation), field.name));
                push_annotation_import(imports, annotation);
            }
            constructor = constructor.param(param);
        }

        class.constructor(constructor)
    }
}

impl ClassCodegen for JavaGenerator {
    fn language(&self) -> &'static str {
        "java"
    }

    fn file_extension(&self) -> &'static str {
        "java"
    }

    fn generate(
        &self,
        modules: &[Module],
        config: &GeneratorConfig,
    ) -> Result<GeneratedFiles, Error> {
        if modules.is_empty() {
            return Err(Error::NoSourceModules);
        }
        validate_modules(modules)?;

        let mut files = GeneratedFiles::new();
        for module in modules {
            let (path, content) = self.render_module(module, config);
            files.insert(path, content);
        }
        Ok(files)
    }
}

/// The simple name of a possibly qualified annotation.
fn simple_name(fqn: &str) -> &str {
    fqn.rsplit('.').next().unwrap_or(fqn)
}

/// An annotation configured without a package is used bare and needs no import.
fn push_annotation_import(imports: &mut Vec<String>, fqn: &str) {
    if fqn.contains('.') {
        imports.push(fqn.to_string());
    }
}
