//! The `classgen.toml` manifest.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use classgen_codegen::{GeneratorConfig, PackageMapping};
use classgen_ir::{ClassDecl, FieldDecl, Module, ModuleName};
use indexmap::IndexMap;
use serde::Deserialize;

use crate::{
    error::{Error, Result, SourceContext},
    types::{is_identifier, parse_type},
};

/// Default output directory when the manifest sets none.
const DEFAULT_OUTPUT_DIR: &str = "generated";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawManifest {
    #[serde(default)]
    generator: RawGenerator,
    #[serde(default, rename = "module")]
    modules: Vec<RawModule>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawGenerator {
    #[serde(default)]
    source_modules: Vec<String>,
    output_dir: Option<PathBuf>,
    params_annotation: Option<String>,
    non_null_annotation: Option<String>,
    settings_module: Option<String>,
    #[serde(default)]
    package_mapping: IndexMap<String, String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawModule {
    name: String,
    #[serde(default, rename = "property")]
    properties: Vec<RawField>,
    #[serde(default, rename = "class")]
    classes: Vec<RawClass>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawClass {
    name: String,
    #[serde(default, rename = "field")]
    fields: Vec<RawField>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawField {
    name: String,
    #[serde(rename = "type")]
    ty: String,
}

/// Auxiliary settings module supplying generation defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawSettings {
    #[serde(default)]
    defaults: RawDefaults,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawDefaults {
    params_annotation: Option<String>,
    non_null_annotation: Option<String>,
    #[serde(default)]
    package_mapping: IndexMap<String, String>,
}

/// A parsed and validated `classgen.toml`.
///
/// Construction validates identifiers and type expressions and lowers
/// every declared module into the read-only module model. Schema-level
/// checks that need the whole module set (duplicate classes, class
/// reference resolution) stay with the generator.
#[derive(Debug)]
pub struct Manifest {
    ctx: SourceContext,
    modules: Vec<Module>,
    generator: RawGenerator,
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(SourceContext::new(s, "classgen.toml"))
    }
}

impl Manifest {
    /// Read and parse a manifest file.
    pub fn open(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source,
            })
        })?;
        Self::parse(SourceContext::new(content, path.display().to_string()))
    }

    fn parse(ctx: SourceContext) -> Result<Self> {
        let raw: RawManifest = toml::from_str(ctx.src()).map_err(|e| ctx.parse_error(e))?;

        let mut modules = Vec::with_capacity(raw.modules.len());
        let mut seen: HashSet<String> = HashSet::new();
        for raw_module in raw.modules {
            let module = lower_module(&ctx, raw_module)?;
            if !seen.insert(module.name.as_str().to_string()) {
                return Err(
                    ctx.validation_error(format!("module '{}' is declared twice", module.name))
                );
            }
            modules.push(module);
        }

        for source in &raw.generator.source_modules {
            if !modules.iter().any(|m| m.name.as_str() == source) {
                return Err(ctx.validation_error(format!(
                    "source module '{}' is not declared in this manifest",
                    source
                )));
            }
        }

        Ok(Self {
            ctx,
            modules,
            generator: raw.generator,
        })
    }

    /// All declared modules, in declaration order.
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// The modules selected by `source-modules`, in the order listed.
    pub fn source_modules(&self) -> Vec<Module> {
        self.generator
            .source_modules
            .iter()
            .filter_map(|name| {
                self.modules
                    .iter()
                    .find(|m| m.name.as_str() == name)
                    .cloned()
            })
            .collect()
    }

    /// Build the generator configuration.
    ///
    /// `base_dir` anchors relative paths, in particular the settings
    /// module reference; settings defaults fill only options the
    /// manifest leaves unset.
    pub fn config(&self, base_dir: &Path) -> Result<GeneratorConfig> {
        let mut config = GeneratorConfig::new();
        config.source_modules = self.generator.source_modules.clone();
        config.output_dir = self
            .generator
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
        config.params_annotation = self.generator.params_annotation.clone();
        config.non_null_annotation = self.generator.non_null_annotation.clone();
        config.settings_module = self.generator.settings_module.clone();

        let mut mapping: PackageMapping = self
            .generator
            .package_mapping
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        if let Some(settings_ref) = &self.generator.settings_module {
            let defaults = load_settings(&base_dir.join(settings_ref))?;
            if config.params_annotation.is_none() {
                config.params_annotation = defaults.params_annotation;
            }
            if config.non_null_annotation.is_none() {
                config.non_null_annotation = defaults.non_null_annotation;
            }
            for (from, to) in defaults.package_mapping {
                if !mapping.contains_key(&from) {
                    mapping.insert(from, to);
                }
            }
        }

        config.package_mapping = mapping;
        Ok(config)
    }

    /// Source context of the manifest, for downstream diagnostics.
    pub fn source_context(&self) -> &SourceContext {
        &self.ctx
    }
}

fn load_settings(path: &Path) -> Result<RawDefaults> {
    let content = std::fs::read_to_string(path).map_err(|source| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source,
        })
    })?;
    let ctx = SourceContext::new(content, path.display().to_string());
    let settings: RawSettings = toml::from_str(ctx.src()).map_err(|e| ctx.parse_error(e))?;
    Ok(settings.defaults)
}

fn lower_module(ctx: &SourceContext, raw: RawModule) -> Result<Module> {
    validate_module_name(ctx, &raw.name)?;

    let mut properties = Vec::with_capacity(raw.properties.len());
    for field in raw.properties {
        properties.push(lower_field(ctx, &raw.name, None, field)?);
    }

    let mut classes = Vec::with_capacity(raw.classes.len());
    for class in raw.classes {
        if !is_identifier(&class.name) {
            return Err(ctx.invalid_identifier_error(&class.name, "class"));
        }
        let mut fields = Vec::with_capacity(class.fields.len());
        for field in class.fields {
            fields.push(lower_field(ctx, &raw.name, Some(&class.name), field)?);
        }
        classes.push(ClassDecl {
            name: class.name,
            fields,
        });
    }

    Ok(Module {
        name: ModuleName::new(raw.name),
        properties,
        classes,
    })
}

fn lower_field(
    ctx: &SourceContext,
    module: &str,
    class: Option<&str>,
    raw: RawField,
) -> Result<FieldDecl> {
    let context = if class.is_some() { "field" } else { "property" };
    if !is_identifier(&raw.name) {
        return Err(ctx.invalid_identifier_error(&raw.name, context));
    }

    let ty = parse_type(&raw.ty).map_err(|reason| {
        let at = match class {
            Some(class) => format!("`{}.{}` in module `{}`", class, raw.name, module),
            None => format!("`{}` in module `{}`", raw.name, module),
        };
        ctx.unknown_type_error(at, reason)
    })?;

    Ok(FieldDecl { name: raw.name, ty })
}

fn validate_module_name(ctx: &SourceContext, name: &str) -> Result<()> {
    if name.is_empty() || !name.split('.').all(is_identifier) {
        return Err(ctx.invalid_identifier_error(name, "module"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use classgen_ir::SchemaType;

    use super::*;

    const EXAMPLE: &str = r#"
        [generator]
        source-modules = ["org.mod"]
        non-null-annotation = "javax.annotation.Nonnull"

        [generator.package-mapping]
        org = "foo.bar"

        [[module]]
        name = "org.mod"

        [[module.property]]
        name = "other"
        type = "Int"

        [[module.class]]
        name = "Person"

        [[module.class.field]]
        name = "name"
        type = "String"

        [[module.class.field]]
        name = "addresses"
        type = "List<Address?>"

        [[module.class]]
        name = "Address"

        [[module.class.field]]
        name = "street"
        type = "String"
    "#;

    #[test]
    fn test_parse_example() {
        let manifest = Manifest::from_str(EXAMPLE).unwrap();
        let modules = manifest.modules();
        assert_eq!(modules.len(), 1);

        let module = &modules[0];
        assert_eq!(module.name.as_str(), "org.mod");
        assert_eq!(module.properties.len(), 1);
        assert_eq!(module.properties[0].ty, SchemaType::Int);

        // Declaration order is preserved end to end.
        let class_names: Vec<_> = module.classes.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(class_names, vec!["Person", "Address"]);
        assert_eq!(
            module.classes[0].fields[1].ty,
            SchemaType::list(SchemaType::nullable(SchemaType::Class("Address".into())))
        );
    }

    #[test]
    fn test_source_modules_selection() {
        let manifest = Manifest::from_str(EXAMPLE).unwrap();
        let selected = manifest.source_modules();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name.as_str(), "org.mod");
    }

    #[test]
    fn test_config_lowering() {
        let manifest = Manifest::from_str(EXAMPLE).unwrap();
        let config = manifest.config(Path::new(".")).unwrap();

        assert_eq!(config.source_modules, vec!["org.mod".to_string()]);
        assert_eq!(
            config.non_null_annotation.as_deref(),
            Some("javax.annotation.Nonnull")
        );
        assert!(config.params_annotation.is_none());
        assert_eq!(config.package_mapping.remap("org"), "foo.bar");
        assert_eq!(config.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
    }

    #[test]
    fn test_empty_manifest_has_no_source_modules() {
        let manifest = Manifest::from_str("").unwrap();
        assert!(manifest.modules().is_empty());
        assert!(manifest.source_modules().is_empty());
    }

    #[test]
    fn test_undeclared_source_module_rejected() {
        let err = Manifest::from_str(
            r#"
            [generator]
            source-modules = ["org.missing"]
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("org.missing"));
    }

    #[test]
    fn test_duplicate_module_rejected() {
        let err = Manifest::from_str(
            r#"
            [[module]]
            name = "org.mod"

            [[module]]
            name = "org.mod"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("declared twice"));
    }

    #[test]
    fn test_invalid_module_name_rejected() {
        let err = Manifest::from_str(
            r#"
            [[module]]
            name = "org..mod"
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_unknown_type_rejected() {
        let err = Manifest::from_str(
            r#"
            [[module]]
            name = "org.mod"

            [[module.class]]
            name = "Person"

            [[module.class.field]]
            name = "pets"
            type = "Map<String, Int>"
            "#,
        )
        .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Person.pets"));
        assert!(msg.contains("org.mod"));
    }

    #[test]
    fn test_settings_module_fills_unset_options() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("settings.toml"),
            r#"
            [defaults]
            params-annotation = "javax.inject.Named"
            non-null-annotation = "org.other.NotNull"

            [defaults.package-mapping]
            com = "baz"
            "#,
        )
        .unwrap();

        let manifest = Manifest::from_str(
            r#"
            [generator]
            source-modules = ["org.mod"]
            non-null-annotation = "javax.annotation.Nonnull"
            settings-module = "settings.toml"

            [generator.package-mapping]
            org = "foo.bar"

            [[module]]
            name = "org.mod"
            "#,
        )
        .unwrap();

        let config = manifest.config(temp.path()).unwrap();

        // Unset option comes from settings, explicit value wins.
        assert_eq!(
            config.params_annotation.as_deref(),
            Some("javax.inject.Named")
        );
        assert_eq!(
            config.non_null_annotation.as_deref(),
            Some("javax.annotation.Nonnull")
        );
        assert_eq!(config.package_mapping.remap("com"), "baz");
        assert_eq!(config.package_mapping.remap("org"), "foo.bar");
    }

    #[test]
    fn test_missing_settings_module_is_an_io_error() {
        let manifest = Manifest::from_str(
            r#"
            [generator]
            settings-module = "nope.toml"
            "#,
        )
        .unwrap();

        let err = manifest.config(Path::new("/nonexistent")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
