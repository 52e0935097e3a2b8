//! Generator configuration.

use std::path::PathBuf;

use indexmap::IndexMap;

/// Configuration for one generation run.
///
/// Constructed once (by `classgen-manifest` or by hand in tests) and
/// treated as immutable for the duration of the run.
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    /// Names of the modules to generate code for. Must be non-empty by
    /// the time generation starts.
    pub source_modules: Vec<String>,
    /// Directory the caller writes generated files into.
    pub output_dir: PathBuf,
    /// Fully qualified annotation applied to generated constructor
    /// parameters (e.g. `javax.inject.Named`).
    pub params_annotation: Option<String>,
    /// Fully qualified annotation applied to non-nullable reference
    /// members (e.g. `javax.annotation.Nonnull`).
    pub non_null_annotation: Option<String>,
    /// Optional reference to an auxiliary settings module that supplies
    /// generation defaults.
    pub settings_module: Option<String>,
    /// Source package prefix to target package prefix substitutions.
    pub package_mapping: PackageMapping,
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_params_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.params_annotation = Some(annotation.into());
        self
    }

    pub fn with_non_null_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.non_null_annotation = Some(annotation.into());
        self
    }

    pub fn with_package_mapping(mut self, mapping: PackageMapping) -> Self {
        self.package_mapping = mapping;
        self
    }
}

/// Prefix-based package substitutions with unique keys.
///
/// Matching is longest-prefix on dot boundaries. An entry whose key
/// matches no module package is inert, never an error.
#[derive(Debug, Clone, Default)]
pub struct PackageMapping {
    entries: IndexMap<String, String>,
}

impl PackageMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a prefix substitution. A later entry with the same key
    /// replaces the earlier one.
    pub fn insert(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.entries.insert(from.into(), to.into());
    }

    /// Builder-style variant of [`insert`](Self::insert).
    pub fn with(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.insert(from, to);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns true if an entry with this key exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Apply the longest matching prefix substitution to a package name.
    ///
    /// Returns the package unchanged when no entry matches.
    pub fn remap(&self, package: &str) -> String {
        let mut best: Option<(&str, &str)> = None;
        for (from, to) in self.entries.iter() {
            if matches_prefix(package, from)
                && best.is_none_or(|(prev, _)| from.len() > prev.len())
            {
                best = Some((from, to));
            }
        }

        match best {
            Some((from, to)) if from.len() == package.len() => to.to_string(),
            Some((from, to)) => format!("{}{}", to, &package[from.len()..]),
            None => package.to_string(),
        }
    }
}

/// A prefix matches only on dot boundaries: `org` matches `org` and
/// `org.mod`, but not `organic.mod`.
fn matches_prefix(package: &str, prefix: &str) -> bool {
    if prefix.is_empty() || !package.starts_with(prefix) {
        return false;
    }
    package.len() == prefix.len() || package.as_bytes()[prefix.len()] == b'.'
}

impl FromIterator<(String, String)> for PackageMapping {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remap_whole_package() {
        let mapping = PackageMapping::new().with("org", "foo.bar");
        assert_eq!(mapping.remap("org"), "foo.bar");
    }

    #[test]
    fn test_remap_prefix() {
        let mapping = PackageMapping::new().with("org", "foo.bar");
        assert_eq!(mapping.remap("org.example"), "foo.bar.example");
    }

    #[test]
    fn test_remap_no_match_passes_through() {
        let mapping = PackageMapping::new().with("org", "foo.bar");
        assert_eq!(mapping.remap("com.example"), "com.example");
    }

    #[test]
    fn test_remap_respects_dot_boundaries() {
        let mapping = PackageMapping::new().with("org", "foo.bar");
        assert_eq!(mapping.remap("organic.mod"), "organic.mod");
    }

    #[test]
    fn test_remap_longest_match_wins() {
        let mapping = PackageMapping::new()
            .with("org", "a")
            .with("org.example", "b");
        assert_eq!(mapping.remap("org.example.deep"), "b.deep");
        assert_eq!(mapping.remap("org.other"), "a.other");
    }

    #[test]
    fn test_remap_empty_package() {
        let mapping = PackageMapping::new().with("org", "foo.bar");
        assert_eq!(mapping.remap(""), "");
    }

    #[test]
    fn test_config_builder() {
        let config = GeneratorConfig::new()
            .with_output_dir("build/generated")
            .with_non_null_annotation("javax.annotation.Nonnull");
        assert_eq!(config.output_dir, PathBuf::from("build/generated"));
        assert_eq!(
            config.non_null_annotation.as_deref(),
            Some("javax.annotation.Nonnull")
        );
        assert!(config.params_annotation.is_none());
    }
}
