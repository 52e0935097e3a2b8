//! The in-memory result of a generation run.

use std::path::{Path, PathBuf};

use eyre::Result;
use indexmap::IndexMap;

/// Ordered mapping from relative file path to rendered UTF-8 source text.
///
/// Rendering is pure and in-memory; writing to disk is a separate,
/// caller-sequenced step via [`write_to`](Self::write_to).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratedFiles {
    files: IndexMap<String, String>,
}

impl GeneratedFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rendered file. A later insert with the same path
    /// replaces the earlier content.
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    /// Get the content of a file by relative path.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterate over (path, content) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(p, c)| (p.as_str(), c.as_str()))
    }

    /// Relative paths in insertion order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    /// Write all files under the given base directory, creating parent
    /// directories as needed. Returns the written paths.
    pub fn write_to(&self, base: &Path) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.files.len());
        for (path, content) in self.files.iter() {
            let full = base.join(path);
            if let Some(parent) = full.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&full, content)?;
            written.push(full);
        }
        Ok(written)
    }
}

impl IntoIterator for GeneratedFiles {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let mut files = GeneratedFiles::new();
        files.insert("b/B.java", "class B {}");
        files.insert("a/A.java", "class A {}");

        let paths: Vec<_> = files.paths().collect();
        assert_eq!(paths, vec!["b/B.java", "a/A.java"]);
    }

    #[test]
    fn test_get() {
        let mut files = GeneratedFiles::new();
        files.insert("foo/bar/Mod.java", "class Mod {}");
        assert_eq!(files.get("foo/bar/Mod.java"), Some("class Mod {}"));
        assert_eq!(files.get("Missing.java"), None);
    }

    #[test]
    fn test_write_to_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let mut files = GeneratedFiles::new();
        files.insert("foo/bar/Mod.java", "class Mod {}");

        let written = files.write_to(temp.path()).unwrap();

        assert_eq!(written.len(), 1);
        let path = temp.path().join("foo").join("bar").join("Mod.java");
        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "class Mod {}");
    }

    #[test]
    fn test_write_to_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Mod.java");
        fs::write(&path, "old").unwrap();

        let mut files = GeneratedFiles::new();
        files.insert("Mod.java", "new");
        files.write_to(temp.path()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }
}
