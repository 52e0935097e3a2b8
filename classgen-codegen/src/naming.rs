//! Shared naming helpers for code generation.

/// Convert a string to PascalCase (e.g., "mod" -> "Mod", "my_mod" -> "MyMod").
pub fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}
