//! Type expression parsing.
//!
//! Grammar, innermost last: `T?` (nullable suffix), `List<T>`, the
//! primitive names, otherwise a class reference.

use classgen_ir::SchemaType;

/// Parse a declared type expression such as `List<Address?>`.
///
/// Returns a human-readable reason on failure; the caller wraps it into
/// a manifest diagnostic.
pub fn parse_type(s: &str) -> std::result::Result<SchemaType, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty type expression".to_string());
    }

    if let Some(inner) = s.strip_suffix('?') {
        return Ok(SchemaType::nullable(parse_type(inner)?));
    }

    if let Some(rest) = s.strip_prefix("List<") {
        let inner = rest
            .strip_suffix('>')
            .ok_or_else(|| format!("unclosed `List<` in `{s}`"))?;
        return Ok(SchemaType::list(parse_type(inner)?));
    }

    match s {
        "String" => Ok(SchemaType::String),
        "Int" => Ok(SchemaType::Int),
        "Float" => Ok(SchemaType::Float),
        "Boolean" => Ok(SchemaType::Boolean),
        "Any" => Ok(SchemaType::Any),
        _ if is_identifier(s) => Ok(SchemaType::Class(s.to_string())),
        _ => Err(format!("unknown type `{s}`")),
    }
}

/// A valid identifier: letter or underscore, then letters, digits, underscores.
pub(crate) fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}
