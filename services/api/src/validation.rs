//! Input validation and name parsing

use common::models::PersonName;
use regex::Regex;
use std::sync::OnceLock;

/// Strip quote, semicolon and parenthesis characters, then trim.
///
/// This only blunts naive script injection in free-text names. Responses are
/// always JSON-encoded; nothing interpolates names into markup.
pub fn sanitize_name(raw: &str) -> String {
    static UNSAFE_CHARS: OnceLock<Regex> = OnceLock::new();
    let regex = UNSAFE_CHARS
        .get_or_init(|| Regex::new(r"[';()]").expect("Failed to compile name sanitizer regex"));

    regex.replace_all(raw, "").trim().to_string()
}

/// Split "First Last Names" into first word and remainder
pub fn parse_full_name(raw: &str) -> PersonName {
    let cleaned = sanitize_name(raw);
    let mut parts = cleaned.split_whitespace();
    let first_name = parts.next().unwrap_or_default().to_string();
    let last_name = parts.collect::<Vec<_>>().join(" ");

    PersonName {
        first_name,
        last_name,
    }
}

/// Parse a comma-separated list of full names, dropping blank items
pub fn parse_names(raw: &str) -> Vec<PersonName> {
    raw.split(',')
        .map(parse_full_name)
        .filter(|name| !name.is_empty())
        .collect()
}

/// Sanitize both halves of an already split name
pub fn sanitize_person(first_name: &str, last_name: &str) -> PersonName {
    PersonName::new(sanitize_name(first_name), sanitize_name(last_name))
}

/// Validate class name
pub fn validate_class_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Class name is required".to_string());
    }

    Ok(())
}

/// Validate teacher name
pub fn validate_teacher(teacher: &PersonName) -> Result<(), String> {
    if teacher.is_empty() {
        return Err("Teacher name is required".to_string());
    }

    Ok(())
}

/// Validate class ID
pub fn validate_class_id(id: Option<&str>) -> Result<&str, String> {
    match id.map(str::trim) {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err("Class ID is required".to_string()),
    }
}
