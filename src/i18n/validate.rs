//! Empty-string check over a serialized bundle.

use serde_json::Value;

/// Path of the first string that is empty or whitespace only, if any.
///
/// Paths use `a.b[2].c` notation. Absent optional fields are skipped during
/// serialization, so only fields that are present get checked.
pub fn find_empty_field(value: &Value) -> Option<String> {
    walk(value, String::new())
}

fn walk(value: &Value, path: String) -> Option<String> {
    match value {
        Value::String(s) if s.trim().is_empty() => Some(path),
        Value::Object(map) => map.iter().find_map(|(key, child)| {
            let child_path = if path.is_empty() {
                key.clone()
            } else {
                format!("{path}.{key}")
            };
            walk(child, child_path)
        }),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .find_map(|(i, child)| walk(child, format!("{path}[{i}]"))),
        _ => None,
    }
}
