//! Category names and the add-if-absent rule

/// Append `name` to `categories` unless it is empty or already present.
///
/// Returns true when the list changed. Matching is exact, so "Rust" and
/// "rust" are distinct categories, and a name of spaces is a name.
pub fn add_if_absent(categories: &mut Vec<String>, name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    if categories.iter().any(|existing| existing == name) {
        return false;
    }
    categories.push(name.to_string());
    true
}
