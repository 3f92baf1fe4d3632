mod kebab;

pub use kebab::kebab_case;

/// Uppercase the first character and leave the rest untouched
///
/// Uses the full Unicode uppercase mapping, so a leading `ß` becomes `SS`.
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
