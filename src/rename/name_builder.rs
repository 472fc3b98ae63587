use once_cell::sync::Lazy;
use regex::Regex;

use super::types::{NameError, RenameMode};

/// Characters that are rejected in a target file name on at least one
/// mainstream filesystem
static DISALLOWED_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r#"[<>:"/\\|?*]"#).unwrap());

/// Split a file name at its last '.' into `(base, extension)`.
///
/// The extension keeps its leading dot. A name without any '.' has an empty
/// extension and the whole name as base.
pub fn split_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) => name.split_at(idx),
        None => (name, ""),
    }
}

/// Compute the name a file would get under the given mode
pub fn compute_new_name(original: &str, mode: &RenameMode) -> String {
    match mode {
        RenameMode::Suffix(text) => {
            let (base, extension) = split_name(original);
            format!("{}{}{}", base, text, extension)
        }
        // Prefix goes in front of the whole name, extension split does not matter
        RenameMode::Prefix(text) => format!("{}{}", text, original),
        RenameMode::FindReplace { find, replace } => {
            if find.is_empty() {
                original.to_string()
            } else {
                original.replace(find.as_str(), replace)
            }
        }
    }
}

/// Check that a name can be used as a single path component
pub fn validate_file_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }

    if name == "." || name == ".." {
        return Err(NameError::Reserved(name.to_string()));
    }

    if let Some(m) = DISALLOWED_CHARS.find(name) {
        return Err(NameError::DisallowedChar {
            name: name.to_string(),
            ch: m.as_str().chars().next().unwrap_or('?'),
        });
    }

    Ok(())
}
