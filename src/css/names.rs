use once_cell::sync::Lazy;
use regex::Regex;

static CASE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new("([a-z])([A-Z])").expect("valid case boundary pattern"));

/// Converts a camelCase property name to kebab-case.
///
/// A hyphen is inserted at every lowercase-to-uppercase boundary and the
/// result is lowercased, so `borderTopLeftRadius` becomes
/// `border-top-left-radius`. Names that are already kebab-case pass through.
pub fn dashify(name: &str) -> String {
    CASE_BOUNDARY.replace_all(name, "$1-$2").to_lowercase()
}
