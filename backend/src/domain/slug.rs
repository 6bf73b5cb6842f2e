//! URL slugs derived from recipe titles.
//!
//! Slugs are trimmed, non-empty identifiers composed of lowercase ASCII
//! letters, digits and single hyphens.

const FALLBACK_SLUG: &str = "recipe";

/// Derive a slug from free text.
///
/// ASCII letters and digits are kept (lowercased), every other run of
/// characters collapses to one hyphen, and leading or trailing hyphens are
/// dropped. Text with no ASCII alphanumerics yields `"recipe"`.
///
/// # Examples
/// ```
/// use cookbook::domain::slugify;
///
/// assert_eq!(slugify("  Grandma's Apple Pie!  "), "grandma-s-apple-pie");
/// assert_eq!(slugify("!!!"), "recipe");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        FALLBACK_SLUG.to_owned()
    } else {
        slug
    }
}

/// Return `true` when `value` is a valid slug.
pub(crate) fn is_valid_slug(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
}
