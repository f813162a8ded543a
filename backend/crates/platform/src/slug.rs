//! URL slugs for product names

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Used when a name has no ASCII letters or digits at all
pub const FALLBACK_SLUG: &str = "produk";

/// Lowercase, hyphen-separated ASCII slug.
///
/// Accented letters are transliterated through NFKD ("Café" -> "cafe"),
/// every other run of non-alphanumeric characters collapses into one `-`,
/// and leading/trailing separators are dropped.
///
/// ```
/// assert_eq!(platform::slug::slugify("Kaos Polos"), "kaos-polos");
/// ```
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for ch in name.nfkd().filter(|c| !is_combining_mark(*c)) {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        FALLBACK_SLUG.to_owned()
    } else {
        slug
    }
}

/// Slug for the `attempt`-th try; the first attempt is the bare slug,
/// later ones get `-2`, `-3`, ...
pub fn with_suffix(base: &str, attempt: u32) -> String {
    if attempt <= 1 {
        base.to_owned()
    } else {
        format!("{base}-{attempt}")
    }
}
