//! Title-to-slug normalization.
//!
//! Slugs become part of a post's filename and, through the site generator,
//! its URL. On the default path everything is folded down to ASCII.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Anything that is not a letter, number, underscore, whitespace, or hyphen.
///
/// Combining marks count as disallowed, and the C0 separators `\x1c`-`\x1f`
/// count as whitespace.
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}_\s\x1c-\x1f-]").expect("valid slug regex"));

/// Runs of hyphens and/or whitespace.
static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\s\x1c-\x1f]+").expect("valid slug regex"));

/// Normalize arbitrary text into a lowercase, hyphen-delimited slug.
///
/// With `allow_unicode` unset the text is NFKD-decomposed and every non-ASCII
/// code point is dropped, so accented letters fold to their base letter. With
/// it set, the text is NFKC-composed and non-ASCII word characters survive.
///
/// The result may be empty if nothing in `text` is retainable.
pub fn slugify(text: &str, allow_unicode: bool) -> String {
    let normalized: String = if allow_unicode {
        text.nfkc().collect()
    } else {
        text.nfkd().filter(char::is_ascii).collect()
    };

    let lowered = normalized.to_lowercase();
    let kept = DISALLOWED.replace_all(&lowered, "");
    let joined = SEPARATORS.replace_all(&kept, "-");
    joined.trim_matches(&['-', '_'][..]).to_string()
}

/// Shorthand for the ASCII-folding path of [`slugify`].
pub fn slugify_ascii(text: &str) -> String {
    slugify(text, false)
}
