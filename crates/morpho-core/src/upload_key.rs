//! Upload filename normalisation.
//!
//! Client-supplied filenames are untrusted: they can carry directory
//! components (`../../etc/passwd`), separators from either platform,
//! control characters, or be empty. [`sanitize_filename`] reduces a
//! filename to a single safe path component, used as the human-readable
//! part of a storage key.
//!
//! The mapping:
//!
//! - everything up to the last `/` or `\` is discarded
//! - ASCII alphanumerics, `.`, `-`, `_` pass through; spaces become `_`;
//!   anything else is dropped
//! - leading dots are stripped (no hidden files, no `..`)
//! - the result is bounded to [`MAX_LEN`] bytes
//! - the extension is lowercased, so `IMG.JPG` and `img.jpg` read alike
//! - an empty result falls back to `"upload"`

/// Upper bound on a sanitised filename, in bytes.
pub const MAX_LEN: usize = 120;

/// Name used when sanitisation leaves nothing.
pub const FALLBACK_NAME: &str = "upload";

/// Normalise a client-supplied filename into a single safe path component.
pub fn sanitize_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);

    let mut out: String = base
        .chars()
        .filter_map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '.' | '-' | '_' => Some(c),
            ' ' => Some('_'),
            _ => None,
        })
        .collect();

    while out.starts_with('.') {
        out.remove(0);
    }

    // All remaining characters are single-byte ASCII, so byte truncation
    // cannot split a character.
    if out.len() > MAX_LEN {
        out.truncate(MAX_LEN);
    }

    if out.is_empty() {
        return FALLBACK_NAME.to_string();
    }

    if let Some(dot) = out.rfind('.') {
        let ext = out[dot + 1..].to_ascii_lowercase();
        out.truncate(dot + 1);
        out.push_str(&ext);
    }

    out
}
