//! Attachment filenames

use std::sync::OnceLock;

use regex::Regex;

fn disposition_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // `filename=` or `filename*=`, value double-quoted, single-quoted or bare
        Regex::new(r#"filename[^;=\n]*=("[^"]*"|'[^']*'|[^;\n]*)"#)
            .expect("Content-Disposition pattern is valid")
    })
}

/// Filename from a `Content-Disposition` header, quotes removed.
/// `None` when the header carries no usable name.
pub fn filename_from_disposition(header: &str) -> Option<String> {
    let captures = disposition_pattern().captures(header)?;
    let name = captures
        .get(1)?
        .as_str()
        .replace(['"', '\''], "");
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Header filename, or `fallback` when missing or malformed
pub fn attachment_name(header: Option<&str>, fallback: &str) -> String {
    header
        .and_then(filename_from_disposition)
        .unwrap_or_else(|| fallback.to_string())
}
