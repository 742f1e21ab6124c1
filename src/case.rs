use crate::util::is_http_token;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Canonical forms of header names that show up in nearly every CORS
/// negotiation, keyed by their lowercase spelling. Lookups that hit this
/// table skip the per-character rewrite.
static COMMON_HEADERS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("accept", "Accept"),
        ("accept-language", "Accept-Language"),
        ("authorization", "Authorization"),
        ("cache-control", "Cache-Control"),
        ("content-language", "Content-Language"),
        ("content-length", "Content-Length"),
        ("content-type", "Content-Type"),
        ("cookie", "Cookie"),
        ("expires", "Expires"),
        ("last-modified", "Last-Modified"),
        ("origin", "Origin"),
        ("pragma", "Pragma"),
        ("range", "Range"),
        ("user-agent", "User-Agent"),
        ("x-requested-with", "X-Requested-With"),
    ])
});

/// Rewrites a header name into its canonical form: the first letter and every
/// letter following a `-` uppercased, all other letters lowercased
/// (`content-type` becomes `Content-Type`).
///
/// Names that are not valid HTTP tokens are returned unchanged, so the
/// membership checks downstream reject them instead of a mangled variant.
pub fn canonical_header_name(name: &str) -> String {
    if !is_http_token(name) {
        return name.to_string();
    }

    if let Some(canonical) = COMMON_HEADERS.get(name.to_ascii_lowercase().as_str()) {
        return (*canonical).to_string();
    }

    let mut canonical = String::with_capacity(name.len());
    let mut upper_next = true;
    for byte in name.bytes() {
        let rewritten = if upper_next {
            byte.to_ascii_uppercase()
        } else {
            byte.to_ascii_lowercase()
        };
        upper_next = byte == b'-';
        canonical.push(rewritten as char);
    }
    canonical
}

#[cfg(test)]
#[path = "case_test.rs"]
mod case_test;
