use crate::matcher::Matcher;
use crate::result::PatternError;
use crate::util::normalize_lower;

/// One configured allowed-origin value.
///
/// This is the origin-flavored specialization of [`Matcher`]: values
/// containing `*` are translated into full-match pattern source by escaping
/// every regex metacharacter and substituting `*` with `.*`, everything else
/// becomes an exact matcher. The stored value is lowercased at construction,
/// and callers lowercase candidates before matching, so comparison is
/// case-insensitive on both sides.
#[derive(Debug, Clone)]
pub struct OriginEntry {
    value: String,
    matcher: Matcher,
}

impl OriginEntry {
    pub fn new(origin: &str) -> Result<Self, PatternError> {
        let value = normalize_lower(origin.trim());
        let matcher = if value.contains('*') {
            Matcher::pattern(&wildcard_to_regex(&value))?
        } else {
            Matcher::exact(value.clone())
        };

        Ok(Self { value, matcher })
    }

    /// The normalized (lowercased) configured value.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_wildcard(&self) -> bool {
        self.matcher.is_pattern()
    }

    /// Whether this entry admits `candidate`. The candidate must already be
    /// lowercased.
    pub fn allows(&self, candidate: &str) -> bool {
        self.matcher.matches(candidate)
    }
}

/// Translates a `*`-wildcard origin into regex source: metacharacters are
/// escaped so `.` in `https://*.example.com` stays a literal dot, and each
/// `*` becomes `.*`.
fn wildcard_to_regex(value: &str) -> String {
    let mut source = String::with_capacity(value.len() + 8);
    for ch in value.chars() {
        match ch {
            '*' => source.push_str(".*"),
            '.' | '+' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '^' | '$' | '|' | '\\'
            | '/' => {
                source.push('\\');
                source.push(ch);
            }
            _ => source.push(ch),
        }
    }
    source
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
