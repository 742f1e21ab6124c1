use crate::result::PatternError;
use regex_automata::meta::Regex;

pub(crate) const MAX_PATTERN_LENGTH: usize = 50_000;

/// A single-value matcher: either a literal comparison or a pattern compiled
/// once at construction.
///
/// Pattern sources are wrapped as `^(?:...)$` before compilation so that a
/// match always covers the entire candidate. An unanchored search would let
/// an origin such as `evil.com/https://trusted.com` satisfy a pattern written
/// for `https://trusted.com`.
#[derive(Debug, Clone)]
pub enum Matcher {
    Exact(String),
    Pattern { source: String, regex: Regex },
}

impl Matcher {
    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    /// Compiles caller-supplied regex source into a full-match pattern.
    pub fn pattern(source: &str) -> Result<Self, PatternError> {
        let regex = compile_full_match(source)?;
        Ok(Self::Pattern {
            source: source.to_owned(),
            regex,
        })
    }

    pub fn is_pattern(&self) -> bool {
        matches!(self, Self::Pattern { .. })
    }

    /// The literal value or pattern source this matcher was built from.
    pub fn value(&self) -> &str {
        match self {
            Self::Exact(value) => value,
            Self::Pattern { source, .. } => source,
        }
    }

    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Self::Exact(value) => value == candidate,
            Self::Pattern { regex, .. } => regex.is_match(candidate.as_bytes()),
        }
    }
}

impl From<String> for Matcher {
    fn from(value: String) -> Self {
        Self::Exact(value)
    }
}

impl From<&str> for Matcher {
    fn from(value: &str) -> Self {
        Self::Exact(value.to_owned())
    }
}

/// Compiles `source` anchored to the whole candidate string.
pub(crate) fn compile_full_match(source: &str) -> Result<Regex, PatternError> {
    if source.len() > MAX_PATTERN_LENGTH {
        return Err(PatternError::TooLong {
            length: source.len(),
            max: MAX_PATTERN_LENGTH,
        });
    }

    Regex::new(&format!("^(?:{source})$")).map_err(|err| PatternError::Build {
        pattern: source.to_owned(),
        source: Box::new(err),
    })
}

#[cfg(test)]
#[path = "matcher_test.rs"]
mod matcher_test;
