use crate::constants::{ALL_METHODS, DEFAULT_ALLOWED_HEADERS, WILDCARD};
use crate::util::equals_ignore_case;

/// Raw, user-supplied CORS configuration.
///
/// Empty lists are meaningful: no configured origins means every origin is
/// allowed (absence is "allow all", not "allow none"), while empty methods
/// and headers fall back to the CORS-spec simple methods and the default
/// allowed-header set. See [`Policy::compile`] for the exact rules.
///
/// [`Policy::compile`]: crate::Policy::compile
#[derive(Debug, Clone, Default)]
pub struct CorsOptions {
    /// Origins to whitelist. Entries may contain `*` wildcards
    /// (`https://*.example.com`); a bare `*` allows every origin.
    pub allowed_origins: Vec<String>,
    /// Methods to whitelist, compared case-insensitively.
    pub allowed_methods: Vec<String>,
    /// Headers to whitelist, compared in canonical header casing. A bare `*`
    /// allows every header.
    pub allowed_headers: Vec<String>,
    /// Headers to expose to the requesting client.
    pub exposed_headers: Vec<String>,
    /// Preflight cache lifetime in seconds; 0 omits the header.
    pub max_age: u32,
    /// Whether requests may carry credentials such as cookies. Cannot be
    /// combined with allow-all origins or allow-all headers.
    pub allow_credentials: bool,
}

impl CorsOptions {
    /// Options that allow every origin, all common HTTP methods, and the
    /// default header set.
    pub fn allow_all() -> Self {
        Self {
            allowed_origins: vec![WILDCARD.to_string()],
            allowed_methods: ALL_METHODS.iter().map(|m| (*m).to_string()).collect(),
            allowed_headers: DEFAULT_ALLOWED_HEADERS
                .iter()
                .map(|h| (*h).to_string())
                .collect(),
            exposed_headers: Vec::new(),
            max_age: 0,
            allow_credentials: false,
        }
    }
}

/// The default allowed headers plus the provided extras, deduplicated
/// case-insensitively.
pub fn default_headers_with<I, S>(extra: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut headers: Vec<String> = DEFAULT_ALLOWED_HEADERS
        .iter()
        .map(|h| (*h).to_string())
        .collect();

    for header in extra {
        let header = header.into();
        if !headers
            .iter()
            .any(|existing| equals_ignore_case(existing, &header))
        {
            headers.push(header);
        }
    }

    headers
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
