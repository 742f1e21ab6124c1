use crate::case::canonical_header_name;
use crate::constants::{DEFAULT_ALLOWED_HEADERS, DEFAULT_EXPOSED_HEADERS, SIMPLE_METHODS, WILDCARD, method};
use crate::options::CorsOptions;
use crate::origin::OriginEntry;
use crate::result::ConfigurationError;
use crate::util::normalize_lower;
use indexmap::IndexSet;

/// The compiled, normalized form of a [`CorsOptions`].
///
/// Built once, then shared read-only across every preflight evaluation. No
/// field is mutated after compilation, so a `Policy` (and anything holding
/// one) is safe for lock-free concurrent use.
#[derive(Debug, Clone)]
pub struct Policy {
    allow_all_origins: bool,
    origins: Vec<OriginEntry>,
    allowed_methods: IndexSet<String>,
    allow_all_headers: bool,
    allowed_headers: IndexSet<String>,
    exposed_headers: Vec<String>,
    max_age: u32,
    allow_credentials: bool,
}

impl Policy {
    /// Validates and normalizes raw options into a ready-to-evaluate policy.
    ///
    /// Pure: the same options always compile to the same policy, and failure
    /// leaves nothing behind. A malformed wildcard origin is a hard
    /// configuration error, not a silently dropped entry.
    pub fn compile(options: &CorsOptions) -> Result<Self, ConfigurationError> {
        let (allow_all_origins, origins) = Self::compile_origins(&options.allowed_origins)?;
        let allowed_methods = Self::compile_methods(&options.allowed_methods);
        let (allow_all_headers, allowed_headers) =
            Self::compile_headers(&options.allowed_headers);
        let exposed_headers = Self::compile_exposed_headers(&options.exposed_headers);

        if options.allow_credentials {
            if allow_all_origins {
                return Err(ConfigurationError::CredentialsWithAllOrigins);
            }
            if allow_all_headers {
                return Err(ConfigurationError::CredentialsWithAllHeaders);
            }
        }

        Ok(Self {
            allow_all_origins,
            origins,
            allowed_methods,
            allow_all_headers,
            allowed_headers,
            exposed_headers,
            max_age: options.max_age,
            allow_credentials: options.allow_credentials,
        })
    }

    fn compile_origins(
        configured: &[String],
    ) -> Result<(bool, Vec<OriginEntry>), ConfigurationError> {
        // An empty whitelist means "allow everything", not "allow nothing".
        if configured.is_empty() {
            return Ok((true, Vec::new()));
        }

        let mut origins = Vec::with_capacity(configured.len());
        for value in configured {
            if value == WILDCARD {
                // Allow-all makes the accumulated entries irrelevant.
                return Ok((true, Vec::new()));
            }
            let entry = OriginEntry::new(value).map_err(|source| {
                ConfigurationError::InvalidOriginPattern {
                    origin: value.clone(),
                    source,
                }
            })?;
            origins.push(entry);
        }

        Ok((false, origins))
    }

    fn compile_methods(configured: &[String]) -> IndexSet<String> {
        if configured.is_empty() {
            return SIMPLE_METHODS.iter().map(|m| (*m).to_string()).collect();
        }

        configured
            .iter()
            .map(|m| m.trim().to_ascii_uppercase())
            .collect()
    }

    fn compile_headers(configured: &[String]) -> (bool, IndexSet<String>) {
        if configured.is_empty() {
            return (
                false,
                DEFAULT_ALLOWED_HEADERS
                    .iter()
                    .map(|h| (*h).to_string())
                    .collect(),
            );
        }

        let mut headers = IndexSet::with_capacity(configured.len());
        for value in configured {
            if value == WILDCARD {
                return (true, IndexSet::new());
            }
            headers.insert(canonical_header_name(value.trim()));
        }

        (false, headers)
    }

    fn compile_exposed_headers(configured: &[String]) -> Vec<String> {
        if configured.is_empty() {
            return DEFAULT_EXPOSED_HEADERS
                .iter()
                .map(|h| (*h).to_string())
                .collect();
        }

        configured
            .iter()
            .map(|h| canonical_header_name(h.trim()))
            .collect()
    }

    pub fn allow_all_origins(&self) -> bool {
        self.allow_all_origins
    }

    pub fn origins(&self) -> &[OriginEntry] {
        &self.origins
    }

    pub fn allow_all_headers(&self) -> bool {
        self.allow_all_headers
    }

    pub fn allowed_methods(&self) -> impl Iterator<Item = &str> {
        self.allowed_methods.iter().map(String::as_str)
    }

    pub fn allowed_headers(&self) -> impl Iterator<Item = &str> {
        self.allowed_headers.iter().map(String::as_str)
    }

    pub fn exposed_headers(&self) -> &[String] {
        &self.exposed_headers
    }

    pub fn max_age(&self) -> u32 {
        self.max_age
    }

    pub fn allow_credentials(&self) -> bool {
        self.allow_credentials
    }

    /// Whether `origin` is whitelisted. Comparison is case-insensitive.
    pub fn is_origin_allowed(&self, origin: &str) -> bool {
        if self.allow_all_origins {
            return true;
        }
        let origin = normalize_lower(origin);
        self.origins.iter().any(|entry| entry.allows(&origin))
    }

    /// Whether `method` (already uppercased) is whitelisted. OPTIONS is
    /// always allowed because preflights themselves use it.
    pub(crate) fn is_method_allowed_upper(&self, method: &str) -> bool {
        method == method::OPTIONS || self.allowed_methods.contains(method)
    }

    /// Whether `method` is whitelisted, case-insensitively.
    pub fn is_method_allowed(&self, method: &str) -> bool {
        self.is_method_allowed_upper(&method.trim().to_ascii_uppercase())
    }

    /// Whether `header` (already canonicalized) is whitelisted.
    pub(crate) fn is_header_allowed_canonical(&self, header: &str) -> bool {
        self.allow_all_headers || self.allowed_headers.contains(header)
    }

    /// Whether every header in `headers` is whitelisted, compared in
    /// canonical header casing.
    pub fn are_headers_allowed<I, S>(&self, headers: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        headers.into_iter().all(|header| {
            self.is_header_allowed_canonical(&canonical_header_name(header.as_ref().trim()))
        })
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
