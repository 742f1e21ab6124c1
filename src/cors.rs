use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::options::CorsOptions;
use crate::policy::Policy;
use crate::preflight;
use crate::result::{ConfigurationError, PreflightError};

/// The compiled CORS validator.
///
/// Construction compiles and validates the options; evaluation is pure,
/// synchronous, and lock-free, so one `Cors` instance can be shared (for
/// example behind an `Arc`) across any number of concurrent requests.
#[derive(Debug, Clone)]
pub struct Cors {
    policy: Policy,
}

impl Cors {
    pub fn new(options: CorsOptions) -> Result<Self, ConfigurationError> {
        Ok(Self {
            policy: Policy::compile(&options)?,
        })
    }

    /// A validator that allows all origins, all common HTTP methods, and the
    /// default header set.
    pub fn allow_all() -> Result<Self, ConfigurationError> {
        Self::new(CorsOptions::allow_all())
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Validates a preflight request, writing the response headers into the
    /// provided sink.
    ///
    /// Returns `Ok(())` when the preflight passed and all headers are
    /// applied, or the first failing check otherwise. Headers written before
    /// the failing step (such as `Vary`) remain in the sink; callers render
    /// their error response on top of them.
    pub fn preflight(
        &self,
        request: &RequestContext<'_>,
        headers: &mut HeaderCollection,
    ) -> Result<(), PreflightError> {
        preflight::evaluate(&self.policy, request, headers)
    }

    /// Whether `origin` is whitelisted, case-insensitively.
    pub fn is_origin_allowed(&self, origin: &str) -> bool {
        self.policy.is_origin_allowed(origin)
    }

    /// Whether `method` is whitelisted, case-insensitively. OPTIONS is
    /// always allowed.
    pub fn is_method_allowed(&self, method: &str) -> bool {
        self.policy.is_method_allowed(method)
    }

    /// Whether every header in `headers` is whitelisted.
    pub fn are_headers_allowed<I, S>(&self, headers: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.policy.are_headers_allowed(headers)
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
