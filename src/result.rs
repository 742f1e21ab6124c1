use regex_automata::meta::BuildError;
use thiserror::Error;

/// Failure to turn a configured pattern into a compiled matcher.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to compile pattern `{pattern}`")]
    Build {
        pattern: String,
        #[source]
        source: Box<BuildError>,
    },
    #[error("pattern length {length} exceeds the maximum allowed {max}")]
    TooLong { length: usize, max: usize },
}

/// Rejections produced while compiling a [`CorsOptions`] into a [`Policy`].
///
/// Every variant maps to the `ConfigurationInvalid` condition: the options
/// were contradictory or malformed and no policy is produced.
///
/// [`CorsOptions`]: crate::CorsOptions
/// [`Policy`]: crate::Policy
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("allow_credentials cannot be combined with allow-all origins")]
    CredentialsWithAllOrigins,
    #[error("allow_credentials cannot be combined with allow-all headers")]
    CredentialsWithAllHeaders,
    #[error("invalid allowed-origin pattern `{origin}`")]
    InvalidOriginPattern {
        origin: String,
        #[source]
        source: PatternError,
    },
}

/// Rejections produced while validating a single preflight request.
///
/// All variants are caller-surfaced verdicts, never internal faults. The
/// wording follows the messages the transport layer is expected to render.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PreflightError {
    /// The request was not sent with the OPTIONS method. Callers may treat
    /// this as "not a preflight" and forward the request instead of failing.
    #[error("the request was not sent using the OPTIONS http method")]
    MethodInvalid,
    #[error("the requested origin was not whitelisted")]
    OriginNotAllowed,
    #[error("no http method was provided for validation")]
    MethodMissing,
    #[error("the requested method was not whitelisted")]
    MethodNotAllowed,
    #[error("one or more headers were not whitelisted")]
    HeadersNotAllowed,
}

#[cfg(test)]
#[path = "result_test.rs"]
mod result_test;
