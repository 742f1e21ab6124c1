pub mod constants;

mod case;
mod context;
mod cors;
mod headers;
mod matcher;
mod options;
mod origin;
mod policy;
mod preflight;
mod result;
mod util;

pub use case::canonical_header_name;
pub use context::RequestContext;
pub use cors::Cors;
pub use headers::{HeaderCollection, Headers};
pub use matcher::Matcher;
pub use options::{CorsOptions, default_headers_with};
pub use origin::OriginEntry;
pub use policy::Policy;
pub use result::{ConfigurationError, PatternError, PreflightError};
