pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
    pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";
    pub const ACCESS_CONTROL_EXPOSE_HEADERS: &str = "Access-Control-Expose-Headers";
    pub const ACCESS_CONTROL_MAX_AGE: &str = "Access-Control-Max-Age";
    pub const ACCESS_CONTROL_REQUEST_HEADERS: &str = "Access-Control-Request-Headers";
    pub const ACCESS_CONTROL_REQUEST_METHOD: &str = "Access-Control-Request-Method";
    pub const ORIGIN: &str = "Origin";
    pub const VARY: &str = "Vary";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const OPTIONS: &str = "OPTIONS";
    pub const PATCH: &str = "PATCH";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

/// The sentinel that switches an origins or headers list to allow-all.
pub const WILDCARD: &str = "*";

/// Methods the CORS specification accepts for "simple" requests. Used as the
/// allowed-methods fallback when none are configured.
pub const SIMPLE_METHODS: &[&str] = &[method::GET, method::HEAD, method::POST];

/// All common HTTP methods, used by the allow-all preset.
pub const ALL_METHODS: &[&str] = &[
    method::DELETE,
    method::GET,
    method::HEAD,
    method::PATCH,
    method::POST,
    method::PUT,
];

/// Headers allowed by default when no allowed-headers list is configured.
pub const DEFAULT_ALLOWED_HEADERS: &[&str] =
    &["Accept", "Content-Type", "Origin", "X-Requested-With"];

/// Headers exposed by default when no exposed-headers list is configured.
pub const DEFAULT_EXPOSED_HEADERS: &[&str] = &[
    "Cache-Control",
    "Content-Language",
    "Content-Type",
    "Expires",
    "Last-Modified",
    "Pragma",
];
