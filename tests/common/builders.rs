use cors_gate::{Cors, CorsOptions, HeaderCollection, PreflightError, RequestContext};

#[derive(Default)]
pub struct CorsBuilder {
    options: CorsOptions,
}

impl CorsBuilder {
    pub fn origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.allowed_origins = origins.into_iter().map(Into::into).collect();
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.allowed_methods = methods.into_iter().map(Into::into).collect();
        self
    }

    pub fn allowed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.allowed_headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.exposed_headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn max_age(mut self, seconds: u32) -> Self {
        self.options.max_age = seconds;
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.options.allow_credentials = enabled;
        self
    }

    pub fn options(self) -> CorsOptions {
        self.options
    }

    pub fn build(self) -> Cors {
        Cors::new(self.options).expect("options should compile")
    }
}

pub fn cors() -> CorsBuilder {
    CorsBuilder::default()
}

#[derive(Default)]
pub struct PreflightRequestBuilder {
    method: Option<String>,
    origin: String,
    request_method: String,
    request_headers: String,
}

impl PreflightRequestBuilder {
    pub fn method<S: Into<String>>(mut self, method: S) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn origin<S: Into<String>>(mut self, origin: S) -> Self {
        self.origin = origin.into();
        self
    }

    pub fn request_method<S: Into<String>>(mut self, method: S) -> Self {
        self.request_method = method.into();
        self
    }

    pub fn request_headers<S: Into<String>>(mut self, headers: S) -> Self {
        self.request_headers = headers.into();
        self
    }

    /// Runs the preflight and returns the verdict along with whatever headers
    /// were written, including partial writes from failed evaluations.
    pub fn check(&self, cors: &Cors) -> (Result<(), PreflightError>, HeaderCollection) {
        let request = RequestContext {
            method: self.method.as_deref().unwrap_or("OPTIONS"),
            origin: &self.origin,
            access_control_request_method: &self.request_method,
            access_control_request_headers: &self.request_headers,
        };
        let mut headers = HeaderCollection::new();
        let result = cors.preflight(&request, &mut headers);
        (result, headers)
    }
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::default().request_method("GET")
}
