/// Read-only view of the parts of an HTTP request the engine inspects.
///
/// The engine never owns or parses HTTP; the transport layer extracts these
/// values and borrows them for the duration of a single evaluation.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: &'a str,
    pub access_control_request_method: &'a str,
    pub access_control_request_headers: &'a str,
}
