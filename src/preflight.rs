use crate::case::canonical_header_name;
use crate::constants::{WILDCARD, header, method};
use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::policy::Policy;
use crate::result::PreflightError;

/// Runs the ordered preflight checks for one request against a compiled
/// policy, writing response headers into `headers` as it goes.
///
/// The check order is observable behavior and must not be rearranged: `Vary`
/// is emitted before any whitelist check so caches stay correct even for
/// rejected requests, and each check stops the evaluation at the first
/// failure. Headers already written stay in the sink.
pub(crate) fn evaluate(
    policy: &Policy,
    request: &RequestContext<'_>,
    headers: &mut HeaderCollection,
) -> Result<(), PreflightError> {
    // Step 0: a preflight is always an OPTIONS request. Nothing is written
    // for other methods so callers can forward them untouched.
    if !request.method.eq_ignore_ascii_case(method::OPTIONS) {
        return Err(PreflightError::MethodInvalid);
    }

    // Step 1: guard caches against serving one origin's answer to another.
    headers.add_vary(header::ORIGIN);
    headers.add_vary(header::ACCESS_CONTROL_REQUEST_METHOD);
    headers.add_vary(header::ACCESS_CONTROL_REQUEST_HEADERS);

    // Step 2: origin whitelist. The allowed value is echoed verbatim rather
    // than widened to `*`, which credentialed responses require.
    if policy.allow_all_origins() {
        headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, WILDCARD);
    } else if policy.is_origin_allowed(request.origin) {
        headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, request.origin);
    } else {
        return Err(PreflightError::OriginNotAllowed);
    }

    // Step 3: announced method.
    let requested_method = request.access_control_request_method.trim();
    if requested_method.is_empty() {
        return Err(PreflightError::MethodMissing);
    }
    let requested_method = requested_method.to_ascii_uppercase();
    if !policy.is_method_allowed_upper(&requested_method) {
        return Err(PreflightError::MethodNotAllowed);
    }
    headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, requested_method);

    // Step 4: announced headers. Every requested header must be whitelisted;
    // a single unknown one rejects the whole preflight.
    if policy.allow_all_headers() {
        headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, WILDCARD);
    } else {
        let requested = split_request_headers(request.access_control_request_headers);
        if !requested
            .iter()
            .all(|name| policy.is_header_allowed_canonical(name))
        {
            return Err(PreflightError::HeadersNotAllowed);
        }
        if !requested.is_empty() {
            headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, requested.join(", "));
        }
    }

    // Steps 5-7: unconditional trailers.
    if !policy.exposed_headers().is_empty() {
        headers.push(
            header::ACCESS_CONTROL_EXPOSE_HEADERS,
            policy.exposed_headers().join(", "),
        );
    }
    if policy.max_age() > 0 {
        headers.push(header::ACCESS_CONTROL_MAX_AGE, policy.max_age().to_string());
    }
    if policy.allow_credentials() {
        headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
    }

    Ok(())
}

/// Splits an `Access-Control-Request-Headers` value into canonicalized
/// header names, preserving request order and dropping empty tokens.
pub(crate) fn split_request_headers(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(canonical_header_name)
        .collect()
}

#[cfg(test)]
#[path = "preflight_test.rs"]
mod preflight_test;
