use cors_gate::{HeaderCollection, PreflightError};

pub fn assert_allowed(result: Result<(), PreflightError>) {
    if let Err(err) = result {
        panic!("expected preflight to pass, got {err}");
    }
}

pub fn assert_rejected(result: Result<(), PreflightError>, expected: PreflightError) {
    match result {
        Err(err) if err == expected => {}
        other => panic!("expected {expected:?}, got {other:?}"),
    }
}

pub fn assert_header_eq(headers: &HeaderCollection, name: &str, expected: &str) {
    match headers.get(name) {
        Some(value) => assert_eq!(value, expected, "unexpected value for header {name}"),
        None => panic!("expected header {name} to be set"),
    }
}

pub fn assert_header_absent(headers: &HeaderCollection, name: &str) {
    if let Some(value) = headers.get(name) {
        panic!("expected header {name} to be absent, found `{value}`");
    }
}

pub fn assert_vary_eq(headers: &HeaderCollection, expected: &str) {
    assert_header_eq(headers, "Vary", expected);
}
