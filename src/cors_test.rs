use super::*;
use crate::constants::header;
use crate::options::default_headers_with;

fn preflight_request(origin: &'static str) -> RequestContext<'static> {
    RequestContext {
        method: "OPTIONS",
        origin,
        access_control_request_method: "GET",
        access_control_request_headers: "",
    }
}

mod new {
    use super::*;

    #[test]
    fn when_options_are_valid_should_build_validator() {
        // Arrange & Act
        let cors = Cors::new(CorsOptions::default());

        // Assert
        assert!(cors.is_ok());
    }

    #[test]
    fn when_options_conflict_should_surface_configuration_error() {
        // Arrange
        let options = CorsOptions {
            allow_credentials: true,
            ..CorsOptions::default()
        };

        // Act
        let result = Cors::new(options);

        // Assert
        assert!(matches!(
            result,
            Err(ConfigurationError::CredentialsWithAllOrigins)
        ));
    }
}

mod allow_all {
    use super::*;

    #[test]
    fn when_built_should_accept_any_origin_and_common_methods() {
        // Arrange
        let cors = Cors::allow_all().unwrap();

        // Act & Assert
        assert!(cors.is_origin_allowed("https://anything.example"));
        assert!(cors.is_method_allowed("PATCH"));
        assert!(cors.are_headers_allowed(["Content-Type", "Accept"]));
    }
}

mod preflight {
    use super::*;

    #[test]
    fn when_wildcard_scheme_and_subdomain_configured_should_pass_full_preflight() {
        // Arrange
        let cors = Cors::new(CorsOptions {
            allowed_origins: vec![
                "http*://*.theyakka.com".into(),
                "http*://theyakka.com".into(),
            ],
            allowed_headers: default_headers_with(["Authorization"]),
            ..CorsOptions::default()
        })
        .unwrap();
        let request = RequestContext {
            method: "OPTIONS",
            origin: "https://theyakka.com",
            access_control_request_method: "get",
            access_control_request_headers: "Authorization, Content-Type",
        };
        let mut headers = HeaderCollection::new();

        // Act
        let result = cors.preflight(&request, &mut headers);

        // Assert
        assert!(result.is_ok());
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some("https://theyakka.com")
        );
        assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_METHODS), Some("GET"));
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS),
            Some("Authorization, Content-Type")
        );
    }

    #[test]
    fn when_preflight_fails_should_leave_partial_headers_in_sink() {
        // Arrange
        let cors = Cors::new(CorsOptions {
            allowed_origins: vec!["https://allowed.example".into()],
            ..CorsOptions::default()
        })
        .unwrap();
        let mut headers = HeaderCollection::new();

        // Act
        let result = cors.preflight(&preflight_request("https://denied.example"), &mut headers);

        // Assert
        assert_eq!(result, Err(PreflightError::OriginNotAllowed));
        assert!(headers.contains(header::VARY));
    }
}

mod membership_checks {
    use super::*;

    #[test]
    fn when_origin_differs_by_case_should_still_be_allowed() {
        // Arrange
        let cors = Cors::new(CorsOptions {
            allowed_origins: vec!["https://API.example.com".into()],
            ..CorsOptions::default()
        })
        .unwrap();

        // Act & Assert
        assert!(cors.is_origin_allowed("https://api.EXAMPLE.com"));
        assert!(!cors.is_origin_allowed("https://api.example.org"));
    }

    #[test]
    fn when_method_is_options_should_always_be_allowed() {
        // Arrange
        let cors = Cors::new(CorsOptions::default()).unwrap();

        // Act & Assert
        assert!(cors.is_method_allowed("options"));
    }

    #[test]
    fn when_any_header_is_unknown_should_reject_set() {
        // Arrange
        let cors = Cors::new(CorsOptions {
            allowed_headers: vec!["Authorization".into()],
            ..CorsOptions::default()
        })
        .unwrap();

        // Act & Assert
        assert!(cors.are_headers_allowed(["authorization"]));
        assert!(!cors.are_headers_allowed(["authorization", "x-secret"]));
    }
}
