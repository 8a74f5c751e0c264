use super::*;
use crate::constants::method;

fn post_with_form(body: &str) -> RequestContext {
    RequestContext::new(Request::new(method::POST, "/").with_form_body(body))
}

mod query_param {
    use super::*;

    #[test]
    fn when_parameter_is_present_should_return_it() {
        // Arrange
        let ctx = RequestContext::new(Request::new(method::POST, "/?_method=PATCH"));

        // Act & Assert
        assert_eq!(ctx.query_param("_method"), Some("PATCH"));
    }

    #[test]
    fn when_parameter_is_absent_should_return_none() {
        // Arrange
        let ctx = RequestContext::new(Request::new(method::POST, "/?other=1"));

        // Act & Assert
        assert_eq!(ctx.query_param("_method"), None);
    }

    #[test]
    fn when_query_string_is_empty_should_return_none() {
        // Arrange
        let ctx = RequestContext::new(Request::new(method::GET, "/"));

        // Act & Assert
        assert_eq!(ctx.query_param("anything"), None);
    }

    #[test]
    fn when_value_is_percent_encoded_should_decode_it() {
        // Arrange
        let ctx = RequestContext::new(Request::new(method::GET, "/?redirect=%2Fhome"));

        // Act & Assert
        assert_eq!(ctx.query_param("redirect"), Some("/home"));
    }

    #[test]
    fn when_value_uses_plus_for_space_should_decode_it() {
        // Arrange
        let ctx = RequestContext::new(Request::new(method::GET, "/?note=hello+world"));

        // Act & Assert
        assert_eq!(ctx.query_param("note"), Some("hello world"));
    }

    #[test]
    fn when_key_repeats_should_return_first_occurrence() {
        // Arrange
        let ctx = RequestContext::new(Request::new(method::GET, "/?m=PUT&m=DELETE"));

        // Act & Assert
        assert_eq!(ctx.query_param("m"), Some("PUT"));
    }
}

mod form_value {
    use super::*;
    use crate::constants::{header, mime};

    #[test]
    fn when_body_is_urlencoded_should_return_field() {
        // Arrange
        let ctx = post_with_form("_method=PUT&draft=1");

        // Act & Assert
        assert_eq!(ctx.form_value("_method"), Some("PUT"));
        assert_eq!(ctx.form_value("draft"), Some("1"));
    }

    #[test]
    fn when_content_type_carries_a_charset_should_still_parse() {
        // Arrange
        let ctx = RequestContext::new(
            Request::new(method::POST, "/")
                .with_header(header::CONTENT_TYPE, "application/x-www-form-urlencoded; charset=utf-8")
                .with_body("_method=PUT".as_bytes().to_vec()),
        );

        // Act & Assert
        assert_eq!(ctx.form_value("_method"), Some("PUT"));
    }

    #[test]
    fn when_content_type_is_missing_should_return_none() {
        // Arrange
        let ctx = RequestContext::new(
            Request::new(method::POST, "/").with_body("_method=PUT".as_bytes().to_vec()),
        );

        // Act & Assert
        assert_eq!(ctx.form_value("_method"), None);
    }

    #[test]
    fn when_content_type_is_not_a_form_should_return_none() {
        // Arrange
        let ctx = RequestContext::new(
            Request::new(method::POST, "/")
                .with_header(header::CONTENT_TYPE, "application/json")
                .with_body(r#"{"_method":"PUT"}"#.as_bytes().to_vec()),
        );

        // Act & Assert
        assert_eq!(ctx.form_value("_method"), None);
    }

    #[test]
    fn when_body_is_not_utf8_should_degrade_to_none() {
        // Arrange
        let ctx = RequestContext::new(
            Request::new(method::POST, "/")
                .with_header(header::CONTENT_TYPE, mime::FORM_URLENCODED)
                .with_body(vec![0xff, 0xfe, 0xfd]),
        );

        // Act & Assert
        assert_eq!(ctx.form_value("_method"), None);
    }

    #[test]
    fn when_body_is_empty_should_return_none() {
        // Arrange
        let ctx = post_with_form("");

        // Act & Assert
        assert_eq!(ctx.form_value("_method"), None);
    }

    #[test]
    fn when_field_repeats_should_return_first_occurrence() {
        // Arrange
        let ctx = post_with_form("_method=PUT&_method=DELETE");

        // Act & Assert
        assert_eq!(ctx.form_value("_method"), Some("PUT"));
    }
}

mod set_request {
    use super::*;

    #[test]
    fn when_request_is_replaced_should_drop_the_form_cache() {
        // Arrange
        let mut ctx = post_with_form("_method=PUT");
        assert_eq!(ctx.form_value("_method"), Some("PUT"));

        // Act
        ctx.set_request(Request::new(method::POST, "/").with_form_body("_method=DELETE"));

        // Assert
        assert_eq!(ctx.form_value("_method"), Some("DELETE"));
    }

    #[test]
    fn when_request_is_replaced_should_drop_the_query_cache() {
        // Arrange
        let mut ctx = RequestContext::new(Request::new(method::GET, "/?m=1"));
        assert_eq!(ctx.query_param("m"), Some("1"));

        // Act
        ctx.set_request(Request::new(method::GET, "/?m=2"));

        // Assert
        assert_eq!(ctx.query_param("m"), Some("2"));
    }
}

mod take_request {
    use super::*;

    #[test]
    fn when_request_is_taken_should_leave_a_default_one() {
        // Arrange
        let mut ctx = RequestContext::new(Request::new(method::POST, "/submit"));

        // Act
        let taken = ctx.take_request();

        // Assert
        assert_eq!(taken.path(), "/submit");
        assert_eq!(ctx.method(), method::GET);
        assert_eq!(ctx.request().path(), "/");
    }
}

mod set_method {
    use super::*;

    #[test]
    fn when_method_changes_should_keep_cached_form_values() {
        // Arrange
        let mut ctx = post_with_form("_method=PUT");
        assert_eq!(ctx.form_value("_method"), Some("PUT"));

        // Act
        ctx.set_method(method::PUT);

        // Assert
        assert_eq!(ctx.method(), method::PUT);
        assert_eq!(ctx.form_value("_method"), Some("PUT"));
    }
}
