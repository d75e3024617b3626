//! Error handling.
//!
//! This module provides:
//! - [`LookupError`], the single error type of every lookup operation
//! - [`ApiError`], the structured failure reported by the API
//! - [`ErrorKind`] for uniform handling of configuration, validation,
//!   transport, decode and remote failures

mod types;

// Re-export public API
pub use types::{
    api_error, ApiError, ErrorKind, InitializationError, LookupError, SelfLookupError,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::TransportError;

    #[test]
    fn test_api_error_display() {
        let err = ApiError::new(104, "usage_limit_reached", "quota exhausted");
        assert_eq!(err.to_string(), "[104]: usage_limit_reached (quota exhausted)");
        assert_eq!(err.code(), 104);
        assert_eq!(err.error_type(), "usage_limit_reached");
        assert_eq!(err.info(), "quota exhausted");
    }

    #[test]
    fn test_api_error_deserializes_type_field() {
        let err: ApiError =
            serde_json::from_str(r#"{"code":101,"type":"invalid_access_key","info":"x"}"#)
                .unwrap();
        assert_eq!(err, ApiError::new(101, "invalid_access_key", "x"));
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(
            LookupError::Configuration("x".into()).kind(),
            ErrorKind::Configuration
        );
        assert_eq!(LookupError::NotInitialized.kind(), ErrorKind::Configuration);
        assert_eq!(
            LookupError::Validation("x".into()).kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            LookupError::from(TransportError::MissingBody).kind(),
            ErrorKind::Transport
        );
        let decode = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(LookupError::from(decode).kind(), ErrorKind::Decode);
        assert_eq!(
            LookupError::from(ApiError::default()).kind(),
            ErrorKind::Remote
        );
    }

    #[test]
    fn test_api_error_extraction() {
        let remote = LookupError::Remote(ApiError::new(104, "x", "y"));
        assert_eq!(remote.api_error().map(ApiError::code), Some(104));
        assert_eq!(api_error(&remote).map(ApiError::code), Some(104));

        let bare = ApiError::new(101, "x", "y");
        assert_eq!(api_error(&bare).map(ApiError::code), Some(101));

        let other = LookupError::Validation("empty IP".into());
        assert!(other.api_error().is_none());
        assert!(api_error(&other).is_none());
    }

    #[test]
    fn test_self_lookup_error_exposes_parts() {
        let stale = std::sync::Arc::new(crate::response::GeoRecord::default());
        let err = SelfLookupError::new(
            LookupError::Remote(ApiError::new(104, "usage_limit_reached", "q")),
            Some(stale.clone()),
        );
        assert_eq!(api_error(&err).map(ApiError::code), Some(104));
        assert_eq!(err.error().kind(), ErrorKind::Remote);
        assert!(std::error::Error::source(&err).is_some());
        let (error, kept) = err.into_parts();
        assert!(matches!(error, LookupError::Remote(_)));
        assert!(std::sync::Arc::ptr_eq(&kept.unwrap(), &stale));
    }

    #[test]
    fn test_remote_error_message_includes_code() {
        let remote = LookupError::Remote(ApiError::new(101, "invalid_access_key", "bad key"));
        assert_eq!(
            remote.to_string(),
            "API error [101]: invalid_access_key (bad key)"
        );
    }
}
