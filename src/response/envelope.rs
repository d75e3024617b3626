//! Raw response envelope and its two-stage resolution.
//!
//! A [`ResponseEnvelope`] holds either the drained body of a request or the
//! error that prevented getting one. Resolution is chained:
//!
//! ```no_run
//! # async fn example(client: &ipstack_client::Client) -> Result<(), ipstack_client::LookupError> {
//! use ipstack_client::GeoRecord;
//!
//! let record: GeoRecord = client.request().ip("8.8.8.8").await.check_error().decode()?;
//! # Ok(())
//! # }
//! ```
//!
//! Any error stored before [`ResponseEnvelope::decode`] runs is returned by it
//! unchanged, so an error is reported exactly once.

use log::warn;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error_handling::{ApiError, LookupError};

/// Outcome of one executed request.
#[derive(Debug)]
pub struct ResponseEnvelope {
    raw: Vec<u8>,
    error: Option<LookupError>,
}

/// Minimal shape of an API failure.
#[derive(Deserialize)]
struct FailureEnvelope {
    #[serde(default = "default_success")]
    success: bool,
    #[serde(default)]
    error: Option<ApiError>,
}

fn default_success() -> bool {
    true
}

impl ResponseEnvelope {
    /// Envelope for a successfully drained body.
    pub fn from_bytes(raw: Vec<u8>) -> Self {
        Self { raw, error: None }
    }

    /// Envelope for a failed request.
    pub fn from_error(error: impl Into<LookupError>) -> Self {
        Self {
            raw: Vec::new(),
            error: Some(error.into()),
        }
    }

    /// Raw body, or `None` once an error is stored.
    pub fn raw(&self) -> Option<&[u8]> {
        match self.error {
            Some(_) => None,
            None => Some(&self.raw),
        }
    }

    /// Stored error, if any.
    pub fn error(&self) -> Option<&LookupError> {
        self.error.as_ref()
    }

    /// Splits the envelope into its outcome without decoding.
    pub fn into_result(self) -> Result<Vec<u8>, LookupError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.raw),
        }
    }

    /// Detects a failure reported by the API.
    ///
    /// Does nothing if an error is already stored. Otherwise the body is
    /// decoded as `{"success": bool, "error": {...}}` with `success`
    /// defaulting to `true`; an undecodable body stores
    /// [`LookupError::Decode`] and `success: false` stores
    /// [`LookupError::Remote`]. Array bodies (batch lookups) cannot carry a
    /// failure and pass through.
    pub fn check_error(mut self) -> Self {
        if self.error.is_some() {
            return self;
        }
        if first_non_whitespace(&self.raw) == Some(b'[') {
            return self;
        }
        match serde_json::from_slice::<FailureEnvelope>(&self.raw) {
            Err(e) => self.set_error(LookupError::Decode(e)),
            Ok(envelope) if !envelope.success => {
                let error = envelope.error.unwrap_or_default();
                warn!("ipstack API error {}", error);
                self.set_error(LookupError::Remote(error));
            }
            Ok(_) => {}
        }
        self
    }

    /// Decodes the body into a new `T`, or returns the stored error.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, LookupError> {
        let raw = self.into_result()?;
        Ok(serde_json::from_slice(&raw)?)
    }

    /// Decodes the body into `dest`, or returns the stored error.
    ///
    /// `dest` is only written when decoding succeeds.
    pub fn decode_into<T: DeserializeOwned>(self, dest: &mut T) -> Result<(), LookupError> {
        *dest = self.decode()?;
        Ok(())
    }

    fn set_error(&mut self, error: LookupError) {
        self.raw.clear();
        self.error = Some(error);
    }
}

fn first_non_whitespace(raw: &[u8]) -> Option<u8> {
    raw.iter().copied().find(|b| !b.is_ascii_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::ErrorKind;
    use crate::response::GeoRecord;
    use crate::transport::TransportError;

    fn envelope(body: &str) -> ResponseEnvelope {
        ResponseEnvelope::from_bytes(body.as_bytes().to_vec())
    }

    #[test]
    fn test_success_true_is_not_an_error() {
        let env = envelope(r#"{"success":true,"ip":"1.1.1.1"}"#).check_error();
        assert!(env.error().is_none());
        assert!(env.raw().is_some());
    }

    #[test]
    fn test_missing_success_field_is_success() {
        let env = envelope(r#"{"ip":"1.1.1.1"}"#).check_error();
        assert!(env.error().is_none());
    }

    #[test]
    fn test_success_false_yields_remote_error() {
        let env = envelope(r#"{"success":false,"error":{"code":104,"type":"x","info":"y"}}"#)
            .check_error();
        let err = env.error().unwrap();
        assert_eq!(err.kind(), ErrorKind::Remote);
        assert_eq!(err.api_error().unwrap().code(), 104);
        assert_eq!(err.api_error().unwrap().error_type(), "x");
        assert_eq!(err.api_error().unwrap().info(), "y");
        // the failure replaces the body
        assert!(env.raw().is_none());
    }

    #[test]
    fn test_null_error_on_success_body_is_not_an_error() {
        let env = envelope(r#"{"success":true,"error":null,"ip":"1.1.1.1"}"#).check_error();
        assert!(env.error().is_none());
        let record: GeoRecord = env.decode().unwrap();
        assert_eq!(record.ip.as_deref(), Some("1.1.1.1"));
    }

    #[test]
    fn test_failure_without_error_record_is_remote_error() {
        let env = envelope(r#"{"success":false,"error":null}"#).check_error();
        let err = env.error().unwrap();
        assert_eq!(err.kind(), ErrorKind::Remote);
        assert_eq!(err.api_error(), Some(&ApiError::default()));
    }

    #[test]
    fn test_malformed_body_is_decode_error() {
        let env = envelope("<html>bad gateway</html>").check_error();
        assert_eq!(env.error().unwrap().kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_array_body_passes_check() {
        let env = envelope(r#" [{"ip":"1.1.1.1"},{"ip":"8.8.8.8"}]"#).check_error();
        assert!(env.error().is_none());
        let records: Vec<GeoRecord> = env.decode().unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_check_error_keeps_prior_error() {
        let env = ResponseEnvelope::from_error(TransportError::MissingBody).check_error();
        assert!(matches!(
            env.error(),
            Some(LookupError::Transport(TransportError::MissingBody))
        ));
    }

    #[test]
    fn test_decode_skipped_after_transport_error() {
        let env = ResponseEnvelope::from_error(TransportError::MissingBody);
        let err = env.check_error().decode::<GeoRecord>().unwrap_err();
        assert!(matches!(
            err,
            LookupError::Transport(TransportError::MissingBody)
        ));
    }

    #[test]
    fn test_decode_skipped_after_remote_error() {
        let err = envelope(r#"{"success":false,"error":{"code":101,"type":"invalid_access_key","info":"z"}}"#)
            .check_error()
            .decode::<GeoRecord>()
            .unwrap_err();
        assert_eq!(err.api_error().map(ApiError::code), Some(101));
    }

    #[test]
    fn test_decode_reports_shape_mismatch() {
        let err = envelope(r#"{"ip": 42}"#)
            .check_error()
            .decode::<GeoRecord>()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_decode_into_leaves_destination_on_error() {
        let mut dest = GeoRecord {
            ip: Some("9.9.9.9".into()),
            ..Default::default()
        };
        let result = ResponseEnvelope::from_error(LookupError::Validation("x".into()))
            .decode_into(&mut dest);
        assert!(result.is_err());
        assert_eq!(dest.ip.as_deref(), Some("9.9.9.9"));

        envelope(r#"{"ip":"1.1.1.1"}"#)
            .check_error()
            .decode_into(&mut dest)
            .unwrap();
        assert_eq!(dest.ip.as_deref(), Some("1.1.1.1"));
    }

    #[test]
    fn test_from_error_has_no_raw_bytes() {
        let env = ResponseEnvelope::from_error(LookupError::Validation("empty IP".into()));
        assert!(env.raw().is_none());
        assert!(env.into_result().is_err());
    }
}
