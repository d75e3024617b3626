//! Lookup operations and the execution unit.

use std::net::IpAddr;

use log::{debug, warn};

use crate::config::{MAX_BATCH_IPS, SELF_PATH};
use crate::error_handling::LookupError;
use crate::request::RequestTemplate;
use crate::response::ResponseEnvelope;

impl RequestTemplate {
    /// Looks up a single IPv4 or IPv6 address.
    ///
    /// The address is trimmed and validated first; a blank or unparsable
    /// address yields an envelope holding [`LookupError::Validation`] without
    /// any network call.
    pub async fn ip(&self, ip: &str) -> ResponseEnvelope {
        match validate_ip(ip) {
            Ok(ip) => self.execute(ip).await,
            Err(e) => ResponseEnvelope::from_error(e),
        }
    }

    /// Looks up several addresses in one request (paid plans only).
    ///
    /// Invalid entries are dropped; the request is only rejected when the
    /// list is empty or none of its entries is valid. The body of a
    /// successful call is a JSON array of records.
    pub async fn ips<I, S>(&self, ips: I) -> ResponseEnvelope
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match batch_path(ips) {
            Ok(path) => self.execute(&path).await,
            Err(e) => ResponseEnvelope::from_error(e),
        }
    }

    /// Looks up the address the request originates from.
    pub async fn me(&self) -> ResponseEnvelope {
        self.execute(SELF_PATH).await
    }

    /// Sends one GET request for `path` and wraps the outcome.
    ///
    /// The HTTP status is not inspected.
    pub async fn execute(&self, path: &str) -> ResponseEnvelope {
        debug!(
            "GET {}{} (fields: {}, security: {})",
            self.endpoint(),
            path,
            self.fields_selector().as_deref().unwrap_or("-"),
            self.security_enabled()
        );
        let url = self.target_url(path);
        match self.transport.fetch(&url).await {
            Ok(body) => ResponseEnvelope::from_bytes(body),
            Err(e) => {
                debug!("Request to {}{} failed: {}", self.endpoint(), path, e);
                ResponseEnvelope::from_error(e)
            }
        }
    }
}

fn validate_ip(ip: &str) -> Result<&str, LookupError> {
    let ip = ip.trim();
    if ip.is_empty() {
        return Err(LookupError::Validation("empty IP".to_string()));
    }
    if ip.parse::<IpAddr>().is_err() {
        return Err(LookupError::Validation(format!("invalid IP ({ip})")));
    }
    Ok(ip)
}

/// Builds the comma-joined path of the valid entries, input order kept.
fn batch_path<I, S>(ips: I) -> Result<String, LookupError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = 0usize;
    let mut valid = Vec::new();
    for ip in ips {
        seen += 1;
        match validate_ip(ip.as_ref()) {
            Ok(ip) => valid.push(ip.to_string()),
            Err(e) => debug!("Dropping batch entry: {e}"),
        }
    }
    if seen == 0 {
        return Err(LookupError::Validation("no IP passed".to_string()));
    }
    if valid.is_empty() {
        return Err(LookupError::Validation("no valid IP passed".to_string()));
    }
    if valid.len() > MAX_BATCH_IPS {
        warn!(
            "Batch of {} IPs exceeds the API limit of {}",
            valid.len(),
            MAX_BATCH_IPS
        );
    }
    Ok(valid.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::error_handling::ErrorKind;
    use crate::response::GeoRecord;
    use crate::test_helpers::RecordingTransport;
    use crate::transport::TransportError;

    fn setup() -> (Arc<RecordingTransport>, RequestTemplate) {
        let transport = Arc::new(RecordingTransport::new());
        let template = RequestTemplate::new("key", transport.clone());
        (transport, template)
    }

    fn validation_message(envelope: ResponseEnvelope) -> String {
        match envelope.into_result() {
            Err(LookupError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_ip_targets_trimmed_address() {
        let (transport, template) = setup();
        let envelope = template.ip(" 134.201.250.155 ").await;
        assert!(envelope.error().is_none());
        assert_eq!(
            transport.urls(),
            vec!["http://api.ipstack.com/134.201.250.155?access_key=key&output=json"]
        );
    }

    #[tokio::test]
    async fn test_ip_accepts_ipv6() {
        let (transport, template) = setup();
        template.ip("2001:db8::1").await;
        assert_eq!(transport.calls(), 1);
        assert!(transport.urls()[0].contains("/2001:db8::1?"));
    }

    #[tokio::test]
    async fn test_ip_empty_is_rejected_without_network() {
        let (transport, template) = setup();
        assert_eq!(validation_message(template.ip("   ").await), "empty IP");
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_ip_invalid_is_rejected_without_network() {
        let (transport, template) = setup();
        assert_eq!(
            validation_message(template.ip("999.1.1.1").await),
            "invalid IP (999.1.1.1)"
        );
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_validation_error_survives_resolution() {
        let (_, template) = setup();
        let err = template
            .ip("nope")
            .await
            .check_error()
            .decode::<GeoRecord>()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_ips_drops_invalid_entries_in_order() {
        let (transport, template) = setup();
        template
            .ips(["8.8.8.8", "bogus", " 1.1.1.1", ""])
            .await;
        assert_eq!(
            transport.urls(),
            vec!["http://api.ipstack.com/8.8.8.8,1.1.1.1?access_key=key&output=json"]
        );
    }

    #[tokio::test]
    async fn test_ips_empty_list() {
        let (transport, template) = setup();
        let none: [&str; 0] = [];
        assert_eq!(validation_message(template.ips(none).await), "no IP passed");
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_ips_without_valid_entry() {
        let (transport, template) = setup();
        assert_eq!(
            validation_message(template.ips(["x", "  "]).await),
            "no valid IP passed"
        );
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_ips_oversize_batch_is_still_sent() {
        let (transport, template) = setup();
        let ips: Vec<String> = (0..=MAX_BATCH_IPS).map(|i| format!("10.0.0.{i}")).collect();
        template.ips(&ips).await;
        assert_eq!(transport.calls(), 1);
        assert!(transport.urls()[0].contains("10.0.0.50?"));
    }

    #[tokio::test]
    async fn test_me_targets_check_with_options() {
        let (transport, template) = setup();
        template
            .with_https(true)
            .with_security(true)
            .with_fields(["ip"])
            .me()
            .await;
        assert_eq!(
            transport.urls(),
            vec!["https://api.ipstack.com/check?access_key=key&fields=ip&output=json&security=1"]
        );
    }

    #[tokio::test]
    async fn test_transport_failure_is_carried() {
        let (transport, template) = setup();
        transport.push_error(TransportError::MissingBody);
        let err = template.me().await.check_error().decode::<GeoRecord>().unwrap_err();
        assert!(matches!(
            err,
            LookupError::Transport(TransportError::MissingBody)
        ));
    }

    #[tokio::test]
    async fn test_cloned_template_requests_are_independent() {
        let (transport, base) = setup();
        base.clone().with_fields(["city"]).ip("8.8.8.8").await;
        base.ip("8.8.8.8").await;
        let urls = transport.urls();
        assert!(urls[0].contains("fields=city"));
        assert!(!urls[1].contains("fields="));
    }
}
