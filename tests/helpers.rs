// Shared test helpers for mock-server tests.
//
// This module provides the canned ipstack payloads and client setup used
// across multiple test files.

use std::sync::Arc;

use httptest::Server;

use ipstack_client::{Client, ClientBuilder};

/// Access key every helper client sends.
pub const TEST_KEY: &str = "test-key";

/// A full single-lookup response.
#[allow(dead_code)] // Used by other test files
pub const FULL_RECORD: &str = r#"{
    "ip": "134.201.250.155",
    "hostname": "134.201.250.155",
    "type": "ipv4",
    "continent_code": "NA",
    "continent_name": "North America",
    "country_code": "US",
    "country_name": "United States",
    "region_code": "CA",
    "region_name": "California",
    "city": "Los Angeles",
    "zip": "90013",
    "latitude": 34.0453,
    "longitude": -118.2413,
    "location": {
        "geoname_id": 5368361,
        "capital": "Washington D.C.",
        "languages": [{"code": "en", "name": "English", "native": "English"}],
        "country_flag": "https://assets.ipstack.com/images/assets/flags_svg/us.svg",
        "country_flag_emoji": "🇺🇸",
        "country_flag_emoji_unicode": "U+1F1FA U+1F1F8",
        "calling_code": "1",
        "is_eu": false
    },
    "time_zone": {
        "id": "America/Los_Angeles",
        "current_time": "2018-03-29T07:35:08-07:00",
        "gmt_offset": -25200,
        "code": "PDT",
        "is_daylight_saving": true
    },
    "currency": {
        "code": "USD",
        "name": "US Dollar",
        "plural": "US dollars",
        "symbol": "$",
        "symbol_native": "$"
    },
    "connection": {"asn": 25876, "isp": "Los Angeles Department of Water & Power"},
    "security": {
        "is_proxy": false,
        "proxy_type": null,
        "is_crawler": false,
        "crawler_name": null,
        "crawler_type": null,
        "is_tor": false,
        "threat_level": "low",
        "threat_types": null
    }
}"#;

/// An API failure for an invalid access key.
#[allow(dead_code)] // Used by other test files
pub const INVALID_KEY: &str = r#"{
    "success": false,
    "error": {
        "code": 101,
        "type": "invalid_access_key",
        "info": "You have not supplied a valid API Access Key."
    }
}"#;

/// Builder pointed at the mock server, without the self check.
#[allow(dead_code)] // Used by other test files
pub fn builder_for(server: &Server) -> ClientBuilder {
    ClientBuilder::new()
        .token(TEST_KEY)
        .host(server.addr().to_string())
        .timeout_seconds(5)
        .skip_self_check()
}

/// Client pointed at the mock server, without the self check.
#[allow(dead_code)] // Used by other test files
pub async fn client_for(server: &Server) -> Arc<Client> {
    builder_for(server)
        .build()
        .await
        .expect("Failed to build test client")
}
