//! Geolocation record types.
//!
//! Every field is optional: ipstack omits fields that were not selected and
//! sends `null` for values it does not know. The five sub-records are only
//! present when their selector (or no selector at all) was requested.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Decoded result of a lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoRecord {
    pub ip: Option<String>,
    pub hostname: Option<String>,
    /// `ipv4` or `ipv6`.
    #[serde(rename = "type")]
    pub ip_type: Option<String>,
    pub continent_code: Option<String>,
    pub continent_name: Option<String>,
    pub country_code: Option<String>,
    pub country_name: Option<String>,
    pub region_code: Option<String>,
    pub region_name: Option<String>,
    pub city: Option<String>,
    pub zip: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub location: Option<Location>,
    pub time_zone: Option<TimeZone>,
    pub currency: Option<Currency>,
    pub connection: Option<Connection>,
    pub security: Option<Security>,
}

/// Country-level data about the location of the IP.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub geoname_id: Option<i64>,
    pub capital: Option<String>,
    pub languages: Option<Vec<Language>>,
    /// URL of an SVG flag.
    pub country_flag: Option<String>,
    pub country_flag_emoji: Option<String>,
    pub country_flag_emoji_unicode: Option<String>,
    pub calling_code: Option<String>,
    pub is_eu: Option<bool>,
}

/// A language spoken in the country of the IP.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    pub code: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "native")]
    pub native_name: Option<String>,
}

/// Time zone of the location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeZone {
    pub id: Option<String>,
    /// Local wall-clock time when the response was produced.
    pub current_time: Option<DateTime<FixedOffset>>,
    /// Offset from GMT in seconds.
    pub gmt_offset: Option<i32>,
    pub code: Option<String>,
    pub is_daylight_saving: Option<bool>,
}

/// Main currency of the location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Currency {
    pub code: Option<String>,
    pub name: Option<String>,
    pub plural: Option<String>,
    pub symbol: Option<String>,
    pub symbol_native: Option<String>,
}

/// Network the IP belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Connection {
    pub asn: Option<i64>,
    pub isp: Option<String>,
}

/// Security assessment of the IP (security module only).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Security {
    pub is_proxy: Option<bool>,
    pub proxy_type: Option<String>,
    pub is_crawler: Option<bool>,
    pub crawler_name: Option<String>,
    pub crawler_type: Option<String>,
    pub is_tor: Option<bool>,
    pub threat_level: Option<String>,
    /// Shape varies by plan (list, object or `null`), so it is kept as JSON.
    pub threat_types: Option<serde_json::Value>,
}

/// Body of a batch lookup.
///
/// A batch that reaches the API with a single address is a single lookup
/// on the wire, so the API answers with one object instead of an array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany {
    Many(Vec<GeoRecord>),
    One(Box<GeoRecord>),
}

impl From<OneOrMany> for Vec<GeoRecord> {
    fn from(body: OneOrMany) -> Self {
        match body {
            OneOrMany::Many(records) => records,
            OneOrMany::One(record) => vec![*record],
        }
    }
}
