//! Field selector names.
//!
//! ipstack can be told which response fields to return through the `fields`
//! query parameter. Pass these names to `RequestTemplate::with_fields` or
//! `ClientBuilder::fields`. Requesting a parent (e.g. [`LOCATION`]) returns
//! the whole sub-record.

/// The requested IP address.
pub const IP: &str = "ip";
/// Hostname the IP resolves to (only when Hostname Lookup is enabled).
pub const HOSTNAME: &str = "hostname";
/// Address type, `ipv4` or `ipv6`.
pub const TYPE: &str = "type";
/// 2-letter continent code.
pub const CONTINENT_CODE: &str = "continent_code";
/// Continent name.
pub const CONTINENT_NAME: &str = "continent_name";
/// 2-letter country code.
pub const COUNTRY_CODE: &str = "country_code";
/// Country name.
pub const COUNTRY_NAME: &str = "country_name";
/// Region code (e.g. `CA` for California).
pub const REGION_CODE: &str = "region_code";
/// Region name.
pub const REGION_NAME: &str = "region_name";
/// City name.
pub const CITY: &str = "city";
/// ZIP code.
pub const ZIP: &str = "zip";
/// Latitude.
pub const LATITUDE: &str = "latitude";
/// Longitude.
pub const LONGITUDE: &str = "longitude";

/// Whole location sub-record.
pub const LOCATION: &str = "location";
/// Geonames Registry identifier.
pub const LOCATION_GEONAME_ID: &str = "location.geoname_id";
/// Capital of the country.
pub const LOCATION_CAPITAL: &str = "location.capital";
/// Languages spoken in the country.
pub const LOCATION_LANGUAGES: &str = "location.languages";
/// 2-letter language code.
pub const LOCATION_LANGUAGES_CODE: &str = "location.languages.code";
/// Language name in the request's language (e.g. Portuguese).
pub const LOCATION_LANGUAGES_NAME: &str = "location.languages.name";
/// Native language name (e.g. Português).
pub const LOCATION_LANGUAGES_NATIVE: &str = "location.languages.native";
/// URL of an SVG flag of the country.
pub const LOCATION_COUNTRY_FLAG: &str = "location.country_flag";
/// Flag emoji of the country.
pub const LOCATION_COUNTRY_FLAG_EMOJI: &str = "location.country_flag_emoji";
/// Unicode code points of the flag emoji (e.g. `U+1F1F5 U+1F1F9`).
pub const LOCATION_COUNTRY_FLAG_EMOJI_UNICODE: &str = "location.country_flag_emoji_unicode";
/// International calling code (e.g. `351`).
pub const LOCATION_CALLING_CODE: &str = "location.calling_code";
/// Whether the country is in the European Union.
pub const LOCATION_IS_EU: &str = "location.is_eu";

/// Whole time zone sub-record.
pub const TIME_ZONE: &str = "time_zone";
/// Time zone identifier (e.g. `America/Los_Angeles`).
pub const TIME_ZONE_ID: &str = "time_zone.id";
/// Current local date and time.
pub const TIME_ZONE_CURRENT_TIME: &str = "time_zone.current_time";
/// GMT offset in seconds.
pub const TIME_ZONE_GMT_OFFSET: &str = "time_zone.gmt_offset";
/// Universal time zone code.
pub const TIME_ZONE_CODE: &str = "time_zone.code";
/// Whether daylight saving time is in effect.
pub const TIME_ZONE_IS_DAYLIGHT_SAVING: &str = "time_zone.is_daylight_saving";

/// Whole currency sub-record.
pub const CURRENCY: &str = "currency";
/// 3-letter currency code.
pub const CURRENCY_CODE: &str = "currency.code";
/// Currency name.
pub const CURRENCY_NAME: &str = "currency.name";
/// Plural currency name.
pub const CURRENCY_PLURAL: &str = "currency.plural";
/// Currency symbol.
pub const CURRENCY_SYMBOL: &str = "currency.symbol";
/// Native currency symbol.
pub const CURRENCY_SYMBOL_NATIVE: &str = "currency.symbol_native";

/// Whole connection sub-record.
pub const CONNECTION: &str = "connection";
/// Autonomous System Number.
pub const CONNECTION_ASN: &str = "connection.asn";
/// Internet service provider.
pub const CONNECTION_ISP: &str = "connection.isp";

/// Whole security sub-record (requires the security module).
pub const SECURITY: &str = "security";
/// Whether the IP is a proxy.
pub const SECURITY_IS_PROXY: &str = "security.is_proxy";
/// Proxy type.
pub const SECURITY_PROXY_TYPE: &str = "security.proxy_type";
/// Whether the IP is a crawler.
pub const SECURITY_IS_CRAWLER: &str = "security.is_crawler";
/// Crawler name.
pub const SECURITY_CRAWLER_NAME: &str = "security.crawler_name";
/// Crawler type.
pub const SECURITY_CRAWLER_TYPE: &str = "security.crawler_type";
/// Whether the IP is a Tor exit node.
pub const SECURITY_IS_TOR: &str = "security.is_tor";
/// Threat level.
pub const SECURITY_THREAT_LEVEL: &str = "security.threat_level";
/// Threat types associated with the IP.
pub const SECURITY_THREAT_TYPES: &str = "security.threat_types";

/// Every known field selector.
pub const ALL_FIELDS: &[&str] = &[
    IP,
    HOSTNAME,
    TYPE,
    CONTINENT_CODE,
    CONTINENT_NAME,
    COUNTRY_CODE,
    COUNTRY_NAME,
    REGION_CODE,
    REGION_NAME,
    CITY,
    ZIP,
    LATITUDE,
    LONGITUDE,
    LOCATION,
    LOCATION_GEONAME_ID,
    LOCATION_CAPITAL,
    LOCATION_LANGUAGES,
    LOCATION_LANGUAGES_CODE,
    LOCATION_LANGUAGES_NAME,
    LOCATION_LANGUAGES_NATIVE,
    LOCATION_COUNTRY_FLAG,
    LOCATION_COUNTRY_FLAG_EMOJI,
    LOCATION_COUNTRY_FLAG_EMOJI_UNICODE,
    LOCATION_CALLING_CODE,
    LOCATION_IS_EU,
    TIME_ZONE,
    TIME_ZONE_ID,
    TIME_ZONE_CURRENT_TIME,
    TIME_ZONE_GMT_OFFSET,
    TIME_ZONE_CODE,
    TIME_ZONE_IS_DAYLIGHT_SAVING,
    CURRENCY,
    CURRENCY_CODE,
    CURRENCY_NAME,
    CURRENCY_PLURAL,
    CURRENCY_SYMBOL,
    CURRENCY_SYMBOL_NATIVE,
    CONNECTION,
    CONNECTION_ASN,
    CONNECTION_ISP,
    SECURITY,
    SECURITY_IS_PROXY,
    SECURITY_PROXY_TYPE,
    SECURITY_IS_CRAWLER,
    SECURITY_CRAWLER_NAME,
    SECURITY_CRAWLER_TYPE,
    SECURITY_IS_TOR,
    SECURITY_THREAT_LEVEL,
    SECURITY_THREAT_TYPES,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_fields_unique() {
        let unique: HashSet<_> = ALL_FIELDS.iter().collect();
        assert_eq!(unique.len(), ALL_FIELDS.len());
    }

    #[test]
    fn test_nested_fields_have_known_parent() {
        for field in ALL_FIELDS {
            if let Some((parent, _)) = field.rsplit_once('.') {
                assert!(
                    ALL_FIELDS.contains(&parent),
                    "{field} has no parent selector {parent}"
                );
            }
        }
    }
}
