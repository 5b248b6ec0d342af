use url::Url;

/// Shared bucket for every url that does not parse to a hostname, so all
/// malformed urls collapse into a single counted "site".
pub const UNKNOWN_SITE: &str = "Unknown";

/// Hostname of a captured url, or [`UNKNOWN_SITE`] when it has none.
pub fn site_of(raw: &str) -> String {
    Url::parse(raw.trim())
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| UNKNOWN_SITE.to_string())
}
