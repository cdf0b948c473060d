use tracing::debug;

use super::patterns::{CJK_IDEOGRAPH_REGEX, FORBIDDEN_CHAR_REGEX};

/// Marker every recognized resource endpoint must contain
pub const ENDPOINT_MARKER: &str = "provide/vod";

const PROXY_SEGMENT: &str = "proxy/";

const DOUBLE_PROTOCOLS: [&str; 4] = [
    "http://http://",
    "https://https://",
    "http://https://",
    "https://http://",
];

/// Extracts the canonical endpoint URL from a raw string
///
/// The raw value may carry surrounding quotes or whitespace, trailing `/` or `?`,
/// anything after the endpoint marker, or be wrapped in a `proxy/` link.
/// The canonical form ends exactly at `provide/vod`.
///
/// # Arguments
/// * `raw` - Candidate string as found in the input
///
/// # Returns
/// * `Option<String>` - The canonical URL, or None when the string is not a valid endpoint
pub fn extract_actual_url(raw: &str) -> Option<String> {
    let cleaned = raw
        .trim()
        .trim_matches('"')
        .trim_matches('\'')
        .trim_end_matches('?')
        .trim_end_matches('/');

    let Some(marker_index) = cleaned.find(ENDPOINT_MARKER) else {
        debug!("Rejected '{}': no '{}' marker", raw, ENDPOINT_MARKER);
        return None;
    };
    let mut actual = &cleaned[..marker_index + ENDPOINT_MARKER.len()];

    // Unwrap proxied links, keeping the inner endpoint
    if let Some(proxy_index) = actual.find(PROXY_SEGMENT) {
        let inner = &actual[proxy_index + PROXY_SEGMENT.len()..];
        if let Some(inner_marker) = inner.find(ENDPOINT_MARKER) {
            actual = &inner[..inner_marker + ENDPOINT_MARKER.len()];
        }
    }

    if !actual.starts_with("http://") && !actual.starts_with("https://") {
        debug!("Rejected '{}': '{}' is not an http(s) URL", raw, actual);
        return None;
    }

    if is_invalid_url_format(actual) {
        debug!("Rejected '{}': malformed endpoint '{}'", raw, actual);
        return None;
    }

    debug!("Extracted '{}' from '{}'", actual, raw);
    Some(actual.to_string())
}

/// Whether a URL has a structurally broken form that must never be emitted
fn is_invalid_url_format(url: &str) -> bool {
    let lowered = url.to_lowercase();
    if DOUBLE_PROTOCOLS.iter().any(|p| lowered.contains(p)) {
        return true;
    }

    CJK_IDEOGRAPH_REGEX.is_match(url) || FORBIDDEN_CHAR_REGEX.is_match(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_quotes_and_trailing_noise() {
        assert_eq!(
            extract_actual_url("  \"https://a.example.com/api.php/provide/vod/?ac=list\" ").as_deref(),
            Some("https://a.example.com/api.php/provide/vod")
        );
        assert_eq!(
            extract_actual_url("'http://b.example.com/provide/vod/'").as_deref(),
            Some("http://b.example.com/provide/vod")
        );
    }

    #[test]
    fn test_requires_marker() {
        assert_eq!(extract_actual_url("https://a.example.com/api.php"), None);
        assert_eq!(extract_actual_url(""), None);
        assert_eq!(extract_actual_url("provide/vo"), None);
    }

    #[test]
    fn test_requires_http_scheme() {
        assert_eq!(extract_actual_url("ftp://a.example.com/provide/vod"), None);
        assert_eq!(extract_actual_url("a.example.com/provide/vod"), None);
    }

    #[test]
    fn test_unwraps_proxy_links() {
        assert_eq!(
            extract_actual_url("https://proxy.example.net/proxy/https://real.example.com/provide/vod/at/xml").as_deref(),
            Some("https://real.example.com/provide/vod")
        );
        // Inner part that is not a URL makes the whole value invalid
        assert_eq!(extract_actual_url("https://p.example.net/proxy/real/provide/vod"), None);
    }

    #[test]
    fn test_rejects_double_protocols_anywhere() {
        for bad in [
            "http://http://a.example.com/provide/vod",
            "https://https://a.example.com/provide/vod",
            "https://x.example.com/http://https://a.example.com/provide/vod",
            "HTTPS://HTTP://a.example.com/provide/vod",
        ] {
            assert_eq!(extract_actual_url(bad), None, "{bad}");
        }
    }

    #[test]
    fn test_rejects_cjk_and_special_characters() {
        assert_eq!(extract_actual_url("https://a.example.com/资源/provide/vod"), None);
        assert_eq!(extract_actual_url("https://a.example.com（备用）/provide/vod"), None);
        assert_eq!(extract_actual_url("`https://a.example.com/provide/vod`"), None);
        assert_eq!(extract_actual_url("\u{feff}https://a.example.com/provide/vod"), None);
    }

    #[test]
    fn test_canonical_form_is_a_fixed_point() {
        for raw in [
            "https://a.example.com/api.php/provide/vod/?ac=detail",
            "\"http://b.example.com:8080/provide/vod\"",
            "https://p.example.net/proxy/https://c.example.com/provide/vod/",
        ] {
            let first = extract_actual_url(raw).expect("valid endpoint");
            assert_eq!(extract_actual_url(&first).as_deref(), Some(first.as_str()));
        }
    }
}
