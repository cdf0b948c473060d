use tracing::trace;
use url::Url;

use crate::models::UNKNOWN_RESOURCE;
use super::patterns::{CJK_PHRASE_REGEX, NAME_FIELD_REGEX, QUOTED_NAME_REGEX};

/// Host labels too generic to serve as a resource name on their own
const GENERIC_PREFIXES: [&str; 6] = ["api", "www", "data", "cdn", "static", "media"];

/// Derives a display name from the host of a URL
///
/// A leading `www` label is dropped, and a generic first label such as `api` or
/// `cdn` is skipped in favor of the next one. `https://api.foo.com/...` becomes `foo`.
/// Labels keep the casing written in the URL.
///
/// # Arguments
/// * `url` - URL to name
///
/// # Returns
/// * `String` - The inferred name, or UNKNOWN_RESOURCE if the URL has no parsable host
pub fn extract_domain_name(url: &str) -> String {
    let host = match Url::parse(url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) if !host.is_empty() => written_host(url).unwrap_or(host).to_string(),
            _ => return UNKNOWN_RESOURCE.to_string(),
        },
        Err(e) => {
            trace!("Cannot derive a name from '{}': {}", url, e);
            return UNKNOWN_RESOURCE.to_string();
        }
    };

    let mut labels: Vec<&str> = host.split('.').collect();
    if labels.len() > 1 && labels[0].eq_ignore_ascii_case("www") {
        labels.remove(0);
    }

    let first = labels[0];
    if labels.len() >= 2 && GENERIC_PREFIXES.contains(&first.to_lowercase().as_str()) {
        labels[1].to_string()
    } else {
        first.to_string()
    }
}

/// Host as written in `url`, since `Url` lowercases and punycodes it
fn written_host(url: &str) -> Option<&str> {
    let rest = url.split_once("://")?.1;
    let authority = rest.split(['/', '?', '#']).next()?;
    let host = authority.rsplit('@').next()?;
    if host.starts_with('[') {
        return None;
    }
    host.split(':').next().filter(|h| !h.is_empty())
}

/// Collects every name-like string on a single line of text
///
/// Looks, in order, for `"name"`/`"key"` field values, quoted phrases with CJK text
/// or a media keyword, and bare CJK phrases. Results are trimmed, empty
/// entries dropped, and repeats on the same line collapsed.
pub fn extract_potential_names(line: &str) -> Vec<String> {
    let field_values = NAME_FIELD_REGEX
        .captures_iter(line)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str());

    let quoted = QUOTED_NAME_REGEX
        .captures_iter(line)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|text| text.chars().count() > 1 && !text.starts_with("http"));

    let phrases = CJK_PHRASE_REGEX.find_iter(line).map(|m| m.as_str());

    let mut names: Vec<String> = Vec::new();
    for candidate in field_values.chain(quoted).chain(phrases) {
        let candidate = candidate.trim();
        if !candidate.is_empty() && !names.iter().any(|n| n == candidate) {
            names.push(candidate.to_string());
        }
    }
    names
}
