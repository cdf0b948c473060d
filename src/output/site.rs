use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, trace};
use url::Url;

use crate::models::ResourceRecord;

/// Default cache lifetime written into every site document
pub const DEFAULT_CACHE_TIME: u32 = 9200;

/// One published resource entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteEntry {
    pub name: String,   // Display name
    pub api: String,    // Canonical endpoint URL
    pub detail: String, // scheme://host of the endpoint
}

/// Published document: `{cache_time, api_site: {api_1: {...}, ...}}`
///
/// Keys of `api_site` keep their insertion order when serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteDocument {
    pub cache_time: u32,
    pub api_site: IndexMap<String, SiteEntry>,
}

impl SiteDocument {
    pub fn len(&self) -> usize {
        self.api_site.len()
    }

    pub fn is_empty(&self) -> bool {
        self.api_site.is_empty()
    }
}

/// Builds a site document from records, numbering keys from `api_1` in input order
///
/// # Arguments
/// * `records` - Records to publish
/// * `cache_time` - Value of the document's `cache_time` field
///
/// # Returns
/// * `SiteDocument` - The keyed document, ready to serialize
pub fn build_site(records: &[ResourceRecord], cache_time: u32) -> SiteDocument {
    let api_site = records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let entry = SiteEntry {
                name: record.name.clone(),
                api: record.url.clone(),
                detail: detail_url(&record.url),
            };
            (format!("api_{}", i + 1), entry)
        })
        .collect::<IndexMap<_, _>>();

    debug!("Built site document with {} entries", api_site.len());
    SiteDocument { cache_time, api_site }
}

/// Reduces an endpoint to `scheme://host[:port]`, or returns it unchanged if it does not parse
fn detail_url(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => match (parsed.host_str(), parsed.port()) {
            (Some(host), Some(port)) => format!("{}://{}:{}", parsed.scheme(), host, port),
            (Some(host), None) => format!("{}://{}", parsed.scheme(), host),
            (None, _) => url.to_string(),
        },
        Err(e) => {
            trace!("Using raw URL as detail for '{}': {}", url, e);
            url.to_string()
        }
    }
}
