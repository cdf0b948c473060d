use serde::Serialize;
use std::fmt;

/// Placeholder name used when nothing better can be inferred for a resource
pub const UNKNOWN_RESOURCE: &str = "unknown resource";

/// A single name/endpoint pair describing one external content source
///
/// The `url` is always in canonical form (ending exactly at `provide/vod`)
/// once a record leaves the parser. Names are free text and carry no
/// uniqueness guarantee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceRecord {
    pub name: String, // Display name, may be empty or UNKNOWN_RESOURCE
    pub url: String,  // Canonical endpoint URL
}

impl ResourceRecord {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.url)
    }
}

/// Insertion-ordered sequence of records; order decides "first occurrence wins"
pub type Dataset = Vec<ResourceRecord>;
