pub mod base58;
pub mod site;
pub mod writer;

pub use site::{build_site, SiteDocument, SiteEntry, DEFAULT_CACHE_TIME};
pub use writer::{save_base58, save_json, save_text};
