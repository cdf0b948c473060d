use once_cell::sync::Lazy;
use regex::Regex;

// Canonicalizer rejection patterns
pub static CJK_IDEOGRAPH_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\x{4e00}-\x{9fff}]").unwrap()
});

pub static FORBIDDEN_CHAR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[（）`\x{feff}]").unwrap()
});

// Fragment patterns: a name/key field and an api/base_url/url field side by side
pub static FRAGMENT_PATTERNS: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        // Whole object, name first
        Regex::new(r#"\{\s*"(?:key|name)"\s*:\s*"([^"]+)"\s*,[\s\S]*?"(?:api|base_url|url)"\s*:\s*"([^"]+)"[\s\S]*?\}"#).unwrap(),
        // Adjacent fields, name first
        Regex::new(r#""(?:name|key)"\s*:\s*"([^"]+)"[^}]*?"(?:api|base_url|url)"\s*:\s*"([^"]+)""#).unwrap(),
        // Adjacent fields, url first
        Regex::new(r#""(?:api|base_url|url)"\s*:\s*"([^"]+)"[^}]*?"(?:name|key)"\s*:\s*"([^"]+)""#).unwrap(),
    ]
});

// Line scanning
pub static LINE_URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"https?://[^\s'"<>,]+"#).unwrap()
});

pub static NAME_FIELD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""(?:name|key)"\s*:\s*"([^"]+)""#).unwrap()
});

pub static QUOTED_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""([^"]*(?:[\x{4e00}-\x{9fff}]|资源|影视|视频|电影|TV)[^"]*)""#).unwrap()
});

pub static CJK_PHRASE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\x{4e00}-\x{9fff}]{2,}(?:资源|影视|视频|电影|TV)?").unwrap()
});
