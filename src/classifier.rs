/// Link classification for free text captured into the list
///
/// Every function here is pure and total: bad input never fails, it is
/// classified as `NotALink` (or reported through a typed `SafetyError`).
///
/// The domain and IPv4 checks are regex heuristics, not RFC validators:
/// - `is_valid_domain` accepts labels of 1-63 alphanumerics/hyphens with an
///   alphabetic final label of 2-63 letters, so `localhost` and
///   punycode/numeric TLDs are rejected while `my-host.example` passes.
/// - `is_valid_ip` only understands dotted-quad IPv4 (leading zeros allowed).
/// - `is_valid_url` defers to WHATWG URL parsing, which treats anything
///   shaped like `word:rest` as an absolute URL (`localhost:3000` included).
use crate::error::SafetyError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

/// Schemes considered navigable
pub const ALLOWED_SCHEMES: [&str; 4] = ["http", "https", "ftp", "ftps"];

const MAX_HOSTNAME_LEN: usize = 253;

static DOMAIN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z]{2,63}$").unwrap()
});

static IPV4_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$",
    )
    .unwrap()
});

static HTTP_PREFIX_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^https?://").unwrap());

/// Which rule of `detect_link_type` matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkType {
    FullUrl,
    Domain,
    Ip,
    UrlWithoutProtocol,
    NotALink,
}

impl LinkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkType::FullUrl => "full_url",
            LinkType::Domain => "domain",
            LinkType::Ip => "ip",
            LinkType::UrlWithoutProtocol => "url_without_protocol",
            LinkType::NotALink => "not_a_link",
        }
    }
}

/// Result of `classify_flexible`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexibleUrl {
    pub is_valid: bool,
    pub url: String,
}

/// Result of `detect_link_type`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedLink {
    #[serde(rename = "type")]
    pub link_type: LinkType,
    pub is_valid: bool,
    pub value: String,
}

/// One entry of `validate_many`, keeping the input it was computed from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchEntry {
    pub original: String,
    #[serde(flatten)]
    pub detected: DetectedLink,
}

/// Structured fields of a URL accepted by `validate_safely`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeUrl {
    pub url: String,
    /// Scheme in URL-standard form, e.g. `"https:"`
    pub protocol: String,
    pub hostname: String,
    pub pathname: String,
}

/// Flat `{isValid, url?, protocol?, hostname?, pathname?, error?}` view of
/// a `validate_safely` result, for callers on the JS side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyReport {
    pub is_valid: bool,
    #[serde(flatten)]
    pub fields: Option<SafeUrl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Result<SafeUrl, SafetyError>> for SafetyReport {
    fn from(result: Result<SafeUrl, SafetyError>) -> Self {
        match result {
            Ok(fields) => SafetyReport {
                is_valid: true,
                fields: Some(fields),
                error: None,
            },
            Err(e) => SafetyReport {
                is_valid: false,
                fields: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// True if `text` parses as an absolute URL
pub fn is_valid_url(text: &str) -> bool {
    Url::parse(text).is_ok()
}

/// Like `is_valid_url`, but the scheme must be one of `ALLOWED_SCHEMES`
pub fn is_valid_url_with_protocol(text: &str) -> bool {
    Url::parse(text)
        .map(|url| ALLOWED_SCHEMES.contains(&url.scheme()))
        .unwrap_or(false)
}

/// True if `text` looks like a dotted hostname (`docs.rs`, `news.bbc.co.uk`)
pub fn is_valid_domain(text: &str) -> bool {
    DOMAIN_REGEX.is_match(text)
}

/// True if `text` is a dotted-quad IPv4 address
pub fn is_valid_ip(text: &str) -> bool {
    IPV4_REGEX.is_match(text)
}

/// Accept `text` as-is if it is an absolute URL, otherwise try it with an
/// `https://` prefix (unless it already carries an http(s) prefix)
pub fn classify_flexible(text: &str) -> FlexibleUrl {
    if is_valid_url(text) {
        return FlexibleUrl {
            is_valid: true,
            url: text.to_string(),
        };
    }

    if !HTTP_PREFIX_REGEX.is_match(text) {
        let with_protocol = format!("https://{}", text);
        if is_valid_url(&with_protocol) {
            return FlexibleUrl {
                is_valid: true,
                url: with_protocol,
            };
        }
    }

    FlexibleUrl {
        is_valid: false,
        url: text.to_string(),
    }
}

/// Classify `text` as a link and produce the URL to navigate to
///
/// Rules are tried in a fixed order and the first match wins:
/// 1. absolute URL → `FullUrl`, unchanged
/// 2. dotted domain → `Domain`, `https://` prefixed
/// 3. IPv4 → `Ip`, `http://` prefixed
/// 4. valid once `https://` is added → `UrlWithoutProtocol`
/// 5. anything else → `NotALink`
///
/// Input is trimmed first.
pub fn detect_link_type(text: &str) -> DetectedLink {
    let trimmed = text.trim();

    let (link_type, value) = if is_valid_url(trimmed) {
        (LinkType::FullUrl, trimmed.to_string())
    } else if is_valid_domain(trimmed) {
        (LinkType::Domain, format!("https://{}", trimmed))
    } else if is_valid_ip(trimmed) {
        (LinkType::Ip, format!("http://{}", trimmed))
    } else {
        let flexible = classify_flexible(trimmed);
        if flexible.is_valid {
            (LinkType::UrlWithoutProtocol, flexible.url)
        } else {
            (LinkType::NotALink, trimmed.to_string())
        }
    };

    DetectedLink {
        link_type,
        is_valid: link_type != LinkType::NotALink,
        value,
    }
}

/// Parse `text` as an absolute URL and apply extra sanity checks on the
/// scheme and hostname
pub fn validate_safely(text: &str) -> Result<SafeUrl, SafetyError> {
    let url = Url::parse(text).map_err(|e| SafetyError::Unparseable(e.to_string()))?;

    if !ALLOWED_SCHEMES.contains(&url.scheme()) {
        return Err(SafetyError::InvalidProtocol(format!("{}:", url.scheme())));
    }

    let hostname = url.host_str().unwrap_or_default();
    check_hostname(hostname)?;

    Ok(SafeUrl {
        url: url.as_str().to_string(),
        protocol: format!("{}:", url.scheme()),
        hostname: hostname.to_string(),
        pathname: url.path().to_string(),
    })
}

fn check_hostname(hostname: &str) -> Result<(), SafetyError> {
    if hostname.contains("..") || hostname.starts_with('.') {
        return Err(SafetyError::SuspiciousHostname(hostname.to_string()));
    }
    if hostname.len() > MAX_HOSTNAME_LEN {
        return Err(SafetyError::HostnameTooLong(hostname.len()));
    }
    Ok(())
}

/// Run `detect_link_type` over every input, preserving order
pub fn validate_many<S: AsRef<str>>(texts: &[S]) -> Vec<BatchEntry> {
    texts
        .iter()
        .map(|text| BatchEntry {
            original: text.as_ref().to_string(),
            detected: detect_link_type(text.as_ref()),
        })
        .collect()
}
