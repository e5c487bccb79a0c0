//! URL decomposition into the `{scheme, host, port}` triple a site map keys on.

use std::fmt;

use serde::Serialize;
use url::Url;

use crate::error::ImportError;

/// Protocols a site map entry may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    /// Matches an already-normalised (lower-case) scheme name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "http" => Some(Scheme::Http),
            "https" => Some(Scheme::Https),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }

    pub fn default_port(self) -> u16 {
        match self {
            Scheme::Http => 80,
            Scheme::Https => 443,
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTTP service an item was recorded against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    #[serde(rename = "protocol")]
    pub scheme: Scheme,
    pub host: String,
    pub port: u16,
}

impl Endpoint {
    /// Decomposes `url` into scheme, host and port.
    ///
    /// Only `http` and `https` are accepted; any other scheme, or no scheme at
    /// all, is the one failure. The host is the authority's host text,
    /// lower-cased and never punycode-encoded, or empty when the URL has none.
    /// IPv6 literals come back without brackets. A missing, zero, unparsable
    /// or out-of-range port falls back to 80/443 by scheme.
    ///
    /// # Examples
    ///
    /// - `"https://example.com/login"` → `https`, `example.com`, `443`
    /// - `"http://10.0.0.5:8080/"` → `http`, `10.0.0.5`, `8080`
    /// - `"http://h:70000/"` → `http`, `h`, `80`
    pub fn parse(url: &str) -> Result<Self, ImportError> {
        let invalid_scheme = || ImportError::InvalidUrlScheme {
            url: url.to_string(),
        };
        let (host, port_text) = split_authority(url);

        let (scheme, port) = match Url::parse(url) {
            Ok(parsed) => {
                let scheme = Scheme::from_name(parsed.scheme()).ok_or_else(invalid_scheme)?;
                // `Url::port` is None when the port equals the scheme default.
                (scheme, parsed.port())
            }
            // Rejected hosts or ports under a usable scheme keep the raw split.
            Err(_) => {
                let scheme = url
                    .split_once(':')
                    .and_then(|(name, _)| Scheme::from_name(&name.to_ascii_lowercase()))
                    .ok_or_else(invalid_scheme)?;
                (scheme, port_text.and_then(|p| p.parse::<u16>().ok()))
            }
        };

        Ok(Endpoint {
            scheme,
            host: host.to_lowercase(),
            port: port.filter(|p| *p != 0).unwrap_or_else(|| scheme.default_port()),
        })
    }
}

/// Host and port text of `scheme://[userinfo@]host[:port][/...]`, verbatim.
/// Without `//` after the scheme there is no authority.
fn split_authority(url: &str) -> (&str, Option<&str>) {
    let Some(rest) = url.split_once(':').and_then(|(_, rest)| rest.strip_prefix("//")) else {
        return ("", None);
    };
    let end = rest
        .find(|c| matches!(c, '/' | '?' | '#'))
        .unwrap_or(rest.len());
    let authority = &rest[..end];
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, hp)| hp);

    if let Some(bracketed) = host_port.strip_prefix('[') {
        return match bracketed.split_once(']') {
            Some((host, tail)) => (host, tail.strip_prefix(':')),
            None => (bracketed, None),
        };
    }
    match host_port.rsplit_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (host_port, None),
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "{}://[{}]:{}", self.scheme, self.host, self.port)
        } else {
            write!(f, "{}://{}:{}", self.scheme, self.host, self.port)
        }
    }
}
