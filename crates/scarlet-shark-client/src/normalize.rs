//! IDNA normalisation of domains and URL hosts.

use scarlet_shark_core::{Result, ScarletSharkError};
use std::net::IpAddr;
use url::Host;

/// Convert a domain to its ASCII-compatible (punycode) form
///
/// ASCII input and IP literals are returned trimmed but otherwise untouched.
/// Empty input stays empty so the missing-parameter guard can report it.
pub fn domain_to_ascii(domain: &str) -> Result<String> {
    let domain = domain.trim();
    if domain.is_ascii() || domain.parse::<IpAddr>().is_ok() {
        return Ok(domain.to_string());
    }

    match Host::parse(domain) {
        Ok(Host::Domain(ascii)) => Ok(ascii),
        Ok(other) => Ok(other.to_string()),
        Err(e) => Err(ScarletSharkError::InvalidDomain(format!("{domain}: {e}"))),
    }
}

/// Rewrite the host component of a URL to its ASCII-compatible form
///
/// Scheme, userinfo, port, path, query and fragment are kept as given.
/// A URL without a leading `scheme://` is read as starting with its host.
pub fn url_to_ascii(raw: &str) -> Result<String> {
    let raw = raw.trim();

    let authority_start = scheme_len(raw).map_or(0, |len| len + 3);
    let rest = &raw[authority_start..];
    let authority_len = rest
        .find(|c| matches!(c, '/' | '?' | '#'))
        .unwrap_or(rest.len());
    let authority = &rest[..authority_len];

    let host_start = authority.rfind('@').map_or(0, |i| i + 1);
    let host_port = &authority[host_start..];
    let host_len = if host_port.starts_with('[') {
        host_port.find(']').map_or(host_port.len(), |i| i + 1)
    } else {
        host_port.rfind(':').unwrap_or(host_port.len())
    };
    let host = &host_port[..host_len];

    if host.is_ascii() {
        return Ok(raw.to_string());
    }

    let offset = authority_start + host_start;
    Ok(format!(
        "{}{}{}",
        &raw[..offset],
        domain_to_ascii(host)?,
        &raw[offset + host_len..]
    ))
}

/// Length of a leading `scheme` when `raw` starts with `scheme://`
fn scheme_len(raw: &str) -> Option<usize> {
    let end = raw.find(|c| matches!(c, ':' | '/' | '?' | '#'))?;
    if !raw[end..].starts_with("://") {
        return None;
    }

    let scheme = &raw[..end];
    let mut chars = scheme.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));

    valid.then_some(end)
}
