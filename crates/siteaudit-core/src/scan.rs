//! Regex extraction of asset references from page markup.
//!
//! These are textual, single-hop checks: they do not follow CSS `@import`,
//! JS-built URLs, or generated markup.

use regex::Regex;
use std::sync::OnceLock;

/// `href="css/<name>.css"` references in a page.
pub fn stylesheet_refs(content: &str) -> Vec<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r#"href="css/([^"]+\.css)""#).unwrap());
    re.captures_iter(content).map(|c| c[1].to_string()).collect()
}

/// `src="js/<name>.js"` references in a page.
pub fn script_refs(content: &str) -> Vec<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r#"src="js/([^"]+\.js)""#).unwrap());
    re.captures_iter(content).map(|c| c[1].to_string()).collect()
}

/// Raw `href="….html"` link targets in a page, query string and fragment
/// included; see [`normalize_page_link`].
pub fn page_links(content: &str) -> Vec<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r#"href="([^"]+\.html(?:[?#][^"]*)?)""#).unwrap());
    re.captures_iter(content).map(|c| c[1].to_string()).collect()
}

/// Normalize an internal page link: strip the query string and fragment,
/// reject absolute URLs. Returns None for links that cannot name a local page.
pub fn normalize_page_link(link: &str) -> Option<String> {
    let end = link
        .find(|c: char| c == '?' || c == '#')
        .unwrap_or(link.len());
    let link = &link[..end];
    if link.starts_with("http") {
        return None;
    }
    Some(link.to_string())
}
