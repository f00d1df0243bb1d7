//! Relative link rewriting.
//!
//! Kept for parity with the host-side render pipeline contract: rewrites a
//! relative href found near a resource into an absolute `file://` reference.
//! Not currently wired into the fetch path.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

/// Matches an href that already carries a URI scheme (`http:`, `file:`, …).
static SCHEME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*:").expect("scheme regex is valid"));

/// Rewrite `href` into an absolute reference relative to `resource`.
///
/// Empty hrefs and hrefs that already carry a scheme are returned unchanged;
/// everything else resolves against the directory containing `resource`.
pub fn fix_href(resource: &Path, href: &str) -> String {
    if href.is_empty() {
        return href.to_string();
    }

    // Already a URL — leave it alone.
    if SCHEME_RE.is_match(href) {
        return href.to_string();
    }

    let dir = resource.parent().unwrap_or_else(|| Path::new(""));
    format!("file://{}", dir.join(href).display())
}
