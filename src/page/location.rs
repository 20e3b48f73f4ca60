use crate::error::{BrowserError, Result};
use std::path::Path;
use url::Url;

/// Turn a page location into a URL the browser can load.
///
/// Anything that already carries a scheme is passed through; everything else
/// is treated as a filesystem path, made absolute, and addressed with a
/// percent-encoded `file://` URL. A path that does not exist is rejected with
/// `PageNotFound` rather than loading Chrome's error page.
pub fn page_url(location: &str) -> Result<String> {
    let trimmed = location.trim();

    if has_scheme(trimmed) {
        return Ok(trimmed.to_string());
    }

    let absolute = std::path::absolute(Path::new(trimmed))?;
    if !absolute.is_file() {
        return Err(BrowserError::PageNotFound(absolute));
    }

    Url::from_file_path(&absolute)
        .map(String::from)
        .map_err(|()| BrowserError::PageNotFound(absolute))
}

fn has_scheme(location: &str) -> bool {
    location.starts_with("http://")
        || location.starts_with("https://")
        || location.starts_with("file://")
        || location.starts_with("data:")
        || location.starts_with("about:")
}
