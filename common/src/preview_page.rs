//! The standalone preview page.
//!
//! The page is opened as `/preview?file=<id>`. It offers the preview document
//! for download and tries to show it inline; there is nothing to show when
//! the `file` parameter is missing.

use url::form_urlencoded;

use crate::endpoints::Endpoints;

pub const MISSING_FILE_MESSAGE: &str = "No preview file specified";

pub const INLINE_FAILED_WARNING: &str =
    "Your browser cannot display this document inline. Use the download link to open it.";

/// What the preview page shows after reading its query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewPage {
    Ready { file: String, url: String },
    Missing,
}

impl PreviewPage {
    /// `query` is the page's search string, with or without the leading `?`.
    pub fn resolve(query: &str, endpoints: &Endpoints) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let file = form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == "file")
            .map(|(_, value)| value.trim().to_string())
            .filter(|value| !value.is_empty());

        match file {
            Some(file) => PreviewPage::Ready {
                url: endpoints.preview_file(&file),
                file,
            },
            None => PreviewPage::Missing,
        }
    }
}

/// Link from the wizard to the preview page for `file`.
pub fn link_for(file: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("file", file)
        .finish();
    format!("/preview?{}", query)
}
