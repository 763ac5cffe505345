//! URLs of the document service endpoints.

use url::form_urlencoded;

use crate::model::file::FileRole;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    /// `base` is prepended to every path; empty means same origin.
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn upload(&self, role: FileRole) -> String {
        match role {
            FileRole::Spreadsheet => self.path("/upload_excel"),
            FileRole::Template => self.path("/upload_template"),
        }
    }

    pub fn preview(&self) -> String {
        self.path("/preview")
    }

    pub fn generate(&self) -> String {
        self.path("/generate")
    }

    /// Where a generated preview document can be fetched.
    pub fn preview_file(&self, id: &str) -> String {
        self.path(&format!("/get_preview/{}", encode_segment(id)))
    }

    /// Where a generated certificate archive can be fetched.
    pub fn download(&self, id: &str) -> String {
        self.path(&format!("/download/{}", encode_segment(id)))
    }

    fn path(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

/// Percent-encodes one path segment. `byte_serialize` writes spaces as `+`,
/// which only means space in query strings.
pub fn encode_segment(segment: &str) -> String {
    form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
