use serde::{Deserialize, Serialize};

use crate::wizard::sequence::RequestKind;

/// Which upload slot of the intake step a file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileRole {
    Spreadsheet,
    Template,
}

impl FileRole {
    pub const ALL: [FileRole; 2] = [FileRole::Spreadsheet, FileRole::Template];

    /// Name of the multipart field the document service reads the file from.
    pub fn form_field(self) -> &'static str {
        match self {
            FileRole::Spreadsheet => "excel_file",
            FileRole::Template => "template_file",
        }
    }

    /// Extensions offered by the file picker for this slot.
    pub fn accept(self) -> &'static str {
        match self {
            FileRole::Spreadsheet => ".xlsx,.xls",
            FileRole::Template => ".docx",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FileRole::Spreadsheet => "Excel file",
            FileRole::Template => "Word template",
        }
    }

    pub fn request_kind(self) -> RequestKind {
        match self {
            FileRole::Spreadsheet => RequestKind::SpreadsheetUpload,
            FileRole::Template => RequestKind::TemplateUpload,
        }
    }
}

/// A file picked by the user, read into memory so it can be posted.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.filter(|m| !m.is_empty()),
            bytes,
        }
    }
}

// File contents would flood the debug log.
impl std::fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mime_is_treated_as_unknown() {
        let file = SelectedFile::new("people.xlsx", Some(String::new()), vec![1, 2, 3]);
        assert_eq!(file.mime, None);
    }

    #[test]
    fn debug_output_omits_contents() {
        let file = SelectedFile::new("people.xlsx", None, vec![0xAB; 64]);
        let rendered = format!("{:?}", file);
        assert!(rendered.contains("len: 64"));
        assert!(!rendered.contains("171"));
    }

    #[test]
    fn roles_post_to_distinct_fields() {
        assert_eq!(FileRole::Spreadsheet.form_field(), "excel_file");
        assert_eq!(FileRole::Template.form_field(), "template_file");
    }
}
