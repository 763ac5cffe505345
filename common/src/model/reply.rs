//! JSON bodies returned by the document service.
//!
//! Every endpoint answers with `{"success": bool, "error"?: string, ...}`.
//! Failures usually come with a 4xx/5xx status but the body has the same
//! shape, so callers decode the body regardless of status and then turn it
//! into a `Result` with `into_result`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::WizardError;
use crate::wizard::sequence::RequestKind;

/// Spreadsheet accepted by `/upload_excel`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedSpreadsheet {
    pub filename: String,
    pub headers: Vec<String>,
    /// Number of data rows, when the service reports it.
    pub row_count: Option<usize>,
}

/// Template accepted by `/upload_template`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedTemplate {
    pub filename: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadExcelReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default, deserialize_with = "header_names")]
    pub headers: Vec<String>,
    #[serde(default)]
    pub row_count: Option<usize>,
}

impl UploadExcelReply {
    pub fn into_result(self) -> Result<UploadedSpreadsheet, WizardError> {
        let kind = RequestKind::SpreadsheetUpload;
        if !self.success {
            return Err(WizardError::rejected(kind, self.error));
        }
        Ok(UploadedSpreadsheet {
            filename: required(kind, "filename", self.filename)?,
            headers: self.headers,
            row_count: self.row_count,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadTemplateReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
}

impl UploadTemplateReply {
    pub fn into_result(self) -> Result<UploadedTemplate, WizardError> {
        let kind = RequestKind::TemplateUpload;
        if !self.success {
            return Err(WizardError::rejected(kind, self.error));
        }
        Ok(UploadedTemplate {
            filename: required(kind, "filename", self.filename)?,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PreviewReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub preview_file: Option<String>,
}

impl PreviewReply {
    /// Returns the preview file identifier.
    pub fn into_result(self) -> Result<String, WizardError> {
        let kind = RequestKind::Preview;
        if !self.success {
            return Err(WizardError::rejected(kind, self.error));
        }
        required(kind, "preview_file", self.preview_file)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub zip_file: Option<String>,
}

impl GenerateReply {
    /// Returns the archive identifier.
    pub fn into_result(self) -> Result<String, WizardError> {
        let kind = RequestKind::Generate;
        if !self.success {
            return Err(WizardError::rejected(kind, self.error));
        }
        required(kind, "zip_file", self.zip_file)
    }
}

fn required(kind: RequestKind, field: &str, value: Option<String>) -> Result<String, WizardError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(WizardError::Decode(format!(
            "{} reply is missing `{}`",
            kind.name(),
            field
        ))),
    }
}

/// Header cells can be numbers or dates in the sheet; render them as text.
fn header_names<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let cells: Option<Vec<Value>> = Option::deserialize(deserializer)?;
    Ok(cells
        .unwrap_or_default()
        .into_iter()
        .filter_map(|cell| match cell {
            Value::Null => None,
            Value::String(s) => Some(s),
            other => Some(other.to_string()),
        })
        .collect())
}
