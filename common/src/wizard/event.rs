use crate::error::WizardError;
use crate::model::file::{FileRole, SelectedFile};
use crate::model::reply::{UploadedSpreadsheet, UploadedTemplate};

use super::banner::BannerId;
use super::sequence::RequestToken;

/// Everything that can happen to the wizard: user actions, request
/// completions, and timer expiries.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardEvent {
    FileChosen { role: FileRole, file: SelectedFile },
    SpreadsheetUploaded {
        token: RequestToken,
        result: Result<UploadedSpreadsheet, WizardError>,
    },
    TemplateUploaded {
        token: RequestToken,
        result: Result<UploadedTemplate, WizardError>,
    },
    Next,
    Back,
    MappingChanged { field: String, column: String },
    PreviewRowChanged(usize),
    /// Explicit request to preview the selected row again.
    GeneratePreview,
    PreviewFinished {
        token: RequestToken,
        result: Result<String, WizardError>,
    },
    Generate,
    Retry,
    GenerateFinished {
        token: RequestToken,
        result: Result<String, WizardError>,
    },
    StartOver,
    DismissBanner(BannerId),
    BannerTimedOut(BannerId),
    BannerFaded(BannerId),
}
