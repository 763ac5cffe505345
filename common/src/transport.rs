//! The seam between the wizard and the document service.
//!
//! The browser build implements [`WizardTransport`] over `fetch`; tests use a
//! scripted implementation. [`execute`] turns a [`Command`] into the event
//! that reports its completion.

use async_trait::async_trait;

use crate::error::WizardError;
use crate::model::file::{FileRole, SelectedFile};
use crate::model::reply::{UploadedSpreadsheet, UploadedTemplate};
use crate::requests::{GenerateRequest, PreviewRequest};
use crate::wizard::{Command, WizardEvent};

#[async_trait(?Send)]
pub trait WizardTransport {
    async fn upload_spreadsheet(&self, file: &SelectedFile) -> Result<UploadedSpreadsheet, WizardError>;

    async fn upload_template(&self, file: &SelectedFile) -> Result<UploadedTemplate, WizardError>;

    /// Returns the identifier of the generated preview document.
    async fn preview(&self, request: &PreviewRequest) -> Result<String, WizardError>;

    /// Returns the identifier of the certificate archive.
    async fn generate(&self, request: &GenerateRequest) -> Result<String, WizardError>;
}

/// Sends `command` and wraps the outcome in its completion event.
pub async fn execute<T: WizardTransport + ?Sized>(transport: &T, command: Command) -> WizardEvent {
    match command {
        Command::Upload {
            token,
            role: FileRole::Spreadsheet,
            file,
        } => WizardEvent::SpreadsheetUploaded {
            token,
            result: transport.upload_spreadsheet(&file).await,
        },
        Command::Upload {
            token,
            role: FileRole::Template,
            file,
        } => WizardEvent::TemplateUploaded {
            token,
            result: transport.upload_template(&file).await,
        },
        Command::Preview { token, request } => WizardEvent::PreviewFinished {
            token,
            result: transport.preview(&request).await,
        },
        Command::Generate { token, request } => WizardEvent::GenerateFinished {
            token,
            result: transport.generate(&request).await,
        },
    }
}
