use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use futures::executor::block_on;

use common::config::WizardConfig;
use common::controller::{PendingTimer, WizardController};
use common::error::WizardError;
use common::model::file::{FileRole, SelectedFile};
use common::model::reply::{UploadedSpreadsheet, UploadedTemplate};
use common::requests::{GenerateRequest, PreviewRequest};
use common::transport::WizardTransport;
use common::wizard::{RequestKind, Step, WizardEvent, WizardState, WizardUi};

/// Transport that answers from scripted queues and records what it was asked.
#[derive(Default)]
struct ScriptedTransport {
    spreadsheet_replies: RefCell<VecDeque<Result<UploadedSpreadsheet, WizardError>>>,
    template_replies: RefCell<VecDeque<Result<UploadedTemplate, WizardError>>>,
    preview_replies: RefCell<VecDeque<Result<String, WizardError>>>,
    generate_replies: RefCell<VecDeque<Result<String, WizardError>>>,
    previews: RefCell<Vec<PreviewRequest>>,
    generations: RefCell<Vec<GenerateRequest>>,
    uploads: RefCell<Vec<String>>,
}

impl ScriptedTransport {
    fn with_uploads(headers: &[&str]) -> Self {
        let transport = ScriptedTransport::default();
        transport
            .spreadsheet_replies
            .borrow_mut()
            .push_back(Ok(UploadedSpreadsheet {
                filename: "students.xlsx".into(),
                headers: headers.iter().map(|h| h.to_string()).collect(),
                row_count: None,
            }));
        transport
            .template_replies
            .borrow_mut()
            .push_back(Ok(UploadedTemplate {
                filename: "certificate.docx".into(),
            }));
        transport
    }

    fn unscripted(kind: RequestKind) -> WizardError {
        WizardError::Transport(format!("no scripted reply for {}", kind.name()))
    }
}

#[async_trait(?Send)]
impl WizardTransport for ScriptedTransport {
    async fn upload_spreadsheet(&self, file: &SelectedFile) -> Result<UploadedSpreadsheet, WizardError> {
        self.uploads.borrow_mut().push(file.name.clone());
        self.spreadsheet_replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(Self::unscripted(RequestKind::SpreadsheetUpload)))
    }

    async fn upload_template(&self, file: &SelectedFile) -> Result<UploadedTemplate, WizardError> {
        self.uploads.borrow_mut().push(file.name.clone());
        self.template_replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(Self::unscripted(RequestKind::TemplateUpload)))
    }

    async fn preview(&self, request: &PreviewRequest) -> Result<String, WizardError> {
        self.previews.borrow_mut().push(request.clone());
        self.preview_replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(Self::unscripted(RequestKind::Preview)))
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<String, WizardError> {
        self.generations.borrow_mut().push(request.clone());
        self.generate_replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(Self::unscripted(RequestKind::Generate)))
    }
}

fn chosen(role: FileRole, name: &str) -> WizardEvent {
    WizardEvent::FileChosen {
        role,
        file: SelectedFile::new(name, None, vec![0x50, 0x4B, 0x03, 0x04]),
    }
}

fn controller(transport: ScriptedTransport) -> WizardController<ScriptedTransport> {
    WizardController::new(WizardConfig::default(), transport)
}

fn upload_both(controller: &mut WizardController<ScriptedTransport>) {
    block_on(controller.dispatch(chosen(FileRole::Spreadsheet, "students.xlsx")));
    block_on(controller.dispatch(chosen(FileRole::Template, "certificate.docx")));
}

#[test]
fn full_run_from_upload_to_download() {
    let transport = ScriptedTransport::with_uploads(&["Full Name", "Course Title", "Date", "Teacher"]);
    transport
        .preview_replies
        .borrow_mut()
        .extend([Ok("preview_certificate.docx".to_string())]);
    transport
        .generate_replies
        .borrow_mut()
        .push_back(Ok("certificates_20240301_101500.zip".into()));
    let mut controller = controller(transport);

    upload_both(&mut controller);
    assert!(controller.wizard().ui.next_enabled);

    block_on(controller.dispatch(WizardEvent::Next));
    block_on(controller.dispatch(WizardEvent::MappingChanged {
        field: "instructor".into(),
        column: "Teacher".into(),
    }));
    block_on(controller.dispatch(WizardEvent::Next));

    let wizard = controller.wizard();
    assert_eq!(wizard.current_step(), Step::Preview);
    assert_eq!(wizard.state.row_count, 10);
    assert_eq!(
        wizard.ui.preview_download.as_deref(),
        Some("/get_preview/preview_certificate.docx")
    );

    block_on(controller.dispatch(WizardEvent::Next));
    block_on(controller.dispatch(WizardEvent::Generate));

    let wizard = controller.wizard();
    assert_eq!(wizard.current_step(), Step::Completion);
    assert_eq!(
        wizard.ui.completion_download.as_deref(),
        Some("/download/certificates_20240301_101500.zip")
    );

    let generations = controller.transport().generations.borrow();
    assert_eq!(generations.len(), 1);
    assert_eq!(generations[0].excel_filename, "students.xlsx");
    assert_eq!(generations[0].template_filename, "certificate.docx");
    assert_eq!(generations[0].mappings.column("name"), Some("Full Name"));
    assert_eq!(generations[0].mappings.column("instructor"), Some("Teacher"));
}

#[test]
fn row_changes_issue_one_preview_each() {
    let transport = ScriptedTransport::with_uploads(&["Name"]);
    transport.preview_replies.borrow_mut().extend([
        Ok("preview_a.docx".to_string()),
        Err(WizardError::rejected(RequestKind::Preview, Some("Error generating preview: list index out of range".into()))),
        Ok("preview_c.docx".to_string()),
    ]);
    let mut controller = controller(transport);
    upload_both(&mut controller);
    block_on(controller.dispatch(WizardEvent::Next));
    block_on(controller.dispatch(WizardEvent::Next));

    block_on(controller.dispatch(WizardEvent::PreviewRowChanged(9)));
    assert_eq!(controller.wizard().ui.preview_download, None);
    assert_eq!(controller.wizard().ui.banners.len(), 1);

    block_on(controller.dispatch(WizardEvent::PreviewRowChanged(2)));
    assert_eq!(
        controller.wizard().ui.preview_download.as_deref(),
        Some("/get_preview/preview_c.docx")
    );

    let rows: Vec<usize> = controller
        .transport()
        .previews
        .borrow()
        .iter()
        .map(|p| p.row_index)
        .collect();
    assert_eq!(rows, vec![0, 9, 2]);
}

#[test]
fn preview_is_attempted_even_without_uploads() {
    let transport = ScriptedTransport::default();
    transport
        .preview_replies
        .borrow_mut()
        .push_back(Err(WizardError::rejected(
            RequestKind::Preview,
            Some("Files not found. Please upload again.".into()),
        )));
    let mut controller = controller(transport);

    block_on(controller.dispatch(WizardEvent::PreviewRowChanged(0)));

    let previews = controller.transport().previews.borrow();
    assert_eq!(previews[0].excel_filename, "");
    assert_eq!(
        controller.wizard().ui.banners[0].message,
        "Files not found. Please upload again."
    );
}

#[test]
fn failed_generation_can_be_retried() {
    let transport = ScriptedTransport::with_uploads(&["Name"]);
    transport
        .preview_replies
        .borrow_mut()
        .push_back(Ok("preview.docx".into()));
    transport.generate_replies.borrow_mut().extend([
        Err(WizardError::rejected(RequestKind::Generate, None)),
        Ok("certificates.zip".to_string()),
    ]);
    let mut controller = controller(transport);
    upload_both(&mut controller);
    for _ in 0..3 {
        block_on(controller.dispatch(WizardEvent::Next));
    }

    block_on(controller.dispatch(WizardEvent::Generate));
    let wizard = controller.wizard();
    assert_eq!(wizard.current_step(), Step::Generation);
    assert!(wizard.ui.generate_enabled);
    assert!(wizard.ui.generation_failed);
    assert_eq!(wizard.ui.completion_download, None);
    assert_eq!(wizard.ui.banners[0].message, "Error generating certificates");

    block_on(controller.dispatch(WizardEvent::Retry));
    assert_eq!(controller.wizard().current_step(), Step::Completion);
    assert!(controller.wizard().ui.banners.is_empty());
    assert_eq!(controller.transport().generations.borrow().len(), 2);
}

#[test]
fn start_over_after_completion_restores_initial_state() {
    let transport = ScriptedTransport::with_uploads(&["Name"]);
    transport
        .preview_replies
        .borrow_mut()
        .push_back(Ok("preview.docx".into()));
    transport
        .generate_replies
        .borrow_mut()
        .push_back(Ok("certificates.zip".into()));
    let mut controller = controller(transport);
    upload_both(&mut controller);
    for _ in 0..3 {
        block_on(controller.dispatch(WizardEvent::Next));
    }
    block_on(controller.dispatch(WizardEvent::Generate));
    controller.take_cleared_inputs();

    block_on(controller.dispatch(WizardEvent::StartOver));

    assert_eq!(controller.wizard().state, WizardState::default());
    assert_eq!(controller.wizard().ui, WizardUi::default());
    assert_eq!(
        controller.take_cleared_inputs(),
        vec![FileRole::Spreadsheet, FileRole::Template]
    );
}

#[test]
fn rejected_upload_banner_expires() {
    let transport = ScriptedTransport::default();
    transport
        .spreadsheet_replies
        .borrow_mut()
        .push_back(Err(WizardError::rejected(
            RequestKind::SpreadsheetUpload,
            Some("Invalid file format. Please upload an Excel file (.xlsx, .xls)".into()),
        )));
    let mut controller = controller(transport);

    block_on(controller.dispatch(chosen(FileRole::Spreadsheet, "students.csv")));
    let wizard = controller.wizard();
    assert_eq!(wizard.ui.spreadsheet.label, None);
    assert!(!wizard.ui.next_enabled);
    assert_eq!(wizard.ui.banners.len(), 1);
    assert!(matches!(
        controller.pending_timers().next(),
        Some(PendingTimer::BannerTimeout { after_ms: 5000, .. })
    ));
    assert_eq!(controller.take_cleared_inputs(), vec![FileRole::Spreadsheet]);

    block_on(controller.run_timers());
    assert!(controller.wizard().ui.banners.is_empty());
    assert_eq!(controller.pending_timers().count(), 0);
}
