//! Transition function of the wizard.
//!
//! Elm-style: `update` receives the wizard and one event, mutates the wizard,
//! and returns the effects to run. Request completions carry the token they
//! were issued with and are dropped when a newer request of the same kind
//! has been sent since.

use log::{debug, warn};

use crate::error::WizardError;
use crate::model::file::{FileRole, SelectedFile};
use crate::model::mapping::Mappings;
use crate::requests::{GenerateRequest, PreviewRequest};

use super::banner::{Banner, BannerId};
use super::effect::{Command, Effect};
use super::event::WizardEvent;
use super::sequence::{RequestKind, RequestToken};
use super::state::{UploadSlot, Wizard};
use super::step::Step;

/// Applies `event` to `wizard` and returns the effects the caller must run.
pub fn update(wizard: &mut Wizard, event: WizardEvent) -> Vec<Effect> {
    let mut effects = Vec::new();

    match event {
        WizardEvent::FileChosen { role, file } => choose_file(wizard, role, file, &mut effects),
        WizardEvent::SpreadsheetUploaded { token, result } => {
            if is_stale(wizard, token) {
                return effects;
            }
            match result {
                Ok(uploaded) => {
                    debug!(
                        "spreadsheet stored as {} with {} headers",
                        uploaded.filename,
                        uploaded.headers.len()
                    );
                    wizard.state.excel_file_name = uploaded.filename;
                    wizard.state.excel_headers = uploaded.headers;
                    wizard.state.row_count = uploaded
                        .row_count
                        .unwrap_or(wizard.config.default_row_count);
                }
                Err(err) => {
                    wizard.state.excel_headers.clear();
                    wizard.state.row_count = 0;
                    upload_failed(wizard, FileRole::Spreadsheet, &err, &mut effects);
                }
            }
            refresh_next(wizard);
        }
        WizardEvent::TemplateUploaded { token, result } => {
            if is_stale(wizard, token) {
                return effects;
            }
            match result {
                Ok(uploaded) => {
                    debug!("template stored as {}", uploaded.filename);
                    wizard.state.template_file_name = uploaded.filename;
                }
                Err(err) => upload_failed(wizard, FileRole::Template, &err, &mut effects),
            }
            refresh_next(wizard);
        }
        WizardEvent::Next => go_forward(wizard, &mut effects),
        WizardEvent::Back => {
            if let Some(previous) = wizard.state.current_step.previous() {
                enter(wizard, previous, &mut effects);
            }
        }
        WizardEvent::MappingChanged { field, column } => change_mapping(wizard, &field, column),
        WizardEvent::PreviewRowChanged(row) => {
            wizard.state.preview_row = row;
            request_preview(wizard, &mut effects);
        }
        WizardEvent::GeneratePreview => request_preview(wizard, &mut effects),
        WizardEvent::PreviewFinished { token, result } => {
            if is_stale(wizard, token) {
                return effects;
            }
            wizard.ui.preview_loading = false;
            match result {
                Ok(preview_file) => {
                    wizard.ui.preview_download = Some(wizard.endpoints.preview_file(&preview_file));
                    wizard.state.preview_file = Some(preview_file);
                }
                Err(err) => {
                    warn!("preview of row {} failed: {}", wizard.state.preview_row, err);
                    push_banner(wizard, err.banner_message(RequestKind::Preview), &mut effects);
                }
            }
        }
        WizardEvent::Generate | WizardEvent::Retry => request_generation(wizard, &mut effects),
        WizardEvent::GenerateFinished { token, result } => {
            if is_stale(wizard, token) {
                return effects;
            }
            wizard.ui.generating = false;
            wizard.ui.generate_enabled = true;
            match result {
                Ok(zip_file) => {
                    debug!("certificates packaged as {}", zip_file);
                    wizard.ui.completion_download = Some(wizard.endpoints.download(&zip_file));
                    wizard.state.current_step = Step::Completion;
                }
                Err(err) => {
                    warn!("generation failed: {}", err);
                    wizard.ui.generation_failed = true;
                    push_banner(wizard, err.banner_message(RequestKind::Generate), &mut effects);
                }
            }
        }
        WizardEvent::StartOver => {
            debug!("starting over");
            wizard.reset();
            wizard.sequencer.invalidate_all();
            effects.extend(FileRole::ALL.map(Effect::ClearFileInput));
        }
        WizardEvent::DismissBanner(id) | WizardEvent::BannerFaded(id) => remove_banner(wizard, id),
        WizardEvent::BannerTimedOut(id) => {
            if let Some(banner) = wizard.ui.banners.iter_mut().find(|b| b.id == id) {
                banner.fading = true;
                effects.push(Effect::ScheduleBannerRemoval {
                    id,
                    after_ms: wizard.config.banner_fade_ms,
                });
            }
        }
    }

    effects
}

fn is_stale(wizard: &Wizard, token: RequestToken) -> bool {
    let stale = !wizard.sequencer.is_latest(token);
    if stale {
        debug!(
            "dropping stale {} response #{}",
            token.kind.name(),
            token.seq
        );
    }
    stale
}

fn choose_file(wizard: &mut Wizard, role: FileRole, file: SelectedFile, effects: &mut Vec<Effect>) {
    debug!(
        "{} chosen: {} ({} bytes)",
        role.label(),
        file.name,
        file.bytes.len()
    );
    let slot = wizard.ui.slot_mut(role);
    slot.label = Some(file.name.clone());
    slot.filled = true;

    // The previous upload no longer describes what the user picked.
    wizard.state.set_file_name(role, String::new());
    refresh_next(wizard);

    let token = wizard.sequencer.issue(role.request_kind());
    wizard.state.set_file(role, Some(file.clone()));
    effects.push(Effect::Send(Command::Upload { token, role, file }));
}

fn upload_failed(wizard: &mut Wizard, role: FileRole, err: &WizardError, effects: &mut Vec<Effect>) {
    warn!("{} upload failed: {}", role.label(), err);
    wizard.state.set_file(role, None);
    wizard.state.set_file_name(role, String::new());
    *wizard.ui.slot_mut(role) = UploadSlot::default();
    effects.push(Effect::ClearFileInput(role));
    push_banner(wizard, err.banner_message(role.request_kind()), effects);
}

fn refresh_next(wizard: &mut Wizard) {
    wizard.ui.next_enabled = wizard.state.files_ready();
}

fn go_forward(wizard: &mut Wizard, effects: &mut Vec<Effect>) {
    let current = wizard.state.current_step;
    let Some(next) = current.next() else {
        return;
    };
    if current == Step::Intake && !wizard.state.files_ready() {
        debug!("both files must be uploaded before mapping");
        return;
    }
    enter(wizard, next, effects);
}

fn enter(wizard: &mut Wizard, step: Step, effects: &mut Vec<Effect>) {
    debug!("entering step {} ({})", step.number(), step.title());
    wizard.state.current_step = step;

    match step {
        Step::Mapping => rebuild_mappings(wizard),
        Step::Preview => {
            let rows = wizard.state.row_count;
            if rows > 0 && wizard.state.preview_row >= rows {
                wizard.state.preview_row = 0;
            }
            request_preview(wizard, effects);
        }
        Step::Intake | Step::Generation | Step::Completion => {}
    }
}

/// Suggestions are recomputed on every entry; earlier overrides do not survive.
fn rebuild_mappings(wizard: &mut Wizard) {
    wizard.state.mappings = Mappings::suggest(
        wizard.config.template_fields.as_slice(),
        &wizard.state.excel_headers,
    );
}

fn change_mapping(wizard: &mut Wizard, field: &str, column: String) {
    if !column.is_empty() && !wizard.state.excel_headers.contains(&column) {
        warn!("ignoring mapping of {} to unknown column {}", field, column);
        return;
    }
    if !wizard.state.mappings.set(field, column) {
        warn!("ignoring mapping for unknown template field {}", field);
    }
}

fn request_preview(wizard: &mut Wizard, effects: &mut Vec<Effect>) {
    let token = wizard.sequencer.issue(RequestKind::Preview);
    wizard.state.preview_file = None;
    wizard.ui.preview_download = None;
    wizard.ui.preview_loading = true;

    let request = PreviewRequest {
        excel_filename: wizard.state.excel_file_name.clone(),
        template_filename: wizard.state.template_file_name.clone(),
        mappings: wizard.state.mappings.clone(),
        row_index: wizard.state.preview_row,
    };
    debug!("requesting preview #{} of row {}", token.seq, request.row_index);
    effects.push(Effect::Send(Command::Preview { token, request }));
}

fn request_generation(wizard: &mut Wizard, effects: &mut Vec<Effect>) {
    if wizard.ui.generating {
        debug!("generation already running");
        return;
    }
    let token = wizard.sequencer.issue(RequestKind::Generate);
    wizard.ui.generating = true;
    wizard.ui.generate_enabled = false;
    wizard.ui.generation_failed = false;
    wizard.ui.completion_download = None;
    wizard.ui.banners.retain(|b| b.step != Step::Generation);

    let request = GenerateRequest {
        excel_filename: wizard.state.excel_file_name.clone(),
        template_filename: wizard.state.template_file_name.clone(),
        mappings: wizard.state.mappings.clone(),
    };
    effects.push(Effect::Send(Command::Generate { token, request }));
}

fn push_banner(wizard: &mut Wizard, message: String, effects: &mut Vec<Effect>) {
    let id = wizard.allocate_banner();
    wizard.ui.banners.insert(
        0,
        Banner {
            id,
            step: wizard.state.current_step,
            message,
            fading: false,
        },
    );
    effects.push(Effect::ScheduleBannerTimeout {
        id,
        after_ms: wizard.config.banner_timeout_ms,
    });
}

fn remove_banner(wizard: &mut Wizard, id: BannerId) {
    wizard.ui.banners.retain(|b| b.id != id);
}
