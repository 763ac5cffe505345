//! Wizard state.
//!
//! [`WizardState`] is the data the wizard collects. [`WizardUi`] is what the
//! page shows on top of it (labels, enabled flags, links, banners). Both live
//! in a [`Wizard`] together with the bookkeeping that must survive a reset.

use crate::config::WizardConfig;
use crate::endpoints::Endpoints;
use crate::model::file::{FileRole, SelectedFile};
use crate::model::mapping::Mappings;

use super::banner::{Banner, BannerId};
use super::sequence::RequestSequencer;
use super::step::Step;

/// Data gathered while walking through the wizard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WizardState {
    pub excel_file: Option<SelectedFile>,
    pub template_file: Option<SelectedFile>,
    /// Server-assigned name of the uploaded spreadsheet; empty until uploaded.
    pub excel_file_name: String,
    /// Server-assigned name of the uploaded template; empty until uploaded.
    pub template_file_name: String,
    pub excel_headers: Vec<String>,
    pub row_count: usize,
    pub current_step: Step,
    pub mappings: Mappings,
    pub preview_file: Option<String>,
    /// Data row used for the preview, 0-based.
    pub preview_row: usize,
}

impl WizardState {
    /// Both uploads succeeded, so the intake step may be left.
    pub fn files_ready(&self) -> bool {
        !self.excel_file_name.is_empty() && !self.template_file_name.is_empty()
    }

    pub(super) fn set_file(&mut self, role: FileRole, file: Option<SelectedFile>) {
        match role {
            FileRole::Spreadsheet => self.excel_file = file,
            FileRole::Template => self.template_file = file,
        }
    }

    pub(super) fn set_file_name(&mut self, role: FileRole, name: String) {
        match role {
            FileRole::Spreadsheet => self.excel_file_name = name,
            FileRole::Template => self.template_file_name = name,
        }
    }
}

/// How one upload control is displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadSlot {
    /// Name of the chosen file, shown as soon as it is picked.
    pub label: Option<String>,
    pub filled: bool,
}

/// Everything the page renders that is not plain wizard data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardUi {
    pub spreadsheet: UploadSlot,
    pub template: UploadSlot,
    pub next_enabled: bool,
    pub preview_loading: bool,
    /// Link to the latest successful preview; `None` hides the download button.
    pub preview_download: Option<String>,
    pub generating: bool,
    pub generate_enabled: bool,
    pub generation_failed: bool,
    /// Link to the certificate archive; `None` hides the completion panel.
    pub completion_download: Option<String>,
    /// Newest first.
    pub banners: Vec<Banner>,
}

impl Default for WizardUi {
    fn default() -> Self {
        Self {
            spreadsheet: UploadSlot::default(),
            template: UploadSlot::default(),
            next_enabled: false,
            preview_loading: false,
            preview_download: None,
            generating: false,
            generate_enabled: true,
            generation_failed: false,
            completion_download: None,
            banners: Vec::new(),
        }
    }
}

impl WizardUi {
    pub fn slot(&self, role: FileRole) -> &UploadSlot {
        match role {
            FileRole::Spreadsheet => &self.spreadsheet,
            FileRole::Template => &self.template,
        }
    }

    pub(super) fn slot_mut(&mut self, role: FileRole) -> &mut UploadSlot {
        match role {
            FileRole::Spreadsheet => &mut self.spreadsheet,
            FileRole::Template => &mut self.template,
        }
    }

    /// Status line under the preview controls.
    pub fn preview_status(&self) -> &'static str {
        if self.preview_loading {
            "Generating preview..."
        } else if self.preview_download.is_some() {
            "Preview generated! Click the download button to view."
        } else {
            "Click \"Generate Preview\" to see how your certificate will look."
        }
    }

    /// Banners attached to `step`, newest first.
    pub fn banners_for(&self, step: Step) -> impl Iterator<Item = &Banner> {
        self.banners.iter().filter(move |b| b.step == step)
    }
}

/// One wizard instance: its state, its display, and its request bookkeeping.
#[derive(Debug, Clone)]
pub struct Wizard {
    pub state: WizardState,
    pub ui: WizardUi,
    pub(super) config: WizardConfig,
    pub(super) endpoints: Endpoints,
    pub(super) sequencer: RequestSequencer,
    pub(super) next_banner: u64,
}

impl Wizard {
    pub fn new(config: WizardConfig) -> Self {
        let endpoints = config.endpoints();
        Self {
            state: WizardState::default(),
            ui: WizardUi::default(),
            config,
            endpoints,
            sequencer: RequestSequencer::default(),
            next_banner: 0,
        }
    }

    pub fn current_step(&self) -> Step {
        self.state.current_step
    }

    /// Drops everything collected so far. Sequence and banner counters keep
    /// going so that late responses and timers from before the reset are
    /// recognised as stale.
    pub(super) fn reset(&mut self) {
        self.state = WizardState::default();
        self.ui = WizardUi::default();
    }

    pub(super) fn allocate_banner(&mut self) -> BannerId {
        self.next_banner += 1;
        BannerId(self.next_banner)
    }
}
