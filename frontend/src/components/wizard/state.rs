//! Component state for the certificate wizard.
//!
//! Holds the state machine, the transport used to run its requests, and the
//! references to the two file inputs so they can be cleared on demand.

use std::rc::Rc;

use common::config::WizardConfig;
use common::model::file::FileRole;
use common::wizard::Wizard;
use yew::prelude::*;

use crate::transport::HttpTransport;

pub struct WizardComponent {
    /// The state machine; every message ends up in `common::wizard::update`.
    pub wizard: Wizard,

    /// Shared with the in-flight request futures.
    pub transport: Rc<HttpTransport>,

    /// Reference to the spreadsheet `<input type="file">`.
    pub spreadsheet_input: NodeRef,

    /// Reference to the template `<input type="file">`.
    pub template_input: NodeRef,
}

impl WizardComponent {
    pub fn new(config: WizardConfig) -> Self {
        let transport = Rc::new(HttpTransport::new(config.endpoints()));
        Self {
            wizard: Wizard::new(config),
            transport,
            spreadsheet_input: NodeRef::default(),
            template_input: NodeRef::default(),
        }
    }

    pub fn file_input(&self, role: FileRole) -> &NodeRef {
        match role {
            FileRole::Spreadsheet => &self.spreadsheet_input,
            FileRole::Template => &self.template_input,
        }
    }
}
