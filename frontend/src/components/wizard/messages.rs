use common::model::file::FileRole;
use common::wizard::WizardEvent;

pub enum Msg {
    /// Forwarded to the state machine as is.
    Wizard(WizardEvent),
    /// A file was picked but not read yet.
    FilePicked { role: FileRole, file: web_sys::File },
}

impl From<WizardEvent> for Msg {
    fn from(event: WizardEvent) -> Self {
        Msg::Wizard(event)
    }
}
