use common::config::WizardConfig;
use yew::prelude::*;

/// Properties for the `WizardComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct WizardProps {
    /// Endpoint base, template fields and banner timings. Read once at creation.
    pub config: WizardConfig,
}
