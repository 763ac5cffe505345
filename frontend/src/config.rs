//! Loads the wizard configuration embedded in the page.
//!
//! The host page may carry
//! `<script id="wizard-config" type="application/json">{...}</script>`;
//! without it the defaults apply.

use common::config::WizardConfig;

const CONFIG_ELEMENT_ID: &str = "wizard-config";

pub fn load() -> WizardConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|e| e.text_content());

    match raw {
        Some(text) if !text.trim().is_empty() => match WizardConfig::from_json(&text) {
            Ok(config) => config,
            Err(err) => {
                // The logger is configured from this value, so it is not up yet.
                gloo_console::warn!(format!(
                    "ignoring malformed #{}: {}",
                    CONFIG_ELEMENT_ID, err
                ));
                WizardConfig::default()
            }
        },
        _ => WizardConfig::default(),
    }
}
