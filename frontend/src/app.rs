use crate::components::preview_page::PreviewPageComponent;
use crate::components::wizard::WizardComponent;
use common::config::WizardConfig;
use yew::{html, Component, Context, Html, Properties};

const PREVIEW_PATH: &str = "/preview";

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: WizardConfig,
}

/// Picks the page to mount from the location path.
pub struct App;

impl Component for App {
    type Message = ();
    type Properties = AppProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let config = ctx.props().config.clone();
        let path = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();

        if path.starts_with(PREVIEW_PATH) {
            html! { <PreviewPageComponent {config} /> }
        } else {
            html! { <WizardComponent {config} /> }
        }
    }
}
