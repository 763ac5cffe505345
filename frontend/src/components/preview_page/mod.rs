//! Standalone preview page mounted at `/preview?file=<id>`.

use common::config::WizardConfig;
use common::preview_page::{PreviewPage, INLINE_FAILED_WARNING, MISSING_FILE_MESSAGE};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PreviewPageProps {
    pub config: WizardConfig,
}

pub enum Msg {
    /// The browser could not render the document in the frame.
    InlineFailed,
}

pub struct PreviewPageComponent {
    page: PreviewPage,
    inline_failed: bool,
}

impl Component for PreviewPageComponent {
    type Message = Msg;
    type Properties = PreviewPageProps;

    fn create(ctx: &Context<Self>) -> Self {
        let query = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let page = PreviewPage::resolve(&query, &ctx.props().config.endpoints());
        match &page {
            PreviewPage::Ready { file, .. } => log::info!("showing preview {}", file),
            PreviewPage::Missing => log::warn!("preview page opened without a file"),
        }
        Self {
            page,
            inline_failed: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::InlineFailed => {
                log::warn!("inline preview failed");
                let changed = !self.inline_failed;
                self.inline_failed = true;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let body = match &self.page {
            PreviewPage::Missing => html! {
                <div class="alert alert-danger" role="alert">{ MISSING_FILE_MESSAGE }</div>
            },
            PreviewPage::Ready { url, .. } => {
                let on_error = ctx.link().callback(|_: Event| Msg::InlineFailed);
                html! {
                    <>
                        <div class="preview-actions mb-3">
                            <a class="btn btn-primary" href={url.clone()} download="">{"Download preview"}</a>
                        </div>
                        if self.inline_failed {
                            <div class="alert alert-warning" role="alert">{ INLINE_FAILED_WARNING }</div>
                        }
                        <iframe
                            class="preview-frame"
                            src={url.clone()}
                            style="width:100%;height:80vh;border:none;background:#fff;"
                            onerror={on_error}
                        />
                    </>
                }
            }
        };

        html! {
            <div class="container preview-page">
                <h1>{"Certificate Preview"}</h1>
                { body }
            </div>
        }
    }
}
