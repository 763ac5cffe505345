//! Certificate wizard: root module wiring the Yew `Component` implementation
//! to the pure state machine in `common::wizard`.
//!
//! Responsibilities
//! - Re-export the component, its message and its properties.
//! - Delegate every message to `update::update` and rendering to `view::view`.
//!
//! All wizard decisions are taken by `common::wizard::update`; this module only
//! renders the resulting state and carries out the effects it returns.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::WizardProps;
pub use state::WizardComponent;

impl Component for WizardComponent {
    type Message = Msg;
    type Properties = WizardProps;

    fn create(ctx: &Context<Self>) -> Self {
        WizardComponent::new(ctx.props().config.clone())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
