//! Update function for the wizard component.
//!
//! Runs the state machine and then carries out its effects:
//! - requests are spawned on the local executor and report back as messages;
//! - banner timers become `gloo_timers` timeouts;
//! - file inputs are cleared through their `NodeRef`s.

use common::model::file::SelectedFile;
use common::transport::execute;
use common::wizard::{self, Effect, WizardEvent};
use gloo_file::{futures::read_as_bytes, Blob};
use gloo_timers::future::TimeoutFuture;
use log::error;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::WizardComponent;

/// Central update function for the component. Returns `true` to re-render.
pub fn update(component: &mut WizardComponent, ctx: &Context<WizardComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Wizard(event) => {
            let effects = wizard::update(&mut component.wizard, event);
            run_effects(component, ctx, effects);
            true
        }
        Msg::FilePicked { role, file } => {
            let link = ctx.link().clone();
            spawn_local(async move {
                let name = file.name();
                let mime = file.type_();
                let blob = Blob::from(file);
                match read_as_bytes(&blob).await {
                    Ok(bytes) => link.send_message(WizardEvent::FileChosen {
                        role,
                        file: SelectedFile::new(name, Some(mime), bytes),
                    }),
                    Err(err) => error!("could not read {}: {}", name, err),
                }
            });
            false
        }
    }
}

fn run_effects(component: &WizardComponent, ctx: &Context<WizardComponent>, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::Send(command) => {
                let link = ctx.link().clone();
                let transport = component.transport.clone();
                spawn_local(async move {
                    let event = execute(transport.as_ref(), command).await;
                    link.send_message(event);
                });
            }
            Effect::ScheduleBannerTimeout { id, after_ms } => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    TimeoutFuture::new(after_ms).await;
                    link.send_message(WizardEvent::BannerTimedOut(id));
                });
            }
            Effect::ScheduleBannerRemoval { id, after_ms } => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    TimeoutFuture::new(after_ms).await;
                    link.send_message(WizardEvent::BannerFaded(id));
                });
            }
            Effect::ClearFileInput(role) => {
                if let Some(input) = component.file_input(role).cast::<HtmlInputElement>() {
                    input.set_value("");
                }
            }
        }
    }
}
