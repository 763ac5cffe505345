use crate::app::{App, AppProps};

mod app;
mod components;
mod config;
mod logger;
mod transport;

fn main() {
    let config = config::load();
    logger::init(config.log_level_filter());
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
