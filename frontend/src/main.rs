mod config;
mod download;
mod pages;
mod reveal;

use std::rc::Rc;

use crate::config::SiteConfig;
use crate::pages::landing::{Landing, LandingProps};

fn main() {
    let (config, problems) = SiteConfig::load();
    wasm_logger::init(wasm_logger::Config::new(config.log_level));
    for problem in problems {
        log::warn!("Ignoring build override: {}", problem);
    }
    log::info!(
        "Hero download mode {}, reveal threshold {}",
        config.download_mode,
        config.reveal.threshold.value()
    );

    yew::Renderer::<Landing>::with_props(LandingProps {
        config: Rc::new(config),
    })
    .render();
}
