//! Interactive widgets for the league landing page, rendered with Yew.

pub mod animations;
pub mod components;
pub mod config;
pub mod errors;
pub mod logging;
pub mod model;
pub mod state;
pub mod storage;
pub mod util;

use std::rc::Rc;

use components::{App, AppProps};
use config::LandingConfig;

/// Element the app mounts into; falls back to `<body>`.
pub const ROOT_ELEMENT_ID: &str = "landing-root";

pub fn run() {
    let loaded = LandingConfig::load();
    let level = loaded.as_ref().map(|c| c.log_level.as_str()).unwrap_or("info");
    logging::init(level);
    let config = loaded.unwrap_or_else(|err| {
        log::warn!("{err}; using default page config");
        LandingConfig::default()
    });

    let props = AppProps {
        config: Rc::new(config),
    };
    match util::document().map(|doc| doc.get_element_by_id(ROOT_ELEMENT_ID)) {
        Ok(Some(root)) => {
            yew::Renderer::<App>::with_root_and_props(root, props).render();
        }
        _ => {
            yew::Renderer::<App>::with_props(props).render();
        }
    }
    log::info!("landing widgets mounted");
}
