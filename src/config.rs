//! Page configuration.
//!
//! Read from an inline `<script type="application/json" id="landing-config">`
//! block; every field falls back to the defaults below.

use serde::Deserialize;

use crate::errors::LandingError;
use crate::state::counter::DEFAULT_STORAGE_KEY;
use crate::state::mobile_menu::DEFAULT_SCREEN_WIDTH;
use crate::state::scroll::DEFAULT_THRESHOLD;
use crate::util::document;

pub const CONFIG_ELEMENT_ID: &str = "landing-config";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum NavEntry {
    Group { label: String, children: Vec<NavLink> },
    Link(NavLink),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LandingConfig {
    pub storage_key: String,
    pub scroll_threshold: f64,
    pub mean_menu_container: String,
    pub mean_screen_width: u32,
    pub mean_reveal_close_text: String,
    pub animations: bool,
    pub log_level: String,
    pub navigation: Vec<NavEntry>,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            scroll_threshold: DEFAULT_THRESHOLD,
            mean_menu_container: ".mobile-menu".to_string(),
            mean_screen_width: DEFAULT_SCREEN_WIDTH,
            mean_reveal_close_text: "X".to_string(),
            animations: true,
            log_level: "info".to_string(),
            navigation: default_navigation(),
        }
    }
}

fn link(label: &str, href: &str) -> NavLink {
    NavLink {
        label: label.to_string(),
        href: href.to_string(),
    }
}

fn default_navigation() -> Vec<NavEntry> {
    vec![
        NavEntry::Link(link("Home", "/")),
        NavEntry::Link(link("About Us", "/about-us/")),
        NavEntry::Link(link("News & Events", "/newsevents/")),
        NavEntry::Group {
            label: "Blog".to_string(),
            children: vec![
                link("Committee", "/commite-team"),
                link("Gallery", "/blog/gallery"),
                link("Video Gallery", "/blog/vgallery"),
                link("Privacy Policy", "/privacy-policy"),
                link("Terms & Conditions", "/terms-and-conditions"),
            ],
        },
        NavEntry::Link(link("Points Table", "/points/table.view")),
        NavEntry::Link(link("Contact", "/contact/")),
    ]
}

impl LandingConfig {
    pub fn from_json(raw: &str) -> Result<Self, LandingError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Config from the page, or defaults when the page carries none.
    pub fn load() -> Result<Self, LandingError> {
        let doc = document()?;
        match doc
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw),
            _ => Ok(Self::default()),
        }
    }
}
