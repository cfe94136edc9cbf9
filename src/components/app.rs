use std::rc::Rc;

use super::{
    counter_widget::CounterWidget, mobile_menu::MobileMenu, scroll_top_button::ScrollTopButton,
};
use crate::animations::AnimationHandle;
use crate::config::LandingConfig;
use crate::storage::{browser_or_memory, KeyValueStore};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: Rc<LandingConfig>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let config = props.config.clone();
    let store = use_memo((), |_| browser_or_memory());

    // Animation library lives exactly as long as the root component
    {
        let enabled = config.animations;
        use_effect_with(enabled, move |enabled| {
            let handle = if *enabled {
                AnimationHandle::init()
                    .map_err(|err| log::warn!("scroll animations disabled: {err}"))
                    .ok()
            } else {
                None
            };
            move || {
                if let Some(handle) = handle {
                    handle.teardown();
                }
            }
        });
    }

    let store: Rc<dyn KeyValueStore> = (*store).clone();

    html! {<>
        <header class="header-area" style="display:flex; align-items:center; justify-content:space-between; gap:12px;">
            <MobileMenu
                entries={config.navigation.clone()}
                container={config.mean_menu_container.clone()}
                screen_width={config.mean_screen_width}
                close_text={config.mean_reveal_close_text.clone()}
            />
        </header>
        <main>
            <CounterWidget {store} storage_key={config.storage_key.clone()} />
        </main>
        <ScrollTopButton threshold={config.scroll_threshold} />
    </>}
}
