use yew::prelude::*;

use crate::state::scroll::{page_scroll_offset, scroll_to_top};
use crate::state::{ScrollAction, ScrollButtonState};
use crate::util::WindowListener;

#[derive(Properties, PartialEq, Clone)]
pub struct ScrollTopButtonProps {
    pub threshold: f64,
}

#[function_component(ScrollTopButton)]
pub fn scroll_top_button(props: &ScrollTopButtonProps) -> Html {
    let scroll = use_reducer({
        let threshold = props.threshold;
        move || ScrollButtonState::new(threshold)
    });

    {
        let dispatcher = scroll.dispatcher();
        use_effect_with((), move |_| {
            let listener = WindowListener::add("scroll", move |_| match page_scroll_offset() {
                Ok(offset) => dispatcher.dispatch(ScrollAction::Scrolled(offset)),
                Err(err) => log::debug!("scroll offset unavailable: {err}"),
            })
            .map_err(|err| log::warn!("scroll-to-top button disabled: {err}"))
            .ok();
            move || drop(listener)
        });
    }

    let top_cb = {
        let dispatcher = scroll.dispatcher();
        Callback::from(move |_: MouseEvent| {
            if let Err(err) = scroll_to_top() {
                log::warn!("{err}");
                return;
            }
            dispatcher.dispatch(ScrollAction::ReturnedToTop);
        })
    };

    let style = format!(
        "display:{}; position:fixed; bottom:20px; right:30px; z-index:99; cursor:pointer; padding:10px 14px; border-radius:6px;",
        scroll.display()
    );
    html! {
        <button id="myBtn" title="Go to top" onclick={top_cb} style={style}>
            <i class="fa fa-arrow-up"></i>
        </button>
    }
}
