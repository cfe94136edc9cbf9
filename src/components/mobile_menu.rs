use yew::prelude::*;

use super::nav::DesktopNav;
use crate::config::NavEntry;
use crate::state::{MobileMenuAction, MobileMenuState};
use crate::util::{document, viewport_width, WindowListener};

#[derive(Properties, PartialEq, Clone)]
pub struct MobileMenuProps {
    pub entries: Vec<NavEntry>,
    /// Selector of the element that receives the generated menu.
    pub container: AttrValue,
    pub screen_width: u32,
    pub close_text: AttrValue,
}

fn container_host(selector: &str) -> Option<web_sys::Element> {
    match document().map(|doc| doc.query_selector(selector)) {
        Ok(Ok(Some(host))) => Some(host),
        Ok(Ok(None)) => {
            log::warn!("mobile menu container `{selector}` not found, rendering in place");
            None
        }
        Ok(Err(_)) => {
            log::warn!("invalid mobile menu container selector `{selector}`");
            None
        }
        Err(err) => {
            log::warn!("{err}");
            None
        }
    }
}

/// Desktop navigation above the breakpoint; a reveal button and generated
/// list inside the configured container below it.
#[function_component(MobileMenu)]
pub fn mobile_menu(props: &MobileMenuProps) -> Html {
    let menu = use_reducer({
        let breakpoint = props.screen_width;
        move || {
            let width = viewport_width().unwrap_or(u32::MAX);
            MobileMenuState::new(width, breakpoint)
        }
    });
    let host = use_memo(props.container.clone(), |selector| container_host(selector));

    {
        let dispatcher = menu.dispatcher();
        use_effect_with((), move |_| {
            let listener = WindowListener::add("resize", move |_| {
                if let Ok(width) = viewport_width() {
                    dispatcher.dispatch(MobileMenuAction::Resized(width));
                }
            })
            .map_err(|err| log::warn!("mobile menu will not follow resizes: {err}"))
            .ok();
            move || drop(listener)
        });
    }

    if !menu.is_mobile() {
        return html! { <DesktopNav entries={props.entries.clone()} /> };
    }

    let reveal_cb = {
        let dispatcher = menu.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatcher.dispatch(MobileMenuAction::ToggleReveal);
        })
    };
    let reveal_label = if menu.open {
        html! { { props.close_text.to_string() } }
    } else {
        html! { <><span class="bar"></span><span class="bar"></span><span class="bar"></span></> }
    };

    let items = props.entries.iter().enumerate().map(|(index, entry)| match entry {
        NavEntry::Link(link) => html! {
            <li><a href={link.href.clone()}>{ link.label.clone() }</a></li>
        },
        NavEntry::Group { label, children } => {
            let expanded = menu.section_open(index);
            let expand_cb = {
                let dispatcher = menu.dispatcher();
                Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    dispatcher.dispatch(MobileMenuAction::ToggleSection(index));
                })
            };
            html! {<li>
                <a href="#" onclick={expand_cb.clone()}>{ label.clone() }</a>
                <a href="#" class={classes!("mean-expand", expanded.then_some("mean-clicked"))} onclick={expand_cb}>
                    { if expanded { "-" } else { "+" } }
                </a>
                if expanded {
                    <ul>
                        { for children.iter().map(|link| html! {
                            <li><a href={link.href.clone()}>{ link.label.clone() }</a></li>
                        }) }
                    </ul>
                }
            </li>}
        }
    });

    let generated = html! {<div class="mean-bar">
        <a href="#nav" class={classes!("meanmenu-reveal", menu.open.then_some("meanclose"))} onclick={reveal_cb}>
            { reveal_label }
        </a>
        if menu.open {
            <nav class="mean-nav">
                <ul>{ for items }</ul>
            </nav>
        }
    </div>};

    match (*host).clone() {
        Some(host) => yew::create_portal(generated, host),
        None => generated,
    }
}
