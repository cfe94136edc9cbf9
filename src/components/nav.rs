use yew::prelude::*;

use super::sub_menu::SubMenu;
use crate::config::NavEntry;

#[derive(Properties, PartialEq, Clone)]
pub struct DesktopNavProps {
    pub entries: Vec<NavEntry>,
}

#[function_component(DesktopNav)]
pub fn desktop_nav(props: &DesktopNavProps) -> Html {
    html! {<nav class="mean-menulist">
        <ul style="display:flex; gap:18px; list-style:none; margin:0; padding:0;">
            { for props.entries.iter().map(|entry| match entry {
                NavEntry::Link(link) => html! {
                    <li><a href={link.href.clone()}>{ link.label.clone() }</a></li>
                },
                NavEntry::Group { label, children } => html! {
                    <SubMenu label={label.clone()} links={children.clone()} />
                },
            }) }
        </ul>
    </nav>}
}
