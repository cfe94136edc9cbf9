use yew::prelude::*;

use crate::config::NavLink;
use crate::state::SubMenuState;

#[derive(Properties, PartialEq, Clone)]
pub struct SubMenuProps {
    pub label: AttrValue,
    pub links: Vec<NavLink>,
}

/// Header link that slides its list open and closed.
#[function_component(SubMenu)]
pub fn sub_menu(props: &SubMenuProps) -> Html {
    let menu = use_state(SubMenuState::default);

    let toggle_cb = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.set(menu.toggled());
        })
    };

    html! {<li class="sub-menu">
        <a href="#" onclick={toggle_cb}>
            { props.label.to_string() }
            <i class={classes!("fa", "right", menu.chevron_class())} style="margin-left:6px;"></i>
        </a>
        <ul style={menu.list_style(props.links.len())}>
            { for props.links.iter().map(|link| html! {
                <li><a href={link.href.clone()}>{ link.label.clone() }</a></li>
            }) }
        </ul>
    </li>}
}
