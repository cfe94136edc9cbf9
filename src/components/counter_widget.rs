use std::rc::Rc;

use yew::prelude::*;

use crate::state::{CounterAction, CounterState, CounterStore};
use crate::storage::KeyValueStore;

#[derive(Properties, Clone)]
pub struct CounterWidgetProps {
    pub store: Rc<dyn KeyValueStore>,
    pub storage_key: AttrValue,
}

impl PartialEq for CounterWidgetProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store) && self.storage_key == other.storage_key
    }
}

#[function_component(CounterWidget)]
pub fn counter_widget(props: &CounterWidgetProps) -> Html {
    let counter_store = {
        let store = props.store.clone();
        use_memo(props.storage_key.clone(), move |key| {
            CounterStore::new(store, key.to_string())
        })
    };
    let counter = {
        let counter_store = counter_store.clone();
        use_reducer(move || CounterState::loaded(counter_store.initialize()))
    };

    // Persist only accepted clicks; revision 0 is the loaded value.
    {
        let counter_store = counter_store.clone();
        let state = *counter;
        use_effect_with(state.revision, move |revision| {
            if *revision > 0 {
                if let Err(err) = counter_store.save(state.value) {
                    log::warn!("{err}");
                }
            }
            || ()
        });
    }

    let plus_cb = {
        let counter = counter.dispatcher();
        Callback::from(move |_: MouseEvent| counter.dispatch(CounterAction::Increment))
    };
    let minus_cb = {
        let counter = counter.dispatcher();
        Callback::from(move |_: MouseEvent| counter.dispatch(CounterAction::Decrement))
    };

    html! {<div class="counter" style="display:inline-flex; align-items:center; gap:10px;">
        <button class="minus" onclick={minus_cb} aria-label="Decrease">{"-"}</button>
        <span class="num" style="min-width:2ch; text-align:center; font-weight:600;">{ counter.value.to_string() }</span>
        <button class="plus" onclick={plus_cb} aria-label="Increase">{"+"}</button>
    </div>}
}
