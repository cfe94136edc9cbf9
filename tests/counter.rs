use landing_widgets::model::DisplayValue;
use landing_widgets::state::counter::DEFAULT_STORAGE_KEY;
use landing_widgets::state::{CounterAction, CounterState, CounterStore};
use landing_widgets::storage::{KeyValueStore, MemoryStore};

/// Drives the counter the way the widget does: load once, then every
/// accepted click is written back under the storage key.
struct Page {
    store: MemoryStore,
    counter: CounterStore<MemoryStore>,
    state: CounterState,
}

impl Page {
    fn load(store: &MemoryStore) -> Self {
        let counter = CounterStore::new(store.clone(), DEFAULT_STORAGE_KEY);
        let state = CounterState::loaded(counter.initialize());
        Self {
            store: store.clone(),
            counter,
            state,
        }
    }

    fn click(&mut self, action: CounterAction) {
        if let Some(next) = self.state.next(action) {
            self.state = next;
            self.counter.save(next.value).unwrap();
        }
    }

    fn display(&self) -> String {
        self.state.value.to_string()
    }

    fn stored(&self) -> Option<String> {
        self.store.get(DEFAULT_STORAGE_KEY).unwrap()
    }
}

#[test]
fn fresh_page_counts_up_then_down() {
    let store = MemoryStore::new();
    let mut page = Page::load(&store);
    assert_eq!(page.display(), "01");
    assert_eq!(page.stored(), None);

    for _ in 0..3 {
        page.click(CounterAction::Increment);
    }
    assert_eq!(page.display(), "04");
    assert_eq!(page.stored().as_deref(), Some("04"));

    page.click(CounterAction::Decrement);
    assert_eq!(page.display(), "03");
    assert_eq!(page.stored().as_deref(), Some("03"));
}

#[test]
fn value_survives_a_reload() {
    let store = MemoryStore::new();
    let mut page = Page::load(&store);
    for _ in 0..11 {
        page.click(CounterAction::Increment);
    }
    assert_eq!(page.display(), "12");

    let reloaded = Page::load(&store);
    assert_eq!(reloaded.display(), "12");
    assert_eq!(Page::load(&store).display(), reloaded.display());
}

#[test]
fn decrement_at_one_leaves_storage_alone() {
    let store = MemoryStore::new();
    let mut page = Page::load(&store);
    page.click(CounterAction::Decrement);
    assert_eq!(page.display(), "01");
    assert_eq!(page.stored(), None);

    store.set(DEFAULT_STORAGE_KEY, "01").unwrap();
    let mut page = Page::load(&store);
    page.click(CounterAction::Decrement);
    assert_eq!(page.stored().as_deref(), Some("01"));
}

#[test]
fn counting_down_through_ten_keeps_padding() {
    let store = MemoryStore::new();
    store.set(DEFAULT_STORAGE_KEY, "11").unwrap();
    let mut page = Page::load(&store);
    let mut seen = Vec::new();
    for _ in 0..3 {
        page.click(CounterAction::Decrement);
        seen.push(page.display());
    }
    assert_eq!(seen, ["10", "09", "08"]);
}

#[test]
fn ceiling_holds_at_ninety_nine() {
    let store = MemoryStore::new();
    store.set(DEFAULT_STORAGE_KEY, "98").unwrap();
    let mut page = Page::load(&store);
    page.click(CounterAction::Increment);
    page.click(CounterAction::Increment);
    assert_eq!(page.display(), "99");
    assert_eq!(page.stored().as_deref(), Some("99"));
    assert_eq!(page.state.value, DisplayValue::new(99).unwrap());
}
