use std::rc::Rc;

use yew::Reducible;

use crate::errors::{LandingError, ParseValueError};
use crate::model::DisplayValue;
use crate::storage::KeyValueStore;

pub const DEFAULT_STORAGE_KEY: &str = "num";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterAction {
    Increment,
    Decrement,
}

/// Counter state of record. The rendered text is never read back.
///
/// `revision` counts accepted clicks so the component persists only after a
/// real change, never on load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CounterState {
    pub value: DisplayValue,
    pub revision: u32,
}

impl CounterState {
    pub fn loaded(value: DisplayValue) -> Self {
        Self { value, revision: 0 }
    }

    /// The state after `action`, or `None` when the click changes nothing.
    pub fn next(&self, action: CounterAction) -> Option<Self> {
        let value = match action {
            CounterAction::Increment => self.value.incremented(),
            CounterAction::Decrement => self.value.decremented(),
        };
        (value != self.value).then(|| Self {
            value,
            revision: self.revision.wrapping_add(1),
        })
    }
}

impl Reducible for CounterState {
    type Action = CounterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.next(action) {
            Some(next) => Rc::new(next),
            None => self,
        }
    }
}

/// Reads and writes the counter under a single storage key.
pub struct CounterStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> CounterStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Stored value, if any. Numeric values outside the range are clamped;
    /// anything else is reported as corrupt.
    pub fn load(&self) -> Result<Option<DisplayValue>, LandingError> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        match raw.parse::<DisplayValue>() {
            Ok(value) => Ok(Some(value)),
            Err(ParseValueError::OutOfRange(n)) => {
                let value = DisplayValue::clamped(n);
                log::warn!("stored counter {n} out of range, using {value}");
                Ok(Some(value))
            }
            Err(ParseValueError::NotNumeric(_)) => Err(LandingError::CorruptValue {
                key: self.key.clone(),
                value: raw,
            }),
        }
    }

    /// Value to show on page load; missing or unreadable storage gives "01".
    pub fn initialize(&self) -> DisplayValue {
        match self.load() {
            Ok(Some(value)) => value,
            Ok(None) => DisplayValue::default(),
            Err(err) => {
                log::warn!("{err}; starting the counter at {}", DisplayValue::default());
                DisplayValue::default()
            }
        }
    }

    pub fn save(&self, value: DisplayValue) -> Result<(), LandingError> {
        self.store.set(&self.key, &value.to_string())
    }
}
