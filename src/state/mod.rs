pub mod counter;
pub mod mobile_menu;
pub mod scroll;
pub mod submenu;

pub use counter::{CounterAction, CounterState, CounterStore};
pub use mobile_menu::{MobileMenuAction, MobileMenuState};
pub use scroll::{ScrollAction, ScrollButtonState};
pub use submenu::SubMenuState;
