pub mod app;
pub mod counter_widget;
pub mod mobile_menu;
pub mod nav;
pub mod scroll_top_button;
pub mod sub_menu;

pub use app::{App, AppProps};
