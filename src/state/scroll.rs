// Scroll-to-top button visibility
use std::rc::Rc;

use yew::Reducible;

use crate::errors::LandingError;
use crate::util::document;

pub const DEFAULT_THRESHOLD: f64 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollAction {
    Scrolled(i32),
    ReturnedToTop,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollButtonState {
    pub offset: i32,
    pub threshold: f64,
}

impl ScrollButtonState {
    pub fn new(threshold: f64) -> Self {
        Self {
            offset: 0,
            threshold,
        }
    }

    /// Shown only once the page is scrolled strictly past the threshold.
    pub fn visible(&self) -> bool {
        f64::from(self.offset) > self.threshold
    }

    pub fn display(&self) -> &'static str {
        if self.visible() { "block" } else { "none" }
    }
}

impl Reducible for ScrollButtonState {
    type Action = ScrollAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let offset = match action {
            ScrollAction::Scrolled(offset) => offset,
            ScrollAction::ReturnedToTop => 0,
        };
        if offset == self.offset {
            return self;
        }
        Rc::new(Self { offset, ..*self })
    }
}

/// Vertical scroll offset, whichever of body/documentElement the browser moves.
pub fn page_scroll_offset() -> Result<i32, LandingError> {
    let doc = document()?;
    let body = doc.body().map(|b| b.scroll_top()).unwrap_or(0);
    let root = doc.document_element().map(|e| e.scroll_top()).unwrap_or(0);
    Ok(body.max(root))
}

pub fn scroll_to_top() -> Result<(), LandingError> {
    let doc = document()?;
    if let Some(body) = doc.body() {
        body.set_scroll_top(0);
    }
    if let Some(root) = doc.document_element() {
        root.set_scroll_top(0);
    }
    Ok(())
}
