use std::collections::BTreeSet;
use std::rc::Rc;

use yew::Reducible;

pub const DEFAULT_SCREEN_WIDTH: u32 = 480;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MobileMenuAction {
    Resized(u32),
    ToggleReveal,
    ToggleSection(usize),
}

/// Generated mobile menu: which layout applies, whether it is revealed, and
/// which nested sections are expanded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MobileMenuState {
    pub width: u32,
    pub breakpoint: u32,
    pub open: bool,
    pub expanded: BTreeSet<usize>,
}

impl MobileMenuState {
    pub fn new(width: u32, breakpoint: u32) -> Self {
        Self {
            width,
            breakpoint,
            open: false,
            expanded: BTreeSet::new(),
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.width <= self.breakpoint
    }

    pub fn section_open(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }
}

impl Reducible for MobileMenuState {
    type Action = MobileMenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use MobileMenuAction::*;
        let mut new = (*self).clone();
        match action {
            Resized(width) => {
                if width == new.width {
                    return self;
                }
                new.width = width;
                if !new.is_mobile() {
                    new.open = false;
                    new.expanded.clear();
                }
            }
            ToggleReveal => {
                if !new.is_mobile() {
                    return self;
                }
                new.open = !new.open;
                if !new.open {
                    new.expanded.clear();
                }
            }
            ToggleSection(index) => {
                if !new.open {
                    return self;
                }
                if !new.expanded.remove(&index) {
                    new.expanded.insert(index);
                }
            }
        }
        Rc::new(new)
    }
}
