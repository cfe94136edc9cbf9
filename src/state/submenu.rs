// Collapsible sub-menu under a nav header
pub const SLIDE_MS: u32 = 100;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubMenuState {
    pub open: bool,
}

impl SubMenuState {
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// Chevron on the header: down while collapsed, up while expanded.
    pub fn chevron_class(self) -> &'static str {
        if self.open { "fa-angle-up" } else { "fa-angle-down" }
    }

    /// Inline style for the list; max-height animates the slide.
    pub fn list_style(self, items: usize) -> String {
        let max_height = if self.open { items as f32 * 2.5 } else { 0.0 };
        format!(
            "overflow:hidden; max-height:{max_height}em; transition:max-height {SLIDE_MS}ms ease-in-out;"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_collapsed_with_down_chevron() {
        let state = SubMenuState::default();
        assert!(!state.open);
        assert_eq!(state.chevron_class(), "fa-angle-down");
        assert!(state.list_style(4).contains("max-height:0em"));
    }

    #[test]
    fn toggle_swaps_chevron_both_ways() {
        let open = SubMenuState::default().toggled();
        assert!(open.open);
        assert_eq!(open.chevron_class(), "fa-angle-up");
        assert!(open.list_style(4).contains("max-height:10em"));
        let closed = open.toggled();
        assert_eq!(closed.chevron_class(), "fa-angle-down");
    }
}
