use std::rc::Rc;

use yew::prelude::*;

use crate::config::{NAV_SOLID_THRESHOLD, PARALLAX_FACTOR};

/// Background style of the fixed navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMode {
    Transparent,
    Solid,
}

impl NavMode {
    pub fn for_offset(scroll_offset: f64) -> Self {
        if scroll_offset > NAV_SOLID_THRESHOLD {
            NavMode::Solid
        } else {
            NavMode::Transparent
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            NavMode::Transparent => "top-nav--transparent",
            NavMode::Solid => "top-nav--solid",
        }
    }
}

/// Vertical translation (px) of the hero background layer.
pub fn parallax_offset(scroll_offset: f64) -> f64 {
    scroll_offset * PARALLAX_FACTOR
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewAction {
    Scrolled(f64),
    ToggleMenu,
    CloseMenu,
}

/// Ephemeral state of the page view. Owned by the page through `use_reducer`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    scroll_offset: f64,
    menu_open: bool,
}

impl ViewState {
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn nav_mode(&self) -> NavMode {
        NavMode::for_offset(self.scroll_offset())
    }

    pub fn parallax_offset(&self) -> f64 {
        parallax_offset(self.scroll_offset())
    }

    pub fn record_scroll(&mut self, offset: f64) {
        // Overscroll bounce can report negative offsets
        self.scroll_offset = if offset.is_finite() { offset.max(0.0) } else { 0.0 };
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn apply(&mut self, action: ViewAction) {
        match action {
            ViewAction::Scrolled(offset) => self.record_scroll(offset),
            ViewAction::ToggleMenu => self.toggle_menu(),
            ViewAction::CloseMenu => self.close_menu(),
        }
    }
}

impl Reducible for ViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        // Returning the same Rc skips a re-render
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallax_is_half_the_scroll_offset() {
        for s in [0.0, 1.0, 75.5, 100.0, 150.0, 4321.0] {
            assert_eq!(parallax_offset(s), s * 0.5);
        }
    }

    #[test]
    fn nav_turns_solid_strictly_above_threshold() {
        assert_eq!(NavMode::for_offset(0.0), NavMode::Transparent);
        assert_eq!(NavMode::for_offset(100.0), NavMode::Transparent);
        assert_eq!(NavMode::for_offset(100.5), NavMode::Solid);
        assert_eq!(NavMode::for_offset(101.0), NavMode::Solid);
    }

    #[test]
    fn initial_state_is_top_of_page_with_menu_closed() {
        let state = ViewState::default();
        assert_eq!(state.scroll_offset(), 0.0);
        assert!(!state.menu_open());
        assert_eq!(state.nav_mode(), NavMode::Transparent);
    }

    #[test]
    fn toggle_flips_menu_both_ways() {
        let mut state = ViewState::default();
        state.apply(ViewAction::ToggleMenu);
        assert!(state.menu_open());
        state.apply(ViewAction::ToggleMenu);
        assert!(!state.menu_open());
    }

    #[test]
    fn close_is_idempotent() {
        let mut state = ViewState::default();
        state.apply(ViewAction::CloseMenu);
        assert!(!state.menu_open());
        state.apply(ViewAction::ToggleMenu);
        state.apply(ViewAction::CloseMenu);
        state.apply(ViewAction::CloseMenu);
        assert!(!state.menu_open());
    }

    #[test]
    fn negative_and_non_finite_offsets_clamp_to_zero() {
        let mut state = ViewState::default();
        state.apply(ViewAction::Scrolled(-42.0));
        assert_eq!(state.scroll_offset(), 0.0);
        state.apply(ViewAction::Scrolled(f64::NAN));
        assert_eq!(state.scroll_offset(), 0.0);
    }

    #[test]
    fn reduce_keeps_same_rc_when_nothing_changes() {
        let state = Rc::new(ViewState::default());
        let next = state.clone().reduce(ViewAction::CloseMenu);
        assert!(Rc::ptr_eq(&state, &next));

        let scrolled = next.reduce(ViewAction::Scrolled(150.0));
        assert_eq!(scrolled.nav_mode(), NavMode::Solid);
        assert_eq!(scrolled.parallax_offset(), 75.0);
    }

    #[test]
    fn nav_mode_classes_match_nav_stylesheet() {
        assert_eq!(NavMode::Solid.class(), "top-nav--solid");
        assert_eq!(NavMode::Transparent.class(), "top-nav--transparent");
        assert_eq!(NavMode::for_offset(150.0).class(), "top-nav--solid");
        assert_eq!(NavMode::for_offset(100.0).class(), "top-nav--transparent");
    }
}
