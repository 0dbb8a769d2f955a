use std::fmt;
use std::str::FromStr;

use log::{debug, error};
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};

use crate::error::SiteError;
use crate::view_state::ViewAction;

/// Anchors the page renders with an `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Intro,
    About,
    Work,
}

impl SectionId {
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Intro => "intro",
            SectionId::About => "about",
            SectionId::Work => "work",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "intro" => Ok(SectionId::Intro),
            "about" => Ok(SectionId::About),
            "work" => Ok(SectionId::Work),
            other => Err(UnknownSection(other.to_string())),
        }
    }
}

/// Whatever actually moves the viewport. Scrolling is fire-and-forget:
/// the return value only says whether a target was found.
pub trait ScrollSurface {
    fn scroll_to_anchor(&self, anchor: &str) -> bool;
}

/// Smooth-scrolls elements of the live document.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserSurface;

impl BrowserSurface {
    fn find(anchor: &str) -> Result<Option<Element>, SiteError> {
        let window = web_sys::window().ok_or(SiteError::NoWindow)?;
        let document = window.document().ok_or(SiteError::NoDocument)?;
        Ok(document.get_element_by_id(anchor))
    }
}

impl ScrollSurface for BrowserSurface {
    fn scroll_to_anchor(&self, anchor: &str) -> bool {
        match Self::find(anchor) {
            Ok(Some(element)) => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                element.scroll_into_view_with_scroll_into_view_options(&options);
                true
            }
            Ok(None) => false,
            Err(e) => {
                error!("Cannot scroll to #{}: {}", anchor, e);
                false
            }
        }
    }
}

/// Scrolls to `anchor` if it exists and returns the action that closes the
/// mobile menu, which applies whether or not the target was found.
pub fn navigate<S: ScrollSurface + ?Sized>(surface: &S, anchor: &str) -> ViewAction {
    if surface.scroll_to_anchor(anchor) {
        debug!("Scrolling to #{}", anchor);
    } else {
        match anchor.parse::<SectionId>() {
            Ok(id) => debug!("Section #{} is not rendered", id),
            Err(UnknownSection(name)) => debug!("No section named #{}", name),
        }
    }
    ViewAction::CloseMenu
}

/// Section the hero's scroll indicator leads to.
pub const SCROLL_HINT_TARGET: SectionId = SectionId::Intro;

/// Runs `navigate` and feeds the resulting action straight to `dispatch`.
pub fn navigate_and_close<S, D>(surface: &S, dispatch: D, anchor: &str)
where
    S: ScrollSurface + ?Sized,
    D: Fn(ViewAction),
{
    dispatch(navigate(surface, anchor));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_state::{NavMode, ViewState};
    use std::cell::RefCell;

    /// Records scroll commands for anchors that exist on a fake page.
    struct FakeSurface {
        known: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
    }

    impl FakeSurface {
        fn with_sections() -> Self {
            FakeSurface {
                known: vec!["intro", "about", "work"],
                scrolled: RefCell::new(Vec::new()),
            }
        }
    }

    impl ScrollSurface for FakeSurface {
        fn scroll_to_anchor(&self, anchor: &str) -> bool {
            if self.known.contains(&anchor) {
                self.scrolled.borrow_mut().push(anchor.to_string());
                true
            } else {
                false
            }
        }
    }

    #[test]
    fn section_ids_round_trip_through_anchor_names() {
        for id in [SectionId::Intro, SectionId::About, SectionId::Work] {
            assert_eq!(id.to_string().parse::<SectionId>(), Ok(id));
        }
        assert_eq!(
            "contact".parse::<SectionId>(),
            Err(UnknownSection("contact".to_string()))
        );
    }

    #[test]
    fn known_anchor_scrolls_and_closes_menu() {
        let surface = FakeSurface::with_sections();
        for menu_was_open in [false, true] {
            let mut state = ViewState::default();
            if menu_was_open {
                state.toggle_menu();
            }
            state.apply(navigate(&surface, "about"));
            assert!(!state.menu_open());
        }
        assert_eq!(*surface.scrolled.borrow(), vec!["about", "about"]);
    }

    #[test]
    fn unknown_anchor_is_silent_but_still_closes_menu() {
        let surface = FakeSurface::with_sections();
        let mut state = ViewState::default();
        state.toggle_menu();

        state.apply(navigate(&surface, "contact"));

        assert!(!state.menu_open());
        assert!(surface.scrolled.borrow().is_empty());
    }

    #[test]
    fn scroll_open_menu_then_navigate_to_work() {
        let surface = FakeSurface::with_sections();
        let mut state = ViewState::default();
        assert_eq!(state.scroll_offset(), 0.0);
        assert!(!state.menu_open());

        state.apply(ViewAction::Scrolled(150.0));
        assert_eq!(state.nav_mode(), NavMode::Solid);
        assert_eq!(state.parallax_offset(), 75.0);

        state.apply(ViewAction::ToggleMenu);
        assert!(state.menu_open());

        state.apply(navigate(&surface, &SectionId::Work.to_string()));
        assert!(!state.menu_open());
        assert_eq!(*surface.scrolled.borrow(), vec!["work"]);
    }

    #[test]
    fn navigate_and_close_dispatches_close_menu() {
        let surface = FakeSurface::with_sections();
        let dispatched = RefCell::new(Vec::new());

        navigate_and_close(&surface, |action| dispatched.borrow_mut().push(action), "about");

        assert_eq!(*dispatched.borrow(), vec![ViewAction::CloseMenu]);
        assert_eq!(*surface.scrolled.borrow(), vec!["about"]);
    }

    #[test]
    fn scroll_hint_leads_to_intro_and_closes_open_menu() {
        assert_eq!(SCROLL_HINT_TARGET, SectionId::Intro);

        let surface = FakeSurface::with_sections();
        let state = RefCell::new(ViewState::default());
        state.borrow_mut().toggle_menu();

        navigate_and_close(
            &surface,
            |action| state.borrow_mut().apply(action),
            SCROLL_HINT_TARGET.anchor(),
        );

        assert!(!state.borrow().menu_open());
        assert_eq!(*surface.scrolled.borrow(), vec!["intro"]);
    }

    #[test]
    fn nav_link_targets_scroll_through_the_page_wiring() {
        let content = crate::content::SiteContent::load().unwrap();
        let surface = FakeSurface::with_sections();
        let state = RefCell::new(ViewState::default());

        for link in &content.nav {
            state.borrow_mut().toggle_menu();
            navigate_and_close(&surface, |action| state.borrow_mut().apply(action), &link.target);
            assert!(!state.borrow().menu_open());
        }

        assert_eq!(*surface.scrolled.borrow(), vec!["about", "work"]);
    }
}
