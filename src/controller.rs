//! Page-lifetime UI state shared by every widget handler.
//!
//! DESIGN
//! ======
//! Handlers run one at a time on the main thread, so the controller is held
//! in an `Rc<RefCell<_>>` and borrowed only for the duration of a state
//! transition. DOM writes happen after the borrow is released.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::counter::AnimationToken;
use crate::navbar::NavbarTracker;
use crate::reveal::RevealTracker;

/// Pointer position in CSS pixels relative to the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Default)]
pub struct UiController {
    /// True while the pointer is over a project card.
    pub project_hovered: bool,
    pub navbar: NavbarTracker,
    pub reveal: RevealTracker,
    pub counter_token: AnimationToken,
}

pub type SharedController = Rc<RefCell<UiController>>;

impl UiController {
    #[must_use]
    pub fn new(initial_scroll_y: f64) -> Self {
        Self { navbar: NavbarTracker::new(initial_scroll_y), ..Self::default() }
    }

    #[must_use]
    pub fn shared(initial_scroll_y: f64) -> SharedController {
        Rc::new(RefCell::new(Self::new(initial_scroll_y)))
    }

    /// Whether the page background should follow the pointer.
    #[must_use]
    pub fn follows_pointer(&self) -> bool {
        !self.project_hovered
    }

    pub fn set_project_hovered(&mut self, hovered: bool) {
        self.project_hovered = hovered;
    }

    /// Whether the counters have been started for this page view.
    #[must_use]
    pub fn counters_started(&self) -> bool {
        self.reveal.counters_started()
    }
}
