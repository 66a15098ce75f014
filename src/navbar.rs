//! Navbar auto-hide: hide the fixed navbar while scrolling down.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavbarTracker {
    last_scroll_y: f64,
}

impl NavbarTracker {
    #[must_use]
    pub fn new(initial_scroll_y: f64) -> Self {
        Self { last_scroll_y: initial_scroll_y }
    }

    #[cfg(test)]
    pub(crate) fn last_scroll_y(&self) -> f64 {
        self.last_scroll_y
    }

    /// Feed the current scroll offset; returns whether the navbar is hidden.
    ///
    /// Hidden iff this scroll moved down and the offset is past `threshold`.
    /// The stored offset is updated regardless of the outcome.
    pub fn on_scroll(&mut self, scroll_y: f64, threshold: f64) -> bool {
        let hidden = scroll_y > self.last_scroll_y && scroll_y > threshold;
        self.last_scroll_y = scroll_y;
        hidden
    }
}

#[cfg(feature = "hydrate")]
pub fn mount(
    window: &web_sys::Window,
    document: &web_sys::Document,
    config: &crate::config::NavbarConfig,
    ui: &crate::controller::SharedController,
) -> crate::error::FxResult<()> {
    use crate::{consts, dom};

    let navbar = dom::query(document, consts::NAVBAR);
    if navbar.is_none() {
        log::debug!("navbar: {} absent, tracking scroll only", consts::NAVBAR);
    }
    let threshold = config.hide_threshold_px;
    let ui = std::rc::Rc::clone(ui);
    let win = window.clone();
    dom::listen(window, "scroll", move |_: web_sys::Event| {
        let scroll_y = win.scroll_y().unwrap_or_default();
        let hidden = ui.borrow_mut().navbar.on_scroll(scroll_y, threshold);
        if let Some(navbar) = &navbar {
            dom::report("navbar", dom::set_class(navbar, consts::HIDDEN_CLASS, hidden));
        }
    })
}
