//! Mobile menu toggle.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Inline styles that turn the nav links into a dropdown under the navbar.
pub const DROPDOWN_STYLES: [(&str, &str); 8] = [
    ("position", "absolute"),
    ("top", "100%"),
    ("left", "0"),
    ("width", "100%"),
    ("background-color", "var(--nav-bg)"),
    ("flex-direction", "column"),
    ("padding", "2rem 5%"),
    ("box-shadow", "0 10px 30px rgba(0,0,0,0.05)"),
];

/// Result of one toggle given the panel's current inline `display`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuToggle {
    Close,
    Open,
}

impl MenuToggle {
    /// Only an inline `flex` counts as open; stylesheet state is ignored.
    #[must_use]
    pub fn from_display(display: &str) -> Self {
        if display.trim() == "flex" { Self::Close } else { Self::Open }
    }

    #[must_use]
    pub fn display(self) -> &'static str {
        match self {
            Self::Close => "none",
            Self::Open => "flex",
        }
    }

    /// Styles to apply alongside `display`.
    #[must_use]
    pub fn styles(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Close => &[],
            Self::Open => &DROPDOWN_STYLES,
        }
    }
}

#[cfg(feature = "hydrate")]
pub fn mount(document: &web_sys::Document) -> crate::error::FxResult<()> {
    use crate::{consts, dom};

    let (Some(button), Some(links)) =
        (dom::query(document, consts::MOBILE_MENU_BUTTON), dom::query(document, consts::NAV_LINKS))
    else {
        log::debug!("menu: button or nav links absent");
        return Ok(());
    };
    dom::listen(&button, "click", move |_: web_sys::MouseEvent| {
        let toggle = MenuToggle::from_display(&dom::style_value(&links, "display"));
        dom::report("menu", apply(&links, toggle));
    })
}

#[cfg(feature = "hydrate")]
fn apply(links: &web_sys::HtmlElement, toggle: MenuToggle) -> crate::error::FxResult<()> {
    use crate::dom;

    dom::set_style(links, "display", toggle.display())?;
    for &(property, value) in toggle.styles() {
        dom::set_style(links, property, value)?;
    }
    Ok(())
}
