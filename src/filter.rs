//! Project filter buttons.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::consts::FILTER_ALL;

/// Category selected by a filter button's `data-filter`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Filter {
    All,
    Tag(String),
}

impl Filter {
    /// A missing attribute selects an empty tag, which no card carries.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(FILTER_ALL) => Self::All,
            Some(tag) => Self::Tag(tag.to_owned()),
            None => Self::Tag(String::new()),
        }
    }

    /// Whether a card with the given classes stays visible.
    pub fn matches<'a>(&self, mut classes: impl Iterator<Item = &'a str>) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => !tag.is_empty() && classes.any(|class| class == tag),
        }
    }
}

#[cfg(feature = "hydrate")]
pub fn mount(document: &web_sys::Document) -> crate::error::FxResult<()> {
    use std::rc::Rc;

    use crate::{consts, dom};

    let buttons = Rc::new(dom::query_all(document, consts::FILTER_BUTTON));
    if buttons.is_empty() {
        log::debug!("filter: no buttons");
        return Ok(());
    }
    let cards = Rc::new(dom::query_all(document, consts::PROJECT_CARD));

    for button in buttons.iter() {
        let buttons = Rc::clone(&buttons);
        let cards = Rc::clone(&cards);
        let clicked = button.clone();
        dom::listen(button, "click", move |_: web_sys::MouseEvent| {
            dom::report("filter", apply(&buttons, &clicked, &cards));
        })?;
    }
    Ok(())
}

#[cfg(feature = "hydrate")]
fn apply(
    buttons: &[web_sys::HtmlElement],
    clicked: &web_sys::HtmlElement,
    cards: &[web_sys::HtmlElement],
) -> crate::error::FxResult<()> {
    use crate::{consts, dom};

    for button in buttons {
        dom::set_class(button, consts::ACTIVE_CLASS, false)?;
    }
    dom::set_class(clicked, consts::ACTIVE_CLASS, true)?;

    let filter = Filter::parse(clicked.get_attribute(consts::FILTER_ATTR).as_deref());
    log::debug!("filter: {filter:?}");
    for card in cards {
        dom::set_style(card, "animation", "none")?;
        // Reading layout between the two writes restarts the CSS animation.
        card.offset_height();
        dom::remove_style(card, "animation")?;

        if filter.matches(card.class_name().split_whitespace()) {
            dom::set_class(card, consts::HIDDEN_CLASS, false)?;
            dom::set_style(card, "opacity", "1")?;
            dom::set_style(card, "transform", "translateY(0)")?;
        } else {
            dom::set_class(card, consts::HIDDEN_CLASS, true)?;
        }
    }
    Ok(())
}
