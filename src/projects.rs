//! Project cards: image click-through and hover background.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use crate::config::ProjectsConfig;

/// Page a card's image opens; blank or missing `data-link` uses the default.
#[must_use]
pub fn destination<'a>(data_link: Option<&'a str>, config: &'a ProjectsConfig) -> &'a str {
    match data_link {
        Some(link) if !link.is_empty() => link,
        _ => &config.default_link,
    }
}

/// Background colour while the card at `index` is hovered.
#[must_use]
pub fn hover_color(index: usize, config: &ProjectsConfig) -> Option<&str> {
    if config.hover_palette.is_empty() {
        return None;
    }
    config.hover_palette.get(index % config.hover_palette.len()).map(String::as_str)
}

#[cfg(feature = "hydrate")]
pub fn mount(
    window: &web_sys::Window,
    document: &web_sys::Document,
    config: &ProjectsConfig,
    ui: &crate::controller::SharedController,
) -> crate::error::FxResult<()> {
    use std::rc::Rc;

    use crate::{consts, dom};

    let Some(body) = document.body() else {
        return Ok(());
    };
    let cards = dom::query_all(document, consts::PROJECT_CARD);
    log::debug!("projects: wiring {} cards", cards.len());

    for (index, card) in cards.iter().enumerate() {
        if let Some(wrapper) = dom::query_in(card, consts::PROJECT_IMAGE_WRAPPER) {
            let link = destination(card.get_attribute(consts::PROJECT_LINK_ATTR).as_deref(), config).to_owned();
            dom::set_style(&wrapper, "cursor", "pointer")?;
            let win = window.clone();
            dom::listen(&wrapper, "click", move |event: web_sys::MouseEvent| {
                if clicked_link(&event) {
                    return;
                }
                dom::report("projects", win.location().set_href(&link).map_err(Into::into));
            })?;
        }

        let color = hover_color(index, config).map(str::to_owned);
        {
            let ui = Rc::clone(ui);
            let body = body.clone();
            dom::listen(card, "mouseenter", move |_: web_sys::Event| {
                ui.borrow_mut().set_project_hovered(true);
                dom::report("projects", enter(&body, color.as_deref()));
            })?;
        }
        {
            let ui = Rc::clone(ui);
            let body = body.clone();
            dom::listen(card, "mouseleave", move |_: web_sys::Event| {
                ui.borrow_mut().set_project_hovered(false);
                dom::report("projects", leave(&body));
            })?;
        }
    }
    Ok(())
}

#[cfg(feature = "hydrate")]
fn clicked_link(event: &web_sys::MouseEvent) -> bool {
    use wasm_bindgen::JsCast;

    let Some(target) = event.target() else {
        return false;
    };
    let Some(el) = target.dyn_ref::<web_sys::Element>() else {
        return false;
    };
    matches!(el.closest("a"), Ok(Some(_)))
}

#[cfg(feature = "hydrate")]
fn enter(body: &web_sys::HtmlElement, color: Option<&str>) -> crate::error::FxResult<()> {
    use crate::dom;

    dom::set_style(body, "animation-play-state", "paused")?;
    if let Some(color) = color {
        dom::set_style(body, "background-color", color)?;
    }
    Ok(())
}

#[cfg(feature = "hydrate")]
fn leave(body: &web_sys::HtmlElement) -> crate::error::FxResult<()> {
    use crate::dom;

    dom::remove_style(body, "background-color")?;
    dom::set_style(body, "animation-play-state", "running")
}
