//! Parallax lag on the studio image.

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

use crate::config::ParallaxConfig;

/// Parallax only runs on viewports wider than the configured minimum.
#[must_use]
pub fn is_enabled(viewport_width: f64, config: &ParallaxConfig) -> bool {
    viewport_width > config.min_viewport_px
}

/// Vertical image offset for the current scroll position.
///
/// `None` outside the active window; the caller keeps the previous transform.
#[must_use]
pub fn offset(scroll_y: f64, section_top: f64, viewport_height: f64, config: &ParallaxConfig) -> Option<f64> {
    let distance = scroll_y - section_top;
    if distance.abs() < viewport_height * config.window_viewports {
        Some(distance * config.damping)
    } else {
        None
    }
}

#[must_use]
pub fn transform(offset_px: f64) -> String {
    format!("translateY({offset_px}px)")
}

#[cfg(feature = "hydrate")]
pub fn mount(
    window: &web_sys::Window,
    document: &web_sys::Document,
    config: &ParallaxConfig,
) -> crate::error::FxResult<()> {
    use crate::{consts, dom};

    let (Some(image), Some(section)) =
        (dom::query(document, consts::PARALLAX_IMAGE), dom::query(document, consts::PARALLAX_SECTION))
    else {
        log::debug!("parallax: image or section absent");
        return Ok(());
    };
    let (width, _) = dom::viewport(window);
    if !is_enabled(width, config) {
        log::debug!("parallax: viewport {width}px too narrow");
        return Ok(());
    }

    let config = config.clone();
    let win = window.clone();
    dom::listen(window, "scroll", move |_: web_sys::Event| {
        let scroll_y = win.scroll_y().unwrap_or_default();
        let (_, height) = dom::viewport(&win);
        if let Some(px) = offset(scroll_y, f64::from(section.offset_top()), height, &config) {
            dom::report("parallax", dom::set_style(&image, "transform", &transform(px)));
        }
    })
}
