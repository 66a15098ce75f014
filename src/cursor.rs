//! Custom cursor: a dot pinned to the pointer, an outline that trails it, and
//! a page background tinted by where the pointer sits in the viewport.
//!
//! The background colour is a bilinear drift away from a base colour: moving
//! right pulls each channel toward `x_end`, moving down toward `y_end`, and
//! the two pulls add.

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;

use crate::config::CursorConfig;
use crate::controller::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub fn css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Pointer coordinate as a fraction of the viewport extent, clamped to [0, 1].
fn fraction(pos: f64, extent: f64) -> f64 {
    if extent > 0.0 && pos.is_finite() {
        (pos / extent).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(base: u8, x_end: u8, y_end: u8, fx: f64, fy: f64) -> u8 {
    let base = f64::from(base);
    let value = base - fx * (base - f64::from(x_end)) - fy * (base - f64::from(y_end));
    value.round().clamp(0.0, 255.0) as u8
}

/// Background colour for a pointer at `point` in a `width` x `height` viewport.
#[must_use]
pub fn background_rgb(point: Point, width: f64, height: f64, config: &CursorConfig) -> Rgb {
    let fx = fraction(point.x, width);
    let fy = fraction(point.y, height);
    let [br, bg, bb] = config.base_rgb;
    let [xr, xg, xb] = config.x_end_rgb;
    let [yr, yg, yb] = config.y_end_rgb;
    Rgb { r: channel(br, xr, yr, fx, fy), g: channel(bg, xg, yg, fx, fy), b: channel(bb, xb, yb, fx, fy) }
}

/// Inline styles for the outline ring.
#[derive(Clone, Debug, PartialEq)]
pub struct OutlineStyle {
    pub size: String,
    pub background: String,
}

#[must_use]
pub fn outline_style(hovered: bool, config: &CursorConfig) -> OutlineStyle {
    if hovered {
        OutlineStyle { size: format!("{}px", config.outline_hover_px), background: config.hover_tint.clone() }
    } else {
        OutlineStyle { size: format!("{}px", config.outline_px), background: "transparent".to_owned() }
    }
}

#[cfg(feature = "hydrate")]
pub fn mount(
    window: &web_sys::Window,
    document: &web_sys::Document,
    config: &CursorConfig,
    ui: &crate::controller::SharedController,
) -> crate::error::FxResult<()> {
    use std::rc::Rc;

    use crate::{consts, dom};

    let fine_pointer = window
        .match_media(consts::FINE_POINTER_QUERY)?
        .is_some_and(|mq| mq.matches());
    if !fine_pointer {
        log::debug!("cursor: coarse pointer, custom cursor disabled");
        return Ok(());
    }
    let (Some(dot), Some(outline)) =
        (dom::query(document, consts::CURSOR_DOT), dom::query(document, consts::CURSOR_OUTLINE))
    else {
        log::debug!("cursor: dot or outline absent");
        return Ok(());
    };
    let Some(body) = document.body() else {
        return Ok(());
    };

    {
        let ui = Rc::clone(ui);
        let win = window.clone();
        let outline = outline.clone();
        let config = config.clone();
        dom::listen(window, "mousemove", move |event: web_sys::MouseEvent| {
            let point = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
            let follow = ui.borrow().follows_pointer();
            dom::report("cursor", track(&win, &body, &dot, &outline, point, follow, &config));
        })?;
    }

    for target in dom::query_all(document, consts::CURSOR_HOVER_TARGETS) {
        for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
            let outline = outline.clone();
            let style = outline_style(hovered, config);
            dom::listen(&target, event, move |_: web_sys::Event| {
                dom::report("cursor hover", apply_outline(&outline, &style));
            })?;
        }
    }
    Ok(())
}

#[cfg(feature = "hydrate")]
fn track(
    window: &web_sys::Window,
    body: &web_sys::HtmlElement,
    dot: &web_sys::HtmlElement,
    outline: &web_sys::HtmlElement,
    point: Point,
    follow: bool,
    config: &CursorConfig,
) -> crate::error::FxResult<()> {
    use wasm_bindgen::{JsCast, JsValue};

    use crate::dom;

    let left = format!("{}px", point.x);
    let top = format!("{}px", point.y);
    dom::set_style(dot, "left", &left)?;
    dom::set_style(dot, "top", &top)?;

    let frame = js_sys::Object::new();
    js_sys::Reflect::set(&frame, &JsValue::from_str("left"), &JsValue::from_str(&left))?;
    js_sys::Reflect::set(&frame, &JsValue::from_str("top"), &JsValue::from_str(&top))?;
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &JsValue::from_str("duration"), &JsValue::from(config.trail_ms))?;
    js_sys::Reflect::set(&options, &JsValue::from_str("fill"), &JsValue::from_str("forwards"))?;
    outline.animate_with_keyframe_animation_options(
        Some(&frame),
        options.unchecked_ref::<web_sys::KeyframeAnimationOptions>(),
    );

    if follow {
        let (width, height) = dom::viewport(window);
        let rgb = background_rgb(point, width, height, config);
        dom::set_style(body, "background-color", &rgb.css())?;
        dom::set_style(body, "animation-play-state", "paused")?;
    }
    Ok(())
}

#[cfg(feature = "hydrate")]
fn apply_outline(outline: &web_sys::HtmlElement, style: &OutlineStyle) -> crate::error::FxResult<()> {
    use crate::dom;

    dom::set_style(outline, "width", &style.size)?;
    dom::set_style(outline, "height", &style.size)?;
    dom::set_style(outline, "background-color", &style.background)
}
