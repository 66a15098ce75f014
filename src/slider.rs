//! Budget slider bubble: a floating label that follows the range thumb and
//! shows the value as Indian Rupees.

#[cfg(test)]
#[path = "slider_test.rs"]
mod slider_test;

use crate::config::SliderConfig;
use crate::consts::{SLIDER_DEFAULT_MAX, SLIDER_DEFAULT_MIN};

/// Format a whole-rupee amount the way `en-IN` currency formatting does:
/// `₹` prefix, no decimals, and lakh/crore grouping (`₹12,34,567`).
#[must_use]
pub fn format_inr(value: f64) -> String {
    if value.is_nan() {
        return "₹NaN".to_owned();
    }
    // Negative inputs keep their sign even when they round to zero (`-₹0`).
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value.is_infinite() {
        return format!("{sign}₹∞");
    }
    let digits = format!("{:.0}", value.abs().round());
    format!("{sign}₹{}", group_indian(&digits))
}

/// Group a digit string as 3 trailing digits, then pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_owned();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

/// Snapshot of the range input's numeric state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderValue {
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl SliderValue {
    /// Build from raw attribute strings; blank bounds use the HTML defaults.
    #[must_use]
    pub fn from_attrs(value: &str, min: &str, max: &str) -> Self {
        let min = parse_or(min, SLIDER_DEFAULT_MIN);
        let max = parse_or(max, SLIDER_DEFAULT_MAX);
        Self { value: parse_or(value, min), min, max }
    }

    /// Thumb position as a percentage of the track; 0 for a degenerate range.
    #[must_use]
    pub fn percent(&self) -> f64 {
        let span = self.max - self.min;
        if span > 0.0 { (self.value - self.min) * 100.0 / span } else { 0.0 }
    }

    /// The top of the range stands for "this much or more".
    #[must_use]
    pub fn is_open_ended(&self) -> bool {
        self.value == self.max
    }
}

fn parse_or(raw: &str, fallback: f64) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => fallback,
    }
}

/// Rendered bubble: label text and CSS `left`.
#[derive(Clone, Debug, PartialEq)]
pub struct Bubble {
    pub text: String,
    pub left: String,
}

#[must_use]
pub fn bubble(slider: SliderValue, config: &SliderConfig) -> Bubble {
    let percent = slider.percent();
    let suffix = if slider.is_open_ended() { "+" } else { "" };
    let bias = config.bias_px - percent * config.bias_slope;
    Bubble { text: format!("{}{suffix}", format_inr(slider.value)), left: format!("calc({percent}% + ({bias}px))") }
}

/// Recompute the bubble from the slider's current value, if both exist.
#[cfg(feature = "hydrate")]
pub fn refresh(document: &web_sys::Document, config: &SliderConfig) -> crate::error::FxResult<()> {
    use crate::{consts, dom};

    let Some((input, label)) = elements(document) else {
        return Ok(());
    };
    let state = SliderValue::from_attrs(&input.value(), &input.min(), &input.max());
    let rendered = bubble(state, config);
    label.set_inner_text(&rendered.text);
    dom::set_style(&label, "left", &rendered.left)?;
    log::debug!("slider: {} at {}", rendered.text, consts::BUDGET_SLIDER_ID);
    Ok(())
}

#[cfg(feature = "hydrate")]
fn elements(document: &web_sys::Document) -> Option<(web_sys::HtmlInputElement, web_sys::HtmlElement)> {
    use wasm_bindgen::JsCast;

    use crate::{consts, dom};

    let input = document
        .get_element_by_id(consts::BUDGET_SLIDER_ID)?
        .dyn_ref::<web_sys::HtmlInputElement>()?
        .clone();
    let label = dom::query(document, consts::BUDGET_BUBBLE)?;
    Some((input, label))
}

#[cfg(feature = "hydrate")]
pub fn mount(document: &web_sys::Document, config: &SliderConfig) -> crate::error::FxResult<()> {
    use crate::dom;

    let Some((input, _)) = elements(document) else {
        log::debug!("slider: range or bubble absent");
        return Ok(());
    };
    {
        let document = document.clone();
        let config = config.clone();
        dom::listen(&input, "input", move |_: web_sys::Event| {
            dom::report("slider", refresh(&document, &config));
        })?;
    }
    refresh(document, config)
}
