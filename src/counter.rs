//! Number counter animation.
//!
//! A counter climbs from 0 to its `data-target` in a bounded number of
//! steps: each step adds `target / steps`, rounded up, so large targets take
//! bigger strides rather than more frames. [`CounterSteps`] yields the values
//! to display; the browser driver only sleeps between them.
//!
//! Runs are tied to an [`AnimationToken`]. Starting a new run supersedes any
//! run still in flight, which then stops without writing. Hiding the page
//! cancels the run and settles every counter on its target.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use std::cell::Cell;
use std::rc::Rc;

/// Parse a counter target with the leniency of a JS numeric coercion:
/// surrounding whitespace is ignored and a missing or blank value is 0.
///
/// Returns `None` for text that is not a finite number.
#[must_use]
pub fn parse_target(raw: Option<&str>) -> Option<f64> {
    let trimmed = raw.map_or("", str::trim);
    if trimmed.is_empty() {
        return Some(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => None,
    }
}

/// Render a counter value the way it appears on the page.
#[must_use]
pub fn format_value(value: f64) -> String {
    format!("{value}")
}

/// Values shown by one counter, ending exactly on the target.
#[derive(Clone, Debug)]
pub struct CounterSteps {
    current: f64,
    target: f64,
    increment: f64,
    remaining: u32,
    done: bool,
}

impl CounterSteps {
    #[must_use]
    pub fn new(target: f64, steps: u32) -> Self {
        let steps = steps.max(1);
        Self { current: 0.0, target, increment: target / f64::from(steps), remaining: steps, done: false }
    }
}

impl Iterator for CounterSteps {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.done {
            return None;
        }
        if self.current >= self.target || self.remaining == 0 || self.current.is_nan() || self.target.is_nan() {
            self.done = true;
            return Some(self.target);
        }
        let next = (self.current + self.increment).ceil().min(self.target);
        self.current = next;
        self.remaining -= 1;
        if next >= self.target {
            self.done = true;
        }
        Some(next)
    }
}

/// Generation counter shared by every run of the page's counters.
#[derive(Clone, Debug, Default)]
pub struct AnimationToken {
    generation: Rc<Cell<u64>>,
}

impl AnimationToken {
    /// Start a new run, superseding any earlier one.
    #[must_use]
    pub fn begin(&self) -> AnimationTicket {
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);
        AnimationTicket { generation, token: self.clone() }
    }

    /// Abort whatever run is in flight.
    pub fn cancel(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }
}

/// Handle held by one run; stays valid until the token moves on.
#[derive(Clone, Debug)]
pub struct AnimationTicket {
    generation: u64,
    token: AnimationToken,
}

impl AnimationTicket {
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.token.generation.get() == self.generation
    }
}

/// Reset every `.counter` on the page to 0 and animate it to its target.
#[cfg(feature = "hydrate")]
pub fn run_all(document: &web_sys::Document, config: &crate::config::CounterConfig, token: &AnimationToken) {
    use crate::{consts, dom};

    let ticket = token.begin();
    let counters = dom::query_all(document, consts::COUNTER);
    log::debug!("counter: animating {} counters", counters.len());
    for el in counters {
        el.set_inner_text("0");
        let raw = el.get_attribute(consts::COUNTER_TARGET_ATTR);
        let Some(target) = parse_target(raw.as_deref()) else {
            log::warn!("counter: unusable {} {:?}", consts::COUNTER_TARGET_ATTR, raw);
            continue;
        };
        let steps = CounterSteps::new(target, config.steps);
        wasm_bindgen_futures::spawn_local(animate(el, steps, config.step_ms, ticket.clone()));
    }
}

/// On `pagehide`, abort a started run and show final values, so a page
/// restored from the back/forward cache is never left mid-count.
#[cfg(feature = "hydrate")]
pub fn mount(
    window: &web_sys::Window,
    document: &web_sys::Document,
    ui: &crate::controller::SharedController,
) -> crate::error::FxResult<()> {
    let document = document.clone();
    let ui = Rc::clone(ui);
    crate::dom::listen(window, "pagehide", move |_: web_sys::Event| {
        let ui = ui.borrow();
        if ui.counters_started() {
            ui.counter_token.cancel();
            settle_all(&document);
        }
    })
}

#[cfg(feature = "hydrate")]
fn settle_all(document: &web_sys::Document) {
    use crate::{consts, dom};

    for el in dom::query_all(document, consts::COUNTER) {
        if let Some(target) = parse_target(el.get_attribute(consts::COUNTER_TARGET_ATTR).as_deref()) {
            el.set_inner_text(&format_value(target));
        }
    }
}

#[cfg(feature = "hydrate")]
async fn animate(el: web_sys::HtmlElement, steps: CounterSteps, step_ms: u32, ticket: AnimationTicket) {
    use futures::StreamExt;

    let mut ticks = gloo_timers::future::IntervalStream::new(step_ms);
    let mut steps = steps.peekable();
    while let Some(value) = steps.next() {
        if !ticket.is_current() {
            return;
        }
        el.set_inner_text(&format_value(value));
        if steps.peek().is_none() {
            break;
        }
        ticks.next().await;
    }
}
