//! Scroll reveal: elements gain the `active` class the first time they become
//! visible, and the metrics block starts the number counters once.
//!
//! ARCHITECTURE
//! ============
//! The browser side turns `IntersectionObserver` entries into
//! [`VisibilityEvent`]s keyed by [`RevealId`] (the element's index in the
//! reveal target list). [`RevealTracker`] decides what each event means, so
//! the one-shot rules are testable without a browser.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::HashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RevealId(pub usize);

/// An observed element crossed the visibility threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibilityEvent {
    pub id: RevealId,
    /// Element carries the metrics class and may start the counters.
    pub is_metrics: bool,
}

/// What the page should do in response to one [`VisibilityEvent`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealOutcome {
    /// Add the active class and stop observing the element.
    pub activate: bool,
    /// Schedule the counter animation.
    pub start_counters: bool,
}

#[derive(Debug, Default)]
pub struct RevealTracker {
    activated: HashSet<RevealId>,
    counters_started: bool,
}

impl RevealTracker {
    pub fn on_visible(&mut self, event: VisibilityEvent) -> RevealOutcome {
        if !self.activated.insert(event.id) {
            return RevealOutcome::default();
        }
        let start_counters = event.is_metrics && !self.counters_started;
        if start_counters {
            self.counters_started = true;
        }
        RevealOutcome { activate: true, start_counters }
    }

    #[cfg(test)]
    pub(crate) fn is_activated(&self, id: RevealId) -> bool {
        self.activated.contains(&id)
    }

    #[must_use]
    pub fn counters_started(&self) -> bool {
        self.counters_started
    }
}

#[cfg(feature = "hydrate")]
pub fn mount(
    document: &web_sys::Document,
    config: &crate::config::FxConfig,
    ui: &crate::controller::SharedController,
) -> crate::error::FxResult<()> {
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use crate::{consts, counter, dom};

    let targets: Rc<Vec<Element>> =
        Rc::new(dom::query_all(document, consts::REVEAL_TARGETS).into_iter().map(Element::from).collect());
    if targets.is_empty() {
        log::debug!("reveal: no targets");
        return Ok(());
    }

    let init = IntersectionObserverInit::new();
    init.set_root_margin("0px");
    init.set_threshold(&JsValue::from_f64(config.reveal.threshold));

    let callback = {
        let targets = Rc::clone(&targets);
        let ui = Rc::clone(ui);
        let document = document.clone();
        let counter_config = config.counter.clone();
        Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    let Some(index) = targets.iter().position(|el| *el == target) else {
                        continue;
                    };
                    let event = VisibilityEvent {
                        id: RevealId(index),
                        is_metrics: target.class_list().contains(consts::METRICS_CLASS),
                    };
                    let (outcome, token) = {
                        let mut ui = ui.borrow_mut();
                        (ui.reveal.on_visible(event), ui.counter_token.clone())
                    };
                    if outcome.activate {
                        dom::report("reveal", dom::set_class(&target, consts::ACTIVE_CLASS, true));
                        observer.unobserve(&target);
                    }
                    if outcome.start_counters {
                        log::debug!("reveal: metrics visible, counters in {}ms", counter_config.start_delay_ms);
                        let document = document.clone();
                        let counter_config = counter_config.clone();
                        Timeout::new(counter_config.start_delay_ms, move || {
                            counter::run_all(&document, &counter_config, &token);
                        })
                        .forget();
                    }
                }
            },
        )
    };
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    Timeout::new(config.reveal.observe_delay_ms, move || {
        for el in targets.iter() {
            observer.observe(el);
        }
    })
    .forget();
    Ok(())
}
