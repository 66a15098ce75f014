//! Inquiry form submission.
//!
//! Delivery is simulated: the form shows a loading state, waits a fixed
//! delay and then always reports success. The captured [`Inquiry`] is the
//! payload a transactional mail service would receive; for now only its
//! shape (field names and size) is logged, never the visitor's values.

#[cfg(test)]
#[path = "inquiry_test.rs"]
mod inquiry_test;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::FxResult;

/// Where a submission is in its lifecycle. There is no failure state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Sending,
    Sent,
}

impl SubmissionPhase {
    /// A submit always enters `Sending`, even from `Sending` or `Sent`.
    #[must_use]
    pub fn submit(self) -> Self {
        Self::Sending
    }

    #[must_use]
    pub fn complete(self) -> Self {
        Self::Sent
    }

    /// Button state for this phase.
    #[must_use]
    pub fn button(self) -> SubmitButton {
        match self {
            Self::Sending => SubmitButton { loader_hidden: false, label_opacity: "0" },
            Self::Idle | Self::Sent => SubmitButton { loader_hidden: true, label_opacity: "1" },
        }
    }

    #[must_use]
    pub fn shows_success(self) -> bool {
        self == Self::Sent
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitButton {
    pub loader_hidden: bool,
    pub label_opacity: &'static str,
}

/// Named form fields captured at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Inquiry {
    pub fields: BTreeMap<String, String>,
}

impl Inquiry {
    /// Collect `(name, value)` pairs; repeated names (checkbox groups) are
    /// joined with `", "` in submission order. Unnamed fields are dropped.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut fields: BTreeMap<String, String> = BTreeMap::new();
        for (name, value) in pairs {
            let name = name.into();
            if name.is_empty() {
                continue;
            }
            let value = value.into();
            fields
                .entry(name)
                .and_modify(|existing| {
                    existing.push_str(", ");
                    existing.push_str(&value);
                })
                .or_insert(value);
        }
        Self { fields }
    }

    pub fn to_json(&self) -> FxResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Comma-separated field names, safe to log.
    #[must_use]
    pub fn field_names(&self) -> String {
        self.fields.keys().map(String::as_str).collect::<Vec<_>>().join(", ")
    }
}

/// DOM surface the submission flow writes to.
pub trait FormView {
    fn show_button(&self, button: SubmitButton) -> FxResult<()>;
    fn show_success(&self, message: &str) -> FxResult<()>;
    fn reset(&self);
}

/// Settle the form once delivery completes.
///
/// Every step runs even when an earlier write fails; the first error is
/// returned after the form has been reset.
pub fn finish<V: FormView>(view: &V, phase: SubmissionPhase, success_message: &str) -> FxResult<()> {
    let shown = view.show_button(phase.button());
    let announced = if phase.shows_success() { view.show_success(success_message) } else { Ok(()) };
    view.reset();
    shown.and(announced)
}

#[cfg(feature = "hydrate")]
pub fn mount(document: &web_sys::Document, config: &crate::config::FxConfig) -> FxResult<()> {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;

    use crate::{consts, dom};

    let Some(form) = document
        .get_element_by_id(consts::INQUIRY_FORM_ID)
        .and_then(|el| el.dyn_ref::<web_sys::HtmlFormElement>().cloned())
    else {
        log::debug!("inquiry: form absent");
        return Ok(());
    };
    let parts = Rc::new(FormParts {
        form: form.clone(),
        message: dom::by_id(document, consts::FORM_MESSAGE_ID),
        loader: dom::query(document, consts::SUBMIT_LOADER),
        label: dom::query(document, consts::SUBMIT_LABEL),
    });
    let phase = Rc::new(Cell::new(SubmissionPhase::Idle));
    let document = document.clone();
    let config = config.clone();

    dom::listen(&form, "submit", move |event: web_sys::Event| {
        event.prevent_default();
        phase.set(phase.get().submit());
        dom::report("inquiry", parts.show_button(phase.get().button()));
        match capture(&parts.form).and_then(|inquiry| Ok((inquiry.to_json()?.len(), inquiry.field_names()))) {
            Ok((bytes, names)) => log::debug!("inquiry: simulated delivery of {bytes} bytes [{names}]"),
            Err(err) => log::warn!("inquiry: could not capture fields: {err}"),
        }

        let parts = Rc::clone(&parts);
        let phase = Rc::clone(&phase);
        let document = document.clone();
        let config = config.clone();
        gloo_timers::callback::Timeout::new(config.form.submit_delay_ms, move || {
            phase.set(phase.get().complete());
            dom::report("inquiry", finish(&*parts, phase.get(), &config.form.success_message));
            dom::report("inquiry", crate::slider::refresh(&document, &config.slider));
        })
        .forget();
    })
}

#[cfg(feature = "hydrate")]
struct FormParts {
    form: web_sys::HtmlFormElement,
    message: Option<web_sys::HtmlElement>,
    loader: Option<web_sys::HtmlElement>,
    label: Option<web_sys::HtmlElement>,
}

#[cfg(feature = "hydrate")]
impl FormView for FormParts {
    fn show_button(&self, button: SubmitButton) -> FxResult<()> {
        use crate::{consts, dom};

        if let Some(loader) = &self.loader {
            dom::set_class(loader, consts::HIDDEN_CLASS, button.loader_hidden)?;
        }
        if let Some(label) = &self.label {
            dom::set_style(label, "opacity", button.label_opacity)?;
        }
        Ok(())
    }

    fn show_success(&self, message: &str) -> FxResult<()> {
        use crate::{consts, dom};

        let Some(el) = &self.message else {
            return Ok(());
        };
        el.set_inner_text(message);
        el.set_class_name(consts::SUCCESS_MESSAGE_CLASS);
        dom::set_class(el, consts::HIDDEN_CLASS, false)
    }

    fn reset(&self) {
        self.form.reset();
    }
}

#[cfg(feature = "hydrate")]
fn capture(form: &web_sys::HtmlFormElement) -> FxResult<Inquiry> {
    use wasm_bindgen::JsCast;

    let data = web_sys::FormData::new_with_form(form)?;
    let Some(entries) = js_sys::try_iter(&data)? else {
        return Ok(Inquiry::default());
    };
    let mut pairs = Vec::new();
    for entry in entries {
        let entry = entry?;
        let Some(pair) = entry.dyn_ref::<js_sys::Array>() else {
            continue;
        };
        let name = pair.get(0).as_string().unwrap_or_default();
        // File inputs carry blobs; only text values are forwarded.
        if let Some(value) = pair.get(1).as_string() {
            pairs.push((name, value));
        }
    }
    Ok(Inquiry::from_pairs(pairs))
}
