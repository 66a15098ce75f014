//! Page bootstrap: load config, build the shared controller and mount every
//! widget once the document has been parsed.

use web_sys::Document;

use crate::config::FxConfig;
use crate::controller::UiController;
use crate::error::FxResult;
use crate::{consts, counter, cursor, dom, filter, inquiry, menu, navbar, parallax, projects, reveal, slider};

/// Run [`init`] now if the DOM is ready, otherwise on `DOMContentLoaded`.
pub fn run_when_ready() -> FxResult<()> {
    let document = dom::document()?;
    if document.ready_state() != "loading" {
        init();
        return Ok(());
    }
    dom::listen(&document, "DOMContentLoaded", move |_: web_sys::Event| init())
}

/// Mount every widget. A widget that fails to mount is logged and skipped.
pub fn init() {
    let (window, document) = match (dom::window(), dom::document()) {
        (Ok(window), Ok(document)) => (window, document),
        (Err(err), _) | (_, Err(err)) => {
            log::warn!("studio-fx: {err}");
            return;
        }
    };
    let config = load_config(&document);
    let ui = UiController::shared(window.scroll_y().unwrap_or_default());

    mounted("cursor", cursor::mount(&window, &document, &config.cursor, &ui));
    mounted("navbar", navbar::mount(&window, &document, &config.navbar, &ui));
    mounted("reveal", reveal::mount(&document, &config, &ui));
    mounted("counter", counter::mount(&window, &document, &ui));
    mounted("filter", filter::mount(&document));
    mounted("parallax", parallax::mount(&window, &document, &config.parallax));
    mounted("slider", slider::mount(&document, &config.slider));
    mounted("inquiry", inquiry::mount(&document, &config));
    mounted("menu", menu::mount(&document));
    mounted("projects", projects::mount(&window, &document, &config.projects, &ui));
    log::info!("studio-fx: ready");
}

fn mounted(widget: &str, result: FxResult<()>) {
    if let Err(err) = result {
        log::warn!("{widget}: mount failed: {err}");
    }
}

/// Config from the page's JSON block; defaults when absent or malformed.
fn load_config(document: &Document) -> FxConfig {
    let Some(raw) = document
        .get_element_by_id(consts::CONFIG_SCRIPT_ID)
        .and_then(|el| el.text_content())
    else {
        return FxConfig::default();
    };
    match FxConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("studio-fx: ignoring #{}: {err}", consts::CONFIG_SCRIPT_ID);
            FxConfig::default()
        }
    }
}
