//! Shared constants: the DOM contract supplied by the page markup and the
//! default tuning values used by [`crate::config::FxConfig`].

// ── DOM contract ────────────────────────────────────────────────

pub const CURSOR_DOT: &str = ".cursor-dot";
pub const CURSOR_OUTLINE: &str = ".cursor-outline";
/// Elements that enlarge the cursor outline while hovered.
pub const CURSOR_HOVER_TARGETS: &str = "a, button, input, textarea, label, .project-card, .range";
/// Media query that must match before the custom cursor activates.
pub const FINE_POINTER_QUERY: &str = "(pointer: fine)";

pub const NAVBAR: &str = ".navbar";

pub const COUNTER: &str = ".counter";
pub const COUNTER_TARGET_ATTR: &str = "data-target";

pub const REVEAL_TARGETS: &str = ".reveal-text, .reveal-up, .fade-in, .fade-in-up, .metrics";
/// Class that marks the reveal element which also triggers the counters.
pub const METRICS_CLASS: &str = "metrics";

pub const FILTER_BUTTON: &str = ".filter-btn";
pub const FILTER_ATTR: &str = "data-filter";
/// Filter value that matches every card.
pub const FILTER_ALL: &str = "all";

pub const PROJECT_CARD: &str = ".project-card";
pub const PROJECT_IMAGE_WRAPPER: &str = ".img-wrapper";
pub const PROJECT_LINK_ATTR: &str = "data-link";

pub const PARALLAX_IMAGE: &str = ".parallax-img";
pub const PARALLAX_SECTION: &str = ".studio";

pub const BUDGET_SLIDER_ID: &str = "project_budget";
pub const BUDGET_BUBBLE: &str = ".bubble";

pub const INQUIRY_FORM_ID: &str = "inquiry-form";
pub const FORM_MESSAGE_ID: &str = "form-message";
pub const SUBMIT_LOADER: &str = ".btn-loader";
pub const SUBMIT_LABEL: &str = ".btn-submit span";

pub const MOBILE_MENU_BUTTON: &str = ".mobile-menu-btn";
pub const NAV_LINKS: &str = ".nav-links";

/// Id of the optional `<script type="application/json">` config block.
pub const CONFIG_SCRIPT_ID: &str = "fx-config";

// ── Marker classes ──────────────────────────────────────────────

pub const HIDDEN_CLASS: &str = "hidden";
pub const ACTIVE_CLASS: &str = "active";

// ── Cursor ──────────────────────────────────────────────────────

/// Background colour at the top-left corner of the viewport.
pub const BACKGROUND_BASE_RGB: [u8; 3] = [247, 245, 242];
/// Colour the background drifts toward along the horizontal axis.
pub const BACKGROUND_X_END_RGB: [u8; 3] = [235, 220, 208];
/// Colour the background drifts toward along the vertical axis.
pub const BACKGROUND_Y_END_RGB: [u8; 3] = [234, 221, 208];

pub const OUTLINE_TRAIL_MS: u32 = 500;
pub const OUTLINE_SIZE_PX: f64 = 40.0;
pub const OUTLINE_HOVER_SIZE_PX: f64 = 60.0;
pub const OUTLINE_HOVER_TINT: &str = "rgba(176, 92, 61, 0.1)";

// ── Navbar ──────────────────────────────────────────────────────

/// Scroll offset, in pixels, below which the navbar is never hidden.
pub const NAVBAR_HIDE_THRESHOLD_PX: f64 = 100.0;

// ── Counter ─────────────────────────────────────────────────────

pub const COUNTER_STEPS: u32 = 40;
pub const COUNTER_STEP_MS: u32 = 30;
pub const COUNTER_START_DELAY_MS: u32 = 1000;

// ── Reveal ──────────────────────────────────────────────────────

pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_OBSERVE_DELAY_MS: u32 = 100;

// ── Parallax ────────────────────────────────────────────────────

pub const PARALLAX_MIN_VIEWPORT_PX: f64 = 768.0;
pub const PARALLAX_DAMPING: f64 = 0.4;
/// Window, in viewport heights, inside which the image keeps moving.
pub const PARALLAX_WINDOW_VIEWPORTS: f64 = 1.5;

// ── Slider ──────────────────────────────────────────────────────

pub const SLIDER_DEFAULT_MIN: f64 = 0.0;
pub const SLIDER_DEFAULT_MAX: f64 = 100.0;
/// Pixel bias added to the bubble offset at 0%.
pub const BUBBLE_BIAS_PX: f64 = 8.0;
/// Pixels removed from the bias per percent of travel.
pub const BUBBLE_BIAS_SLOPE: f64 = 0.15;

// ── Inquiry form ────────────────────────────────────────────────

pub const SUBMIT_DELAY_MS: u32 = 1500;
pub const SUCCESS_MESSAGE: &str =
    "Thank you for your inquiry! We've received your questionnaire and our team will email you shortly.";
pub const SUCCESS_MESSAGE_CLASS: &str = "success form-message";

// ── Projects ────────────────────────────────────────────────────

pub const DEFAULT_PROJECT_LINK: &str = "project-detail.html";
pub const PROJECT_HOVER_PALETTE: [&str; 7] =
    ["#eae8e3", "#e2e6e8", "#e8e5e1", "#e4e2de", "#e6e9e6", "#e7e5e8", "#e3e4e1"];
