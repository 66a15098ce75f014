//! Runtime tuning for every widget.
//!
//! DESIGN
//! ======
//! The page may ship a `<script id="fx-config" type="application/json">`
//! block. Every field is optional: missing sections and fields fall back to
//! the defaults in [`crate::consts`], so a page that ships nothing behaves
//! exactly like one that ships `{}`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::error::FxResult;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FxConfig {
    pub cursor: CursorConfig,
    pub navbar: NavbarConfig,
    pub counter: CounterConfig,
    pub reveal: RevealConfig,
    pub parallax: ParallaxConfig,
    pub slider: SliderConfig,
    pub form: FormConfig,
    pub projects: ProjectsConfig,
}

impl FxConfig {
    /// Parse a JSON config block, filling anything omitted with defaults.
    pub fn from_json(raw: &str) -> FxResult<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    pub base_rgb: [u8; 3],
    pub x_end_rgb: [u8; 3],
    pub y_end_rgb: [u8; 3],
    pub trail_ms: u32,
    pub outline_px: f64,
    pub outline_hover_px: f64,
    pub hover_tint: String,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            base_rgb: consts::BACKGROUND_BASE_RGB,
            x_end_rgb: consts::BACKGROUND_X_END_RGB,
            y_end_rgb: consts::BACKGROUND_Y_END_RGB,
            trail_ms: consts::OUTLINE_TRAIL_MS,
            outline_px: consts::OUTLINE_SIZE_PX,
            outline_hover_px: consts::OUTLINE_HOVER_SIZE_PX,
            hover_tint: consts::OUTLINE_HOVER_TINT.to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub hide_threshold_px: f64,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self { hide_threshold_px: consts::NAVBAR_HIDE_THRESHOLD_PX }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub steps: u32,
    pub step_ms: u32,
    pub start_delay_ms: u32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            steps: consts::COUNTER_STEPS,
            step_ms: consts::COUNTER_STEP_MS,
            start_delay_ms: consts::COUNTER_START_DELAY_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub observe_delay_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { threshold: consts::REVEAL_THRESHOLD, observe_delay_ms: consts::REVEAL_OBSERVE_DELAY_MS }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    pub min_viewport_px: f64,
    pub damping: f64,
    pub window_viewports: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            min_viewport_px: consts::PARALLAX_MIN_VIEWPORT_PX,
            damping: consts::PARALLAX_DAMPING,
            window_viewports: consts::PARALLAX_WINDOW_VIEWPORTS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub bias_px: f64,
    pub bias_slope: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self { bias_px: consts::BUBBLE_BIAS_PX, bias_slope: consts::BUBBLE_BIAS_SLOPE }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub submit_delay_ms: u32,
    pub success_message: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self { submit_delay_ms: consts::SUBMIT_DELAY_MS, success_message: consts::SUCCESS_MESSAGE.to_owned() }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectsConfig {
    pub default_link: String,
    pub hover_palette: Vec<String>,
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            default_link: consts::DEFAULT_PROJECT_LINK.to_owned(),
            hover_palette: consts::PROJECT_HOVER_PALETTE.iter().map(|c| (*c).to_owned()).collect(),
        }
    }
}
