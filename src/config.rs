use std::str::FromStr;

use log::LevelFilter;

use crate::clock::DEFAULT_TIME_STEP;
use crate::cover::DEFAULT_IMAGE_ASPECT;

/// Sketch settings. Every field can be overridden per container through a
/// `data-*` attribute of the same name in kebab case.
#[derive(Debug, Clone, PartialEq)]
pub struct SketchConfig {
    /// Height / width of the source image the shader samples.
    pub image_aspect: f64,
    /// Time added to the `time` uniform each frame.
    pub time_step: f64,
    /// Clear colour as `0xRRGGBB`.
    pub clear_color: u32,
    pub max_pixel_ratio: f64,
    pub log_level: LevelFilter,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            image_aspect: DEFAULT_IMAGE_ASPECT,
            time_step: DEFAULT_TIME_STEP,
            clear_color: 0x121212,
            max_pixel_ratio: 2.0,
            log_level: LevelFilter::Info,
        }
    }
}

impl SketchConfig {
    /// Builds a config from attribute lookups; `attr` receives the attribute
    /// name (e.g. `data-time-step`).
    ///
    /// Values that fail to parse are reported and the default is kept.
    pub fn from_attributes<F>(attr: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = attr("data-image-aspect") {
            match parse_positive(&v) {
                Some(aspect) => config.image_aspect = aspect,
                None => log::warn!("ignoring data-image-aspect={v:?}: expected a positive number"),
            }
        }
        if let Some(v) = attr("data-time-step") {
            match v.trim().parse::<f64>() {
                Ok(step) if step.is_finite() && step >= 0.0 => config.time_step = step,
                _ => log::warn!("ignoring data-time-step={v:?}: expected a non-negative number"),
            }
        }
        if let Some(v) = attr("data-clear-color") {
            match parse_hex_color(&v) {
                Some(color) => config.clear_color = color,
                None => log::warn!("ignoring data-clear-color={v:?}: expected RRGGBB hex"),
            }
        }
        if let Some(v) = attr("data-max-pixel-ratio") {
            match parse_positive(&v) {
                Some(ratio) => config.max_pixel_ratio = ratio,
                None => log::warn!("ignoring data-max-pixel-ratio={v:?}: expected a positive number"),
            }
        }
        if let Some(v) = attr("data-log-level") {
            match LevelFilter::from_str(v.trim()) {
                Ok(level) => config.log_level = level,
                Err(_) => log::warn!("ignoring data-log-level={v:?}"),
            }
        }

        config
    }

    /// Clear colour as normalized RGBA with alpha 1.
    pub fn clear_color_rgba(&self) -> [f32; 4] {
        let r = ((self.clear_color >> 16) & 0xff) as f32 / 255.0;
        let g = ((self.clear_color >> 8) & 0xff) as f32 / 255.0;
        let b = (self.clear_color & 0xff) as f32 / 255.0;
        [r, g, b, 1.0]
    }
}

fn parse_positive(s: &str) -> Option<f64> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

/// Accepts `RRGGBB`, `#RRGGBB` or `0xRRGGBB`.
pub fn parse_hex_color(s: &str) -> Option<u32> {
    let s = s.trim();
    let digits = s
        .strip_prefix('#')
        .or_else(|| s.strip_prefix("0x"))
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}
