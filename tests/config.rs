use std::collections::HashMap;

use log::LevelFilter;
use sketch_wasm::config::{parse_hex_color, SketchConfig};
use sketch_wasm::cover::DEFAULT_IMAGE_ASPECT;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_test::wasm_bindgen_test as test;

#[cfg(target_arch = "wasm32")]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn config_from(pairs: &[(&str, &str)]) -> SketchConfig {
    let attrs: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    SketchConfig::from_attributes(|name| attrs.get(name).cloned())
}

#[test]
fn defaults() {
    let config = SketchConfig::default();
    assert_eq!(config.image_aspect, DEFAULT_IMAGE_ASPECT);
    assert_eq!(config.time_step, 0.05);
    assert_eq!(config.clear_color, 0x121212);
    assert_eq!(config.max_pixel_ratio, 2.0);
    assert_eq!(config.log_level, LevelFilter::Info);
    assert_eq!(config_from(&[]), config);
}

#[test]
fn attributes_override_defaults() {
    let config = config_from(&[
        ("data-image-aspect", "0.5625"),
        ("data-time-step", "0.1"),
        ("data-clear-color", "#ff8000"),
        ("data-max-pixel-ratio", "1"),
        ("data-log-level", "debug"),
    ]);
    assert_eq!(config.image_aspect, 0.5625);
    assert_eq!(config.time_step, 0.1);
    assert_eq!(config.clear_color, 0xff8000);
    assert_eq!(config.max_pixel_ratio, 1.0);
    assert_eq!(config.log_level, LevelFilter::Debug);
}

#[test]
fn zero_time_step_is_allowed() {
    assert_eq!(config_from(&[("data-time-step", "0")]).time_step, 0.0);
}

#[test]
fn invalid_values_keep_defaults() {
    let config = config_from(&[
        ("data-image-aspect", "-1"),
        ("data-time-step", "fast"),
        ("data-clear-color", "red"),
        ("data-max-pixel-ratio", "NaN"),
        ("data-log-level", "loud"),
    ]);
    assert_eq!(config, SketchConfig::default());
}

#[test]
fn hex_colors() {
    assert_eq!(parse_hex_color("121212"), Some(0x121212));
    assert_eq!(parse_hex_color(" 0xABCDEF "), Some(0xabcdef));
    assert_eq!(parse_hex_color("#000000"), Some(0));
    assert_eq!(parse_hex_color("#fff"), None);
    assert_eq!(parse_hex_color("+12345"), None);
    assert_eq!(parse_hex_color("12345g"), None);
}

#[test]
fn clear_color_is_normalized() {
    let config = SketchConfig {
        clear_color: 0xff0080,
        ..SketchConfig::default()
    };
    let [r, g, b, a] = config.clear_color_rgba();
    assert_eq!((r, g, a), (1.0, 0.0, 1.0));
    assert!((b - 128.0 / 255.0).abs() < 1e-6);
}
