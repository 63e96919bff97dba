//! Full-viewport animated shader sketch rendered with WebGL2.
//!
//! The math (cover factors, camera, plane, pointer and clock state) lives in
//! plain modules so it can be tested on the host; everything touching the
//! DOM or WebGL is compiled only for wasm32.

pub mod camera;
pub mod clock;
pub mod config;
pub mod cover;
pub mod error;
pub mod geometry;
pub mod mouse;
pub mod viewport;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;

    use crate::config::SketchConfig;
    use crate::error::SketchError;

    mod logging;
    mod render;
    mod renderer;
    mod sketch;

    use render::SharedSketch;
    use sketch::Sketch;

    const DEFAULT_CONTAINER: &str = "app";

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        logging::init_logging(SketchConfig::default().log_level);

        let window = web_sys::window().ok_or(SketchError::NoWindow)?;
        let document = window.document().ok_or(SketchError::NoDocument)?;
        if document.get_element_by_id(DEFAULT_CONTAINER).is_none() {
            log::info!("no #{DEFAULT_CONTAINER} element; waiting for mount()");
            return Ok(());
        }

        // The sketch lives for the page; the listeners keep it alive.
        mount(DEFAULT_CONTAINER)?;
        Ok(())
    }

    /// Mount a sketch into the element with id `container_id`.
    ///
    /// Settings are read from the container's `data-*` attributes.
    #[wasm_bindgen]
    pub fn mount(container_id: &str) -> Result<SketchHandle, JsValue> {
        let window = web_sys::window().ok_or(SketchError::NoWindow)?;
        let document = window.document().ok_or(SketchError::NoDocument)?;
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| SketchError::ContainerNotFound(container_id.to_string()))?
            .dyn_into::<web_sys::HtmlElement>()
            .map_err(|_| SketchError::ContainerNotFound(container_id.to_string()))?;

        let config = SketchConfig::from_attributes(|name| container.get_attribute(name));
        logging::init_logging(config.log_level);

        let sketch: SharedSketch = Rc::new(RefCell::new(Sketch::new(container, config)?));
        render::start(&sketch)?;
        Ok(SketchHandle { sketch })
    }

    /// Script-side control over a mounted sketch.
    #[wasm_bindgen]
    pub struct SketchHandle {
        sketch: SharedSketch,
    }

    #[wasm_bindgen]
    impl SketchHandle {
        /// Freeze time; the frame loop exits on its next tick.
        pub fn pause(&self) {
            self.sketch.borrow_mut().clock_mut().pause();
        }

        pub fn resume(&self) -> Result<(), JsValue> {
            self.sketch.borrow_mut().clock_mut().resume();
            render::run_loop(&self.sketch)
        }

        #[wasm_bindgen(js_name = isPlaying)]
        pub fn is_playing(&self) -> bool {
            self.sketch.borrow().clock().is_playing()
        }

        /// Whether an animation-frame chain is still scheduled.
        #[wasm_bindgen(js_name = isLooping)]
        pub fn is_looping(&self) -> bool {
            self.sketch.borrow().loop_active()
        }

        pub fn time(&self) -> f64 {
            self.sketch.borrow().clock().time()
        }

        /// Current `resolution` uniform as `[width, height, a1, a2]`.
        pub fn resolution(&self) -> Vec<f32> {
            self.sketch.borrow().resolution().to_vec4().to_vec()
        }

        /// Current `mouse` uniform as `[x, y, vx, vy]`.
        pub fn mouse(&self) -> Vec<f32> {
            self.sketch.borrow().mouse().to_vec4().to_vec()
        }

        /// Re-read the container size, as a window resize would.
        pub fn resize(&self) -> Result<(), JsValue> {
            self.sketch.borrow_mut().resize()?;
            Ok(())
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::{mount, SketchHandle};
