use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, HtmlElement};

use super::renderer::{FrameUniforms, Renderer};
use crate::camera::OrthographicCamera;
use crate::clock::AnimationClock;
use crate::config::SketchConfig;
use crate::cover::Resolution;
use crate::error::SketchError;
use crate::geometry::PlaneMesh;
use crate::mouse::MouseState;
use crate::viewport::Viewport;

/// One full-viewport shader effect mounted in a container element.
pub struct Sketch {
    container: HtmlElement,
    config: SketchConfig,
    renderer: Renderer,
    camera: OrthographicCamera,
    plane: PlaneMesh,
    clock: AnimationClock,
    mouse: MouseState,
    viewport: Viewport,
    resolution: Resolution,
    // Whether a requestAnimationFrame chain is currently scheduled.
    loop_active: bool,
}

impl Sketch {
    /// Creates the canvas inside `container` and sizes everything to it.
    pub fn new(container: HtmlElement, config: SketchConfig) -> Result<Self, SketchError> {
        let window = web_sys::window().ok_or(SketchError::NoWindow)?;
        let document = window.document().ok_or(SketchError::NoDocument)?;

        let (width, height) = container_size(&container);
        let canvas: HtmlCanvasElement = document
            .create_element("canvas")?
            .dyn_into()
            .map_err(|_| SketchError::Js("created element is not a canvas".into()))?;
        container.append_child(&canvas)?;

        let plane = PlaneMesh::new(width, height);
        let renderer = Renderer::new(canvas, &plane.geometry, config.clear_color_rgba())?;
        let viewport = Viewport::new(
            width,
            height,
            window.device_pixel_ratio(),
            config.max_pixel_ratio,
        );

        let mut sketch = Self {
            container,
            camera: OrthographicCamera::new(width, height),
            plane,
            clock: AnimationClock::new(config.time_step),
            mouse: MouseState::default(),
            viewport,
            resolution: Resolution::default(),
            loop_active: false,
            renderer,
            config,
        };
        sketch.resize()?;
        log::info!("sketch mounted at {width}x{height}");
        Ok(sketch)
    }

    /// Re-reads the container size and refreshes surface, camera framing,
    /// plane scale and the `resolution` uniform.
    pub fn resize(&mut self) -> Result<(), SketchError> {
        let dpr = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);
        let (width, height) = container_size(&self.container);

        self.viewport = Viewport::new(width, height, dpr, self.config.max_pixel_ratio);
        self.renderer.set_size(&self.viewport)?;
        self.camera.set_viewport(width, height);
        self.plane.fit(width, height);
        self.resolution = Resolution::new(width, height, self.config.image_aspect);

        log::debug!(
            "resized to {width}x{height} @{}x, cover=({:.3}, {:.3})",
            self.viewport.pixel_ratio,
            self.resolution.cover.a1,
            self.resolution.cover.a2
        );
        Ok(())
    }

    pub fn on_mouse_move(&mut self, client_x: f64, client_y: f64) {
        self.mouse
            .on_move(client_x, client_y, self.viewport.width, self.viewport.height);
    }

    /// Advances time and draws one frame. Returns `false` once paused.
    pub fn frame(&mut self) -> bool {
        if !self.clock.tick() {
            return false;
        }
        self.renderer.render(&self.uniforms());
        true
    }

    fn uniforms(&self) -> FrameUniforms {
        let model_view = self.camera.view_matrix() * self.plane.model_matrix();
        FrameUniforms {
            projection: self.camera.projection_matrix().to_cols_array(),
            model_view: model_view.to_cols_array(),
            time: self.clock.time() as f32,
            resolution: self.resolution.to_vec4(),
            mouse: self.mouse.to_vec4(),
        }
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut AnimationClock {
        &mut self.clock
    }

    pub(super) fn loop_active(&self) -> bool {
        self.loop_active
    }

    pub(super) fn set_loop_active(&mut self, active: bool) {
        self.loop_active = active;
    }

    pub fn mouse(&self) -> &MouseState {
        &self.mouse
    }

    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }
}

fn container_size(container: &HtmlElement) -> (f64, f64) {
    (
        container.offset_width() as f64,
        container.offset_height() as f64,
    )
}
