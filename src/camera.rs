use glam::{Mat4, Vec3};

const NEAR: f32 = -1000.0;
const FAR: f32 = 1000.0;

/// Orthographic camera framing a `width` x `height` pixel viewport.
///
/// The frustum size is the viewport height, so one world unit maps to one
/// CSS pixel and a plane of the viewport's size fills the screen exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct OrthographicCamera {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
}

impl OrthographicCamera {
    pub fn new(width: f64, height: f64) -> Self {
        let mut camera = Self {
            left: 0.0,
            right: 0.0,
            top: 0.0,
            bottom: 0.0,
            near: NEAR,
            far: FAR,
            position: Vec3::new(0.0, 0.0, 2.0),
        };
        camera.set_viewport(width, height);
        camera
    }

    /// Re-frames the frustum around a new viewport size, at least 1x1.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        let (width, height) = (width.max(1.0), height.max(1.0));
        let frustum_size = height as f32;
        let aspect = (width / height) as f32;
        self.left = frustum_size * aspect / -2.0;
        self.right = frustum_size * aspect / 2.0;
        self.top = frustum_size / 2.0;
        self.bottom = frustum_size / -2.0;
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::orthographic_rh_gl(self.left, self.right, self.bottom, self.top, self.near, self.far)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(-self.position)
    }
}
