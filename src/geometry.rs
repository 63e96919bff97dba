use glam::{Mat4, Vec3};

/// Vertices addressable by a `u16` index buffer.
pub const MAX_VERTICES: usize = u16::MAX as usize + 1;

/// Indexed plane in the XY plane, centred on the origin.
///
/// Vertices run row by row from the top-left corner; uv `(0, 0)` is the
/// bottom-left corner.
///
/// Grids larger than [`MAX_VERTICES`] are shrunk: width segments are capped
/// at 32767, then height segments are reduced until the grid fits.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneGeometry {
    pub width: f32,
    pub height: f32,
    pub positions: Vec<f32>,
    pub uvs: Vec<f32>,
    pub indices: Vec<u16>,
}

impl PlaneGeometry {
    pub fn new(width: f32, height: f32, width_segments: u16, height_segments: u16) -> Self {
        let grid_x = (width_segments.max(1) as usize).min(MAX_VERTICES / 2 - 1);
        let grid_y = (height_segments.max(1) as usize).min(MAX_VERTICES / (grid_x + 1) - 1);
        if grid_x != width_segments.max(1) as usize || grid_y != height_segments.max(1) as usize {
            log::warn!(
                "plane grid {width_segments}x{height_segments} exceeds u16 indices; using {grid_x}x{grid_y}"
            );
        }
        let grid_x1 = grid_x + 1;
        let grid_y1 = grid_y + 1;

        let segment_width = width / grid_x as f32;
        let segment_height = height / grid_y as f32;

        let mut positions = Vec::with_capacity(grid_x1 * grid_y1 * 3);
        let mut uvs = Vec::with_capacity(grid_x1 * grid_y1 * 2);
        for iy in 0..grid_y1 {
            let y = iy as f32 * segment_height - height / 2.0;
            for ix in 0..grid_x1 {
                let x = ix as f32 * segment_width - width / 2.0;
                positions.extend_from_slice(&[x, -y, 0.0]);
                uvs.extend_from_slice(&[
                    ix as f32 / grid_x as f32,
                    1.0 - iy as f32 / grid_y as f32,
                ]);
            }
        }

        let mut indices = Vec::with_capacity(grid_x * grid_y * 6);
        for iy in 0..grid_y {
            for ix in 0..grid_x {
                let a = (ix + grid_x1 * iy) as u16;
                let b = (ix + grid_x1 * (iy + 1)) as u16;
                let c = (ix + 1 + grid_x1 * (iy + 1)) as u16;
                let d = (ix + 1 + grid_x1 * iy) as u16;
                indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }

        Self {
            width,
            height,
            positions,
            uvs,
            indices,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }
}

/// The single full-screen plane plus the scale that keeps it covering the
/// viewport after resizes.
#[derive(Debug, Clone)]
pub struct PlaneMesh {
    pub geometry: PlaneGeometry,
    scale: Vec3,
}

impl PlaneMesh {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            geometry: PlaneGeometry::new(width.max(1.0) as f32, height.max(1.0) as f32, 1, 1),
            scale: Vec3::ONE,
        }
    }

    /// Scales the plane so it spans a `width` x `height` viewport.
    pub fn fit(&mut self, width: f64, height: f64) {
        self.scale = Vec3::new(
            width.max(1.0) as f32 / self.geometry.width,
            height.max(1.0) as f32 / self.geometry.height,
            1.0,
        );
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale(self.scale)
    }
}
