/// CSS size of the rendering surface plus the pixel ratio it is drawn at.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub pixel_ratio: f64,
}

impl Viewport {
    /// `device_pixel_ratio` is capped at `max_pixel_ratio` to bound fill rate
    /// on dense displays.
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64, max_pixel_ratio: f64) -> Self {
        let dpr = if device_pixel_ratio > 0.0 { device_pixel_ratio } else { 1.0 };
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            pixel_ratio: dpr.min(max_pixel_ratio.max(1.0)),
        }
    }

    /// Size of the drawing buffer in device pixels, never smaller than 1x1.
    pub fn drawing_buffer_size(&self) -> (u32, u32) {
        let w = (self.width * self.pixel_ratio).round().max(1.0);
        let h = (self.height * self.pixel_ratio).round().max(1.0);
        (w as u32, h as u32)
    }
}
