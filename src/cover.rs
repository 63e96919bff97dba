//! Image-cover aspect correction.
//!
//! The fragment shader samples a source image of fixed aspect ratio and
//! needs to fill the whole viewport without stretching it. The two factors
//! computed here shrink one uv axis around the centre so the image is
//! cropped, never distorted.

/// Aspect ratio (height / width) of the source image the effect is authored for.
pub const DEFAULT_IMAGE_ASPECT: f64 = 2400.0 / 1920.0;

/// Per-axis uv scale factors; exactly one of them is `1.0`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CoverFactors {
    pub a1: f64,
    pub a2: f64,
}

/// Computes the cover factors for a `width` x `height` viewport.
///
/// A viewport taller than the image crops horizontally (`a1 < 1`), a wider
/// one crops vertically (`a2 < 1`). Empty viewports return `(1, 1)`.
pub fn cover_factors(width: f64, height: f64, image_aspect: f64) -> CoverFactors {
    if !(width > 0.0 && height > 0.0 && image_aspect > 0.0) {
        return CoverFactors { a1: 1.0, a2: 1.0 };
    }

    if height / width > image_aspect {
        CoverFactors {
            a1: (width / height) * image_aspect,
            a2: 1.0,
        }
    } else {
        CoverFactors {
            a1: 1.0,
            a2: (height / width) / image_aspect,
        }
    }
}

/// Value of the `resolution` uniform: `(width, height, a1, a2)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Resolution {
    pub width: f64,
    pub height: f64,
    pub cover: CoverFactors,
}

impl Resolution {
    pub fn new(width: f64, height: f64, image_aspect: f64) -> Self {
        Self {
            width,
            height,
            cover: cover_factors(width, height, image_aspect),
        }
    }

    pub fn to_vec4(&self) -> [f32; 4] {
        [
            self.width as f32,
            self.height as f32,
            self.cover.a1 as f32,
            self.cover.a2 as f32,
        ]
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            cover: CoverFactors { a1: 1.0, a2: 1.0 },
        }
    }
}
