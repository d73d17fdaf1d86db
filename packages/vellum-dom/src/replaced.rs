use std::fmt;
use std::sync::Arc;

use kurbo::Rect;
use peniko::{Blob, Extend, Image, ImageFormat, ImageQuality};
use vellum_scene::{PaintCx, SceneError};

/// Embedded non-text content with its own intrinsic size and draw routine.
///
/// `draw` works in the intrinsic coordinate space `(0, 0)..(intrinsic_width, intrinsic_height)`;
/// the painter is responsible for clipping and scaling it into the box.
pub trait Replacement: fmt::Debug {
    fn intrinsic_width(&self) -> f64;
    fn intrinsic_height(&self) -> f64;
    fn draw(&self, cx: &mut PaintCx<'_>) -> Result<(), SceneError>;
}

/// A decoded raster image in RGBA8, non-premultiplied.
#[derive(Clone, PartialEq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub data: Arc<Vec<u8>>,
}

impl RasterImage {
    pub fn new(width: u32, height: u32, data: Arc<Vec<u8>>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Wraps the pixels as a peniko image brush extending the same way on both axes.
    pub fn to_peniko(&self, extend: Extend) -> Image {
        Image {
            data: Blob::new(self.data.clone()),
            format: ImageFormat::Rgba8,
            width: self.width,
            height: self.height,
            alpha: 1.0,
            x_extend: extend,
            y_extend: extend,
            quality: ImageQuality::Medium,
        }
    }
}

impl fmt::Debug for RasterImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RasterImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}

/// The replacement used for raster `<img>` content.
#[derive(Debug, Clone)]
pub struct ImageReplacement {
    image: RasterImage,
    brush: Image,
}

impl ImageReplacement {
    pub fn new(image: RasterImage) -> Self {
        let brush = image.to_peniko(Extend::Pad);
        Self { image, brush }
    }
}

impl Replacement for ImageReplacement {
    fn intrinsic_width(&self) -> f64 {
        f64::from(self.image.width)
    }

    fn intrinsic_height(&self) -> f64 {
        f64::from(self.image.height)
    }

    fn draw(&self, cx: &mut PaintCx<'_>) -> Result<(), SceneError> {
        let bounds = Rect::new(0.0, 0.0, self.intrinsic_width(), self.intrinsic_height());
        cx.fill_rect(bounds, &self.brush)
    }
}
