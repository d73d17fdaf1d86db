//! Options for a paint pass.

use kurbo::{Affine, Rect, Size};
use vellum_net::{ImageError, ImageLoader};

const DEFAULT_VIEWPORT: Size = Size::new(800.0, 600.0);

/// Options used when painting a page.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintConfig {
    /// Size of the initial clip, in CSS px. This is also the area `background-attachment: fixed`
    /// positions against.
    pub viewport: Size,
    /// Device pixels per CSS px
    pub scale: f64,
    /// The base url which relative image locators are resolved against
    pub base_url: Option<String>,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            viewport: DEFAULT_VIEWPORT,
            scale: 1.0,
            base_url: None,
        }
    }
}

impl PaintConfig {
    pub fn builder() -> PaintConfigBuilder {
        PaintConfigBuilder::default()
    }

    pub fn viewport_rect(&self) -> Rect {
        Rect::from_origin_size((0.0, 0.0), self.viewport)
    }

    /// Maps CSS px to device pixels.
    pub fn base_transform(&self) -> Affine {
        Affine::scale(self.scale)
    }

    /// An image loader honouring [`base_url`](Self::base_url).
    pub fn image_loader(&self) -> Result<ImageLoader, ImageError> {
        match &self.base_url {
            Some(base) => ImageLoader::with_base_url(base),
            None => Ok(ImageLoader::new()),
        }
    }
}

#[derive(Debug, Default)]
pub struct PaintConfigBuilder {
    config: PaintConfig,
}

impl PaintConfigBuilder {
    pub fn viewport(mut self, width: f64, height: f64) -> Self {
        self.config.viewport = Size::new(width, height);
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.config.scale = scale;
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    pub fn build(self) -> PaintConfig {
        self.config
    }
}
