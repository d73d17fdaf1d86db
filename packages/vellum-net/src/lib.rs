//! Image resources (filesystem, Data URIs) for vellum.
//!
//! Turns an image locator into a decoded [`RasterImage`]. Only PNG, GIF, JPEG and BMP are
//! accepted; network fetching is left to the embedder.

use std::path::PathBuf;
use std::sync::Arc;

use data_url::DataUrl;
use image::ImageFormat;
use mime::Mime;
use thiserror::Error;
use url::Url;
use vellum_dom::RasterImage;

#[derive(Error, Debug)]
pub enum ImageError {
    #[error("invalid image URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("{0:?} is not a usable file path")]
    InvalidPath(PathBuf),

    #[error("unsupported URL scheme {0:?}")]
    UnsupportedScheme(String),

    #[error("data URL parsing error: {0}")]
    DataUrl(String),

    #[error("invalid base64 in data URL")]
    DataUrlBase64,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported image type {0}")]
    UnsupportedFormat(String),

    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Resolves an image locator to decoded pixels.
pub trait ImageResolver {
    fn resolve(&self, uri: &str) -> Result<RasterImage, ImageError>;
}

/// Loads images from `data:` and `file:` URLs, or from bare file-system paths.
#[derive(Debug, Clone, Default)]
pub struct ImageLoader {
    base_url: Option<Url>,
}

impl ImageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// A loader resolving relative locators against `base`.
    pub fn with_base_url(base: &str) -> Result<Self, ImageError> {
        let base_url = Url::parse(base).map_err(|source| ImageError::InvalidUrl {
            url: base.to_owned(),
            source,
        })?;
        Ok(Self {
            base_url: Some(base_url),
        })
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// Resolves `uri` to an absolute URL. Relative locators without a base are taken as
    /// paths relative to the working directory.
    pub fn locate(&self, uri: &str) -> Result<Url, ImageError> {
        let parsed = match &self.base_url {
            Some(base) => base.join(uri),
            None => Url::parse(uri),
        };
        match parsed {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let path = std::path::absolute(uri)?;
                Url::from_file_path(&path).map_err(|()| ImageError::InvalidPath(path))
            }
            Err(source) => Err(ImageError::InvalidUrl {
                url: uri.to_owned(),
                source,
            }),
        }
    }

    /// Reads the raw bytes behind `uri`, along with the MIME type it declares, if any.
    pub fn fetch(&self, uri: &str) -> Result<(Option<Mime>, Vec<u8>), ImageError> {
        // Data URLs are processed from the raw string; URL serialization may re-encode them.
        if uri
            .get(..5)
            .is_some_and(|scheme| scheme.eq_ignore_ascii_case("data:"))
        {
            return read_data_url(uri);
        }

        let url = self.locate(uri)?;
        match url.scheme() {
            "data" => read_data_url(url.as_str()),
            "file" => {
                let path = url
                    .to_file_path()
                    .map_err(|()| ImageError::InvalidPath(PathBuf::from(url.path())))?;
                Ok((None, std::fs::read(path)?))
            }
            other => Err(ImageError::UnsupportedScheme(other.to_owned())),
        }
    }
}

impl ImageResolver for ImageLoader {
    fn resolve(&self, uri: &str) -> Result<RasterImage, ImageError> {
        #[cfg(feature = "tracing")]
        tracing::debug!("Loading image {}", uri);

        let (declared, bytes) = self.fetch(uri)?;
        let format = identify(declared.as_ref(), &bytes)?;
        decode(&bytes, format)
    }
}

fn read_data_url(input: &str) -> Result<(Option<Mime>, Vec<u8>), ImageError> {
    let data_url = DataUrl::process(input).map_err(|err| ImageError::DataUrl(format!("{err:?}")))?;
    let declared = data_url.mime_type();
    let mime = format!("{}/{}", declared.type_, declared.subtype)
        .parse::<Mime>()
        .ok();
    let (bytes, _fragment) = data_url
        .decode_to_vec()
        .map_err(|_| ImageError::DataUrlBase64)?;
    Ok((mime, bytes))
}

/// Maps an allow-listed MIME type to its decoder.
pub fn supported_format(mime: &Mime) -> Option<ImageFormat> {
    if mime.type_() != mime::IMAGE {
        return None;
    }
    let subtype = mime.subtype();
    if subtype == mime::PNG {
        Some(ImageFormat::Png)
    } else if subtype == mime::GIF {
        Some(ImageFormat::Gif)
    } else if subtype == mime::JPEG {
        Some(ImageFormat::Jpeg)
    } else if subtype == mime::BMP {
        Some(ImageFormat::Bmp)
    } else {
        None
    }
}

/// Decides which decoder to use: the declared MIME type wins, content sniffing is the
/// fallback when nothing was declared.
pub fn identify(declared: Option<&Mime>, bytes: &[u8]) -> Result<ImageFormat, ImageError> {
    if let Some(mime) = declared {
        return supported_format(mime)
            .ok_or_else(|| ImageError::UnsupportedFormat(mime.essence_str().to_owned()));
    }

    let sniffed = image::guess_format(bytes)
        .map_err(|_| ImageError::UnsupportedFormat("unrecognized content".to_owned()))?;
    match sniffed {
        ImageFormat::Png | ImageFormat::Gif | ImageFormat::Jpeg | ImageFormat::Bmp => Ok(sniffed),
        other => Err(ImageError::UnsupportedFormat(
            other.to_mime_type().to_owned(),
        )),
    }
}

/// Decodes `bytes` into RGBA8 pixels.
pub fn decode(bytes: &[u8], format: ImageFormat) -> Result<RasterImage, ImageError> {
    let rgba = image::load_from_memory_with_format(bytes, format)?.into_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(RasterImage::new(width, height, Arc::new(rgba.into_raw())))
}
