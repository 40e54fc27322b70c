use async_trait::async_trait;
use base64::prelude::*;
use image::{DynamicImage, GrayImage, Luma};
use qrcode::render::svg;
use qrcode::{Color, EcLevel, QrCode};
use serde::Deserialize;
use std::io::Cursor;
use tracing::debug;

/// Shape of the artifact handed back to the caller.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    #[default]
    Png,
    Jpeg,
    Svg,
}

impl OutputFormat {
    /// Resolve a MIME type string. Unknown values fall back to PNG so that
    /// callers sending a format we don't know still get a scannable image.
    pub fn from_mime(mime: &str) -> Self {
        match mime {
            "image/svg+xml" => Self::Svg,
            "image/jpeg" => Self::Jpeg,
            _ => Self::Png,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Svg => "image/svg+xml",
        }
    }
}

/// What the service asks of a renderer: target format plus QR error
/// correction level.
#[derive(Clone, Copy, Debug)]
pub struct RenderRequest {
    pub format: OutputFormat,
    pub ec_level: EcLevel,
}

impl RenderRequest {
    /// Request at level H, tolerating up to ~30% symbol damage.
    pub fn high(format: OutputFormat) -> Self {
        Self {
            format,
            ec_level: EcLevel::H,
        }
    }
}

/// Failures inside a renderer. Callers only surface the message.
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("{0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error("{0}")]
    Image(#[from] image::ImageError),

    #[error("{0}")]
    Other(String),
}

/// Narrow interface onto the QR encoding backend.
///
/// Consumers never see symbol generation details, only the two artifact
/// shapes they can request.
#[async_trait]
pub trait QrRenderer: Send + Sync {
    /// Render `payload` as a raster image wrapped in a `data:` URI.
    async fn render_as_data_url(
        &self,
        payload: &str,
        request: &RenderRequest,
    ) -> Result<String, RenderError>;

    /// Render `payload` as inline markup.
    async fn render_as_string(
        &self,
        payload: &str,
        request: &RenderRequest,
    ) -> Result<String, RenderError>;
}

/// Renderer settings. The defaults produce a comfortably scannable symbol.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct RenderSettings {
    /// Pixels per module in raster output
    pub scale: u32,

    /// Quiet zone width around the symbol, in modules
    pub margin: u32,

    /// Minimum width and height of SVG output, in pixels
    pub min_dimensions: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            scale: 8,
            margin: 4,
            min_dimensions: 200,
        }
    }
}

/// QR renderer backed by the `qrcode` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct QrCodeRenderer {
    settings: RenderSettings,
}

impl QrCodeRenderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    /// Blow the module grid up into a grayscale image with a quiet zone.
    fn rasterize(&self, code: &QrCode) -> GrayImage {
        let modules = code.to_colors();
        let width = code.width() as u32;
        let RenderSettings { scale, margin, .. } = self.settings;
        let size = (width + 2 * margin) * scale;

        let mut image = GrayImage::from_pixel(size, size, Luma([255u8]));
        for (i, module) in modules.iter().enumerate() {
            if *module != Color::Dark {
                continue;
            }
            let x = (i as u32 % width + margin) * scale;
            let y = (i as u32 / width + margin) * scale;
            for dy in 0..scale {
                for dx in 0..scale {
                    image.put_pixel(x + dx, y + dy, Luma([0u8]));
                }
            }
        }
        image
    }
}

#[async_trait]
impl QrRenderer for QrCodeRenderer {
    async fn render_as_data_url(
        &self,
        payload: &str,
        request: &RenderRequest,
    ) -> Result<String, RenderError> {
        let code = QrCode::with_error_correction_level(payload, request.ec_level)?;
        let image = self.rasterize(&code);

        // A vector format on the raster path degrades to PNG
        let format = match request.format {
            OutputFormat::Jpeg => OutputFormat::Jpeg,
            _ => OutputFormat::Png,
        };
        let image_format = match format {
            OutputFormat::Jpeg => image::ImageFormat::Jpeg,
            _ => image::ImageFormat::Png,
        };

        let mut bytes = Vec::new();
        DynamicImage::ImageLuma8(image).write_to(&mut Cursor::new(&mut bytes), image_format)?;
        debug!(
            modules = code.width(),
            bytes = bytes.len(),
            "Rasterized QR symbol"
        );

        Ok(format!(
            "data:{};base64,{}",
            format.mime_type(),
            BASE64_STANDARD.encode(&bytes)
        ))
    }

    async fn render_as_string(
        &self,
        payload: &str,
        request: &RenderRequest,
    ) -> Result<String, RenderError> {
        let code = QrCode::with_error_correction_level(payload, request.ec_level)?;
        let min = self.settings.min_dimensions;
        let markup = code
            .render()
            .min_dimensions(min, min)
            .dark_color(svg::Color("#000000"))
            .light_color(svg::Color("#ffffff"))
            .build();

        // Drop the XML declaration so the markup can be inlined directly
        Ok(match markup.find("<svg") {
            Some(start) => markup[start..].to_string(),
            None => markup,
        })
    }
}
