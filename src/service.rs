use crate::currency::Currency;
use crate::error::Error;
use crate::render::{OutputFormat, QrCodeRenderer, QrRenderer, RenderRequest};
use serde::Deserialize;
use tracing::{debug, instrument};

/// Options accepted by [`WalletQrService::generate`].
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct QrOptions {
    /// Currency ticker, matched case-insensitively. Defaults to BTC.
    pub currency: Option<String>,

    /// MIME type of the artifact to produce. Defaults to image/png.
    pub format: Option<String>,
}

/// Turns wallet addresses into scannable QR code artifacts.
///
/// Holds no mutable state, so one instance can serve concurrent calls.
#[derive(Clone, Debug, Default)]
pub struct WalletQrService<R = QrCodeRenderer> {
    renderer: R,
}

impl WalletQrService<QrCodeRenderer> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: QrRenderer> WalletQrService<R> {
    /// Use a custom encoding backend.
    pub fn with_renderer(renderer: R) -> Self {
        Self { renderer }
    }

    /// Validate `address` for the requested currency and encode it as a QR
    /// code in the requested format.
    ///
    /// PNG and JPEG artifacts come back as `data:` URIs, SVG as inline
    /// markup. A single rendering attempt is made; failures are not retried.
    #[instrument(skip(self), level = "debug")]
    pub async fn generate(
        &self,
        address: Option<&str>,
        options: &QrOptions,
    ) -> Result<String, Error> {
        let address = match address {
            Some(address) if !address.is_empty() => address,
            _ => return Err(Error::MissingAddress),
        };

        let currency = match &options.currency {
            Some(ticker) => Currency::try_parse(ticker).ok_or(Error::UnsupportedCurrency)?,
            None => Currency::Btc,
        };

        if !currency.is_valid_address(address) {
            return Err(Error::InvalidAddress);
        }

        let payload = format!("{}:{}", currency.uri_scheme(), address);
        let format = options
            .format
            .as_deref()
            .map(OutputFormat::from_mime)
            .unwrap_or_default();
        debug!(?currency, ?format, "Encoding payment URI");

        let request = RenderRequest::high(format);
        let rendered = match format {
            OutputFormat::Svg => self.renderer.render_as_string(&payload, &request).await,
            OutputFormat::Png | OutputFormat::Jpeg => {
                self.renderer.render_as_data_url(&payload, &request).await
            }
        };

        rendered.map_err(|error| Error::Rendering(error.to_string()))
    }
}
