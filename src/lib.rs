//! Scannable QR codes for cryptocurrency wallet addresses.
//!
//! Validates an address, wraps it in its payment URI scheme (`bitcoin:` or
//! `ethereum:`) and encodes it as a QR code artifact: a `data:` URI for PNG
//! and JPEG output, inline markup for SVG.
//!
//! ```no_run
//! use wallet_qr::{QrOptions, WalletQrService};
//!
//! # async fn demo() -> Result<(), wallet_qr::Error> {
//! let service = WalletQrService::new();
//! let artifact = service
//!     .generate(
//!         Some("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa"),
//!         &QrOptions::default(),
//!     )
//!     .await?;
//! assert!(artifact.starts_with("data:image/png;base64,"));
//! # Ok(())
//! # }
//! ```

pub mod currency;
pub mod error;
pub mod render;
pub mod service;

pub use currency::Currency;
pub use error::Error;
pub use render::{
    OutputFormat, QrCodeRenderer, QrRenderer, RenderError, RenderRequest, RenderSettings,
};
pub use service::{QrOptions, WalletQrService};
