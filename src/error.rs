/// Error type for the service surface.
///
/// Every failure is terminal. Nothing is retried or logged internally; the
/// caller gets exactly one of these.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// No address was given at all.
    #[error("Wallet address is required.")]
    MissingAddress,

    /// The requested currency has no known URI scheme or address format.
    #[error("Unsupported currency. Please use \"BTC\" or \"ETH\".")]
    UnsupportedCurrency,

    /// The address does not match the requested currency's format.
    #[error("Invalid wallet address")]
    InvalidAddress,

    /// The encoding backend failed; carries its message.
    #[error("Failed to generate QR code: {0}")]
    Rendering(String),
}
