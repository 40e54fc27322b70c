//! Generate QR codes for a couple of well-known addresses
//!
//! Usage: cargo run --example generate

use wallet_qr::{QrOptions, WalletQrService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configure logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let service = WalletQrService::new();

    // Genesis block coinbase address
    let png = service
        .generate(
            Some("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa"),
            &QrOptions::default(),
        )
        .await?;
    println!("BTC data URI: {} bytes", png.len());

    let svg = service
        .generate(
            Some("0x32Be343B94f860124dC4fEe278FDCBD38C102D88"),
            &QrOptions {
                currency: Some("ETH".to_string()),
                format: Some("image/svg+xml".to_string()),
            },
        )
        .await?;
    std::fs::write("qr_output.svg", &svg)?;
    println!("ETH QR code saved to qr_output.svg");

    Ok(())
}
