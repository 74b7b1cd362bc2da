//! Scan for nearby BLE advertisements and print a decoded report per device.
//!
//! Run with: cargo run --example scan

use blescout::{AdvertisementRecord, BleScanner, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("blescout=debug".parse().unwrap()),
        )
        .init();

    let scanner = BleScanner::new().await?;
    let mut events = scanner.subscribe();

    scanner.start_scanning().await?;
    println!("Scanning for BLE advertisements. Press Ctrl+C to stop.\n");

    loop {
        tokio::select! {
            event = events.recv() => {
                match event {
                    Ok(event) => {
                        let record = AdvertisementRecord::from_event(&event);
                        println!("{}", record.render());
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(missed)) => {
                        eprintln!("(lagging, {} events dropped)", missed);
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!("\nStopping scan.");
                break;
            }
        }
    }

    scanner.stop_scanning().await?;
    Ok(())
}
