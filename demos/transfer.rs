//! Example showing a byte transfer with percent, rate and remaining time.
//!
//! Run with `RUST_LOG=glyphbar=debug` to see the ticker lifecycle on stderr.

use color_eyre::Result;
use glyphbar::{Bar, BarColor, Color};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let total: i64 = 48 * 1024 * 1024;
    let bar = Bar::builder(total)
        .describe("download")
        .bytes(true)
        .percent(true)
        .duration(true)
        .color(BarColor {
            describe: Some(Color::Blue),
            graph: Some(Color::Green),
            percent: Some(Color::Yellow),
            duration: Some(Color::Purple),
            ..BarColor::default()
        })
        .build();

    // Simulate an uneven transfer.
    let mut current = 0;
    let mut chunk = 256 * 1024;
    while current < total {
        current = (current + chunk).min(total);
        bar.update(current);
        chunk = if chunk > 2 * 1024 * 1024 { 256 * 1024 } else { chunk + 64 * 1024 };
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    bar.finish();

    println!("Transferred {}.", glyphbar::format_bytes(total as u64));
    Ok(())
}
