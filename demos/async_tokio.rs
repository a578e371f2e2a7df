//! Async line splitting with tokio.
//!
//! Uses `tokio_util::compat` to adapt tokio's `AsyncRead` to the
//! runtime-agnostic `futures_io::AsyncRead` the stream is built on.
//!
//! Run with:
//!     cargo run --example async_tokio --features async-io -- <file>

use futures_util::StreamExt;
use tokio_util::compat::TokioAsyncReadCompatExt;

use splitrs::{Separator, lines_async};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_owned());
    let file = tokio::fs::File::open(&path).await?;

    let mut stream = lines_async(file.compat(), Separator::default());

    let mut count = 0usize;
    while let Some(line) = stream.next().await {
        let line = line?;
        count += 1;
        println!("{count:>4}: {line}");
    }

    Ok(())
}
