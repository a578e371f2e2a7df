//! Basic synchronous line splitting with the sink-driven API.
//!
//! Run with:
//!     cargo run --example sync_basic

use splitrs::LineBuffer;

fn main() {
    // Chunks as a transport might deliver them: split mid-line, mixed
    // terminators, a CRLF pair broken across two reads.
    let chunks = [
        "2024-05-01T10:00:00 starting up\n2024-05-01T10:",
        "00:01 listening on :8080\r",
        "\n2024-05-01T10:00:02 ready",
    ];

    let mut total = 0usize;
    {
        let mut buffer = LineBuffer::new(|line: &str| {
            total += 1;
            println!("line: {line:?}");
        });

        for chunk in chunks {
            buffer.append(chunk);
            println!("  ({} chars pending)", buffer.size());
        }

        // End of stream: emit the unterminated remainder.
        buffer.flush();
    }

    println!("\nTotal: {total} lines");
}
