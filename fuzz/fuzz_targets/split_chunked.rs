#![no_main]

use std::cell::RefCell;

use libfuzzer_sys::fuzz_target;
use splitrs::{LineBuffer, Separator};

fn split_chunks(separator: Separator, chunks: &[&str]) -> Vec<String> {
    let out = RefCell::new(Vec::new());
    let mut buffer =
        LineBuffer::with_separator(|line: &str| out.borrow_mut().push(line.to_owned()), separator);
    for chunk in chunks {
        buffer.append(*chunk);
    }
    buffer.flush();
    drop(buffer);
    out.into_inner()
}

/// Cuts `text` into chunks whose widths (in characters) are driven by the
/// fuzzer, so every partitioning of every input gets exercised eventually.
fn partition<'a>(text: &'a str, widths: &[u8]) -> Vec<&'a str> {
    let mut chunks = Vec::new();
    let mut rest = text;
    let mut i = 0usize;
    while !rest.is_empty() {
        let width = widths.get(i).map(|w| (*w as usize % 7) + 1).unwrap_or(8);
        let cut = rest
            .char_indices()
            .nth(width)
            .map(|(pos, _)| pos)
            .unwrap_or(rest.len());
        let (head, tail) = rest.split_at(cut);
        chunks.push(head);
        rest = tail;
        i += 1;
    }
    chunks
}

fuzz_target!(|input: (String, Vec<u8>)| {
    let (text, widths) = input;
    let chunks = partition(&text, &widths);

    // Chunk-boundary invariance: any partitioning of the same input must
    // produce the same lines as delivering it in one call.
    for separator in [
        Separator::default(),
        Separator::literal("\n"),
        Separator::literal("--"),
    ] {
        let whole = split_chunks(separator.clone(), &[&text]);
        let split = split_chunks(separator, &chunks);
        assert_eq!(whole, split, "partitioning changed the output");
    }
});
