#![no_main]

use std::cell::RefCell;

use libfuzzer_sys::fuzz_target;
use splitrs::{LineBuffer, Separator};

fn split_all(separator: Separator, input: &str) -> Vec<String> {
    let out = RefCell::new(Vec::new());
    let mut buffer =
        LineBuffer::with_separator(|line: &str| out.borrow_mut().push(line.to_owned()), separator);

    buffer.append(input);
    buffer.flush();
    assert_eq!(buffer.size(), 0, "flush must drain the buffer");

    // Idempotence: a second flush must add nothing.
    let emitted = out.borrow().len();
    buffer.flush();
    assert_eq!(out.borrow().len(), emitted, "second flush must be silent");

    drop(buffer);
    out.into_inner()
}

fuzz_target!(|data: &str| {
    // Literal strategy: rejoining with the separator must reconstruct the
    // input exactly (a single trailing separator leaves no trailing empty
    // line, since flushing an empty buffer emits nothing).
    for sep in ["\n", ";", "--", "--break--"] {
        let lines = split_all(Separator::literal(sep), data);
        let expected = data.strip_suffix(sep).unwrap_or(data);
        assert_eq!(lines.join(sep), expected, "literal {:?} lost data", sep);
        for line in &lines {
            assert!(!line.contains(sep), "line still contains separator");
        }
    }

    // Default pattern: every terminator collapses to one line break, so the
    // lines rejoined with LF must agree with a reference normalization.
    let lines = split_all(Separator::default(), data);
    let normalized = data.replace("\r\n", "\n").replace('\r', "\n");
    let expected = normalized.strip_suffix('\n').unwrap_or(&normalized);
    assert_eq!(lines.join("\n"), expected, "pattern lost data");
});
