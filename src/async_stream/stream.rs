//! Async stream adapter for line splitting.
//!
//! Uses `futures_io::AsyncRead`, so it works with tokio (via
//! `tokio_util::compat`), async-std, smol, or any futures-compatible
//! runtime.
//!
//! # Example
//!
//! ```ignore
//! use futures_util::StreamExt;
//! use futures_io::AsyncRead;
//! use splitrs::{Separator, lines_async};
//!
//! async fn demo<R: AsyncRead>(reader: R) -> Result<(), splitrs::SplitError> {
//!     let mut stream = lines_async(reader, Separator::default());
//!
//!     while let Some(line) = stream.next().await {
//!         println!("{}", line?);
//!     }
//!     Ok(())
//! }
//! ```

use std::collections::VecDeque;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use futures_io::AsyncRead;
use pin_project_lite::pin_project;

use crate::error::SplitError;
use crate::separator::Separator;
use crate::splitter::Splitter;

/// Read granularity for the async adapter.
const READ_CHUNK_SIZE: usize = 8192;

pin_project! {
    /// A stream that yields lines from an async reader.
    ///
    /// Created by [`lines_async`]. Yields `Result<String, SplitError>`;
    /// after an I/O error or end of stream the stream keeps returning
    /// `Poll::Ready(None)`. Each read is decoded as UTF-8 independently,
    /// with the same multi-byte boundary caveat as the blocking adapter.
    pub struct LineStream<R> {
        #[pin]
        reader: R,
        splitter: Splitter,
        queue: VecDeque<String>,
        buf: Vec<u8>,
        finished: bool,
    }
}

impl<R: AsyncRead> Stream for LineStream<R> {
    type Item = Result<String, SplitError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            if let Some(line) = this.queue.pop_front() {
                return Poll::Ready(Some(Ok(line)));
            }
            if *this.finished {
                return Poll::Ready(None);
            }

            match this.reader.as_mut().poll_read(cx, this.buf) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Err(e)) => {
                    *this.finished = true;
                    return Poll::Ready(Some(Err(e.into())));
                }
                Poll::Ready(Ok(0)) => {
                    *this.finished = true;
                    let queue = &mut *this.queue;
                    this.splitter
                        .finish(&mut |line| queue.push_back(line.to_owned()));
                }
                Poll::Ready(Ok(n)) => {
                    let text = String::from_utf8_lossy(&this.buf[..n]);
                    let queue = &mut *this.queue;
                    this.splitter
                        .append(&text, &mut |line| queue.push_back(line.to_owned()));
                }
            }
        }
    }
}

/// Creates a line stream from an async reader.
///
/// Uses `futures_io::AsyncRead` for runtime-agnostic async I/O.
///
/// # Runtime Compatibility
///
/// For tokio users, `tokio_util::compat` converts `tokio::io::AsyncRead`
/// into `futures_io::AsyncRead`:
///
/// ```ignore
/// use tokio_util::compat::TokioAsyncReadCompatExt;
/// use splitrs::{Separator, lines_async};
///
/// let file = tokio::fs::File::open("app.log").await?;
/// let stream = lines_async(file.compat(), Separator::default());
/// ```
///
/// # Arguments
///
/// * `reader` - An async reader implementing `AsyncRead`
/// * `separator` - Anything convertible to [`Separator`]
///
/// # Returns
///
/// A [`LineStream`] implementing `Stream<Item = Result<String, SplitError>>`
pub fn lines_async<R: AsyncRead>(reader: R, separator: impl Into<Separator>) -> LineStream<R> {
    LineStream {
        reader,
        splitter: Splitter::new(separator.into()),
        queue: VecDeque::new(),
        buf: vec![0u8; READ_CHUNK_SIZE],
        finished: false,
    }
}
