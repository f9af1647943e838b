//! Transport reader over a streaming response body

use std::pin::Pin;

use bytes::Bytes;
use futures::{Stream, StreamExt};

use super::decoder::Utf8StreamDecoder;
use crate::traits::HttpError;

/// Boxed byte stream as produced by [`crate::traits::HttpClient::post_stream`]
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, HttpError>> + Send>>;

/// Reads a chunked body and yields decoded text fragments.
///
/// The reader is the only owner of the raw byte stream and of the decoder's
/// carry-over buffer.
pub struct TransportReader {
    body: ByteStream,
    decoder: Utf8StreamDecoder,
    chunks_read: usize,
    done: bool,
}

impl TransportReader {
    pub fn new(body: ByteStream) -> Self {
        Self {
            body,
            decoder: Utf8StreamDecoder::new(),
            chunks_read: 0,
            done: false,
        }
    }

    /// Next decoded fragment.
    ///
    /// Returns `None` once the body is exhausted. Chunks that decode to
    /// nothing (only the start of a multi-byte character) are skipped.
    /// After an error the reader is finished.
    pub async fn next_text(&mut self) -> Option<Result<String, HttpError>> {
        if self.done {
            return None;
        }

        loop {
            match self.body.next().await {
                Some(Ok(chunk)) => {
                    self.chunks_read += 1;
                    let text = self.decoder.decode(&chunk);
                    if !text.is_empty() {
                        return Some(Ok(text));
                    }
                }
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e));
                }
                None => {
                    self.done = true;
                    let tail = self.decoder.finish();
                    return if tail.is_empty() { None } else { Some(Ok(tail)) };
                }
            }
        }
    }

    /// Number of chunks received so far
    pub fn chunks_read(&self) -> usize {
        self.chunks_read
    }
}

impl std::fmt::Debug for TransportReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransportReader")
            .field("chunks_read", &self.chunks_read)
            .field("done", &self.done)
            .finish()
    }
}
