//! The consumer side of a concurrent scan.

use std::iter::FusedIterator;
use std::thread::JoinHandle;

use crossbeam::channel::{select, Receiver, Sender};
use statelex_core::{RunSummary, SinkClosed, Token, TokenKind, TokenSink};

use crate::cancel::CancelToken;
use crate::error::ScanError;

/// Producer end: the token sink the scanner writes into.
pub(crate) struct ChannelSink<K: TokenKind> {
    tx: Sender<Token<K>>,
    cancel: CancelToken,
}

impl<K: TokenKind> ChannelSink<K> {
    pub(crate) fn new(tx: Sender<Token<K>>, cancel: CancelToken) -> Self {
        ChannelSink { tx, cancel }
    }
}

impl<K: TokenKind> TokenSink<K> for ChannelSink<K> {
    fn accept(&mut self, token: Token<K>) -> Result<(), SinkClosed> {
        if self.cancel.is_cancelled() {
            return Err(SinkClosed);
        }
        // Blocks while a bounded stream is full, unless the consumer cancels
        // or goes away.
        select! {
            send(self.tx, token) -> sent => sent.map_err(|_| SinkClosed),
            recv(self.cancel.wake()) -> _ => Err(SinkClosed),
        }
    }

    fn is_closed(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

/// Cancels the scan when the stream is dropped.
struct CancelOnDrop(CancelToken);

impl Drop for CancelOnDrop {
    fn drop(&mut self) {
        self.0.cancel();
    }
}

/// Tokens of a scan running on another thread, in emission order.
///
/// Iteration blocks until the next token arrives and ends once the producer
/// has finished and every token has been received. Dropping the stream
/// cancels the scan.
pub struct TokenStream<K: TokenKind> {
    name: String,
    rx: Receiver<Token<K>>,
    guard: CancelOnDrop,
    producer: JoinHandle<RunSummary>,
}

impl<K: TokenKind> TokenStream<K> {
    pub(crate) fn new(
        name: String,
        rx: Receiver<Token<K>>,
        cancel: CancelToken,
        producer: JoinHandle<RunSummary>,
    ) -> Self {
        TokenStream {
            name,
            rx,
            guard: CancelOnDrop(cancel),
            producer,
        }
    }

    /// Name of the input being scanned.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Abandon the scan. Tokens already in the stream can still be received.
    pub fn cancel(&self) {
        self.guard.0.cancel();
    }

    /// A handle that cancels this scan from elsewhere.
    pub fn cancel_token(&self) -> CancelToken {
        self.guard.0.clone()
    }

    pub fn is_cancelled(&self) -> bool {
        self.guard.0.is_cancelled()
    }

    /// Returns `true` once the producer thread has exited. Tokens may still
    /// be waiting in the stream.
    pub fn is_finished(&self) -> bool {
        self.producer.is_finished()
    }

    /// Stop consuming and wait for the producer to exit.
    ///
    /// Tokens not yet received are discarded. If the producer was still
    /// running, it is cancelled and the outcome is
    /// [`Outcome::Cancelled`](statelex_core::Outcome::Cancelled). A producer
    /// that had already finished reports how the scan ended on its own, even
    /// if tokens were left unread.
    pub fn join(self) -> Result<RunSummary, ScanError> {
        let TokenStream {
            name,
            rx,
            guard,
            producer,
        } = self;
        drop(guard);
        drop(rx);
        producer
            .join()
            .map_err(|_| ScanError::ProducerPanicked { name })
    }
}

impl<K: TokenKind> Iterator for TokenStream<K> {
    type Item = Token<K>;

    fn next(&mut self) -> Option<Token<K>> {
        self.rx.recv().ok()
    }
}

impl<K: TokenKind> FusedIterator for TokenStream<K> {}
