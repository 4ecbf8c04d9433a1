//! The seam between the scanner and whatever delivers tokens to a consumer.

use std::fmt;

use crate::token::{Token, TokenKind};

/// The consumer will accept no more tokens.
///
/// Returned by [`TokenSink::accept`] when the receiving side has gone away or
/// the scan was cancelled. The scanner stops emitting and the step machine
/// stops at the next step boundary.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SinkClosed;

impl fmt::Display for SinkClosed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("token sink closed")
    }
}

impl std::error::Error for SinkClosed {}

/// Destination for emitted tokens.
///
/// Tokens arrive in emission order and must be delivered in that order.
/// Implementations may block in `accept` to apply backpressure.
pub trait TokenSink<K: TokenKind> {
    /// Take ownership of one token.
    fn accept(&mut self, token: Token<K>) -> Result<(), SinkClosed>;

    /// Returns `true` once the sink will refuse every further token.
    ///
    /// Polled by the step machine between steps so that a cancelled scan
    /// stops even while its steps are not emitting.
    fn is_closed(&self) -> bool {
        false
    }
}

impl<K: TokenKind> TokenSink<K> for Vec<Token<K>> {
    #[inline]
    fn accept(&mut self, token: Token<K>) -> Result<(), SinkClosed> {
        self.push(token);
        Ok(())
    }
}

impl<K: TokenKind, S: TokenSink<K> + ?Sized> TokenSink<K> for &mut S {
    #[inline]
    fn accept(&mut self, token: Token<K>) -> Result<(), SinkClosed> {
        (**self).accept(token)
    }

    #[inline]
    fn is_closed(&self) -> bool {
        (**self).is_closed()
    }
}
