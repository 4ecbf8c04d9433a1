//! Cursor state over the input and the primitives steps are written in.
//!
//! The scanner tracks three cursors:
//!
//! ```text
//!   input:  a  b  c     d  e  f
//!                 ^        ^
//!               start     pos
//! ```
//!
//! `input[start..pos]` is the pending span: consumed but not yet emitted or
//! ignored. `last_width` is the byte width of the most recent single-character
//! advance, which is what [`Scanner::backup`] retracts.
//!
//! # Invariant
//!
//! `start <= pos <= input.len()` after every operation, and `pos` always sits
//! on a UTF-8 character boundary. `backup` can never move `pos` before
//! `start`: every operation that moves `start` (or moves `pos` by more than
//! one character) clears `last_width`.

use std::collections::VecDeque;

use tracing::{debug, trace, warn};

use crate::sink::TokenSink;
use crate::step::Step;
use crate::token::{Span, Token, TokenKind};

/// Where emitted tokens go.
enum Sink<'a, K: TokenKind> {
    /// Held in the scanner until the driver pops them (lazy iteration).
    Queue(VecDeque<Token<K>>),
    /// Handed straight to an external sink.
    External(Box<dyn TokenSink<K> + 'a>),
}

/// Lexical scanner over a borrowed input.
///
/// Exclusively owned by the producer side of a scan; the consumer only ever
/// sees the tokens.
pub struct Scanner<'a, K: TokenKind> {
    /// Input name, used in diagnostics only.
    name: &'a str,
    input: &'a str,
    /// Start of the pending span.
    start: usize,
    /// Current read position.
    pos: usize,
    /// Width of the last single-character advance; 0 when backup is not allowed.
    last_width: usize,
    /// 1-based line number at `start`.
    line: usize,
    /// Tokens delivered to the sink.
    emitted: usize,
    /// An error token has been delivered.
    failed: bool,
    /// The sink refused a token.
    closed: bool,
    sink: Sink<'a, K>,
}

impl<'a, K: TokenKind> Scanner<'a, K> {
    /// Create a scanner that queues its tokens internally.
    ///
    /// Queued tokens are retrieved with [`next_queued`](Self::next_queued);
    /// the lazy [`Tokens`](crate::Tokens) driver does this for you.
    pub fn new(name: &'a str, input: &'a str) -> Self {
        Self::with(name, input, Sink::Queue(VecDeque::new()))
    }

    /// Create a scanner that hands every token to `sink` as it is emitted.
    pub fn with_sink(name: &'a str, input: &'a str, sink: impl TokenSink<K> + 'a) -> Self {
        Self::with(name, input, Sink::External(Box::new(sink)))
    }

    fn with(name: &'a str, input: &'a str, sink: Sink<'a, K>) -> Self {
        Scanner {
            name,
            input,
            start: 0,
            pos: 0,
            last_width: 0,
            line: 1,
            emitted: 0,
            failed: false,
            closed: false,
            sink,
        }
    }

    // ─── Primitives ─────────────────────────────────────────────────────

    /// Consume and return the next character.
    ///
    /// Returns `None` at end of input; `pos` is then unchanged and a
    /// following [`backup`](Self::backup) does nothing.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let Some(c) = self.input[self.pos..].chars().next() else {
            self.last_width = 0;
            return None;
        };
        let width = c.len_utf8();
        self.pos += width;
        self.last_width = width;
        Some(c)
    }

    /// Step back over the character returned by the last [`advance`](Self::advance).
    ///
    /// Only one character can be backed up. A second `backup` without an
    /// intervening `advance` is a no-op, as is a `backup` after `emit`,
    /// `ignore`, or any multi-character helper.
    #[inline]
    pub fn backup(&mut self) {
        self.pos -= self.last_width;
        self.last_width = 0;
    }

    /// Return the next character without consuming it.
    ///
    /// Touches no cursor, including the backup width.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Discard the pending span without emitting it.
    pub fn ignore(&mut self) {
        self.close_span();
    }

    /// Emit the pending span as a token of `kind`.
    ///
    /// The token's text is `input[start..pos]`. Afterwards `start == pos`.
    pub fn emit(&mut self, kind: K) {
        let text = self.pending().to_owned();
        self.deliver(kind, text);
    }

    /// Emit an error token carrying `message` and end the scan.
    ///
    /// Returns the terminal marker so a step can `return s.error(..)`.
    pub fn error(&mut self, message: impl Into<String>) -> Option<Step<K>> {
        self.deliver(K::ERROR, message.into());
        None
    }

    fn deliver(&mut self, kind: K, text: String) {
        let span = Span::new(self.start, self.pos);
        let line = self.line;
        self.close_span();

        if self.failed {
            warn!(
                name = self.name,
                kind = ?kind,
                span_start = span.start,
                span_end = span.end,
                "token emitted after an error; dropped"
            );
            return;
        }
        if self.closed {
            return;
        }

        trace!(
            kind = ?kind,
            span_start = span.start,
            span_end = span.end,
            line,
            "emit"
        );
        let token = Token::new(kind, text, span, line);
        match &mut self.sink {
            Sink::Queue(queue) => queue.push_back(token),
            Sink::External(sink) => {
                if sink.accept(token).is_err() {
                    debug!(name = self.name, pos = self.pos, "token sink closed");
                    self.closed = true;
                    return;
                }
            }
        }
        self.emitted += 1;
        if kind.is_error() {
            self.failed = true;
        }
    }

    /// Move `start` up to `pos`, keeping the line count in step.
    fn close_span(&mut self) {
        let span = &self.input.as_bytes()[self.start..self.pos];
        self.line += memchr::memchr_iter(b'\n', span).count();
        self.start = self.pos;
        self.last_width = 0;
    }

    // ─── Conditional advances ───────────────────────────────────────────

    /// Consume the next character if it is one of `valid`.
    pub fn accept(&mut self, valid: &str) -> bool {
        match self.peek() {
            Some(c) if valid.contains(c) => {
                self.advance();
                true
            }
            _ => false,
        }
    }

    /// Consume a run of characters from `valid`, returning how many.
    pub fn accept_run(&mut self, valid: &str) -> usize {
        self.accept_while(|c| valid.contains(c))
    }

    /// Consume characters while `pred` holds, returning how many.
    ///
    /// Afterwards `backup` retracts the last accepted character.
    pub fn accept_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let mut count = 0;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.advance();
            count += 1;
        }
        count
    }

    /// Consume `prefix` if the remaining input starts with it.
    pub fn accept_str(&mut self, prefix: &str) -> bool {
        if !self.starts_with(prefix) {
            return false;
        }
        self.pos += prefix.len();
        self.last_width = 0;
        true
    }

    /// Fast-forward to the next occurrence of `byte`, or to end of input.
    ///
    /// Returns `true` if `byte` was found; `pos` is then at the byte, not
    /// past it. A non-ASCII `byte` can only match inside a character, so it
    /// is never found and `pos` does not move.
    pub fn advance_to(&mut self, byte: u8) -> bool {
        self.last_width = 0;
        if !byte.is_ascii() {
            return false;
        }
        let rest = &self.input.as_bytes()[self.pos..];
        if let Some(offset) = memchr::memchr(byte, rest) {
            self.pos += offset;
            true
        } else {
            self.pos = self.input.len();
            false
        }
    }

    // ─── Inspection ─────────────────────────────────────────────────────

    /// Input name, for diagnostics.
    #[inline]
    pub fn name(&self) -> &'a str {
        self.name
    }

    #[inline]
    pub fn input(&self) -> &'a str {
        self.input
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// 1-based line number of `start`.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// The pending span `input[start..pos]`.
    #[inline]
    pub fn pending(&self) -> &'a str {
        &self.input[self.start..self.pos]
    }

    /// Input not yet consumed, `input[pos..]`.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.remaining().starts_with(prefix)
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Number of tokens delivered so far.
    #[inline]
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Returns `true` once an error token has been delivered.
    #[inline]
    pub fn has_failed(&self) -> bool {
        self.failed
    }

    /// Returns `true` once the consumer will take no more tokens.
    ///
    /// Long-running steps that emit rarely can poll this to stop early.
    pub fn is_closed(&self) -> bool {
        self.closed
            || match &self.sink {
                Sink::Queue(_) => false,
                Sink::External(sink) => sink.is_closed(),
            }
    }

    /// Take the oldest token queued by a scanner made with [`new`](Self::new).
    ///
    /// Always `None` for scanners made with [`with_sink`](Self::with_sink),
    /// whose tokens have already been handed on.
    pub fn next_queued(&mut self) -> Option<Token<K>> {
        match &mut self.sink {
            Sink::Queue(queue) => queue.pop_front(),
            Sink::External(_) => None,
        }
    }
}
