//! State-function lexing with a concurrent token stream.
//!
//! Builds on [`statelex_core`]: a [`Lexer`] runs a grammar's scanning steps
//! on a dedicated thread and hands tokens to the consumer through a crossbeam
//! channel. The consumer iterates the [`TokenStream`], and may abandon the
//! scan at any time with [`TokenStream::cancel`] or by dropping the stream.
//!
//! ```text
//! let stream = Lexer::new("query.txt", source, step!(lex_text))
//!     .with_config(ScanConfig::new().bounded(16))
//!     .spawn()?;
//! for token in stream {
//!     match token.pair() { ... }
//! }
//! ```
//!
//! For single-threaded use, [`Lexer::tokens`] returns the lazy iterator from
//! the core crate instead.

mod cancel;
mod config;
mod error;
mod lexer;
mod logging;
mod stream;

pub use cancel::CancelToken;
pub use config::{Capacity, ScanConfig, DEFAULT_CAPACITY};
pub use error::ScanError;
pub use lexer::Lexer;
pub use logging::init_tracing;
pub use stream::TokenStream;

pub use statelex_core::{
    scan_to_vec, step, tokens, ItemKind, Outcome, RunSummary, Scanner, SinkClosed, Span, Step,
    StepFn, StepMachine, Token, TokenKind, TokenSink, Tokens,
};
