//! Scanner primitives and step machine for state-function lexers.
//!
//! A grammar is a set of scanning steps. Each step is a plain function that
//! moves the [`Scanner`]'s cursors, emits tokens, and returns the next step to
//! run (or `None` to end the scan). The [`StepMachine`] drives the steps until
//! one of them returns `None`.
//!
//! ```text
//! fn lex_text(s: &mut Scanner<'_, ItemKind>) -> Option<Step<ItemKind>> {
//!     s.accept_while(char::is_whitespace);
//!     s.ignore();
//!     match s.peek() {
//!         None => None,
//!         Some('"') => Some(step!(lex_quote)),
//!         Some(_) => Some(step!(lex_word)),
//!     }
//! }
//! ```
//!
//! # Layers
//!
//! - [`Scanner`]: owns the cursors (`start`, `pos`, last advance width) over a
//!   borrowed input and hands finished tokens to a [`TokenSink`].
//! - [`Step`] / [`StepMachine`]: the transition functions and their driver.
//! - [`Tokens`]: a lazy, single-threaded token iterator that resumes the
//!   machine only when the consumer asks for more.
//!
//! The concurrent producer/consumer stream is built on the same seam in the
//! `statelex` crate.

mod machine;
mod scanner;
mod sink;
mod step;
mod token;

#[cfg(test)]
mod test_grammar;

pub use machine::{scan_to_vec, tokens, Outcome, RunSummary, StepMachine, Tokens};
pub use scanner::Scanner;
pub use sink::{SinkClosed, TokenSink};
pub use step::{Step, StepFn};
pub use token::{ItemKind, Span, Token, TokenKind};
