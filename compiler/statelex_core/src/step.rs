//! Scanning steps: the states of the lexer's state machine.

use std::fmt;

use crate::scanner::Scanner;
use crate::token::TokenKind;

/// Signature of a scanning step.
///
/// A step performs any number of scanner operations and returns the step to
/// run next, or `None` to end the scan.
pub type StepFn<K> = fn(&mut Scanner<'_, K>) -> Option<Step<K>>;

/// A named scanning step.
///
/// Steps are plain function pointers plus a name for logging, so they are
/// `Copy` and cost nothing to return from another step. Build them with
/// [`step!`](crate::step), which names the step after its function.
pub struct Step<K: TokenKind> {
    name: &'static str,
    run: StepFn<K>,
}

impl<K: TokenKind> Step<K> {
    #[inline]
    pub const fn new(name: &'static str, run: StepFn<K>) -> Self {
        Step { name, run }
    }

    /// Name used in trace output.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Run this step against `scanner`, returning its successor.
    #[inline]
    pub fn run(self, scanner: &mut Scanner<'_, K>) -> Option<Step<K>> {
        (self.run)(scanner)
    }
}

impl<K: TokenKind> Clone for Step<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: TokenKind> Copy for Step<K> {}

impl<K: TokenKind> fmt::Debug for Step<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Step").field(&self.name).finish()
    }
}

/// Build a [`Step`] from a step function, named after the function.
///
/// `step!(lex_text)` is `Step::new("lex_text", lex_text)`. An explicit name
/// can be given as `step!("text", lex_text)`.
#[macro_export]
macro_rules! step {
    ($f:ident) => {
        $crate::Step::new(stringify!($f), $f)
    };
    ($name:expr, $f:expr) => {
        $crate::Step::new($name, $f)
    };
}
