//! The step machine: runs scanning steps until one returns `None`.

use std::fmt;
use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::scanner::Scanner;
use crate::step::Step;
use crate::token::{Token, TokenKind};

/// How a scan ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// A step returned `None`.
    Completed,
    /// An error token was emitted.
    Failed,
    /// The token sink closed before the steps finished.
    Cancelled,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Outcome::Completed => "completed",
            Outcome::Failed => "failed",
            Outcome::Cancelled => "cancelled",
        })
    }
}

/// Counters reported when a scan ends.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RunSummary {
    /// Steps run, including the last one.
    pub steps: usize,
    /// Tokens delivered to the sink.
    pub tokens: usize,
    pub outcome: Outcome,
}

/// Driver for a sequence of scanning steps.
///
/// Holds the step to run next. The machine stops when a step returns `None`,
/// after any step that emitted an error token (even if it returned a
/// successor), and when the scanner's sink closes.
pub struct StepMachine<K: TokenKind> {
    current: Option<Step<K>>,
    steps: usize,
    outcome: Outcome,
}

impl<K: TokenKind> StepMachine<K> {
    /// Create a machine that starts at `initial`.
    pub fn new(initial: Step<K>) -> Self {
        StepMachine {
            current: Some(initial),
            steps: 0,
            outcome: Outcome::Completed,
        }
    }

    /// Returns `true` once no further step will run.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.current.is_none()
    }

    /// The step that runs next, if any.
    #[inline]
    pub fn current(&self) -> Option<Step<K>> {
        self.current
    }

    /// Run exactly one step.
    ///
    /// Returns `false` once the machine has terminated; further calls do
    /// nothing.
    pub fn step(&mut self, scanner: &mut Scanner<'_, K>) -> bool {
        let Some(step) = self.current.take() else {
            return false;
        };
        if scanner.is_closed() {
            self.finish(scanner, Outcome::Cancelled);
            return false;
        }

        trace!(
            step = step.name(),
            start = scanner.start(),
            pos = scanner.pos(),
            "run step"
        );
        let next = step.run(scanner);
        self.steps += 1;

        if scanner.has_failed() {
            if let Some(next) = next {
                debug!(
                    step = step.name(),
                    next = next.name(),
                    "step returned a successor after emitting an error; stopping"
                );
            }
            self.finish(scanner, Outcome::Failed);
            return false;
        }
        if scanner.is_closed() {
            self.finish(scanner, Outcome::Cancelled);
            return false;
        }
        match next {
            Some(next) => {
                self.current = Some(next);
                true
            }
            None => {
                self.finish(scanner, Outcome::Completed);
                false
            }
        }
    }

    /// Run steps until the machine terminates.
    pub fn run(mut self, scanner: &mut Scanner<'_, K>) -> RunSummary {
        debug!(
            name = scanner.name(),
            len = scanner.input().len(),
            "scan started"
        );
        while self.step(scanner) {}
        self.summary(scanner)
    }

    /// Counters so far. `outcome` is meaningful once the machine is finished.
    pub fn summary(&self, scanner: &Scanner<'_, K>) -> RunSummary {
        RunSummary {
            steps: self.steps,
            tokens: scanner.emitted(),
            outcome: self.outcome,
        }
    }

    fn finish(&mut self, scanner: &Scanner<'_, K>, outcome: Outcome) {
        self.current = None;
        self.outcome = outcome;
        debug!(
            name = scanner.name(),
            steps = self.steps,
            tokens = scanner.emitted(),
            %outcome,
            "scan finished"
        );
    }
}

/// Lazy token iterator.
///
/// Runs steps only when its queue is empty, so tokens are produced on
/// demand, one resumption at a time, on the caller's thread. Ends after the
/// machine terminates and the queue is drained.
pub struct Tokens<'a, K: TokenKind> {
    scanner: Scanner<'a, K>,
    machine: StepMachine<K>,
}

impl<'a, K: TokenKind> Tokens<'a, K> {
    pub fn new(name: &'a str, input: &'a str, initial: Step<K>) -> Self {
        Tokens {
            scanner: Scanner::new(name, input),
            machine: StepMachine::new(initial),
        }
    }

    /// Counters so far; see [`StepMachine::summary`].
    pub fn summary(&self) -> RunSummary {
        self.machine.summary(&self.scanner)
    }

    /// Returns `true` once no further step will run. Queued tokens may
    /// still be pending.
    pub fn is_finished(&self) -> bool {
        self.machine.is_finished()
    }
}

impl<K: TokenKind> Iterator for Tokens<'_, K> {
    type Item = Token<K>;

    fn next(&mut self) -> Option<Token<K>> {
        loop {
            if let Some(token) = self.scanner.next_queued() {
                return Some(token);
            }
            if !self.machine.step(&mut self.scanner) {
                return self.scanner.next_queued();
            }
        }
    }
}

impl<K: TokenKind> FusedIterator for Tokens<'_, K> {}

/// Lazily scan `input`, starting at `initial`.
pub fn tokens<'a, K: TokenKind>(name: &'a str, input: &'a str, initial: Step<K>) -> Tokens<'a, K> {
    Tokens::new(name, input, initial)
}

/// Scan all of `input` eagerly.
pub fn scan_to_vec<K: TokenKind>(
    name: &str,
    input: &str,
    initial: Step<K>,
) -> (Vec<Token<K>>, RunSummary) {
    let mut out: Vec<Token<K>> = Vec::new();
    let summary = {
        let mut scanner = Scanner::with_sink(name, input, &mut out);
        StepMachine::new(initial).run(&mut scanner)
    };
    (out, summary)
}
