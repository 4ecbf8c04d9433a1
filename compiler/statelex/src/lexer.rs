//! Entry point: an input plus the grammar's initial step.

use std::thread;

use crossbeam::channel;
use statelex_core::{RunSummary, Scanner, Step, StepMachine, Token, TokenKind, Tokens};
use tracing::debug;

use crate::cancel::CancelToken;
use crate::config::{Capacity, ScanConfig};
use crate::error::ScanError;
use crate::stream::{ChannelSink, TokenStream};

/// An input ready to be scanned by a grammar.
///
/// The input is owned and never modified. It can be scanned lazily on the
/// current thread with [`tokens`](Self::tokens), or on a producer thread with
/// [`spawn`](Self::spawn).
pub struct Lexer<K: TokenKind> {
    name: String,
    input: String,
    initial: Step<K>,
    config: ScanConfig,
}

impl<K: TokenKind> Lexer<K> {
    /// Create a lexer for `input`. `name` is used in diagnostics only.
    pub fn new(name: impl Into<String>, input: impl Into<String>, initial: Step<K>) -> Self {
        Lexer {
            name: name.into(),
            input: input.into(),
            initial,
            config: ScanConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan lazily on the current thread.
    pub fn tokens(&self) -> Tokens<'_, K> {
        Tokens::new(&self.name, &self.input, self.initial)
    }

    /// Start scanning on a producer thread.
    ///
    /// The returned stream yields tokens as the producer emits them.
    #[tracing::instrument(level = "debug", skip_all, fields(name = %self.name, len = self.input.len()))]
    pub fn spawn(self) -> Result<TokenStream<K>, ScanError> {
        let (tx, rx) = match self.config.capacity {
            Capacity::Bounded(n) => channel::bounded(n),
            Capacity::Unbounded => channel::unbounded(),
        };
        let cancel = CancelToken::new();
        let sink = ChannelSink::new(tx, cancel.clone());
        let thread_name = self.config.thread_name_for(&self.name);
        debug!(thread = %thread_name, capacity = ?self.config.capacity, "spawning producer");

        let Lexer {
            name,
            input,
            initial,
            ..
        } = self;
        let producer_name = name.clone();
        let producer = thread::Builder::new()
            .name(thread_name)
            .spawn(move || run_producer(&producer_name, &input, initial, sink))
            .map_err(|source| ScanError::Spawn {
                name: name.clone(),
                source,
            })?;

        Ok(TokenStream::new(name, rx, cancel, producer))
    }

    /// Scan on a producer thread and collect every token.
    pub fn drain(self) -> Result<(Vec<Token<K>>, RunSummary), ScanError> {
        let mut stream = self.spawn()?;
        let tokens: Vec<_> = stream.by_ref().collect();
        let summary = stream.join()?;
        Ok((tokens, summary))
    }
}

/// Body of the producer thread. The sink, and with it the channel, is
/// dropped on return, which closes the stream.
fn run_producer<K: TokenKind>(
    name: &str,
    input: &str,
    initial: Step<K>,
    sink: ChannelSink<K>,
) -> RunSummary {
    let mut scanner = Scanner::with_sink(name, input, sink);
    StepMachine::new(initial).run(&mut scanner)
}

#[cfg(test)]
mod tests;
