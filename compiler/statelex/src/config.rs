//! Scan configuration.

/// Default token stream capacity.
pub const DEFAULT_CAPACITY: usize = 64;

/// Capacity of the channel between producer and consumer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Capacity {
    /// At most `n` tokens in flight; the producer blocks when full.
    /// `Bounded(0)` hands each token over directly (rendezvous).
    Bounded(usize),
    /// No backpressure.
    Unbounded,
}

impl Default for Capacity {
    fn default() -> Self {
        Capacity::Bounded(DEFAULT_CAPACITY)
    }
}

/// Settings for a concurrent scan.
///
/// Logging is configured separately through `RUST_LOG`; see
/// [`init_tracing`](crate::init_tracing).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanConfig {
    pub capacity: Capacity,
    /// Producer thread name. Defaults to `statelex:<input name>`.
    pub thread_name: Option<String>,
}

impl ScanConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn bounded(mut self, capacity: usize) -> Self {
        self.capacity = Capacity::Bounded(capacity);
        self
    }

    #[must_use]
    pub fn unbounded(mut self) -> Self {
        self.capacity = Capacity::Unbounded;
        self
    }

    #[must_use]
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = Some(name.into());
        self
    }

    /// Thread name to use when scanning the input called `input_name`.
    pub(crate) fn thread_name_for(&self, input_name: &str) -> String {
        match &self.thread_name {
            Some(name) => name.clone(),
            None => format!("statelex:{input_name}"),
        }
    }
}
