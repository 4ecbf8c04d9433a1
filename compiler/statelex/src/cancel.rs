//! Cancellation shared between a token stream and its producer.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crossbeam::channel::{self, Receiver, Sender};

/// Cloneable handle that abandons a scan.
///
/// Cancelling is sticky and idempotent. A producer blocked on a full token
/// stream wakes immediately; otherwise it stops at its next emission or step
/// boundary.
#[derive(Clone, Debug)]
pub struct CancelToken {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    cancelled: AtomicBool,
    /// Holds at most one wake-up; both ends live here so it never disconnects.
    wake_tx: Sender<()>,
    wake_rx: Receiver<()>,
}

impl CancelToken {
    pub fn new() -> Self {
        let (wake_tx, wake_rx) = channel::bounded(1);
        CancelToken {
            inner: Arc::new(Inner {
                cancelled: AtomicBool::new(false),
                wake_tx,
                wake_rx,
            }),
        }
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        if !self.inner.cancelled.swap(true, Ordering::AcqRel) {
            let _ = self.inner.wake_tx.try_send(());
        }
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::Acquire)
    }

    /// Becomes ready once [`cancel`](Self::cancel) has been called.
    ///
    /// Only the producer selects on this.
    pub(crate) fn wake(&self) -> &Receiver<()> {
        &self.inner.wake_rx
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}
