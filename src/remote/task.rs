//! Background execution for blocking remote calls.
//!
//! Remote calls run on a worker thread so the caller stays responsive; the
//! result or error is delivered back over a channel. There is no
//! cancellation: a reply that was superseded by a newer request is still
//! delivered, and overlapping calls have no ordering guarantee
//! (last-write-wins at the display). `RequestTracker` gives callers the
//! means to recognize and disregard stale replies.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};

use crate::error::{LexiError, Result};

/// A remote call running on a worker thread.
///
/// The reply is delivered exactly once, via `poll` or `wait`.
#[derive(Debug)]
pub struct BackgroundCall<T> {
    label: String,
    rx: Receiver<Result<T>>,
    handle: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> BackgroundCall<T> {
    /// Run `work` on a new worker thread.
    pub fn spawn<F>(label: impl Into<String>, work: F) -> Self
    where
        F: FnOnce() -> Result<T> + Send + 'static,
    {
        let (tx, rx) = channel();
        let handle = thread::spawn(move || {
            // The receiver may be gone if the caller stopped caring;
            // delivery failure is not an error.
            let _ = tx.send(work());
        });

        Self {
            label: label.into(),
            rx,
            handle: Some(handle),
        }
    }

    /// Non-blocking check for the reply.
    ///
    /// Returns `None` while the call is still in flight.
    pub fn poll(&self) -> Option<Result<T>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(LexiError::remote(format!(
                "{}: worker exited without a reply",
                self.label
            )))),
        }
    }

    /// Block until the reply arrives.
    pub fn wait(mut self) -> Result<T> {
        let result = self.rx.recv().map_err(|_| {
            LexiError::remote(format!("{}: worker exited without a reply", self.label))
        })?;
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        result
    }
}

/// Generation counter for recognizing stale replies.
///
/// Each new request bumps the generation; a reply tagged with an older
/// generation belongs to a superseded request and can be disregarded by
/// the caller. Nothing here prevents the stale reply from being delivered.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: AtomicU64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new request and return its generation tag.
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether a reply with this tag belongs to the latest request.
    pub fn is_current(&self, generation: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == generation
    }
}
