use crate::structs::Metadata;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;
use tracing::debug;

/// Sequence number of a submitted file. Later submissions get larger numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A result together with the submission it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Published {
    pub generation: Generation,
    pub metadata: Arc<Metadata>,
}

/// The single "currently displayed" result.
///
/// Every submission calls [`ResultSlot::begin`] before it starts working and
/// [`ResultSlot::publish`] when done. Only the most recently begun generation
/// may publish; anything older finishing late is dropped. The latest
/// *selected* file therefore wins, whatever order the work completes in.
#[derive(Debug)]
pub struct ResultSlot {
    generation: AtomicU64,
    current: watch::Sender<Option<Published>>,
}

impl Default for ResultSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultSlot {
    pub fn new() -> Self {
        let (current, _) = watch::channel(None);
        Self {
            generation: AtomicU64::new(0),
            current,
        }
    }

    /// Starts a new generation, making every earlier one stale.
    pub fn begin(&self) -> Generation {
        Generation(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// The most recently begun generation.
    pub fn latest(&self) -> Generation {
        Generation(self.generation.load(Ordering::SeqCst))
    }

    /// Stores `metadata` as the current result if `generation` is still the latest.
    ///
    /// Returns `false` when the result was stale and got discarded.
    pub fn publish(&self, generation: Generation, metadata: Metadata) -> bool {
        let accepted = self.current.send_if_modified(|current| {
            if generation != self.latest() {
                return false;
            }
            *current = Some(Published {
                generation,
                metadata: Arc::new(metadata),
            });
            true
        });

        if !accepted {
            debug!(
                generation = generation.get(),
                latest = self.latest().get(),
                "discarding stale result"
            );
        }
        accepted
    }

    pub fn current(&self) -> Option<Published> {
        self.current.borrow().clone()
    }

    /// Receiver that is notified each time a result is published.
    pub fn subscribe(&self) -> watch::Receiver<Option<Published>> {
        self.current.subscribe()
    }
}
