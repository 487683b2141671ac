// Single-entry memo of the last sampled point
use std::sync::{Mutex, MutexGuard};

use crate::graph::Sources;
use crate::NoiseModule;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Entry {
    x: f64,
    y: f64,
    z: f64,
    value: f64,
}

/// Remembers the value its source produced at the last sampled point.
///
/// Sampling the same point again returns the stored value without touching
/// the source, which pays off when one subgraph feeds several modules.
/// Rewiring the source clears the entry; changing a parameter further down
/// the graph does not, so call [`Cache::invalidate`] after doing that.
///
/// This is the only module with state that changes during sampling. The
/// entry sits behind a `Mutex`, so a graph holding a `Cache` may still be
/// sampled from several threads and every result stays correct, but the
/// threads take turns on the lock and overwrite each other's entry.
/// Give each thread its own graph when the cache should pay off.
#[derive(Debug, Default)]
pub struct Cache {
    entry: Mutex<Option<Entry>>,
}

impl Clone for Cache {
    fn clone(&self) -> Self {
        Self {
            entry: Mutex::new(*self.lock()),
        }
    }
}

impl Cache {
    pub fn new() -> Self {
        Self::default()
    }

    // The entry is plain data, so a panic elsewhere cannot leave it torn
    fn lock(&self) -> MutexGuard<'_, Option<Entry>> {
        self.entry.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Drop the stored value so the next sample is recomputed.
    pub fn invalidate(&mut self) {
        log::trace!("cache invalidated");
        *self
            .entry
            .get_mut()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
    }
}

impl NoiseModule for Cache {
    fn source_count(&self) -> usize {
        1
    }

    fn get_value(&self, sources: &Sources<'_>, x: f64, y: f64, z: f64) -> f64 {
        if let Some(entry) = *self.lock() {
            // Exact match only; -0.0 and 0.0 count as the same point
            if entry.x == x && entry.y == y && entry.z == z {
                return entry.value;
            }
        }
        // Not locked while the source runs
        let value = sources.get_value(0, x, y, z);
        *self.lock() = Some(Entry { x, y, z, value });
        value
    }

    fn source_changed(&mut self) {
        self.invalidate();
    }
}
