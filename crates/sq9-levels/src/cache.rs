//! Shared grids, built once per size.
//!
//! Each size gets its own slot. The first caller for a size builds the grid
//! inside the slot's `OnceLock`; concurrent callers for the same size block
//! until that single build finishes and then share the result. The map lock
//! is held only to find or create a slot, never during a build.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use std::time::Instant;

use sq9_grid::{GridError, IndexedGrid};

use crate::error::Result;

type Slot = Arc<OnceLock<std::result::Result<Arc<IndexedGrid>, GridError>>>;

/// Read-only grids keyed by size.
#[derive(Debug, Default)]
pub struct GridCache {
    slots: Mutex<HashMap<usize, Slot>>,
}

impl GridCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grid for `size`, building it on first use.
    pub fn get(&self, size: usize) -> Result<Arc<IndexedGrid>> {
        if size == 0 {
            return Err(GridError::InvalidSize(size).into());
        }

        let slot = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(slots.entry(size).or_default())
        };

        let built = slot.get_or_init(|| {
            let started = Instant::now();
            let built = IndexedGrid::build(size).map(Arc::new);
            match &built {
                Ok(grid) => tracing::info!(
                    size,
                    populated = grid.populated(),
                    elapsed_us = started.elapsed().as_micros() as u64,
                    "built spiral grid"
                ),
                Err(e) => tracing::warn!(size, error = %e, "spiral grid build failed"),
            }
            built
        });

        built.clone().map_err(Into::into)
    }

    /// Whether a grid for `size` has been built.
    pub fn contains(&self, size: usize) -> bool {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&size)
            .is_some_and(|slot| matches!(slot.get(), Some(Ok(_))))
    }

    /// Number of sizes with a slot.
    pub fn len(&self) -> usize {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
