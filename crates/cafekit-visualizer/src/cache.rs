//! Ice scatter memoization
//!
//! Keeps one generated ice list per `(size, ice)` pair for the lifetime of
//! a `DrinkVisualizer`.

use crate::ice::{generate_ice_cubes, IceCube};
use crate::outline::compute_outline;
use cafekit_core::DrinkSize;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Memoized ice scatter, keyed by `(size, ice)`.
///
/// The scatter only depends on the cup size and the ice toggle, so milk,
/// syrup and topping changes on the customization screen reuse it.
#[derive(Debug, Default, Clone)]
pub struct IceCache {
    entries: HashMap<(DrinkSize, bool), Vec<IceCube>>,
    hits: u64,
    misses: u64,
}

impl IceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_generate(&mut self, size: DrinkSize, ice: bool) -> &[IceCube] {
        match self.entries.entry((size, ice)) {
            Entry::Occupied(entry) => {
                self.hits += 1;
                trace!("Ice cache hit for {} (ice={})", size, ice);
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                self.misses += 1;
                let outline = compute_outline(size);
                let cubes = generate_ice_cubes(size, ice, &outline);
                debug!("Generated {} ice cubes for {} cup", cubes.len(), size);
                entry.insert(cubes)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn clear(&mut self) {
        debug!("Clearing ice cache ({} entries)", self.entries.len());
        self.entries.clear();
    }
}
