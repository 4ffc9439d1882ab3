/*!
 * Block Allocation Manager
 *
 * Fixed-size linear address space with best-fit allocation and local
 * coalescing.
 *
 * ## Allocation
 *
 * The space is an index-plus-length table: one `Block` entry per address
 * unit, where a run's first entry carries the run length and trailing
 * entries stay at size 0. Allocation scans the table for the
 * tightest-fitting free entry (lowest index on ties) and carves the request
 * from the front of the chosen block.
 *
 * ## Features
 *
 * - **Best-fit placement**: smallest free block that satisfies the request
 * - **Block splitting**: the residual cell after a carve is reset to a
 *   fresh free entry
 * - **Coalescing**: releasing a block folds it into immediate free
 *   neighbors (single pass, never transitive)
 * - **Fragmentation accounting**: free-entry and wasted-unit counts per scan
 * - **Per-process tracking**: current units, peak units, allocation counts
 */

mod allocator;
mod space;
mod stats;
mod tracking;

pub use space::AddressSpace;

use crate::core::types::{Address, Pid, Size};
use crate::memory::traits::{Allocator, MemoryInfo};
use crate::memory::types::{FragmentationReport, MemoryResult, MemoryStats, SpaceConfig};
use ahash::RandomState;
use dashmap::DashMap;
use log::info;
use std::sync::{Arc, Mutex};
use tracking::ProcessTracking;

/// Memory manager owning one address space behind a single exclusive lock
pub struct MemoryManager {
    space: Arc<Mutex<AddressSpace>>,
    config: SpaceConfig,
    process_tracking: Arc<DashMap<Pid, ProcessTracking, RandomState>>,
}

impl MemoryManager {
    pub fn new() -> Self {
        Self::with_config(SpaceConfig::default())
    }

    /// Create a manager with custom sizing (useful for testing)
    pub fn with_config(config: SpaceConfig) -> Self {
        info!(
            "Memory manager initialized: {} address units, {}-unit waste accounting",
            config.total_units, config.process_unit
        );
        Self {
            space: Arc::new(Mutex::new(AddressSpace::new(config))),
            config,
            process_tracking: Arc::new(DashMap::with_hasher(RandomState::new())),
        }
    }

    pub fn config(&self) -> SpaceConfig {
        self.config
    }
}

// Implement trait interfaces
impl Allocator for MemoryManager {
    fn allocate(&self, size: Size, pid: Pid) -> MemoryResult<Address> {
        MemoryManager::allocate(self, size, pid)
    }

    fn release(&self, pid: Pid) -> MemoryResult<usize> {
        MemoryManager::release(self, pid)
    }
}

impl MemoryInfo for MemoryManager {
    fn stats(&self) -> MemoryStats {
        MemoryManager::stats(self)
    }

    fn fragmentation(&self) -> FragmentationReport {
        MemoryManager::fragmentation(self)
    }

    fn process_memory(&self, pid: Pid) -> Size {
        MemoryManager::process_memory(self, pid)
    }
}

impl Clone for MemoryManager {
    fn clone(&self) -> Self {
        Self {
            space: Arc::clone(&self.space),
            config: self.config,
            process_tracking: Arc::clone(&self.process_tracking),
        }
    }
}

impl Default for MemoryManager {
    fn default() -> Self {
        Self::new()
    }
}
