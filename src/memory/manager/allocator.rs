/*!
 * Manager Allocation Paths
 * Allocate and release with tracking and typed failure signals
 */

use super::space::AddressSpace;
use super::tracking::ProcessTracking;
use super::MemoryManager;
use crate::core::types::{Address, Pid, Size};
use crate::memory::types::{MemoryError, MemoryResult};
use log::{info, warn};
use std::sync::MutexGuard;

impl MemoryManager {
    /// Allocate a best-fit block for `pid`.
    ///
    /// The table is untouched when no free block fits; the miss surfaces as
    /// `NoFit` instead of the silent no-op of the underlying space.
    pub fn allocate(&self, size: Size, pid: Pid) -> MemoryResult<Address> {
        let mut space = self.lock_space();

        match space.allocate(pid, size) {
            Some(address) => {
                drop(space);
                self.process_tracking
                    .entry(pid)
                    .or_insert_with(ProcessTracking::new)
                    .add_allocation(size);
                info!("Allocated {} units at address {} for PID {}", size, address, pid);
                Ok(address)
            }
            None => {
                let (largest_free, free_blocks) = space.free_summary();
                drop(space);
                warn!(
                    "No fit: PID {} requested {} units, largest free block is {} units ({} free blocks)",
                    pid, size, largest_free, free_blocks
                );
                Err(MemoryError::NoFit {
                    requested: size,
                    largest_free,
                    free_blocks,
                })
            }
        }
    }

    /// Release every block owned by `pid`, coalescing with free neighbors.
    /// Returns the number of block entries freed.
    pub fn release(&self, pid: Pid) -> MemoryResult<usize> {
        let mut space = self.lock_space();
        let owned_units = space.owned_units(pid);
        let freed = space.release(pid);
        drop(space);

        if freed == 0 {
            warn!("Release for PID {} matched no blocks", pid);
            return Err(MemoryError::NotFound(pid));
        }

        self.process_tracking.remove(&pid);
        info!(
            "Released {} block entries ({} units) owned by PID {}",
            freed, owned_units, pid
        );
        Ok(freed)
    }

    /// Acquire the space lock, recovering from poisoning.
    pub(super) fn lock_space(&self) -> MutexGuard<'_, AddressSpace> {
        match self.space.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                log::error!("Address space mutex poisoned - recovering");
                poisoned.into_inner()
            }
        }
    }
}
