/*!
 * Space Statistics
 * Aggregate stats, fragmentation reports, and per-process figures
 */

use super::MemoryManager;
use crate::core::types::{Pid, Size};
use crate::memory::types::{Block, FragmentationReport, MemoryStats};
use log::debug;

impl MemoryManager {
    /// Fragmentation and waste accounting with the configured process unit.
    pub fn fragmentation(&self) -> FragmentationReport {
        let report = self.lock_space().fragmentation(self.config.process_unit);
        debug!(
            "Fragmentation scan: {} free blocks, {} free units, fragmentation {}, wasted blocks {}",
            report.free_blocks, report.free_units, report.fragmentation, report.wasted_blocks
        );
        report
    }

    /// Aggregate statistics over one scan of the table.
    pub fn stats(&self) -> MemoryStats {
        let space = self.lock_space();
        let total = space.total_units();
        let mut used = 0;
        let mut allocated_blocks = 0;
        let mut free_blocks = 0;
        for block in space.blocks() {
            if block.is_free() {
                free_blocks += 1;
            } else {
                allocated_blocks += 1;
                used += block.size;
            }
        }
        MemoryStats {
            total_units: total,
            used_units: used,
            available_units: total.saturating_sub(used),
            usage_percentage: (used as f64 / total as f64) * 100.0,
            allocated_blocks,
            free_blocks,
        }
    }

    /// Units currently owned by `pid`.
    pub fn process_memory(&self, pid: Pid) -> Size {
        self.lock_space().owned_units(pid)
    }

    /// Current, peak, and allocation-count figures for `pid`.
    pub fn process_memory_details(&self, pid: Pid) -> (Size, Size, usize) {
        if let Some(track) = self.process_tracking.get(&pid) {
            (track.current_units, track.peak_units, track.allocation_count)
        } else {
            (0, 0, 0)
        }
    }

    /// Snapshot of the block table for presentation.
    pub fn blocks(&self) -> Vec<Block> {
        self.lock_space().blocks().to_vec()
    }
}
