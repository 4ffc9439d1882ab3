/*!
 * Address Space Table
 * Index-plus-length block table with best-fit placement and local coalescing
 */

use crate::core::types::{Address, Pid, Size};
use crate::memory::types::{Block, FragmentationReport, SpaceConfig};

/// Fixed-size linear address space.
///
/// One `Block` entry per address unit. A run's first entry records the run
/// length; trailing entries keep size 0, so a freshly built space advertises
/// only zero-size free blocks until allocations write real sizes.
#[derive(Debug, Clone)]
pub struct AddressSpace {
    blocks: Vec<Block>,
    total_units: Size,
}

impl AddressSpace {
    /// Build a space of `config.total_units` free single-unit entries.
    pub fn new(config: SpaceConfig) -> Self {
        Self {
            blocks: (0..config.total_units).map(Block::free_at).collect(),
            total_units: config.total_units,
        }
    }

    /// Number of addressable units.
    pub fn total_units(&self) -> Size {
        self.total_units
    }

    /// Read-only view of the block table.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Tightest-fitting free entry for `requested`; lowest index wins ties.
    ///
    /// The running best starts at the space size, so a free block of exactly
    /// `total_units` is never selected.
    fn best_fit(&self, requested: Size) -> Option<usize> {
        let mut best_index = None;
        let mut best_size = self.total_units;
        for (index, block) in self.blocks.iter().enumerate() {
            if block.is_free() && block.size >= requested && block.size < best_size {
                best_index = Some(index);
                best_size = block.size;
            }
        }
        best_index
    }

    /// Best-fit allocation. Returns the chosen address, or `None` when no
    /// free block fits; the table is untouched on a miss.
    pub fn allocate(&mut self, pid: Pid, requested: Size) -> Option<Address> {
        let index = self.best_fit(requested)?;
        let original = self.blocks[index].size;
        self.blocks[index].owner = Some(pid);
        self.blocks[index].size = requested;

        // Carve from the front: the residual cell sits at the offset of the
        // just-assigned size and becomes a fresh zero-size free entry.
        if original > requested {
            let split = index + requested;
            if split < self.blocks.len() {
                self.blocks[split] = Block::free_at(split);
            }
        }

        Some(index)
    }

    /// Free every entry owned by `pid`, folding into immediate free
    /// neighbors. Coalescing is single-pass and local: only the immediate
    /// neighbors are considered, never a chain across a just-merged block,
    /// so a long free run can take several calls to fully merge.
    /// Returns the number of entries freed.
    pub fn release(&mut self, pid: Pid) -> usize {
        let len = self.blocks.len();
        let mut freed = 0;

        for i in 0..len {
            if self.blocks[i].owner != Some(pid) {
                continue;
            }
            self.blocks[i].owner = None;
            self.blocks[i].size = 0;
            freed += 1;

            // Backward: locate the left run head through the neighbor's
            // stored size and fold this entry's size into it.
            if i > 0 && self.blocks[i - 1].is_free() {
                if let Some(head) = i.checked_sub(self.blocks[i - 1].size) {
                    let folded = self.blocks[i].size;
                    self.blocks[head].size += folded;
                    self.blocks[i].size = 0;
                }
            }

            // Forward: fold the right run head, found at this entry's size
            // offset, into this entry, then zero the moved head.
            if i + 1 < len && self.blocks[i + 1].is_free() {
                let next = i + self.blocks[i].size;
                if next < len {
                    let folded = self.blocks[next].size;
                    self.blocks[i].size += folded;
                    let moved = i + self.blocks[i].size;
                    if moved < len {
                        self.blocks[moved].size = 0;
                    }
                }
            }
        }

        freed
    }

    /// Fragmentation and waste accounting over one scan.
    ///
    /// Counts free entries (not free runs), so the figure is dominated by
    /// zero-size bookkeeping entries; -1 means nothing is free at all.
    pub fn fragmentation(&self, process_unit: Size) -> FragmentationReport {
        let mut free_blocks = 0usize;
        let mut free_units = 0;
        for block in &self.blocks {
            if block.is_free() {
                free_blocks += 1;
                free_units += block.size;
            }
        }
        FragmentationReport {
            free_blocks,
            free_units,
            fragmentation: free_blocks as i64 - 1,
            wasted_blocks: free_units / process_unit.max(1),
        }
    }

    /// Largest free entry size and free entry count, for error context.
    pub(super) fn free_summary(&self) -> (Size, usize) {
        let mut largest = 0;
        let mut count = 0;
        for block in &self.blocks {
            if block.is_free() {
                count += 1;
                largest = largest.max(block.size);
            }
        }
        (largest, count)
    }

    /// Sum of sizes over entries owned by `pid`.
    pub fn owned_units(&self, pid: Pid) -> Size {
        self.blocks
            .iter()
            .filter(|b| b.owner == Some(pid))
            .map(|b| b.size)
            .sum()
    }
}
