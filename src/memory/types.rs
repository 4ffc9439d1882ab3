/*!
 * Memory Types
 * Common types for the block allocator
 */

use crate::core::types::{Address, Pid, Size};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Memory operation result
pub type MemoryResult<T> = Result<T, MemoryError>;

/// Memory errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    #[error("no fit: requested {requested} units, largest free block {largest_free} units across {free_blocks} free blocks")]
    NoFit {
        requested: Size,
        largest_free: Size,
        free_blocks: usize,
    },

    #[error("process {0} owns no blocks")]
    NotFound(Pid),
}

/// One addressable unit's metadata.
///
/// Only the first block of a run carries the run's full size; trailing
/// positions keep size 0. `address` equals the block's index and never
/// changes after initialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub address: Address,
    pub size: Size,
    pub owner: Option<Pid>,
}

impl Block {
    /// A zero-size free entry at a fixed position.
    pub fn free_at(address: Address) -> Self {
        Self {
            address,
            size: 0,
            owner: None,
        }
    }

    pub fn is_free(&self) -> bool {
        self.owner.is_none()
    }
}

/// Address-space sizing, fixed once the space is built
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpaceConfig {
    /// Total addressable units
    pub total_units: Size,
    /// Unit size used for waste accounting; must be nonzero
    pub process_unit: Size,
}

impl Default for SpaceConfig {
    fn default() -> Self {
        Self {
            total_units: crate::core::limits::DEFAULT_ADDRESS_UNITS,
            process_unit: crate::core::limits::DEFAULT_PROCESS_UNIT,
        }
    }
}

/// Aggregate memory statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryStats {
    pub total_units: Size,
    pub used_units: Size,
    pub available_units: Size,
    pub usage_percentage: f64,
    pub allocated_blocks: usize,
    pub free_blocks: usize,
}

/// Fragmentation and waste accounting for one scan of the space
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragmentationReport {
    /// Free block entries seen by the scan
    pub free_blocks: usize,
    /// Sum of sizes over free block entries
    pub free_units: Size,
    /// Free entries minus one; -1 when nothing is free
    pub fragmentation: i64,
    /// Free units divided by the configured process unit
    pub wasted_blocks: usize,
}
