/*!
 * Memory Traits
 * Allocator and statistics abstractions
 */

use super::types::{FragmentationReport, MemoryResult, MemoryStats};
use crate::core::types::{Address, Pid, Size};

/// Block allocator interface
pub trait Allocator: Send + Sync {
    /// Allocate a best-fit block for a process
    fn allocate(&self, size: Size, pid: Pid) -> MemoryResult<Address>;

    /// Release every block owned by a process, coalescing with free
    /// neighbors; returns the number of block entries freed
    fn release(&self, pid: Pid) -> MemoryResult<usize>;
}

/// Memory statistics provider
pub trait MemoryInfo: Send + Sync {
    /// Aggregate statistics for the whole space
    fn stats(&self) -> MemoryStats;

    /// Fragmentation and waste accounting
    fn fragmentation(&self) -> FragmentationReport;

    /// Units currently owned by a specific process
    fn process_memory(&self, pid: Pid) -> Size;
}
