/*!
 * Manager Allocation Tests
 * Typed failure signals, tracking, and statistics on the manager surface
 */

use addrspace::{Allocator, MemoryError, MemoryInfo, MemoryManager, SpaceConfig};
use pretty_assertions::assert_eq;

fn small_manager(total_units: usize, process_unit: usize) -> MemoryManager {
    MemoryManager::with_config(SpaceConfig {
        total_units,
        process_unit,
    })
}

#[test]
fn test_fresh_space_advertises_zero_size_free_entries() {
    let manager = small_manager(16, 4);
    let stats = manager.stats();
    assert_eq!(stats.total_units, 16);
    assert_eq!(stats.used_units, 0);
    assert_eq!(stats.available_units, 16);
    assert_eq!(stats.free_blocks, 16);
    assert_eq!(stats.allocated_blocks, 0);

    for (i, block) in manager.blocks().iter().enumerate() {
        assert_eq!(block.address, i);
        assert_eq!(block.size, 0);
        assert!(block.is_free());
    }
}

#[test]
fn test_sized_request_on_fresh_space_reports_no_fit() {
    let manager = small_manager(16, 4);
    let before = manager.blocks();

    let err = manager.allocate(4, 1).unwrap_err();
    assert_eq!(
        err,
        MemoryError::NoFit {
            requested: 4,
            largest_free: 0,
            free_blocks: 16,
        }
    );
    // the miss leaves the table byte-for-byte unchanged
    assert_eq!(manager.blocks(), before);
}

#[test]
fn test_zero_size_request_takes_the_lowest_free_index() {
    let manager = small_manager(16, 4);
    assert_eq!(manager.allocate(0, 7).unwrap(), 0);

    let blocks = manager.blocks();
    assert_eq!(blocks[0].owner, Some(7));
    assert_eq!(blocks[0].size, 0);

    // the next request skips the now-owned entry
    assert_eq!(manager.allocate(0, 8).unwrap(), 1);
}

#[test]
fn test_release_unknown_pid_reports_not_found() {
    let manager = small_manager(16, 4);
    assert_eq!(manager.release(42).unwrap_err(), MemoryError::NotFound(42));
}

#[test]
fn test_release_returns_the_freed_entry_count() {
    let manager = small_manager(16, 4);
    let address = manager.allocate(0, 3).unwrap();
    assert_eq!(manager.release(3).unwrap(), 1);
    assert!(manager.blocks()[address].is_free());

    // a second release finds nothing left
    assert_eq!(manager.release(3).unwrap_err(), MemoryError::NotFound(3));
}

#[test]
fn test_tracking_counts_allocations_per_process() {
    let manager = small_manager(16, 4);
    manager.allocate(0, 9).unwrap();
    manager.allocate(0, 9).unwrap();

    let (current, peak, count) = manager.process_memory_details(9);
    assert_eq!(current, 0);
    assert_eq!(peak, 0);
    assert_eq!(count, 2);
    assert_eq!(manager.process_memory(9), 0);

    manager.release(9).unwrap();
    assert_eq!(manager.process_memory_details(9), (0, 0, 0));
}

#[test]
fn test_manager_clones_share_the_space() {
    let manager = small_manager(16, 4);
    let clone = manager.clone();

    manager.allocate(0, 5).unwrap();
    assert_eq!(clone.blocks()[0].owner, Some(5));
    assert_eq!(clone.stats().allocated_blocks, 1);
}

#[test]
fn test_trait_object_surface() {
    let manager = small_manager(8, 4);

    let alloc: &dyn Allocator = &manager;
    assert!(alloc.allocate(0, 1).is_ok());
    assert!(alloc.release(2).is_err());

    let info: &dyn MemoryInfo = &manager;
    assert_eq!(info.stats().allocated_blocks, 1);
    assert_eq!(info.fragmentation().free_blocks, 7);
    assert_eq!(info.process_memory(1), 0);
}
