/*!
 * End-to-End Scenario Tests
 * Full driver workload rounds against the manager surface
 */

use addrspace::{MemoryError, MemoryManager, SpaceConfig};
use pretty_assertions::assert_eq;

#[test]
fn test_initial_workload_round() {
    let manager = MemoryManager::with_config(SpaceConfig {
        total_units: 1024,
        process_unit: 64,
    });

    // A fresh space advertises only zero-size free entries, so every sized
    // admission reports NoFit and the table stays untouched.
    for (pid, size) in [(0u32, 64), (1, 128), (2, 192)] {
        let err = manager.allocate(size, pid).unwrap_err();
        assert_eq!(
            err,
            MemoryError::NoFit {
                requested: size,
                largest_free: 0,
                free_blocks: 1024,
            }
        );
    }

    // Releasing processes that own nothing matches nothing...
    assert_eq!(manager.release(0).unwrap_err(), MemoryError::NotFound(0));
    assert_eq!(manager.release(2).unwrap_err(), MemoryError::NotFound(2));

    // ...and nothing spuriously merges: every entry is still its own
    // zero-size free unit at its original position.
    let blocks = manager.blocks();
    assert_eq!(blocks.len(), 1024);
    for (i, block) in blocks.iter().enumerate() {
        assert_eq!(block.address, i);
        assert_eq!(block.size, 0);
        assert!(block.is_free());
    }

    let report = manager.fragmentation();
    assert_eq!(report.free_blocks, 1024);
    assert_eq!(report.free_units, 0);
    assert_eq!(report.fragmentation, 1023);
    assert_eq!(report.wasted_blocks, 0);
}

#[test]
fn test_time_stepped_loop_keeps_the_partition() {
    let manager = MemoryManager::with_config(SpaceConfig {
        total_units: 1024,
        process_unit: 64,
    });

    for t in 0..10usize {
        let _ = manager.release(0);
        let _ = manager.release(2);
        let _ = manager.allocate(64 * (t % 4 + 1), t as u32 + 3);

        let stats = manager.stats();
        assert_eq!(stats.allocated_blocks + stats.free_blocks, 1024);
        assert!(stats.used_units <= stats.total_units);

        let report = manager.fragmentation();
        assert_eq!(report.fragmentation, stats.free_blocks as i64 - 1);
    }
}

#[test]
fn test_zero_size_churn_round_trips() {
    // Zero-size admissions are the one request a fresh space can satisfy;
    // a full admit/release cycle returns the table to its initial state.
    let manager = MemoryManager::with_config(SpaceConfig {
        total_units: 32,
        process_unit: 8,
    });
    let initial = manager.blocks();

    for pid in 0u32..4 {
        manager.allocate(0, pid).unwrap();
    }
    assert_eq!(manager.stats().allocated_blocks, 4);

    for pid in 0u32..4 {
        manager.release(pid).unwrap();
    }
    assert_eq!(manager.blocks(), initial);
}
