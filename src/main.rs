/*!
 * memsim - Time-Stepped Allocation Driver
 *
 * External driver for the block allocator:
 * - builds the address space from environment-derived configuration
 * - admits an initial set of processes
 * - each time step releases two fixed processes, admits one new process,
 *   and reports block state and fragmentation
 */

use addrspace::core::limits;
use addrspace::{Block, MemoryManager, SpaceConfig};
use anyhow::{Context, Result};
use log::{debug, info, warn};

fn env_units(name: &str, default: usize) -> Result<usize> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("{} must be a non-negative integer, got {:?}", name, raw)),
        Err(_) => Ok(default),
    }
}

fn admit(manager: &MemoryManager, pid: u32, size: usize) {
    match manager.allocate(size, pid) {
        Ok(address) => info!("Process {} admitted: {} units at address {}", pid, size, address),
        Err(err) => warn!("Process {} not admitted: {}", pid, err),
    }
}

/// Full block listing at debug level, zero-size free entries collapsed.
fn report_state(blocks: &[Block]) {
    let mut collapsed = 0usize;
    for block in blocks {
        if block.is_free() && block.size == 0 {
            collapsed += 1;
            continue;
        }
        if collapsed > 0 {
            debug!("  {} zero-size free entries", collapsed);
            collapsed = 0;
        }
        match block.owner {
            Some(pid) => debug!(
                "  Process {} of size {} starting at address {}",
                pid, block.size, block.address
            ),
            None => debug!(
                "  Free block of size {} starting at address {}",
                block.size, block.address
            ),
        }
    }
    if collapsed > 0 {
        debug!("  {} zero-size free entries", collapsed);
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SpaceConfig {
        total_units: env_units("MEMSIM_TOTAL_UNITS", limits::DEFAULT_ADDRESS_UNITS)?,
        process_unit: env_units("MEMSIM_PROCESS_UNIT", limits::DEFAULT_PROCESS_UNIT)?,
    };
    let steps = env_units("MEMSIM_TIME_UNITS", limits::DEFAULT_TIME_UNITS)?;
    let report_json = std::env::var("MEMSIM_REPORT_JSON")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    info!(
        "memsim starting: {} address units, process unit {}, {} time steps",
        config.total_units, config.process_unit, steps
    );

    let manager = MemoryManager::with_config(config);
    let unit = config.process_unit;

    // Initial workload: three processes at 1x, 2x, 3x the process unit
    for (pid, size) in [(0u32, unit), (1, 2 * unit), (2, 3 * unit)] {
        admit(&manager, pid, size);
    }

    for t in 0..steps {
        info!("Time {}:", t);

        for pid in [0u32, 2] {
            match manager.release(pid) {
                Ok(freed) => info!("Released PID {} ({} block entries)", pid, freed),
                Err(err) => debug!("Nothing to release: {}", err),
            }
        }

        admit(&manager, t as u32 + 3, unit * (t % 4 + 1));

        let report = manager.fragmentation();
        report_state(&manager.blocks());
        info!("Fragmentation: {}", report.fragmentation);
        info!("Wasted blocks: {}", report.wasted_blocks);

        if report_json {
            let line = serde_json::json!({
                "time": t,
                "stats": manager.stats(),
                "fragmentation": report,
            });
            println!("{}", line);
        }
    }

    Ok(())
}
