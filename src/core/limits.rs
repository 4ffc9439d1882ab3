/*!
 * System Limits and Constants
 *
 * Centralized location for the crate's fixed sizes and defaults.
 * All values include rationale comments explaining WHY they exist.
 */

// =============================================================================
// ADDRESS SPACE
// =============================================================================

/// Total simulated address space (1024 units)
/// Fixed at initialization; the space is never resized at runtime
pub const DEFAULT_ADDRESS_UNITS: usize = 1024;

/// Process unit size (64 units)
/// Denominator for waste accounting: wasted blocks = free units / this
pub const DEFAULT_PROCESS_UNIT: usize = 64;

// =============================================================================
// DRIVER
// =============================================================================

/// Simulation length for the memsim driver (10 time steps)
pub const DEFAULT_TIME_UNITS: usize = 10;
