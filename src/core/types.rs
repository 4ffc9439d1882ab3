/*!
 * Core Types
 * Common types used across the crate
 */

/// Process ID type
pub type Pid = u32;

/// Address type: a block's fixed position in the address space
pub type Address = usize;

/// Size type: lengths measured in address units
pub type Size = usize;
