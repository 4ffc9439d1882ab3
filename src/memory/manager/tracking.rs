/*!
 * Process Tracking
 * Per-process allocation accounting
 */

use crate::core::types::Size;

/// Per-process usage figures
#[derive(Debug, Clone)]
pub(super) struct ProcessTracking {
    pub current_units: Size,
    pub peak_units: Size,
    pub allocation_count: usize,
}

impl ProcessTracking {
    pub fn new() -> Self {
        Self {
            current_units: 0,
            peak_units: 0,
            allocation_count: 0,
        }
    }

    pub fn add_allocation(&mut self, units: Size) {
        self.current_units += units;
        self.allocation_count += 1;
        if self.current_units > self.peak_units {
            self.peak_units = self.current_units;
        }
    }
}
