//! Memory information collection

use sysinfo::System;

use crate::error::ProviderError;
use crate::types::MemoryFacts;

/// Get RAM and swap totals
pub fn get_memory_facts() -> Result<MemoryFacts, ProviderError> {
    let mut sys = System::new();
    sys.refresh_memory();

    let total = sys.total_memory();
    if total == 0 {
        return Err(ProviderError::Unsupported(
            "memory totals unavailable".to_string(),
        ));
    }

    Ok(MemoryFacts {
        total,
        used: sys.used_memory(),
        available: sys.available_memory(),
        swap_total: sys.total_swap(),
        swap_used: sys.used_swap(),
    })
}
