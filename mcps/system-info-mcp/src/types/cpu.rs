//! CPU fact types

use serde::{Deserialize, Serialize};

/// CPU identity, topology and cache sizes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CpuFacts {
    /// Vendor name (e.g., "Intel", "AMD", "Apple")
    pub manufacturer: String,
    /// Marketing brand string
    pub brand: String,
    /// Model identifier as reported by the CPU (family/model/stepping or name)
    pub model: String,
    /// Number of physical cores
    pub physical_cores: usize,
    /// Number of logical processors (including SMT siblings)
    pub logical_cores: usize,
    /// Current/base clock in GHz
    pub speed_ghz: f64,
    /// Maximum clock in GHz
    pub speed_max_ghz: f64,
    pub cache: CpuCache,
}

/// Cache sizes in bytes, 0 when unknown
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CpuCache {
    pub l1d: u64,
    pub l1i: u64,
    pub l2: u64,
    pub l3: u64,
}
