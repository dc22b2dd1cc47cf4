//! CPU load fact types

use serde::{Deserialize, Serialize};

/// Current CPU load split, each in percent (0-100)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadFacts {
    pub current: f64,
    pub user: f64,
    pub system: f64,
    pub idle: f64,
}
