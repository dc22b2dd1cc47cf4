//! System identity fact types

use serde::{Deserialize, Serialize};

/// Machine identity from firmware tables; empty strings when unavailable
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemIdentity {
    pub manufacturer: String,
    pub model: String,
    pub version: String,
    pub serial: String,
    pub uuid: String,
}
