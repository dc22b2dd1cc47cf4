//! Uptime and timezone collection

use chrono::Local;
use sysinfo::System;

use crate::types::TimeFacts;

/// Get uptime and the local UTC offset (e.g., "GMT+0800")
pub fn get_time_facts() -> TimeFacts {
    TimeFacts {
        uptime_secs: System::uptime(),
        timezone: Local::now().format("GMT%z").to_string(),
    }
}
