//! Localization of report output
//!
//! Reports are built once in a canonical shape. A [`Locale`] decides the
//! display strings that go into them (titles, sentinels, uptime and date
//! formats) and, at format time, the JSON key names.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Output language of the reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Locale {
    #[default]
    En,
    Zh,
}

#[derive(Debug, Error)]
#[error("unknown locale '{0}' (expected 'en' or 'zh')")]
pub struct UnknownLocale(String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en_us" => Ok(Locale::En),
            "zh" | "zh-cn" | "zh_cn" | "zh-hans" => Ok(Locale::Zh),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

impl TryFrom<String> for Locale {
    type Error = UnknownLocale;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.to_string()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => f.write_str("en"),
            Locale::Zh => f.write_str("zh"),
        }
    }
}

impl Locale {
    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::En => &EN,
            Locale::Zh => &ZH,
        }
    }

    /// Display name for a canonical JSON key; `None` keeps the key as is
    pub fn localize_key(self, key: &str) -> Option<&'static str> {
        match self {
            Locale::En => None,
            Locale::Zh => ZH_KEYS
                .iter()
                .find(|(canonical, _)| *canonical == key)
                .map(|(_, localized)| *localized),
        }
    }
}

/// Display strings and formats of one locale
#[derive(Debug)]
pub struct Labels {
    pub hardware_title: &'static str,
    pub status_title: &'static str,
    pub hardware_error: &'static str,
    pub status_error: &'static str,
    pub unknown: &'static str,
    pub no_battery: &'static str,
    hours: &'static str,
    minutes: &'static str,
    /// Between a number and its unit
    unit_gap: &'static str,
    /// Between the hours and minutes parts
    part_gap: &'static str,
    datetime_format: &'static str,
}

impl Labels {
    /// "H hours M minutes"
    pub fn uptime(&self, hours: u64, minutes: u64) -> String {
        format!(
            "{}{}{}{}{}{}{}",
            hours, self.unit_gap, self.hours, self.part_gap, minutes, self.unit_gap, self.minutes
        )
    }

    /// "N minutes"
    pub fn minutes(&self, minutes: u64) -> String {
        format!("{}{}{}", minutes, self.unit_gap, self.minutes)
    }

    /// Wall-clock date and time in the locale's conventional layout
    pub fn datetime<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> String
    where
        Tz::Offset: fmt::Display,
    {
        at.format(self.datetime_format).to_string()
    }
}

static EN: Labels = Labels {
    hardware_title: "Hardware Information",
    status_title: "System Status",
    hardware_error: "Failed to get hardware information",
    status_error: "Failed to get system status",
    unknown: "Unknown",
    no_battery: "No battery",
    hours: "hours",
    minutes: "minutes",
    unit_gap: " ",
    part_gap: " ",
    // en-US: 10/16/2026, 3:04:05 PM
    datetime_format: "%-m/%-d/%Y, %-I:%M:%S %p",
};

static ZH: Labels = Labels {
    hardware_title: "硬件信息",
    status_title: "系统状态",
    hardware_error: "获取硬件信息失败",
    status_error: "获取系统状态失败",
    unknown: "未知",
    no_battery: "无电池",
    hours: "小时",
    minutes: "分钟",
    unit_gap: "",
    part_gap: "",
    // zh-CN: 2026/10/16 15:04:05
    datetime_format: "%Y/%-m/%-d %H:%M:%S",
};

static ZH_KEYS: &[(&str, &str)] = &[
    ("CPU", "处理器"),
    ("manufacturer", "制造商"),
    ("brand", "品牌"),
    ("model", "型号"),
    ("cores", "核心数"),
    ("threads", "线程数"),
    ("baseFrequency", "基础频率"),
    ("maxFrequency", "最大频率"),
    ("cache", "缓存"),
    ("l1Data", "一级数据缓存"),
    ("l1Instruction", "一级指令缓存"),
    ("l2", "二级缓存"),
    ("l3", "三级缓存"),
    ("memory", "内存"),
    ("totalCapacity", "总容量"),
    ("availableCapacity", "可用容量"),
    ("usedCapacity", "已用容量"),
    ("usageRate", "使用率"),
    ("graphics", "显卡"),
    ("vendor", "厂商"),
    ("vram", "显存"),
    ("driverVersion", "驱动版本"),
    ("storageDevices", "存储设备"),
    ("deviceName", "设备名称"),
    ("type", "类型"),
    ("size", "容量"),
    ("serialNumber", "序列号"),
    ("removable", "可移动"),
    ("systemInfo", "系统信息"),
    ("version", "版本"),
    ("uuid", "UUID"),
    ("battery", "电池"),
    ("isCharging", "充电中"),
    ("batteryLevel", "电量"),
    ("remainingTime", "剩余时间"),
    ("cycleCount", "循环次数"),
    ("healthStatus", "健康状态"),
    ("operatingSystem", "操作系统"),
    ("platform", "平台"),
    ("distribution", "发行版"),
    ("release", "版本号"),
    ("architecture", "架构"),
    ("hostname", "主机名"),
    ("kernel", "内核"),
    ("bootTime", "启动时间"),
    ("uptime", "运行时间"),
    ("currentTime", "当前时间"),
    ("timezone", "时区"),
    ("cpuUsage", "CPU使用情况"),
    ("totalUsage", "总使用率"),
    ("userProcesses", "用户进程"),
    ("systemProcesses", "系统进程"),
    ("idle", "空闲"),
    ("memoryUsage", "内存使用情况"),
    ("swapMemory", "交换内存"),
    ("networkInterfaces", "网络接口"),
    ("interfaceName", "接口名称"),
    ("macAddress", "MAC地址"),
    ("ipv4Address", "IPv4地址"),
    ("ipv6Address", "IPv6地址"),
    ("speed", "速度"),
    ("status", "状态"),
];
