//! Unit formatting shared by the report normalizers
//!
//! Numbers are rendered the way a JavaScript client would print them
//! (`toFixed`, `Math.round`, shortest round-trip), so reports stay
//! byte-compatible with existing consumers.

/// Bytes per gigabyte (binary, 2^30)
pub const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Extra digits inspected when checking for an exact rounding tie
const TIE_PROBE_DIGITS: usize = 64;

/// Fixed-point rendering with `digits` decimals
///
/// Ties on the exact binary value round away from zero, as `Number.prototype.toFixed`
/// does; Rust's own formatting would round them to even.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // no "-0.0"
    let value = if value == 0.0 { 0.0 } else { value };

    if is_exact_tie(value, digits) {
        let half_step = 0.5 / 10f64.powi(digits as i32);
        return format!("{:.*}", digits, value + half_step.copysign(value));
    }
    format!("{:.*}", digits, value)
}

fn is_exact_tie(value: f64, digits: usize) -> bool {
    let exact = format!("{:.*}", digits + TIE_PROBE_DIGITS, value.abs());
    let Some((_, fraction)) = exact.split_once('.') else {
        return false;
    };
    let tail = &fraction[digits..];
    tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0')
}

/// "8GB": whole gigabytes, rounded half up
pub fn gib_rounded(bytes: u64) -> String {
    format!("{}GB", (bytes as f64 / GIB).round() as u64)
}

/// "7.63GB": gigabytes with two decimals
pub fn gib_fixed(bytes: u64) -> String {
    format!("{}GB", to_fixed(bytes as f64 / GIB, 2))
}

/// "42.0%"
pub fn percent(value: f64) -> String {
    format!("{}%", to_fixed(value, 1))
}

/// `part / total` as a percentage; a zero total yields "0%"
pub fn ratio_percent(part: u64, total: u64) -> String {
    if total == 0 {
        return "0%".to_string();
    }
    percent(part as f64 / total as f64 * 100.0)
}

/// "2.4GHz", the provider's number as is
pub fn ghz(speed: f64) -> String {
    format!("{}GHz", speed)
}
