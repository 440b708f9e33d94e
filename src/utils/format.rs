//! Byte-size and duration humanization.

/// Unit suffixes, indexed by the power of 1024.
const UNITS: [&str; 7] = ["B", "kB", "MB", "GB", "TB", "PB", "EB"];

/// Format a byte count the way the ratio and rate fields display it.
///
/// Values under 10 render as a two-column integer (`" 5 B"`). Larger values are
/// scaled to the largest unit that keeps them at or above one, rounded to one
/// decimal, and shown with that decimal only while they stay under 10.
///
/// ```rust
/// use glyphbar::utils::format_bytes;
///
/// assert_eq!(format_bytes(5), " 5 B");
/// assert_eq!(format_bytes(1536), "1.5 kB");
/// assert_eq!(format_bytes(1048576), "1.0 MB");
/// assert_eq!(format_bytes(734003200), "700 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 10 {
        return format!("{:>2} {}", bytes, UNITS[0]);
    }

    let exponent = (bytes.ilog(1024) as usize).min(UNITS.len() - 1);
    let scaled = bytes as f64 / 1024f64.powi(exponent as i32);
    let rounded = (scaled * 10.0 + 0.5).floor() / 10.0;

    if rounded < 10.0 {
        format!("{:.1} {}", rounded, UNITS[exponent])
    } else {
        format!("{:.0} {}", rounded, UNITS[exponent])
    }
}

/// Format a number of seconds as `<minutes>m<seconds>s`.
///
/// Hours are folded into the minute count, so an hour reads `60m0s`. Negative
/// inputs (an overshooting estimate) are rendered as-is.
pub fn format_time(seconds: i64) -> String {
    format!("{}m{}s", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes_small_values_are_padded() {
        assert_eq!(format_bytes(0), " 0 B");
        assert_eq!(format_bytes(5), " 5 B");
        assert_eq!(format_bytes(9), " 9 B");
    }

    #[test]
    fn test_format_bytes_below_one_kilobyte() {
        assert_eq!(format_bytes(10), "10 B");
        assert_eq!(format_bytes(500), "500 B");
        assert_eq!(format_bytes(1023), "1023 B");
    }

    #[test]
    fn test_format_bytes_scaled_units() {
        assert_eq!(format_bytes(1024), "1.0 kB");
        assert_eq!(format_bytes(1536), "1.5 kB");
        assert_eq!(format_bytes(10 * 1024), "10 kB");
        assert_eq!(format_bytes(1024 * 1024), "1.0 MB");
        assert_eq!(format_bytes(5 * 1024 * 1024 * 1024), "5.0 GB");
    }

    #[test]
    fn test_format_bytes_caps_at_largest_unit() {
        assert_eq!(format_bytes(u64::MAX), "16 EB");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "0m0s");
        assert_eq!(format_time(18), "0m18s");
        assert_eq!(format_time(65), "1m5s");
        assert_eq!(format_time(3600), "60m0s");
        assert_eq!(format_time(3725), "62m5s");
    }
}
