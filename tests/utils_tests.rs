//! Tests for utils module functionality.

use glyphbar::utils::{format_bytes, format_time};

#[test]
fn test_format_bytes_whole_bytes() {
    let test_cases = [(0, " 0 B"), (5, " 5 B"), (42, "42 B"), (500, "500 B"), (1023, "1023 B")];
    for (bytes, expected) in test_cases {
        assert_eq!(format_bytes(bytes), expected);
    }
}

#[test]
fn test_format_bytes_one_decimal_under_ten() {
    assert_eq!(format_bytes(1536), "1.5 kB");
    assert_eq!(format_bytes(1048576), "1.0 MB");
    assert_eq!(format_bytes(9 * 1024 + 512), "9.5 kB");
}

#[test]
fn test_format_bytes_rounding_up_to_ten_drops_decimal() {
    // 9.977 kB rounds to 10.0
    assert_eq!(format_bytes(9 * 1024 + 1000), "10 kB");
}

#[test]
fn test_format_bytes_whole_number_from_ten() {
    assert_eq!(format_bytes(20 * 1024), "20 kB");
    assert_eq!(format_bytes(700 * 1024 * 1024), "700 MB");
    assert_eq!(format_bytes(3 * 1024u64.pow(5)), "3.0 PB");
    assert_eq!(format_bytes(2 * 1024u64.pow(6)), "2.0 EB");
}

#[test]
fn test_format_time_folds_hours_into_minutes() {
    assert_eq!(format_time(65), "1m5s");
    assert_eq!(format_time(3600), "60m0s");
    assert_eq!(format_time(7384), "123m4s");
}
