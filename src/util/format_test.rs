use super::*;

#[test]
fn format_bytes_handles_zero() {
    assert_eq!(format_bytes(0), "0 Bytes");
}

#[test]
fn format_bytes_scales_units() {
    assert_eq!(format_bytes(512), "512 Bytes");
    assert_eq!(format_bytes(1_024), "1 KB");
    assert_eq!(format_bytes(1_536), "1.5 KB");
    assert_eq!(format_bytes(2 * 1_024 * 1_024), "2 MB");
    assert_eq!(format_bytes(3 * 1_024 * 1_024 * 1_024), "3 GB");
}

#[test]
fn format_bytes_trims_trailing_zeros() {
    assert_eq!(format_bytes(1_126), "1.1 KB");
    assert_eq!(format_bytes(1_178), "1.15 KB");
}

#[test]
fn format_date_takes_the_date_part_of_iso_timestamps() {
    assert_eq!(format_date("2024-05-27T10:00:00.000Z"), "2024-05-27");
    assert_eq!(format_date("2023-11-15"), "2023-11-15");
}

#[test]
fn format_date_falls_back_for_non_dates() {
    assert_eq!(format_date("1716800000000"), "—");
    assert_eq!(format_date(""), "—");
}
