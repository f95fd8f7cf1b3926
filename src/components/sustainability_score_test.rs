use super::*;

#[test]
fn score_band_boundaries() {
    assert_eq!(score_band(100), "Excellent");
    assert_eq!(score_band(90), "Excellent");
    assert_eq!(score_band(89), "Good");
    assert_eq!(score_band(80), "Good");
    assert_eq!(score_band(79), "Fair");
    assert_eq!(score_band(70), "Fair");
    assert_eq!(score_band(69), "Needs attention");
    assert_eq!(score_band(0), "Needs attention");
}

#[test]
fn score_class_matches_band() {
    assert_eq!(score_class(92), "excellent");
    assert_eq!(score_class(85), "good");
    assert_eq!(score_class(72), "fair");
    assert_eq!(score_class(40), "low");
}
