use super::*;

#[test]
fn empty_query_returns_the_full_roster() {
    let roster = data::suppliers();
    assert_eq!(filter_suppliers(&roster, "").len(), roster.len());
    assert_eq!(filter_suppliers(&roster, "   ").len(), roster.len());
}

#[test]
fn search_matches_name_location_and_category_case_insensitively() {
    let roster = data::suppliers();
    assert_eq!(filter_suppliers(&roster, "ecoharvest").len(), 1);
    assert_eq!(filter_suppliers(&roster, "Seattle").len(), 1);
    assert_eq!(filter_suppliers(&roster, "PACKAGING").len(), 1);
    assert!(filter_suppliers(&roster, "zzz").is_empty());
}

#[test]
fn average_score_handles_empty_rosters() {
    assert!((average_score(&[]) - 0.0).abs() < f64::EPSILON);
    let roster = data::suppliers();
    let expected = f64::from(92 + 87 + 85 + 78 + 72 + 89) / 6.0;
    assert!((average_score(&roster) - expected).abs() < 0.001);
}

#[test]
fn count_by_status_matches_the_dataset() {
    let roster = data::suppliers();
    assert_eq!(count_by_status(&roster, VerificationStatus::Verified), 4);
    assert_eq!(count_by_status(&roster, VerificationStatus::Pending), 1);
    assert_eq!(count_by_status(&roster, VerificationStatus::Expired), 1);
}
