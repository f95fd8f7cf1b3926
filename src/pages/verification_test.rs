use super::*;

#[test]
fn no_filters_returns_everything() {
    let all = data::verification_activities();
    assert_eq!(filter_activities(&all, None, None).len(), all.len());
}

#[test]
fn status_filter_narrows_the_feed() {
    let all = data::verification_activities();
    let completed = filter_activities(&all, Some(ActivityStatus::Completed), None);
    assert_eq!(completed.len(), 2);
    assert!(completed.iter().all(|a| a.status == ActivityStatus::Completed));
}

#[test]
fn filters_combine_conjunctively() {
    let all = data::verification_activities();
    let audits_in_progress = filter_activities(&all, Some(ActivityStatus::InProgress), Some(ActivityType::Audit));
    assert_eq!(audits_in_progress.len(), 1);
    assert_eq!(audits_in_progress[0].supplier, "Sustainable Logistics");
}

#[test]
fn disjoint_filters_yield_nothing() {
    let all = data::verification_activities();
    assert!(filter_activities(&all, Some(ActivityStatus::Scheduled), Some(ActivityType::Report)).is_empty());
}
