use super::*;

#[test]
fn supplier_by_id_finds_known_ids() {
    let supplier = supplier_by_id("1").unwrap();
    assert_eq!(supplier.name, "EcoHarvest Materials");
    assert!(supplier_by_id("999").is_none());
}

#[test]
fn metric_progress_counts_toward_growth_targets() {
    let renewable = sustainability_metrics().into_iter().find(|m| m.name == "Renewable Energy").unwrap();
    assert!((renewable.progress_percent() - 80.0).abs() < 0.01);
}

#[test]
fn metric_progress_inverts_for_reduction_targets() {
    let carbon = sustainability_metrics().into_iter().find(|m| m.name == "Carbon Footprint").unwrap();
    // 1500 target over 1842 actual: ~81% of the way down.
    assert!((carbon.progress_percent() - 81.43).abs() < 0.1);
}

#[test]
fn downward_trend_is_favorable_only_for_reduction_metrics() {
    let carbon = sustainability_metrics().into_iter().find(|m| m.name == "Carbon Footprint").unwrap();
    assert!(carbon.trend_is_favorable());

    let renewable = sustainability_metrics().into_iter().find(|m| m.name == "Renewable Energy").unwrap();
    assert!(renewable.trend_is_favorable());

    let inverted = SustainabilityMetric { trend: MetricTrend::Down, ..renewable };
    assert!(!inverted.trend_is_favorable());
}

#[test]
fn datasets_are_nonempty_and_ids_unique() {
    let suppliers = suppliers();
    assert_eq!(suppliers.len(), 6);
    let mut ids: Vec<_> = suppliers.iter().map(|s| s.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 6);

    assert_eq!(sustainability_metrics().len(), 6);
    assert_eq!(verification_activities().len(), 5);
    assert!(!notifications().is_empty());
}
