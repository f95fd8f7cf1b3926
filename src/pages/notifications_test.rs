use super::*;

#[test]
fn unread_count_matches_the_seed_feed() {
    let feed = data::notifications();
    assert_eq!(unread_count(&feed), 2);
}

#[test]
fn mark_read_targets_exactly_one_item() {
    let mut feed = data::notifications();
    mark_read(&mut feed, "1");
    assert_eq!(unread_count(&feed), 1);
    assert!(feed.iter().find(|n| n.id == "1").unwrap().read);

    mark_read(&mut feed, "missing");
    assert_eq!(unread_count(&feed), 1);
}

#[test]
fn mark_all_read_clears_the_badge() {
    let mut feed = data::notifications();
    mark_all_read(&mut feed);
    assert_eq!(unread_count(&feed), 0);
}

#[test]
fn filter_unread_narrows_and_preserves_order() {
    let feed = data::notifications();
    let unread = filter_unread(&feed, true);
    assert_eq!(unread.len(), 2);
    assert!(unread.iter().all(|n| !n.read));
    assert_eq!(filter_unread(&feed, false).len(), feed.len());
}
