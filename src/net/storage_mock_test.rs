use futures::executor::block_on;

use super::*;

fn source(name: &str, size: u64) -> UploadSource {
    UploadSource::from_parts(name, size)
}

#[test]
fn upload_then_list_scopes_to_the_prefix() {
    let mock = MockStorage::new();
    block_on(mock.upload("u1/100_report.pdf", &source("report.pdf", 64))).unwrap();
    block_on(mock.upload("u2/200_other.pdf", &source("other.pdf", 32))).unwrap();

    let entries = block_on(mock.list("u1")).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "100_report.pdf");
    assert_eq!(entries[0].metadata.as_ref().unwrap().size, 64);
}

#[test]
fn list_orders_newest_first_by_embedded_timestamp() {
    let mock = MockStorage::new();
    block_on(mock.upload("u1/100_first.pdf", &source("first.pdf", 1))).unwrap();
    block_on(mock.upload("u1/300_third.pdf", &source("third.pdf", 1))).unwrap();
    block_on(mock.upload("u1/200_second.pdf", &source("second.pdf", 1))).unwrap();

    let names: Vec<_> = block_on(mock.list("u1")).unwrap().into_iter().map(|e| e.name).collect();
    assert_eq!(names, ["300_third.pdf", "200_second.pdf", "100_first.pdf"]);
}

#[test]
fn upload_rejects_an_existing_path() {
    let mock = MockStorage::new();
    block_on(mock.upload("u1/100_report.pdf", &source("report.pdf", 64))).unwrap();
    let error = block_on(mock.upload("u1/100_report.pdf", &source("report.pdf", 64))).unwrap_err();
    assert_eq!(error, StorageError::Service("The resource already exists".to_owned()));
    assert_eq!(mock.len(), 1);
}

#[test]
fn remove_deletes_only_the_listed_paths() {
    let mock = MockStorage::new();
    block_on(mock.upload("u1/100_a.pdf", &source("a.pdf", 1))).unwrap();
    block_on(mock.upload("u1/200_b.pdf", &source("b.pdf", 1))).unwrap();

    block_on(mock.remove(&["u1/100_a.pdf".to_owned()])).unwrap();
    let entries = block_on(mock.list("u1")).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "200_b.pdf");
}

#[test]
fn download_distinguishes_known_and_unknown_paths() {
    let mock = MockStorage::new();
    block_on(mock.upload("u1/100_a.pdf", &source("a.pdf", 1))).unwrap();
    assert!(block_on(mock.download("u1/100_a.pdf")).is_ok());
    assert!(block_on(mock.download("u1/missing.pdf")).is_err());
}

#[test]
fn timestamp_from_path_parses_the_prefix() {
    assert_eq!(timestamp_from_path("u1/1716800000000_report.pdf"), Some(1_716_800_000_000));
    assert_eq!(timestamp_from_path("u1/no-stamp.pdf"), None);
}
