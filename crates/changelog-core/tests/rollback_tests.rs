//! All-or-nothing submissions
//!
//! A submission that fails after creating the container must leave the page
//! exactly as it found it.

use changelog_core::container::locate;
use changelog_core::host::Host;
use changelog_core::model::ChangeType;
use changelog_core::{append_entry, submit_entry, ChangelogConfig, ChangelogError};

mod common;
use common::{host_with_page, page_snapshot, sample_entry, PNG_DATA_URL};

#[tokio::test]
async fn test_failed_insert_removes_fresh_container() {
    // GIVEN a host that accepts the container but refuses the entry
    let (mut host, page) = host_with_page();
    host.reject_node_creation_after(1);
    let before = page_snapshot(&host, &page);

    // WHEN an entry is submitted
    let err = submit_entry(
        &mut host,
        &page,
        &sample_entry("E1", ChangeType::Update),
        &ChangelogConfig::default(),
    )
    .await
    .unwrap_err();

    // THEN the insertion error is reported and the container is gone
    assert!(matches!(err, ChangelogError::EntryInsertion { .. }));
    assert_eq!(page_snapshot(&host, &page), before);
}

#[tokio::test]
async fn test_failed_insert_into_existing_container_keeps_it() {
    // GIVEN a changelog with one entry and a locked content region
    let (mut host, page) = host_with_page();
    let config = ChangelogConfig::default();
    submit_entry(&mut host, &page, &sample_entry("E1", ChangeType::Update), &config)
        .await
        .unwrap();
    let content = locate(&host, &page, &config)
        .unwrap()
        .unwrap()
        .refs
        .content
        .unwrap();
    host.set_locked(&content, true).unwrap();
    let before = page_snapshot(&host, &page);

    // WHEN the host starts refusing insertions
    host.reject_node_creation(true);
    let err = submit_entry(&mut host, &page, &sample_entry("E2", ChangeType::Update), &config)
        .await
        .unwrap_err();

    // THEN the existing changelog is untouched, lock included
    assert!(matches!(err, ChangelogError::EntryInsertion { .. }));
    assert_eq!(page_snapshot(&host, &page), before);
    assert!(host.node(&content).unwrap().locked);
}

#[tokio::test]
async fn test_append_entry_on_existing_container() {
    let (mut host, page) = host_with_page();
    let config = ChangelogConfig::default();
    submit_entry(&mut host, &page, &sample_entry("E1", ChangeType::Update), &config)
        .await
        .unwrap();

    let outcome = append_entry(&mut host, &page, &sample_entry("E2", ChangeType::Update), &config)
        .await
        .unwrap();

    assert!(!outcome.was_created);
    assert_eq!(outcome.entry_count, 2);
}

#[tokio::test]
async fn test_unknown_page_is_reported() {
    let (mut host, _) = host_with_page();

    let err = submit_entry(
        &mut host,
        &"0:42".into(),
        &sample_entry("E1", ChangeType::Update),
        &ChangelogConfig::default(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ChangelogError::PageNotFound { .. }));
}

#[tokio::test]
async fn test_rejected_container_with_image_leaves_saved_document_unchanged() {
    // GIVEN a host that refuses every node and an entry carrying an image
    let (mut host, page) = host_with_page();
    host.reject_node_creation(true);
    let before = serde_json::to_string(&host).unwrap();
    let entry = sample_entry("E1", ChangeType::NewFeature).with_image(PNG_DATA_URL);

    // WHEN the entry is submitted
    let err = submit_entry(&mut host, &page, &entry, &ChangelogConfig::default())
        .await
        .unwrap_err();

    // THEN the saved form of the document is byte for byte the same
    assert!(matches!(err, ChangelogError::ContainerCreation { .. }));
    assert_eq!(serde_json::to_string(&host).unwrap(), before);
}

#[tokio::test]
async fn test_failed_insert_with_image_does_not_grow_saved_document() {
    let (mut host, page) = host_with_page();
    let config = ChangelogConfig::default();
    submit_entry(&mut host, &page, &sample_entry("E1", ChangeType::Update), &config)
        .await
        .unwrap();
    let before = serde_json::to_string(&host).unwrap();

    host.reject_node_creation(true);
    let entry = sample_entry("E2", ChangeType::Update).with_image(PNG_DATA_URL);
    submit_entry(&mut host, &page, &entry, &config)
        .await
        .unwrap_err();

    assert_eq!(serde_json::to_string(&host).unwrap(), before);
}

#[tokio::test]
async fn test_attached_image_is_saved_with_document() {
    let (mut host, page) = host_with_page();
    let entry = sample_entry("E1", ChangeType::Update).with_image(PNG_DATA_URL);
    submit_entry(&mut host, &page, &entry, &ChangelogConfig::default())
        .await
        .unwrap();

    let saved: serde_json::Value = serde_json::to_value(&host).unwrap();

    assert_eq!(saved["images"].as_object().unwrap().len(), 1);
}
