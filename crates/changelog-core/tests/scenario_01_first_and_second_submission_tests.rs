//! Scenario 1: two submissions on an empty page
//!
//! The first submission creates the container, the second reuses it and
//! lands above the first entry.

use changelog_core::container::locate;
use changelog_core::host::Host;
use changelog_core::model::ChangeType;
use changelog_core::{submit_entry, ChangelogConfig, Placement};

mod common;
use common::{child_names, host_with_page, sample_entry};

#[tokio::test]
async fn test_scenario_01_two_submissions_newest_first() {
    // GIVEN a page without a changelog
    let (mut host, page) = host_with_page();
    let config = ChangelogConfig::default();
    let e1 = sample_entry("E1", ChangeType::NewFeature);
    let e2 = sample_entry("E2", ChangeType::BugFix);

    // WHEN two entries are submitted
    let first = submit_entry(&mut host, &page, &e1, &config).await.unwrap();
    let second = submit_entry(&mut host, &page, &e2, &config).await.unwrap();

    // THEN the container was created once
    assert!(first.was_created);
    assert!(!second.was_created);
    assert_eq!(first.container_id, second.container_id);
    assert_eq!(child_names(&host, &page), vec!["Changelog"]);

    // AND content holds E2 then E1
    let status = locate(&host, &page, &config).unwrap().unwrap();
    let content = status.refs.content.clone().unwrap();
    assert_eq!(
        child_names(&host, &content),
        vec![
            format!("changelog-entry-{}", e2.id),
            format!("changelog-entry-{}", e1.id)
        ]
    );
    assert_eq!(first.entry_count, 1);
    assert_eq!(second.entry_count, 2);
    assert_eq!(second.placement, Placement::ContentHead);

    // AND entries, header and footer are locked, content is not
    for entry in host.children(&content).unwrap() {
        assert!(entry.locked, "entry {} should be locked", entry.name);
    }
    assert!(host.node(status.refs.header.as_ref().unwrap()).unwrap().locked);
    assert!(host.node(status.refs.footer.as_ref().unwrap()).unwrap().locked);
    assert!(!host.node(&content).unwrap().locked);
}

#[tokio::test]
async fn test_scenario_01_locked_content_is_restored_after_insert() {
    // GIVEN an existing changelog whose content region is locked
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

    // WHEN another entry is submitted
    let outcome = submit_entry(&mut host, &page, &sample_entry("E2", ChangeType::Update), &config)
        .await
        .unwrap();

    // THEN it was inserted and content is locked again
    assert_eq!(outcome.entry_count, 2);
    assert!(host.node(&content).unwrap().locked);
}

#[tokio::test]
async fn test_scenario_01_header_lock_not_reapplied_on_existing_container() {
    // GIVEN a changelog whose header was unlocked by a user
    let (mut host, page) = host_with_page();
    let config = ChangelogConfig::default();
    submit_entry(&mut host, &page, &sample_entry("E1", ChangeType::Update), &config)
        .await
        .unwrap();
    let header = locate(&host, &page, &config)
        .unwrap()
        .unwrap()
        .refs
        .header
        .unwrap();
    host.set_locked(&header, false).unwrap();

    // WHEN another entry is submitted
    submit_entry(&mut host, &page, &sample_entry("E2", ChangeType::Update), &config)
        .await
        .unwrap();

    // THEN the header stays as the user left it
    assert!(!host.node(&header).unwrap().locked);
}

#[tokio::test]
async fn test_scenario_01_custom_container_name() {
    let (mut host, page) = host_with_page();
    let config = ChangelogConfig {
        container_name: "Release Notes".to_string(),
        ..ChangelogConfig::default()
    };

    submit_entry(&mut host, &page, &sample_entry("E1", ChangeType::Update), &config)
        .await
        .unwrap();

    assert_eq!(child_names(&host, &page), vec!["Release Notes"]);
    assert!(locate(&host, &page, &ChangelogConfig::default())
        .unwrap()
        .is_none());
}
