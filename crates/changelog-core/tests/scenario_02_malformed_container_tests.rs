//! Scenario 2: containers missing their content region
//!
//! Entries still land in a deterministic position and the container's own
//! lock is restored.

use changelog_core::container::locate;
use changelog_core::host::Host;
use changelog_core::model::{ChangeType, FontName, Node, NodeKind, Rgb, TextProps};
use changelog_core::{submit_entry, ChangelogConfig, Placement};

mod common;
use common::{child_names, host_with_page, sample_entry};

#[tokio::test]
async fn test_scenario_02_entry_goes_after_header() {
    // GIVEN a locked container with header and footer but no content
    let (mut host, page) = host_with_page();
    let config = ChangelogConfig::default();
    let container = host
        .append_child(
            &page,
            Node::frame("Changelog")
                .with_child(Node::frame("header"))
                .with_child(Node::frame("footer"))
                .locked(),
        )
        .unwrap();
    let entry = sample_entry("E1", ChangeType::Update);

    // WHEN an entry is submitted
    let outcome = submit_entry(&mut host, &page, &entry, &config).await.unwrap();

    // THEN it sits between header and footer
    assert_eq!(outcome.placement, Placement::AfterHeader);
    assert!(!outcome.was_created);
    assert_eq!(
        child_names(&host, &container),
        vec![
            "header".to_string(),
            format!("changelog-entry-{}", entry.id),
            "footer".to_string()
        ]
    );

    // AND the count reflects the missing content region
    assert_eq!(outcome.entry_count, 0);

    // AND the container lock was restored
    assert!(host.node(&container).unwrap().locked);
}

#[tokio::test]
async fn test_scenario_02_bare_container_gets_entry_first() {
    // GIVEN a container with only a footer
    let (mut host, page) = host_with_page();
    let config = ChangelogConfig::default();
    let container = host
        .append_child(&page, Node::frame("Changelog").with_child(Node::frame("footer")))
        .unwrap();
    let entry = sample_entry("E1", ChangeType::Update);

    // WHEN an entry is submitted
    let outcome = submit_entry(&mut host, &page, &entry, &config).await.unwrap();

    // THEN it becomes the first child of the container
    assert_eq!(outcome.placement, Placement::ContainerHead);
    assert_eq!(
        child_names(&host, &container)[0],
        format!("changelog-entry-{}", entry.id)
    );
    assert!(!host.node(&container).unwrap().locked);
}

#[tokio::test]
async fn test_scenario_02_locate_reports_partial_refs() {
    let (mut host, page) = host_with_page();
    host.append_child(&page, Node::frame("Changelog").with_child(Node::frame("footer")))
        .unwrap();

    let status = locate(&host, &page, &ChangelogConfig::default())
        .unwrap()
        .unwrap();

    assert!(status.refs.header.is_none());
    assert!(status.refs.content.is_none());
    assert!(status.refs.footer.is_some());
    assert!(!status.refs.is_complete());
}

#[tokio::test]
async fn test_scenario_02_text_named_content_is_not_a_region() {
    // GIVEN a container whose "content" child is a text layer
    let (mut host, page) = host_with_page();
    let config = ChangelogConfig::default();
    let font = FontName::new("Inter", "Regular");
    let container = host
        .append_child(
            &page,
            Node::frame("Changelog")
                .with_child(Node::frame("header"))
                .with_child(Node::text(
                    "content",
                    TextProps::new("notes", &font, 12.0, Rgb::BLACK),
                ))
                .with_child(Node::frame("footer")),
        )
        .unwrap();
    let entry = sample_entry("E1", ChangeType::Update);

    // WHEN an entry is submitted
    let outcome = submit_entry(&mut host, &page, &entry, &config).await.unwrap();

    // THEN the text layer is ignored and the entry goes after the header
    assert_eq!(outcome.placement, Placement::AfterHeader);
    assert_eq!(outcome.entry_count, 0);
    let regions = host.children(&container).unwrap();
    assert_eq!(regions[1].name, format!("changelog-entry-{}", entry.id));
    let text = regions
        .iter()
        .find(|child| child.kind == NodeKind::Text)
        .unwrap();
    assert!(host.children(&text.id).unwrap().is_empty());
}
