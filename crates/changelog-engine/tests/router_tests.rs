//! Router behaviour per request type

use std::time::Duration;

use changelog_core::host::Host;
use changelog_engine::{EngineError, Outbound, PageSummary, UiRequest, UiResponse};

mod common;
use common::{form, router, PNG_BYTES};

#[tokio::test]
async fn test_list_pages_in_document_order() {
    let mut router = router();

    let out = router.dispatch(UiRequest::ListPages).await;

    assert_eq!(
        out,
        vec![Outbound::immediate(UiResponse::Pages {
            pages: vec![
                PageSummary {
                    page_id: "0:1".to_string(),
                    page_name: "Page 1".to_string()
                },
                PageSummary {
                    page_id: "0:2".to_string(),
                    page_name: "Page 2".to_string()
                },
            ]
        })]
    );
}

#[tokio::test]
async fn test_check_container_switches_page() {
    let mut router = router();

    let out = router
        .dispatch(UiRequest::CheckContainer {
            page_id: "0:2".to_string(),
        })
        .await;

    assert_eq!(
        out[0].message,
        UiResponse::ContainerStatus {
            exists: false,
            entry_count: 0,
            active_page_id: "0:2".to_string()
        }
    );
    assert_eq!(router.host().current_page().unwrap().as_str(), "0:2");
}

#[tokio::test]
async fn test_check_unknown_page_is_error() {
    let mut router = router();

    let out = router
        .dispatch(UiRequest::CheckContainer {
            page_id: "0:9".to_string(),
        })
        .await;

    assert!(out[0].message.is_error());
    assert_eq!(router.host().current_page().unwrap().as_str(), "0:1");
}

#[tokio::test]
async fn test_create_entry_success_then_delayed_home() {
    let mut router = router();

    let out = router
        .dispatch(UiRequest::CreateEntry {
            data: Some(form("Dark mode")),
        })
        .await;

    assert_eq!(
        out,
        vec![
            Outbound::immediate(UiResponse::Success {
                entry_count: 1,
                active_page_id: "0:1".to_string()
            }),
            Outbound::delayed(
                UiResponse::NavigateHome {
                    entry_count: 1,
                    active_page_id: "0:1".to_string()
                },
                Duration::from_millis(1500)
            ),
        ]
    );

    let status = router
        .dispatch(UiRequest::CheckContainer {
            page_id: "0:1".to_string(),
        })
        .await;
    assert_eq!(
        status[0].message,
        UiResponse::ContainerStatus {
            exists: true,
            entry_count: 1,
            active_page_id: "0:1".to_string()
        }
    );
}

#[tokio::test]
async fn test_create_entry_without_data_reports_error_and_notifies() {
    let mut router = router();

    let out = router.dispatch(UiRequest::CreateEntry { data: None }).await;

    assert_eq!(out.len(), 1);
    assert!(matches!(
        &out[0].message,
        UiResponse::Error { message } if message.contains("Form data not provided")
    ));
    let notices = router.host().notices();
    assert_eq!(notices.len(), 1);
    assert!(notices[0].is_error);
}

#[tokio::test]
async fn test_add_entry_requires_existing_container() {
    let mut router = router();

    let out = router
        .dispatch(UiRequest::AddEntry {
            data: Some(form("Dark mode")),
        })
        .await;

    assert!(matches!(
        &out[0].message,
        UiResponse::Error { message } if message.starts_with("Error adding entry")
    ));
    let page = router.host().current_page().unwrap();
    assert!(router.host().children(&page).unwrap().is_empty());
}

#[tokio::test]
async fn test_add_entry_after_create() {
    let mut router = router();
    router
        .dispatch(UiRequest::CreateEntry {
            data: Some(form("First")),
        })
        .await;

    let out = router
        .dispatch(UiRequest::AddEntry {
            data: Some(form("Second")),
        })
        .await;

    assert_eq!(
        out[0].message,
        UiResponse::Success {
            entry_count: 2,
            active_page_id: "0:1".to_string()
        }
    );
}

#[tokio::test]
async fn test_submit_form_is_bare() {
    let mut router = router();

    let out = router
        .dispatch(UiRequest::SubmitForm {
            data: Some(form("Dark mode")),
        })
        .await;

    assert_eq!(out, vec![Outbound::immediate(UiResponse::SubmitSuccess)]);
}

#[tokio::test]
async fn test_submit_form_with_blank_title_fails() {
    let mut router = router();
    let mut data = form("x");
    data.title = Some("  ".to_string());

    let out = router.dispatch(UiRequest::SubmitForm { data: Some(data) }).await;

    assert!(matches!(
        &out[0].message,
        UiResponse::Error { message } if message.contains("title")
    ));
}

#[tokio::test]
async fn test_navigate_without_container_notifies() {
    let mut router = router();

    let out = router.dispatch(UiRequest::NavigateToContainer).await;

    assert!(out.is_empty());
    let notices = router.host().notices();
    assert_eq!(notices[0].message, "No changelog found on this page");
    assert!(!notices[0].is_error);
    assert!(router.host().viewport_focus().is_none());
}

#[tokio::test]
async fn test_navigate_focuses_container() {
    let mut router = router();
    router
        .dispatch(UiRequest::CreateEntry {
            data: Some(form("First")),
        })
        .await;

    let out = router.dispatch(UiRequest::NavigateToContainer).await;

    assert!(out.is_empty());
    let page = router.host().current_page().unwrap();
    let container = router.host().children(&page).unwrap()[0].id.clone();
    assert_eq!(router.host().viewport_focus(), Some(&container));
}

#[tokio::test]
async fn test_fetch_user_info() {
    let mut router = router();

    let out = router.dispatch(UiRequest::FetchUserInfo).await;

    assert_eq!(
        out[0].message,
        UiResponse::UserInfo {
            name: "Ana Souza".to_string(),
            photo_url: Some("https://cdn.example.com/ana.png".to_string())
        }
    );
}

#[tokio::test]
async fn test_fetch_user_info_without_user() {
    let mut router = router();
    router.host_mut().set_user(None);

    let out = router.dispatch(UiRequest::FetchUserInfo).await;

    assert_eq!(
        out[0].message,
        UiResponse::UserInfo {
            name: "Unknown User".to_string(),
            photo_url: None
        }
    );
}

#[tokio::test]
async fn test_process_remote_image_variants() {
    let mut router = router();
    router
        .host_mut()
        .register_remote_image("https://cdn.example.com/ok.png", PNG_BYTES.to_vec());

    let missing = router
        .dispatch(UiRequest::ProcessRemoteImage { photo_url: None })
        .await;
    assert!(matches!(missing[0].message, UiResponse::ImageError { .. }));

    let inline = router
        .dispatch(UiRequest::ProcessRemoteImage {
            photo_url: Some("data:image/png;base64,AAAA".to_string()),
        })
        .await;
    assert_eq!(
        inline[0].message,
        UiResponse::ImageProcessed {
            image_data: "data:image/png;base64,AAAA".to_string()
        }
    );

    let fetched = router
        .dispatch(UiRequest::ProcessRemoteImage {
            photo_url: Some("https://cdn.example.com/ok.png".to_string()),
        })
        .await;
    assert_eq!(
        fetched[0].message,
        UiResponse::ImageBytes {
            image_bytes: PNG_BYTES.to_vec(),
            format: "PNG".to_string()
        }
    );

    let unreachable = router
        .dispatch(UiRequest::ProcessRemoteImage {
            photo_url: Some("https://cdn.example.com/missing.png".to_string()),
        })
        .await;
    assert!(matches!(unreachable[0].message, UiResponse::ImageError { .. }));
}

#[tokio::test]
async fn test_dispatch_json_decodes_wire_request() {
    let mut router = router();

    let out = router
        .dispatch_json(r#"{"type":"check-container","pageId":"0:2"}"#)
        .await
        .unwrap();

    assert_eq!(
        out[0].message,
        UiResponse::ContainerStatus {
            exists: false,
            entry_count: 0,
            active_page_id: "0:2".to_string()
        }
    );
}

#[tokio::test]
async fn test_dispatch_json_rejects_unknown_request() {
    let mut router = router();
    let before = router.host().node_count();

    let err = router
        .dispatch_json(r#"{"type":"delete-everything"}"#)
        .await
        .unwrap_err();

    assert!(matches!(err, EngineError::InvalidRequest(_)));
    assert!(err.to_string().starts_with("Invalid request:"));
    assert_eq!(router.host().node_count(), before);
}
