//! Request loop delivery and timing

use std::time::Duration;

use changelog_engine::{spawn, UiRequest, UiResponse};

mod common;
use common::{form, router};

#[tokio::test(start_paused = true)]
async fn test_navigate_home_arrives_after_delay() {
    let (requests, mut responses, handle) = spawn(router());

    requests
        .send(UiRequest::CreateEntry {
            data: Some(form("Dark mode")),
        })
        .await
        .unwrap();

    let first = responses.recv().await.unwrap();
    assert!(matches!(first, UiResponse::Success { entry_count: 1, .. }));

    // Nothing else before the delay elapses
    tokio::time::sleep(Duration::from_millis(1499)).await;
    assert!(responses.try_recv().is_err());

    let second = responses.recv().await.unwrap();
    assert!(matches!(second, UiResponse::NavigateHome { entry_count: 1, .. }));

    drop(requests);
    let router = handle.await.unwrap().unwrap();
    assert_eq!(router.host().notices().len(), 0);
}

#[tokio::test]
async fn test_requests_are_answered_in_order() {
    let (requests, mut responses, handle) = spawn(router());

    requests.send(UiRequest::ListPages).await.unwrap();
    requests.send(UiRequest::FetchUserInfo).await.unwrap();
    drop(requests);

    assert!(matches!(responses.recv().await, Some(UiResponse::Pages { .. })));
    assert!(matches!(responses.recv().await, Some(UiResponse::UserInfo { .. })));
    assert!(handle.await.unwrap().is_ok());
}
