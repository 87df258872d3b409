//! Request loop
//!
//! Requests are handled strictly one at a time. Delayed responses are
//! delivered by detached timers that only carry the message, so they never
//! touch the document.

use changelog_core::Host;
use changelog_core_types::RequestContext;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::commands::messages::{UiRequest, UiResponse};
use crate::commands::router::Router;
use crate::errors::{EngineError, Result};

/// Channel capacity used by [`spawn`]
pub const CHANNEL_CAPACITY: usize = 32;

/// Serve requests until the request channel closes, then hand the router back
///
/// # Errors
/// `ChannelClosed` when the response receiver is dropped while immediate
/// responses are still being delivered.
pub async fn run<H: Host>(
    mut router: Router<H>,
    mut requests: mpsc::Receiver<UiRequest>,
    responses: mpsc::Sender<UiResponse>,
) -> Result<Router<H>> {
    while let Some(request) = requests.recv().await {
        let ctx = RequestContext::new();
        for outbound in router.dispatch_with_context(request, &ctx).await {
            if outbound.delay.is_zero() {
                responses
                    .send(outbound.message)
                    .await
                    .map_err(|_| EngineError::ChannelClosed)?;
            } else {
                let tx = responses.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(outbound.delay).await;
                    // The UI may have gone away in the meantime
                    tx.send(outbound.message).await.ok();
                });
            }
        }
    }
    Ok(router)
}

/// Start [`run`] on the current runtime
///
/// Returns the request sender, the response receiver and the task handle.
pub fn spawn<H: Host + 'static>(
    router: Router<H>,
) -> (
    mpsc::Sender<UiRequest>,
    mpsc::Receiver<UiResponse>,
    JoinHandle<Result<Router<H>>>,
) {
    let (request_tx, request_rx) = mpsc::channel(CHANNEL_CAPACITY);
    let (response_tx, response_rx) = mpsc::channel(CHANNEL_CAPACITY);
    let handle = tokio::spawn(run(router, request_rx, response_tx));
    (request_tx, response_rx, handle)
}
