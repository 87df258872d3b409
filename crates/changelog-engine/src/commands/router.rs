//! Request dispatch
//!
//! Every request produces a list of outbound messages. Failures never
//! escape `dispatch`; they become `error` responses, and submission
//! failures additionally raise an error notice on the host.

use std::time::{Duration, Instant};

use changelog_core::container::locate;
use changelog_core::errors::ExError;
use changelog_core::image::is_inline_image;
use changelog_core::model::NodeId;
use changelog_core::reconcile::{reconcile, SubmitMode};
use changelog_core::{log_op_end, log_op_start};
use changelog_core::{ChangelogConfig, ChangelogError, Host, Result};
use changelog_core_types::RequestContext;
use tracing::Instrument;

use super::form::FormData;
use super::messages::{PageSummary, UiRequest, UiResponse};
use crate::errors;

/// Format reported for fetched image bytes
pub const FETCHED_IMAGE_FORMAT: &str = "PNG";

pub const NO_CONTAINER_NOTICE: &str = "No changelog found on this page";

/// A response and how long to wait before delivering it
#[derive(Debug, Clone, PartialEq)]
pub struct Outbound {
    pub delay: Duration,
    pub message: UiResponse,
}

impl Outbound {
    pub fn immediate(message: UiResponse) -> Self {
        Self {
            delay: Duration::ZERO,
            message,
        }
    }

    pub fn delayed(message: UiResponse, delay: Duration) -> Self {
        Self { delay, message }
    }
}

pub struct Router<H: Host> {
    host: H,
    config: ChangelogConfig,
}

impl<H: Host> Router<H> {
    pub fn new(host: H, config: ChangelogConfig) -> Self {
        Self { host, config }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn config(&self) -> &ChangelogConfig {
        &self.config
    }

    pub async fn dispatch(&mut self, request: UiRequest) -> Vec<Outbound> {
        self.dispatch_with_context(request, &RequestContext::new())
            .await
    }

    /// Decode a JSON request and handle it
    ///
    /// # Errors
    /// `InvalidRequest` when `json` is not a well-formed request; nothing is
    /// dispatched in that case.
    pub async fn dispatch_json(&mut self, json: &str) -> errors::Result<Vec<Outbound>> {
        let request: UiRequest = serde_json::from_str(json)?;
        Ok(self.dispatch(request).await)
    }

    /// Handle one request under the correlation ids in `ctx`
    pub async fn dispatch_with_context(
        &mut self,
        request: UiRequest,
        ctx: &RequestContext,
    ) -> Vec<Outbound> {
        let op = request.kind();
        let span = tracing::info_span!(
            "dispatch",
            request_id = %ctx.request_id,
            request = op
        );
        async move {
            let start = Instant::now();
            log_op_start!(op);
            let outbound = self.handle(request, ctx).await;
            log_op_end!(
                op,
                duration_ms = start.elapsed().as_millis() as u64,
                responses = outbound.len() as u64
            );
            outbound
        }
        .instrument(span)
        .await
    }

    async fn handle(&mut self, request: UiRequest, ctx: &RequestContext) -> Vec<Outbound> {
        match request {
            UiRequest::ListPages => vec![Outbound::immediate(self.list_pages())],
            UiRequest::CheckContainer { page_id } => {
                vec![Outbound::immediate(self.check_container(&page_id).await)]
            }
            UiRequest::NavigateToContainer => self
                .navigate_to_container()
                .err()
                .map(|err| Outbound::immediate(UiResponse::error(err.to_string())))
                .into_iter()
                .collect(),
            UiRequest::CreateEntry { data } => {
                self.submit(data, SubmitMode::CreateIfMissing, "create-entry", ctx)
                    .await
            }
            UiRequest::AddEntry { data } => {
                self.submit(data, SubmitMode::RequireExisting, "add-entry", ctx)
                    .await
            }
            UiRequest::FetchUserInfo => vec![Outbound::immediate(self.user_info())],
            UiRequest::ProcessRemoteImage { photo_url } => {
                vec![Outbound::immediate(
                    self.process_remote_image(photo_url.as_deref()).await,
                )]
            }
            UiRequest::SubmitForm { data } => {
                let response = match self.run_submission(data, SubmitMode::CreateIfMissing).await
                {
                    Ok(_) => UiResponse::SubmitSuccess,
                    Err(err) => self.report_failure("submit-form", &err, ctx),
                };
                vec![Outbound::immediate(response)]
            }
        }
    }

    fn list_pages(&self) -> UiResponse {
        UiResponse::Pages {
            pages: self
                .host
                .pages()
                .into_iter()
                .map(|page| PageSummary {
                    page_id: page.id.to_string(),
                    page_name: page.name,
                })
                .collect(),
        }
    }

    async fn check_container(&mut self, page_id: &str) -> UiResponse {
        let page = NodeId::from(page_id);
        if self.host.set_current_page(&page).await.is_err() {
            return UiResponse::error("Selected page not found");
        }
        match locate(&self.host, &page, &self.config) {
            Ok(status) => UiResponse::ContainerStatus {
                exists: status.is_some(),
                entry_count: status.map_or(0, |s| s.entry_count),
                active_page_id: page.to_string(),
            },
            Err(err) => UiResponse::error(format!("Could not check the changelog: {}", err)),
        }
    }

    fn navigate_to_container(&mut self) -> Result<()> {
        let page = self.host.current_page().ok_or(ChangelogError::NoActivePage)?;
        match locate(&self.host, &page, &self.config)? {
            Some(status) => {
                self.host.scroll_into_view(&status.refs.container)?;
            }
            None => self.host.notify(NO_CONTAINER_NOTICE, false),
        }
        Ok(())
    }

    async fn submit(
        &mut self,
        data: Option<FormData>,
        mode: SubmitMode,
        op: &str,
        ctx: &RequestContext,
    ) -> Vec<Outbound> {
        match self.run_submission(data, mode).await {
            Ok((entry_count, page)) => {
                let active_page_id = page.to_string();
                vec![
                    Outbound::immediate(UiResponse::Success {
                        entry_count,
                        active_page_id: active_page_id.clone(),
                    }),
                    Outbound::delayed(
                        UiResponse::NavigateHome {
                            entry_count,
                            active_page_id,
                        },
                        self.config.home_delay(),
                    ),
                ]
            }
            Err(err) => vec![Outbound::immediate(self.report_failure(op, &err, ctx))],
        }
    }

    async fn run_submission(
        &mut self,
        data: Option<FormData>,
        mode: SubmitMode,
    ) -> Result<(usize, NodeId)> {
        let data = data.ok_or(ChangelogError::FormDataMissing)?;
        let page = self
            .host
            .current_page()
            .ok_or(ChangelogError::NoActivePage)?;
        let user = self.host.current_user();
        let entry = data.into_entry(user.as_ref(), &self.config)?;

        let outcome = reconcile(&mut self.host, &page, &entry, &self.config, mode).await?;
        Ok((outcome.entry_count, page))
    }

    fn report_failure(
        &mut self,
        op: &str,
        err: &ChangelogError,
        ctx: &RequestContext,
    ) -> UiResponse {
        let ex_err = ExError::from(err.clone()).with_request_id(ctx.request_id.clone());
        tracing::warn!(
            component = module_path!(),
            op,
            err_code = ex_err.code(),
            request_id = ex_err.request_id().map(|id| id.as_str()),
            error = %err,
            "request failed"
        );
        let message = match op {
            "add-entry" => format!("Error adding entry: {}", err),
            "submit-form" => format!("Error adding change: {}", err),
            _ => format!("Error creating changelog: {}", err),
        };
        self.host.notify(&message, true);
        UiResponse::error(message)
    }

    fn user_info(&self) -> UiResponse {
        let user = self.host.current_user();
        let name = user
            .as_ref()
            .map(|u| self.config.display_name(&u.name).to_string())
            .unwrap_or_else(|| self.config.default_user_name.clone());
        UiResponse::UserInfo {
            name,
            photo_url: user
                .and_then(|u| u.photo_url)
                .filter(|p| !p.trim().is_empty()),
        }
    }

    async fn process_remote_image(&mut self, photo_url: Option<&str>) -> UiResponse {
        let Some(url) = photo_url.map(str::trim).filter(|u| !u.is_empty()) else {
            return UiResponse::ImageError {
                error: "No photo URL provided".to_string(),
            };
        };
        if is_inline_image(url) {
            return UiResponse::ImageProcessed {
                image_data: url.to_string(),
            };
        }
        match self.host.fetch_image(url).await {
            Ok(image_bytes) => UiResponse::ImageBytes {
                image_bytes,
                format: FETCHED_IMAGE_FORMAT.to_string(),
            },
            Err(err) => UiResponse::ImageError {
                error: err.to_string(),
            },
        }
    }
}
