use std::sync::Arc;

use serde::{Deserialize, Serialize};
use shared::domain::{CategorizedPets, PersonRecord};
use shared::error::FetchError;
use tokio::sync::Mutex;
use tracing::info;

use crate::fetch::{ApiEndpoint, HttpCapability, ReqwestHttp};
use crate::render::{render, render_error, render_loader};
use crate::transform::{categorize, sort_by_name};

/// Where the widget writes its markup. Injected at construction; the widget
/// replaces the full content on every state transition.
pub trait RenderTarget: Send + Sync {
    fn replace_content(&self, markup: &str);
}

/// In-memory target for embedding and tests. Holds the latest markup only.
#[derive(Default)]
pub struct BufferTarget {
    content: std::sync::Mutex<String>,
}

impl BufferTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> String {
        self.content.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl RenderTarget for BufferTarget {
    fn replace_content(&self, markup: &str) {
        if let Ok(mut content) = self.content.lock() {
            *content = markup.to_string();
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WidgetConfig {
    pub api: ApiEndpoint,
}

/// Exactly one state is active at a time. Terminal states are left only by
/// the next `start` call; there is no automatic retry.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RenderState {
    #[default]
    Idle,
    Loading,
    Success(CategorizedPets),
    Error(String),
}

pub struct RosterWidget {
    endpoint: ApiEndpoint,
    http: Arc<dyn HttpCapability>,
    target: Arc<dyn RenderTarget>,
    state: Mutex<RenderState>,
}

impl RosterWidget {
    pub fn new(config: WidgetConfig, target: Arc<dyn RenderTarget>) -> Arc<Self> {
        Self::new_with_http(config, Arc::new(ReqwestHttp::new()), target)
    }

    pub fn new_with_http(
        config: WidgetConfig,
        http: Arc<dyn HttpCapability>,
        target: Arc<dyn RenderTarget>,
    ) -> Arc<Self> {
        Arc::new(Self {
            endpoint: config.api,
            http,
            target,
            state: Mutex::new(RenderState::Idle),
        })
    }

    pub async fn state(&self) -> RenderState {
        self.state.lock().await.clone()
    }

    /// Runs one full fetch/categorize/sort/render cycle, replacing the target
    /// content first with the loader and then with the outcome. Failures do
    /// not escape; every one becomes the error state and its markup.
    ///
    /// There is no reentrancy guard: overlapping calls race on the target and
    /// the last resolution wins.
    pub async fn start(&self) {
        {
            let mut state = self.state.lock().await;
            *state = RenderState::Loading;
        }
        self.target.replace_content(&render_loader().join("\n"));
        info!("roster: loading");

        match self.fetch().await {
            Ok(records) => {
                let roster = sort_by_name(categorize(records.as_deref()));
                let markup = render(roster.as_ref()).join("\n");
                {
                    let mut state = self.state.lock().await;
                    *state = RenderState::Success(roster.unwrap_or_default());
                }
                self.target.replace_content(&markup);
                info!("roster: rendered");
            }
            Err(err) => {
                let markup = render_error(&err).join("\n");
                {
                    let mut state = self.state.lock().await;
                    *state = RenderState::Error(err.to_string());
                }
                self.target.replace_content(&markup);
            }
        }
    }

    /// Resolves the endpoint and performs one request. The missing-URL check
    /// runs before the transport is touched, so a blank configuration never
    /// produces network traffic. A JSON `null` body decodes to `None`.
    pub async fn fetch(&self) -> std::result::Result<Option<Vec<PersonRecord>>, FetchError> {
        let url = self.endpoint.resolve_url()?;

        let response = self.http.execute(url, &self.endpoint.options).await?;
        if !response.ok {
            return Err(FetchError::Status(response.status_text));
        }

        Ok(response.json()?)
    }
}

#[cfg(test)]
#[path = "tests/widget_tests.rs"]
mod tests;
