//! Browser implementations of the application ports.
//!
//! - [`FetchTransport`]: `fetch` through `gloo-net`
//! - [`BrowserSessionStorage`]: the tab's `sessionStorage`
//! - [`BrowserPage`]: `location`, `confirm()`, visibility and timers

use std::future::Future;
use std::time::Duration;

use backup_console_app::api_client::ApiClient;
use backup_console_app::config::{ClientConfig, RoutesConfig};
use backup_console_app::memory_store::InMemorySessionStore;
use backup_console_app::ports::{
    ApiRequest, ApiResponse, HttpTransport, Method, PageHost, Route, SessionStore,
};
use backup_console_app::session::SessionManager;
use backup_console_domain::error::ConsoleError;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use web_sys::VisibilityState;

/// The API client wired to the browser.
pub type BrowserClient = ApiClient<FetchTransport, BrowserSessionStorage, BrowserPage>;

/// Build an API client from the configuration.
#[must_use]
pub fn api_client(config: &ClientConfig) -> BrowserClient {
    ApiClient::new(
        FetchTransport,
        SessionManager::new(BrowserSessionStorage::open()),
        BrowserPage::new(config.routes.clone()),
        config.api.clone(),
        config.auth.clone(),
    )
}

/// Sends requests with the browser's `fetch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl HttpTransport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ConsoleError> {
        let builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Delete => Request::delete(&request.url),
        }
        .header("Content-Type", "application/json");
        let builder = match &request.bearer {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        };

        let sent = match &request.body {
            Some(body) => {
                builder
                    .json(body)
                    .map_err(ConsoleError::transport)?
                    .send()
                    .await
            }
            None => builder.send().await,
        };
        let response = sent.map_err(ConsoleError::transport)?;
        let status = response.status();
        let body = response.text().await.map_err(ConsoleError::transport)?;
        Ok(ApiResponse { status, body })
    }
}

/// Session store over `sessionStorage`, or memory when the browser refuses
/// access (private mode, sandboxed frames).
#[derive(Debug, Clone)]
pub enum BrowserSessionStorage {
    Session(web_sys::Storage),
    Memory(InMemorySessionStore),
}

impl BrowserSessionStorage {
    #[must_use]
    pub fn open() -> Self {
        match web_sys::window().and_then(|w| w.session_storage().ok().flatten()) {
            Some(storage) => Self::Session(storage),
            None => {
                tracing::warn!("sessionStorage unavailable, keeping the session in memory");
                Self::Memory(InMemorySessionStore::default())
            }
        }
    }
}

impl SessionStore for BrowserSessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            Self::Session(storage) => storage.get_item(key).ok().flatten(),
            Self::Memory(memory) => memory.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) {
        match self {
            Self::Session(storage) => {
                if let Err(err) = storage.set_item(key, value) {
                    tracing::warn!(key, error = ?err, "failed to write session storage");
                }
            }
            Self::Memory(memory) => memory.set(key, value),
        }
    }

    fn remove(&self, key: &str) {
        match self {
            Self::Session(storage) => {
                if let Err(err) = storage.remove_item(key) {
                    tracing::warn!(key, error = ?err, "failed to clear session storage");
                }
            }
            Self::Memory(memory) => memory.remove(key),
        }
    }
}

/// The current browser tab.
#[derive(Debug, Clone)]
pub struct BrowserPage {
    routes: RoutesConfig,
}

impl BrowserPage {
    #[must_use]
    pub fn new(routes: RoutesConfig) -> Self {
        Self { routes }
    }
}

impl PageHost for BrowserPage {
    fn navigate(&self, route: Route) {
        let path = match route {
            Route::Login => &self.routes.login,
            Route::Dashboard => &self.routes.dashboard,
        };
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().set_href(path) {
            tracing::error!(%path, error = ?err, "navigation failed");
        }
    }

    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }

    fn is_visible(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.document())
            .is_none_or(|doc| doc.visibility_state() == VisibilityState::Visible)
    }

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        TimeoutFuture::new(u32::try_from(duration.as_millis()).unwrap_or(u32::MAX))
    }
}
