use crate::core::dispatch::DispatchOptions;
use crate::utils::error::{Result, SdkError};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Signals a running [`SbiServer`] to shut down gracefully.
#[derive(Debug, Clone)]
pub struct StopHandle {
    tx: Arc<watch::Sender<bool>>,
}

impl StopHandle {
    pub fn stop(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_stopped(&self) -> bool {
        *self.tx.borrow()
    }
}

/// HTTP server hosting the routes of one or more NF services under a common
/// API root.
pub struct SbiServer {
    address: String,
    api_root: String,
    options: DispatchOptions,
    routes: Router,
    stop_tx: Arc<watch::Sender<bool>>,
    task: Option<JoinHandle<std::io::Result<()>>>,
    local_addr: Option<SocketAddr>,
}

impl SbiServer {
    pub fn new(address: impl Into<String>, api_root: impl Into<String>) -> Self {
        let (stop_tx, _) = watch::channel(false);
        Self {
            address: address.into(),
            api_root: normalize_api_root(&api_root.into()),
            options: DispatchOptions::default(),
            routes: Router::new(),
            stop_tx: Arc::new(stop_tx),
            task: None,
            local_addr: None,
        }
    }

    pub fn with_options(mut self, options: DispatchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> DispatchOptions {
        self.options
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// Add a service's routes. Paths are relative to the API root.
    pub fn attach(&mut self, routes: Router) -> &mut Self {
        let current = std::mem::take(&mut self.routes);
        self.routes = current.merge(routes);
        self
    }

    /// All attached routes mounted under the API root.
    pub fn router(&self) -> Router {
        mount(&self.api_root, self.routes.clone())
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.local_addr
    }

    /// Bind the listener and serve on a background task. Returns once the
    /// socket is bound.
    pub async fn start(&mut self) -> Result<SocketAddr> {
        if self.task.is_some() {
            return Err(SdkError::ServerError {
                message: "server already started".to_string(),
            });
        }

        let listener = TcpListener::bind(&self.address).await?;
        let addr = listener.local_addr()?;
        let app = self.router();
        let mut stop_rx = self.stop_tx.subscribe();
        self.stop_tx.send_replace(false);

        self.task = Some(tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = stop_rx.wait_for(|stopped| *stopped).await;
                })
                .await
        }));
        self.local_addr = Some(addr);

        tracing::info!("🚀 SBI server listening on {}{}", addr, self.api_root);
        Ok(addr)
    }

    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            tx: Arc::clone(&self.stop_tx),
        }
    }

    pub fn stop(&self) {
        tracing::info!("🛑 stopping SBI server");
        self.stop_tx.send_replace(true);
    }

    /// Wait until the server task ends. Returns immediately if it was never
    /// started.
    pub async fn wait(&mut self) -> Result<()> {
        let Some(task) = self.task.take() else {
            return Ok(());
        };
        let served = task.await.map_err(|e| SdkError::ServerError {
            message: format!("server task failed: {}", e),
        })?;
        served?;
        self.local_addr = None;
        tracing::info!("✅ SBI server stopped");
        Ok(())
    }
}

/// `""`, `"/"` and `"/v1/"` become `""`, `""` and `"/v1"`.
pub fn normalize_api_root(api_root: &str) -> String {
    let trimmed = api_root.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

pub fn mount(api_root: &str, routes: Router) -> Router {
    let root = normalize_api_root(api_root);
    if root.is_empty() {
        routes
    } else {
        Router::new().nest(&root, routes)
    }
}
