use crate::core::dispatch::DispatchOptions;
use crate::core::server::{SbiServer, StopHandle};
use crate::services::nlmf::{broadcast, location, Broadcast, Location};
use crate::utils::error::Result;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;

/// Server hosting the NLMF services.
pub struct NlmfServer {
    server: SbiServer,
}

impl NlmfServer {
    pub fn new(address: impl Into<String>, api_root: impl Into<String>, options: DispatchOptions) -> Self {
        Self {
            server: SbiServer::new(address, api_root).with_options(options),
        }
    }

    pub fn attach_broadcast(&mut self, service: Arc<dyn Broadcast>) -> &mut Self {
        tracing::debug!("attaching {} routes", broadcast::SERVICE_NAME);
        let routes = broadcast::routes(service, self.server.options());
        self.server.attach(routes);
        self
    }

    pub fn attach_location(&mut self, service: Arc<dyn Location>) -> &mut Self {
        tracing::debug!("attaching {} routes", location::SERVICE_NAME);
        let routes = location::routes(service, self.server.options());
        self.server.attach(routes);
        self
    }

    pub fn router(&self) -> Router {
        self.server.router()
    }

    pub async fn start(&mut self) -> Result<SocketAddr> {
        self.server.start().await
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.server.stop_handle()
    }

    pub fn stop(&self) {
        self.server.stop()
    }

    pub async fn wait(&mut self) -> Result<()> {
        self.server.wait().await
    }
}
