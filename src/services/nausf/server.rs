use crate::core::dispatch::DispatchOptions;
use crate::core::server::{SbiServer, StopHandle};
use crate::services::nausf::{auth, sor, upu, SorProtection, UeAuthentication, UpuProtection};
use crate::utils::error::Result;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;

/// Server hosting the NAUSF services.
pub struct NausfServer {
    server: SbiServer,
}

impl NausfServer {
    pub fn new(address: impl Into<String>, api_root: impl Into<String>, options: DispatchOptions) -> Self {
        Self {
            server: SbiServer::new(address, api_root).with_options(options),
        }
    }

    pub fn attach_ue_authentication(&mut self, service: Arc<dyn UeAuthentication>) -> &mut Self {
        tracing::debug!("attaching {} routes", auth::SERVICE_NAME);
        let routes = auth::routes(service, self.server.options());
        self.server.attach(routes);
        self
    }

    pub fn attach_sor_protection(&mut self, service: Arc<dyn SorProtection>) -> &mut Self {
        tracing::debug!("attaching {} routes", sor::SERVICE_NAME);
        let routes = sor::routes(service, self.server.options());
        self.server.attach(routes);
        self
    }

    pub fn attach_upu_protection(&mut self, service: Arc<dyn UpuProtection>) -> &mut Self {
        tracing::debug!("attaching {} routes", upu::SERVICE_NAME);
        let routes = upu::routes(service, self.server.options());
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
