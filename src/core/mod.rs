pub mod client;
pub mod dispatch;
pub mod server;

pub use client::{ApiResponse, ClientConfiguration, SbiClient, ServerConfiguration, ServerVariable};
pub use dispatch::{DispatchOptions, OperationSpec, ResponseKind, ServiceResponse};
pub use server::{SbiServer, StopHandle};
