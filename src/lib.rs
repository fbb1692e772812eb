//! SDK for 5G Core network functions: 3GPP SBI data models with structural
//! validation, HTTP route glue for hosting NF services, and typed clients.

pub mod config;
pub mod core;
pub mod models;
pub mod services;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::Cli;
pub use config::SdkConfig;

pub use core::{ApiResponse, ClientConfiguration, DispatchOptions, SbiServer, ServiceResponse};
pub use models::{Nullable, ProblemDetails, RedirectHeader, RedirectResponse, StatusCode};
pub use services::CommonInterface;
pub use utils::error::{RequestError, Result, SdkError};
pub use utils::validation::{Validate, ValidationErrors};
