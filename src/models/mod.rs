//! 3GPP SBI data models.
//!
//! Records are plain serde types using the 3GPP JSON member names; every one
//! implements [`Validate`](crate::utils::validation::Validate).

#[macro_use]
mod macros;

pub mod auth;
pub mod barring;
pub mod broadcast;
pub mod charging;
pub mod common;
pub mod location;
pub mod network;
pub mod nullable;
pub mod qos;
pub mod redirect;
pub mod registry;
pub mod status;
pub mod subscription;
pub mod trace;

pub use common::ProblemDetails;
pub use nullable::Nullable;
pub use redirect::{RedirectHeader, RedirectResponse};
pub use status::StatusCode;
