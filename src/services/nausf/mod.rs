//! Authentication Server Function services (TS 29.509).

pub mod auth;
pub mod client;
pub mod server;
pub mod sor;
pub mod upu;

pub use auth::UeAuthentication;
pub use client::{NausfClient, SorProtectionClient, UeAuthenticationClient, UpuProtectionClient};
pub use server::NausfServer;
pub use sor::SorProtection;
pub use upu::UpuProtection;
