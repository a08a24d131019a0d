//! # wa-gateway
//!
//! Outbound WhatsApp delivery. [`OutboundChannel`] is the provider-agnostic seam the
//! runtime depends on; [`FonnteChannel`] implements it via the Fonnte HTTP API.

mod channel;
mod config;
mod fonnte;

pub use channel::OutboundChannel;
pub use config::GatewayConfig;
pub use fonnte::FonnteChannel;
