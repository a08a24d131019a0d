//! # wabot-core
//!
//! Core types and traits for the WhatsApp bot: [`Handler`], [`Middleware`], message and
//! contact types, error taxonomy, and tracing initialization. Transport-agnostic; used by
//! wa-gateway, handler-chain, and the handler crates.

pub mod error;
pub mod logger;
pub mod types;

pub use error::{HandlerError, Result, WabotError};
pub use logger::init_tracing;
pub use types::{Contact, Handler, HandlerResponse, Message, MessageDirection, Middleware};
