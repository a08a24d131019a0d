//! # Middleware for the wabot handler chain
//!
//! Cross-cutting observation around the handler phase. Currently: logging.

mod logging;


pub use logging::LoggingMiddleware;
