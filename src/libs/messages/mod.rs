//! Centralized user-facing messages.
//!
//! `Message` enumerates every text the application shows, `display` renders
//! them, and `macros` routes them to the console or to `tracing`.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
