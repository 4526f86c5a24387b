//! System startup, wiring and shutdown.

pub mod form_system;
pub mod telemetry;

pub use form_system::*;
pub use telemetry::*;
