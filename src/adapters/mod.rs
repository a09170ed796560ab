// Adapters layer: concrete implementations for external systems.

pub mod gist;
pub mod local;
pub mod lottery;
