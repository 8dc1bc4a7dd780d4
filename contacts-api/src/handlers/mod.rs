//! Loaders and actions, one module per route, plus their HTTP binding.

pub mod contact;
pub mod destroy;
pub mod edit;
pub mod http;
pub mod sidebar;
