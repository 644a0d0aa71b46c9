//! Flutter-facing bindings for the RoleCRM core.

pub mod api;
