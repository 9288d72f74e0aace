//! Network layer: wire types and REST fetch helpers.

pub mod api;
pub mod types;
