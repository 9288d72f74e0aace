//! Pages. There is exactly one: the dashboard.

pub mod dashboard;
