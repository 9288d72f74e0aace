//! Small display helpers shared by components.

pub mod format;
