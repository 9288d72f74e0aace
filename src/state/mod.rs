//! Client-side view state.
//!
//! DESIGN
//! ======
//! One explicit state container owned by the root component and provided
//! via context; it is replaced wholesale on each successful load, so there
//! is exactly one writer and no ambient global.

pub mod dashboard;
