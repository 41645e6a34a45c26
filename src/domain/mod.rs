//! Domain logic for the demo viewer.
//!
//! - Viewport operations (coordinate transformations, tick spacing)

pub mod viewport_operations;
