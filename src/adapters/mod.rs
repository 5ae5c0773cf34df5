// Adapters layer: concrete implementations for external systems.

pub mod convex;
pub mod storage;
