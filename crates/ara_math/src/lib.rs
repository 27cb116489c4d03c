// Re-export glam for convenience
pub use glam::*;

// ARA math types
mod pose;
mod ray;

pub use pose::gravity_aligned_pose;
pub use ray::Ray;
