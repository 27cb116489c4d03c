//! ARA Scene - minimal scene graph for the AR demos.
//!
//! This crate provides:
//!
//! - **Geometry**: `Mesh` plus the ring/box builders the demos use
//! - **Nodes**: `MeshNode` and the pose-driven `Reticle`
//! - **Lighting**: hemisphere/probe ambient lights and the
//!   `AmbientLightSwitcher` that follows host light estimation
//!
//! # Example
//!
//! ```ignore
//! use ara_scene::{Scene, Reticle};
//!
//! let mut scene = Scene::demo("reticle-demo");
//! scene.reticle.set_visible(false);
//! ```

pub mod geometry;
pub mod light;
pub mod node;
pub mod scene;
pub mod switcher;

// Re-export commonly used types
pub use geometry::{box_mesh, ring_mesh, Mesh};
pub use light::{AmbientLight, HemisphereLight, ProbeLight};
pub use node::{Material, MeshNode, Reticle};
pub use scene::Scene;
pub use switcher::AmbientLightSwitcher;
