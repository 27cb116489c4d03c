//! Scene nodes: plain mesh nodes and the pose-driven reticle.

use ara_math::{Mat4, Vec3};
use ara_xr::ReticleTarget;

use crate::geometry::{ring_mesh, Mesh};

/// Flat-shaded material: just a color.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub color: Vec3,
}

impl Default for Material {
    fn default() -> Self {
        Self { color: Vec3::ONE }
    }
}

impl Material {
    pub fn new(color: Vec3) -> Self {
        Self { color }
    }
}

/// A named mesh placed in the scene with a static transform.
#[derive(Clone, Debug)]
pub struct MeshNode {
    pub name: String,
    pub mesh: Mesh,
    pub material: Material,
    pub transform: Mat4,
}

impl MeshNode {
    pub fn new(name: impl Into<String>, mesh: Mesh, material: Material, transform: Mat4) -> Self {
        Self {
            name: name.into(),
            mesh,
            material,
            transform,
        }
    }
}

/// The surface marker.
///
/// Unlike other nodes its transform is written wholesale from host hit
/// poses every frame (no local TRS composition), and it starts hidden until
/// the tracker sees a surface. When hidden the pose keeps its last value.
#[derive(Clone, Debug)]
pub struct Reticle {
    pub mesh: Mesh,
    pub material: Material,
    pub pose: Mat4,
    pub visible: bool,
}

impl Reticle {
    /// The demo reticle: a white ring, inner radius 0.15, outer 0.2,
    /// 32 segments, hidden until a surface hit arrives.
    pub fn new() -> Self {
        Self {
            mesh: ring_mesh(0.15, 0.2, 32),
            material: Material::default(),
            pose: Mat4::IDENTITY,
            visible: false,
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// World-space position of the marker (translation column of the pose).
    pub fn position(&self) -> Vec3 {
        self.pose.w_axis.truncate()
    }
}

impl Default for Reticle {
    fn default() -> Self {
        Self::new()
    }
}

impl ReticleTarget for Reticle {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_pose(&mut self, pose: Mat4) {
        self.pose = pose;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reticle_starts_hidden() {
        let reticle = Reticle::new();
        assert!(!reticle.visible);
        assert_eq!(reticle.pose, Mat4::IDENTITY);
    }

    #[test]
    fn test_reticle_target_impl() {
        let mut reticle = Reticle::new();
        let pose = Mat4::from_translation(Vec3::new(0.0, 0.0, -1.0));

        ReticleTarget::set_pose(&mut reticle, pose);
        ReticleTarget::set_visible(&mut reticle, true);

        assert!(reticle.visible);
        assert_eq!(reticle.position(), Vec3::new(0.0, 0.0, -1.0));
    }
}
