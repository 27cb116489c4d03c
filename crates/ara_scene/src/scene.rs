//! Scene container for the AR demos.

use ara_math::{Mat4, Vec3};
use ara_xr::EnvironmentMap;

use crate::geometry::box_mesh;
use crate::light::{AmbientLight, HemisphereLight};
use crate::node::{Material, MeshNode, Reticle};

/// A complete demo scene: static mesh nodes, the reticle, one ambient light
/// slot, and an optional global environment (reflection) map.
#[derive(Clone, Debug)]
pub struct Scene {
    pub name: String,
    pub nodes: Vec<MeshNode>,
    pub reticle: Reticle,
    pub ambient: AmbientLight,
    pub environment: Option<EnvironmentMap>,
}

impl Scene {
    /// Create an empty scene with the default hemisphere light and no
    /// environment map.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: Vec::new(),
            reticle: Reticle::new(),
            ambient: AmbientLight::Hemisphere(HemisphereLight::default()),
            environment: None,
        }
    }

    /// The demo scene both binaries start from: a small red box anchored one
    /// meter in front of the camera, plus the hidden reticle.
    pub fn demo(name: impl Into<String>) -> Self {
        let mut scene = Self::new(name);
        scene.nodes.push(MeshNode::new(
            "box",
            box_mesh(0.1, 0.1, 0.1),
            Material::new(Vec3::new(1.0, 0.0, 0.0)),
            Mat4::from_translation(Vec3::new(0.0, 0.0, -1.0)),
        ));
        scene
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
