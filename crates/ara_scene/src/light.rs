//! Ambient lighting for the demo scenes.

use ara_math::Vec3;
use ara_xr::{EnvironmentMap, LightEstimate};

/// Fixed two-tone ambient light: sky color from above, ground color from
/// below. This is the demos' default lighting before (or without) host
/// light estimation.
#[derive(Clone, Debug, PartialEq)]
pub struct HemisphereLight {
    /// Color of light arriving from above (RGB, 0-1)
    pub sky_color: Vec3,
    /// Color of light arriving from below (RGB, 0-1)
    pub ground_color: Vec3,
    pub intensity: f32,
    pub position: Vec3,
}

impl Default for HemisphereLight {
    /// The demo default: white sky, pale blue ground, intensity 3, offset
    /// slightly above and beside the origin.
    fn default() -> Self {
        Self {
            sky_color: Vec3::ONE,
            ground_color: Vec3::new(0.733, 0.733, 1.0),
            intensity: 3.0,
            position: Vec3::new(0.5, 1.0, 0.25),
        }
    }
}

/// Ambient light driven by a host light-estimation sample.
#[derive(Clone, Debug, PartialEq)]
pub struct ProbeLight {
    pub color: Vec3,
    pub intensity: f32,
    /// Reflection map published alongside the estimate, when the host
    /// captured one
    pub environment: Option<EnvironmentMap>,
}

impl From<LightEstimate> for ProbeLight {
    fn from(estimate: LightEstimate) -> Self {
        Self {
            color: estimate.color,
            intensity: estimate.intensity,
            environment: estimate.environment,
        }
    }
}

/// The scene's single ambient light slot.
///
/// Exactly one variant is ever present, which is what keeps the
/// default/estimated light swap from ever showing both at once.
#[derive(Clone, Debug, PartialEq)]
pub enum AmbientLight {
    Hemisphere(HemisphereLight),
    Probe(ProbeLight),
}

impl AmbientLight {
    pub fn is_estimated(&self) -> bool {
        matches!(self, AmbientLight::Probe(_))
    }
}
