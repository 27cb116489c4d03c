//! Default/estimated ambient light switching.
//!
//! Follows the host's light-estimation lifecycle: while the host produces
//! estimates the scene is lit by a probe light built from them, and the
//! host's captured environment map (if any) serves as the scene's global
//! reflection map. When estimation stops, the default hemisphere light and
//! the previously captured environment map come back.

use ara_xr::{LightEstimationEvent, LightEstimationQueue};

use crate::light::{AmbientLight, HemisphereLight, ProbeLight};
use crate::scene::Scene;

/// Swaps the scene's ambient light in step with light-estimation events.
///
/// Transitions are idempotent: a second `Started` without an intervening
/// `Ended` updates the estimate in place, and an `Ended` without a prior
/// `Started` is ignored.
pub struct AmbientLightSwitcher {
    default_light: HemisphereLight,
    saved_environment: Option<ara_xr::EnvironmentMap>,
    estimating: bool,
}

impl AmbientLightSwitcher {
    /// `default_light` is what the scene falls back to whenever estimation
    /// is not running.
    pub fn new(default_light: HemisphereLight) -> Self {
        Self {
            default_light,
            saved_environment: None,
            estimating: false,
        }
    }

    /// Whether the scene is currently lit by an estimated light.
    pub fn is_estimating(&self) -> bool {
        self.estimating
    }

    /// Drain every pending event from `queue` into `scene`.
    pub fn pump(&mut self, queue: &LightEstimationQueue, scene: &mut Scene) {
        while let Some(event) = queue.poll() {
            self.handle(event, scene);
        }
    }

    /// Apply one light-estimation event to the scene.
    pub fn handle(&mut self, event: LightEstimationEvent, scene: &mut Scene) {
        match event {
            LightEstimationEvent::Started(estimate) => {
                if !self.estimating {
                    // Capture the pre-estimation environment so Ended can
                    // restore it, even when it was absent
                    self.saved_environment = scene.environment;
                    self.estimating = true;
                    log::info!("light estimation started");
                } else {
                    log::debug!("light estimation start while already estimating");
                }

                scene.ambient = AmbientLight::Probe(ProbeLight::from(estimate));
                if let Some(env) = estimate.environment {
                    scene.environment = Some(env);
                }
            }
            LightEstimationEvent::Ended => {
                if !self.estimating {
                    log::debug!("light estimation end without start, ignoring");
                    return;
                }

                self.estimating = false;
                scene.ambient = AmbientLight::Hemisphere(self.default_light.clone());
                scene.environment = self.saved_environment.take();
                log::info!("light estimation ended, default lighting restored");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ara_math::Vec3;
    use ara_xr::{EnvironmentMap, LightEstimate};

    fn estimate_with_env(env_id: u64) -> LightEstimate {
        LightEstimate::new(Vec3::new(0.9, 0.85, 0.8), 0.6, Some(EnvironmentMap::new(env_id)))
    }

    #[test]
    fn test_start_swaps_to_probe_and_installs_environment() {
        let mut scene = Scene::demo("light-demo");
        let mut switcher = AmbientLightSwitcher::new(HemisphereLight::default());

        switcher.handle(LightEstimationEvent::Started(estimate_with_env(5)), &mut scene);

        assert!(scene.ambient.is_estimated());
        assert_eq!(scene.environment, Some(EnvironmentMap::new(5)));
    }

    #[test]
    fn test_end_restores_default_light_and_captured_environment() {
        let mut scene = Scene::demo("light-demo");
        scene.environment = Some(EnvironmentMap::new(1));
        let mut switcher = AmbientLightSwitcher::new(HemisphereLight::default());

        switcher.handle(LightEstimationEvent::Started(estimate_with_env(5)), &mut scene);
        assert_eq!(scene.environment, Some(EnvironmentMap::new(5)));

        switcher.handle(LightEstimationEvent::Ended, &mut scene);

        assert!(!scene.ambient.is_estimated());
        assert_eq!(scene.environment, Some(EnvironmentMap::new(1)));
    }

    #[test]
    fn test_end_restores_absent_environment() {
        let mut scene = Scene::demo("light-demo");
        assert!(scene.environment.is_none());
        let mut switcher = AmbientLightSwitcher::new(HemisphereLight::default());

        switcher.handle(LightEstimationEvent::Started(estimate_with_env(5)), &mut scene);
        switcher.handle(LightEstimationEvent::Ended, &mut scene);

        // The captured "no environment" comes back, the estimate's map does not linger
        assert!(scene.environment.is_none());
    }

    #[test]
    fn test_estimate_without_environment_keeps_existing_map() {
        let mut scene = Scene::demo("light-demo");
        scene.environment = Some(EnvironmentMap::new(1));
        let mut switcher = AmbientLightSwitcher::new(HemisphereLight::default());

        let estimate = LightEstimate::new(Vec3::ONE, 0.5, None);
        switcher.handle(LightEstimationEvent::Started(estimate), &mut scene);

        assert!(scene.ambient.is_estimated());
        assert_eq!(scene.environment, Some(EnvironmentMap::new(1)));
    }

    #[test]
    fn test_double_start_is_idempotent() {
        let mut scene = Scene::demo("light-demo");
        let mut switcher = AmbientLightSwitcher::new(HemisphereLight::default());

        switcher.handle(LightEstimationEvent::Started(estimate_with_env(5)), &mut scene);
        switcher.handle(LightEstimationEvent::Started(estimate_with_env(6)), &mut scene);

        // Second start updates the estimate but must not clobber the saved
        // pre-estimation environment
        assert!(scene.ambient.is_estimated());
        assert_eq!(scene.environment, Some(EnvironmentMap::new(6)));

        switcher.handle(LightEstimationEvent::Ended, &mut scene);
        assert!(!scene.ambient.is_estimated());
        assert!(scene.environment.is_none());
    }

    #[test]
    fn test_end_without_start_is_ignored() {
        let mut scene = Scene::demo("light-demo");
        scene.environment = Some(EnvironmentMap::new(1));
        let mut switcher = AmbientLightSwitcher::new(HemisphereLight::default());

        switcher.handle(LightEstimationEvent::Ended, &mut scene);

        assert!(!scene.ambient.is_estimated());
        assert_eq!(scene.environment, Some(EnvironmentMap::new(1)));
    }

    #[test]
    fn test_pump_drains_queue_in_order() {
        let mut scene = Scene::demo("light-demo");
        let mut switcher = AmbientLightSwitcher::new(HemisphereLight::default());
        let queue = LightEstimationQueue::new();

        queue.push(LightEstimationEvent::Started(estimate_with_env(5)));
        queue.push(LightEstimationEvent::Ended);
        switcher.pump(&queue, &mut scene);

        assert!(!switcher.is_estimating());
        assert!(!scene.ambient.is_estimated());
        assert!(queue.poll().is_none());
    }
}
