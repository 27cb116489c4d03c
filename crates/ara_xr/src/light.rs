//! Light-estimation event stream.
//!
//! Hosts that understand scene lighting publish ambient estimates derived
//! from the camera feed. The stream is start/stop shaped: a `Started` event
//! carries the estimate (and possibly an environment map for reflections),
//! an `Ended` event means the host stopped estimating and the app should
//! fall back to its own lighting.

use ara_math::Vec3;

use crate::request::EventQueue;

/// Opaque handle to a host-captured environment (reflection) map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvironmentMap {
    id: u64,
}

impl EnvironmentMap {
    pub fn new(id: u64) -> Self {
        Self { id }
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

/// One ambient-lighting estimate from the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightEstimate {
    /// Estimated ambient color (RGB, 0-1)
    pub color: Vec3,
    /// Estimated ambient intensity
    pub intensity: f32,
    /// Reflection map captured by the host, when available
    pub environment: Option<EnvironmentMap>,
}

impl LightEstimate {
    pub fn new(color: Vec3, intensity: f32, environment: Option<EnvironmentMap>) -> Self {
        Self {
            color,
            intensity,
            environment,
        }
    }
}

/// Lifecycle events of the host's light-estimation subsystem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightEstimationEvent {
    Started(LightEstimate),
    Ended,
}

/// Polled queue of light-estimation events, filled by the host between
/// frames and drained by the app at the top of its frame callback.
pub type LightEstimationQueue = EventQueue<LightEstimationEvent>;
