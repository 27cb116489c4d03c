//! Simulated render surface and frame driver.
//!
//! Plays the role of the host's animation loop: per frame it pumps the
//! session (so pending completions land between callbacks), synthesizes the
//! frame's hit-test results from a scripted viewer ray against a ground
//! plane, and invokes the app callback with a [`FrameContext`]. Callbacks
//! are strictly sequential and never overlap.

use ara_math::{gravity_aligned_pose, Ray, Vec3};
use ara_xr::{HitResult, HitTestSource, ReferenceSpace, XrFrame, XrPose};

use crate::session::SimSession;

/// Scripted device motion: the viewer stands still and tilts the device
/// down over time, so early frames miss the floor and later ones hit it.
#[derive(Clone, Debug)]
pub struct ViewerPath {
    /// Device height above the floor, in meters
    pub eye_height: f32,
    /// Pitch at frame 0, radians (positive looks up)
    pub start_pitch: f32,
    /// Pitch change per frame, radians
    pub pitch_rate: f32,
}

impl Default for ViewerPath {
    fn default() -> Self {
        Self {
            eye_height: 1.6,
            start_pitch: 0.25,
            pitch_rate: -0.035,
        }
    }
}

impl ViewerPath {
    /// The viewer ray for a given frame. Pitch is clamped so the script
    /// never tips past straight down.
    pub fn ray(&self, frame: u64) -> Ray {
        let pitch = (self.start_pitch + self.pitch_rate * frame as f32).clamp(-1.2, 1.2);
        let direction = Vec3::new(0.0, pitch.sin(), -pitch.cos()).normalize();
        Ray::new(Vec3::new(0.0, self.eye_height, 0.0), direction)
    }
}

/// Behavior knobs for the simulated surface.
#[derive(Clone, Debug)]
pub struct SurfaceConfig {
    /// Frames before the tracking reference space is negotiated; earlier
    /// frames report no reference space
    pub negotiation_latency: u64,
    /// Height of the detected floor plane
    pub plane_height: f32,
    /// Hits farther than this along the ray are discarded
    pub max_range: f32,
    pub path: ViewerPath,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            negotiation_latency: 1,
            plane_height: 0.0,
            max_range: 4.0,
            path: ViewerPath::default(),
        }
    }
}

/// One frame's snapshot of the simulated environment.
pub struct SimFrame<'a> {
    session: &'a SimSession,
    hits: Vec<HitResult>,
}

impl XrFrame for SimFrame<'_> {
    fn hit_test_results(&self, source: &HitTestSource) -> Vec<HitResult> {
        if self.session.is_live_source(source.id()) {
            self.hits.clone()
        } else {
            Vec::new()
        }
    }
}

/// Everything the app callback gets for one frame.
pub struct FrameContext<'a> {
    pub index: u64,
    pub session: &'a SimSession,
    pub frame: SimFrame<'a>,
    pub reference_space: Option<&'a ReferenceSpace>,
    /// Whether an immersive presentation is active this frame; the app only
    /// renders when it is
    pub presenting: bool,
}

/// Simulated render surface: owns the session and drives the frame loop.
pub struct SimSurface {
    session: SimSession,
    config: SurfaceConfig,
    tracking_space: ReferenceSpace,
    frame_index: u64,
    presenting: bool,
}

impl SimSurface {
    pub fn new(session: SimSession, config: SurfaceConfig) -> Self {
        let tracking_space = session.tracking_space();
        Self {
            session,
            config,
            tracking_space,
            frame_index: 0,
            presenting: true,
        }
    }

    pub fn session(&self) -> &SimSession {
        &self.session
    }

    pub fn is_presenting(&self) -> bool {
        self.presenting && !self.session.has_ended()
    }

    /// End the immersive session; subsequent frames are non-presenting.
    pub fn end_session(&mut self) {
        self.session.end();
        self.presenting = false;
    }

    /// Drive `count` frame callbacks.
    pub fn run_frames(&mut self, count: u64, mut callback: impl FnMut(&FrameContext<'_>)) {
        for _ in 0..count {
            let index = self.frame_index;

            // Host tasks (request completions, light events) land here,
            // between frame callbacks
            self.session.pump(index);

            let negotiated = index >= self.config.negotiation_latency;
            let reference_space =
                (negotiated && !self.session.has_ended()).then_some(&self.tracking_space);

            let ctx = FrameContext {
                index,
                session: &self.session,
                frame: self.build_frame(index),
                reference_space,
                presenting: self.presenting && !self.session.has_ended(),
            };
            callback(&ctx);

            self.frame_index += 1;
        }
    }

    fn build_frame(&self, index: u64) -> SimFrame<'_> {
        let ray = self.config.path.ray(index);
        let mut hits = Vec::new();

        if let Some(t) = ray.intersect_ground(self.config.plane_height) {
            if t <= self.config.max_range {
                let point = ray.at(t);
                let pose = gravity_aligned_pose(point, ray.direction);
                hits.push(HitResult::new(XrPose::new(pose), &self.tracking_space));
            }
        }

        SimFrame {
            session: &self.session,
            hits,
        }
    }
}
