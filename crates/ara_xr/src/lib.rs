//! ARA XR - immersive-session contracts and reticle tracking.
//!
//! This crate provides:
//!
//! - **Session contracts**: `XrSession`, `XrFrame`, reference spaces,
//!   hit-test sources and results
//! - **Cooperative async plumbing**: `XrRequest` one-shot requests and the
//!   session-scoped `EndToken`
//! - **Reticle tracking**: `ReticleTracker`, the per-frame state machine
//!   that turns environment hit-test samples into a marker pose
//! - **Light estimation**: the polled `LightEstimationQueue` event stream
//!
//! # Example
//!
//! ```ignore
//! use ara_xr::{ReticleTracker, TrackerState};
//!
//! let mut tracker = ReticleTracker::new();
//! // Once per rendered frame:
//! tracker.on_frame(&session, &frame, surface.reference_space(), &mut reticle);
//! assert_ne!(tracker.state(), TrackerState::Uninitialized);
//! ```

pub mod error;
pub mod light;
pub mod request;
pub mod session;
pub mod tracker;

// Re-export commonly used types
pub use error::{XrError, XrResult};
pub use light::{EnvironmentMap, LightEstimate, LightEstimationEvent, LightEstimationQueue};
pub use request::{oneshot, EndToken, EventQueue, RequestCompleter, RequestPoll, XrRequest};
pub use session::{
    HitResult, HitTestSource, ReferenceSpace, ReferenceSpaceKind, XrFrame, XrPose, XrSession,
};
pub use tracker::{ReticleTarget, ReticleTracker, TrackerState};
