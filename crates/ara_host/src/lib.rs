//! ARA Host - a deterministic simulated immersive runtime.
//!
//! Desktop stand-in for the platform AR session: it resolves
//! reference-space and hit-test-source requests after a configurable number
//! of frames, synthesizes surface hits by intersecting a scripted viewer ray
//! with a ground plane, and publishes scripted light-estimation events. The
//! frame driver calls back strictly sequentially, so the cooperative
//! ordering the tracker relies on holds here exactly as it does against a
//! real host.
//!
//! # Example
//!
//! ```ignore
//! use ara_host::{SimSession, SimSurface, SessionConfig, SurfaceConfig};
//!
//! let session = SimSession::new(SessionConfig::default());
//! let mut surface = SimSurface::new(session, SurfaceConfig::default());
//! surface.run_frames(60, |session, frame, space| {
//!     tracker.on_frame(session, frame, space, &mut scene.reticle);
//! });
//! ```

pub mod session;
pub mod surface;

// Re-export commonly used types
pub use session::{SessionConfig, SimSession};
pub use surface::{FrameContext, SimFrame, SimSurface, SurfaceConfig, ViewerPath};
