//! Surface-hit reticle tracking.
//!
//! `ReticleTracker` owns the one-shot acquisition of a hit-test source and
//! the per-frame update that turns the frame's environment samples into a
//! marker pose. Acquisition is a two-step chain (viewer reference space,
//! then a hit-test source bound to it) driven by polling, so each request is
//! issued exactly once per attempt and nothing in the frame path ever
//! blocks.

use std::mem;

use ara_math::Mat4;

use crate::error::XrError;
use crate::request::{EndToken, RequestPoll, XrRequest};
use crate::session::{HitTestSource, ReferenceSpace, ReferenceSpaceKind, XrFrame, XrSession};

/// How many times the acquisition chain may be started per session: the
/// initial attempt plus one retry after a rejection.
pub const MAX_ACQUISITION_ATTEMPTS: u32 = 2;

/// Public view of the tracker lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerState {
    /// No acquisition started yet (fresh tracker, or reset after session end).
    Uninitialized,
    /// The reference-space / hit-test-source chain is in flight.
    AcquiringSource,
    /// A hit-test source is live; the reticle updates every frame.
    Active,
    /// Acquisition was rejected twice; surface tracking is off for the rest
    /// of this session.
    Unavailable,
}

/// Anything the tracker can aim: a visibility flag plus a pose transform.
///
/// The scene's reticle node implements this; tests use a plain struct.
pub trait ReticleTarget {
    fn set_visible(&mut self, visible: bool);
    fn set_pose(&mut self, pose: Mat4);
}

/// Internal acquisition chain. Finer-grained than [`TrackerState`] so each
/// of the two chained requests exists in exactly one place.
enum Acquisition {
    Idle,
    ViewerSpace(XrRequest<ReferenceSpace>),
    Source(XrRequest<HitTestSource>),
    Ready(HitTestSource),
    Unavailable,
}

/// Per-session reticle tracking state machine.
///
/// Construct once and call [`on_frame`](Self::on_frame) from the render
/// surface's frame callback. The tracker notices session end through the
/// session's [`EndToken`] and resets itself, so one instance can span any
/// number of consecutive sessions.
pub struct ReticleTracker {
    acquisition: Acquisition,
    end_token: Option<EndToken>,
    attempts: u32,
}

impl Default for ReticleTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ReticleTracker {
    pub fn new() -> Self {
        Self {
            acquisition: Acquisition::Idle,
            end_token: None,
            attempts: 0,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> TrackerState {
        match self.acquisition {
            Acquisition::Idle => TrackerState::Uninitialized,
            Acquisition::ViewerSpace(_) | Acquisition::Source(_) => TrackerState::AcquiringSource,
            Acquisition::Ready(_) => TrackerState::Active,
            Acquisition::Unavailable => TrackerState::Unavailable,
        }
    }

    /// Drop all session-scoped state: the hit-test source handle, any
    /// pending request, and the end token. The next frame starts a fresh
    /// acquisition.
    pub fn reset(&mut self) {
        self.acquisition = Acquisition::Idle;
        self.end_token = None;
        self.attempts = 0;
    }

    /// Per-frame update, invoked once per rendered frame.
    ///
    /// `reference_space` is the surface's current tracking space; `None`
    /// (possible before the session is fully negotiated) means no reticle
    /// update is possible this frame.
    pub fn on_frame(
        &mut self,
        session: &impl XrSession,
        frame: &impl XrFrame,
        reference_space: Option<&ReferenceSpace>,
        target: &mut impl ReticleTarget,
    ) {
        // Session end cancels everything before any other work. The advance
        // step reacquires only once frames come from a live session again.
        if self.end_token.as_ref().is_some_and(EndToken::is_ended) {
            log::info!("immersive session ended, releasing hit-test source");
            self.reset();
            target.set_visible(false);
        }

        self.advance(session);
        self.update_reticle(frame, reference_space, target);
    }

    /// Step the acquisition chain: start it on the first frame, poll pending
    /// requests, chain space -> source, and apply the retry policy on
    /// rejection.
    fn advance(&mut self, session: &impl XrSession) {
        self.acquisition = match mem::replace(&mut self.acquisition, Acquisition::Unavailable) {
            Acquisition::Idle => {
                let token = session.end_token();
                if token.is_ended() {
                    // The session is already over; wait for a live one
                    // instead of issuing doomed requests every frame
                    Acquisition::Idle
                } else {
                    self.attempts += 1;
                    self.end_token = Some(token);
                    log::debug!(
                        "requesting viewer reference space (attempt {})",
                        self.attempts
                    );
                    Acquisition::ViewerSpace(
                        session.request_reference_space(ReferenceSpaceKind::Viewer),
                    )
                }
            }
            Acquisition::ViewerSpace(mut req) => match req.poll() {
                RequestPoll::Pending => Acquisition::ViewerSpace(req),
                RequestPoll::Resolved(space) => {
                    log::debug!("viewer space ready, requesting hit-test source");
                    Acquisition::Source(session.request_hit_test_source(&space))
                }
                RequestPoll::Rejected(err) => self.acquisition_failed(err),
            },
            Acquisition::Source(mut req) => match req.poll() {
                RequestPoll::Pending => Acquisition::Source(req),
                RequestPoll::Resolved(source) => {
                    log::info!("hit-test source {} acquired", source.id());
                    Acquisition::Ready(source)
                }
                RequestPoll::Rejected(err) => self.acquisition_failed(err),
            },
            ready @ Acquisition::Ready(_) => ready,
            Acquisition::Unavailable => Acquisition::Unavailable,
        };
    }

    /// Retry policy: restart the chain once per session, then park in
    /// `Unavailable` instead of hammering the session every frame.
    fn acquisition_failed(&mut self, err: XrError) -> Acquisition {
        if self.attempts < MAX_ACQUISITION_ATTEMPTS {
            log::warn!("hit-test acquisition rejected ({err}), retrying once");
            Acquisition::Idle
        } else {
            log::warn!("hit-test acquisition rejected again ({err}), surface tracking unavailable for this session");
            Acquisition::Unavailable
        }
    }

    /// Steady-state update: query this frame's hit-test results and move the
    /// reticle. The pose is left untouched on frames without a usable hit,
    /// only visibility flips.
    fn update_reticle(
        &self,
        frame: &impl XrFrame,
        reference_space: Option<&ReferenceSpace>,
        target: &mut impl ReticleTarget,
    ) {
        let Acquisition::Ready(source) = &self.acquisition else {
            return;
        };
        let Some(space) = reference_space else {
            return;
        };

        let results = frame.hit_test_results(source);
        match results.first().and_then(|hit| hit.pose(space)) {
            Some(pose) => {
                target.set_pose(pose.matrix());
                target.set_visible(true);
            }
            None => target.set_visible(false),
        }
    }
}
