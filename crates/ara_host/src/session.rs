//! Simulated immersive session.
//!
//! Requests resolve a fixed number of frames after they are issued, which
//! reproduces the host property the tracker depends on: continuations run
//! between frame callbacks, never inside one. A rejection schedule lets
//! tests and demos exercise the acquisition retry path.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;

use ara_math::Vec3;
use ara_xr::{
    oneshot, EndToken, EnvironmentMap, HitTestSource, LightEstimate, LightEstimationEvent,
    LightEstimationQueue, ReferenceSpace, ReferenceSpaceKind, RequestCompleter, XrError,
    XrRequest, XrSession,
};

/// Behavior knobs for a simulated session.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Frames between issuing a request and the host completing it
    pub acquisition_latency: u64,
    /// Reject this many hit-test-source requests before accepting one
    pub source_rejections: u32,
    /// Frame at which the host starts publishing light estimates
    pub estimation_start_frame: Option<u64>,
    /// Frame at which the host stops publishing light estimates
    pub estimation_end_frame: Option<u64>,
    /// The estimate published at the start event
    pub estimate: LightEstimate,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            acquisition_latency: 2,
            source_rejections: 0,
            estimation_start_frame: None,
            estimation_end_frame: None,
            estimate: LightEstimate::new(
                Vec3::new(0.9, 0.87, 0.8),
                0.8,
                Some(EnvironmentMap::new(1)),
            ),
        }
    }
}

enum Pending {
    Space(ReferenceSpaceKind, RequestCompleter<ReferenceSpace>),
    Source(ReferenceSpaceKind, RequestCompleter<HitTestSource>),
}

/// A scripted stand-in for the platform's immersive AR session.
pub struct SimSession {
    config: SessionConfig,
    end: EndToken,
    ended: Cell<bool>,
    now: Cell<u64>,
    pending: RefCell<Vec<(u64, Pending)>>,
    next_space_id: Cell<u32>,
    next_source_id: Cell<u64>,
    rejected_sources: Cell<u32>,
    live_sources: RefCell<HashSet<u64>>,
    lights: LightEstimationQueue,
}

impl SimSession {
    /// Reference-space id of the surface's tracking space. Hit poses are
    /// expressed in this space.
    pub const TRACKING_SPACE_ID: u32 = 0;

    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            end: EndToken::new(),
            ended: Cell::new(false),
            now: Cell::new(0),
            pending: RefCell::new(Vec::new()),
            next_space_id: Cell::new(Self::TRACKING_SPACE_ID + 1),
            next_source_id: Cell::new(1),
            rejected_sources: Cell::new(0),
            live_sources: RefCell::new(HashSet::new()),
            lights: LightEstimationQueue::new(),
        }
    }

    /// The tracking reference space the surface exposes once negotiated.
    pub fn tracking_space(&self) -> ReferenceSpace {
        ReferenceSpace::new(ReferenceSpaceKind::LocalFloor, Self::TRACKING_SPACE_ID)
    }

    /// Handle to the session's light-estimation event stream.
    pub fn lights(&self) -> LightEstimationQueue {
        self.lights.clone()
    }

    /// Whether `id` names a hit-test source this session still honors.
    pub fn is_live_source(&self, id: u64) -> bool {
        self.live_sources.borrow().contains(&id)
    }

    pub fn has_ended(&self) -> bool {
        self.ended.get()
    }

    /// Advance host time to `frame`: complete every request that has aged
    /// past the acquisition latency and publish scheduled light events.
    /// Called by the surface between frame callbacks.
    pub fn pump(&self, frame: u64) {
        self.now.set(frame);

        let due: Vec<Pending> = {
            let mut pending = self.pending.borrow_mut();
            let mut due = Vec::new();
            let mut i = 0;
            while i < pending.len() {
                if pending[i].0 <= frame {
                    due.push(pending.swap_remove(i).1);
                } else {
                    i += 1;
                }
            }
            due
        };

        for request in due {
            self.complete(request);
        }

        if self.config.estimation_start_frame == Some(frame) {
            log::debug!("host light estimation starting at frame {frame}");
            self.lights
                .push(LightEstimationEvent::Started(self.config.estimate));
        }
        if self.config.estimation_end_frame == Some(frame) {
            log::debug!("host light estimation ending at frame {frame}");
            self.lights.push(LightEstimationEvent::Ended);
        }
    }

    fn complete(&self, request: Pending) {
        match request {
            Pending::Space(kind, completer) => {
                let id = self.next_space_id.get();
                self.next_space_id.set(id + 1);
                completer.resolve(ReferenceSpace::new(kind, id));
            }
            Pending::Source(kind, completer) => {
                if kind != ReferenceSpaceKind::Viewer {
                    completer.reject(XrError::HitTestSourceRejected(
                        "hit testing must be bound to a viewer space".into(),
                    ));
                } else if self.rejected_sources.get() < self.config.source_rejections {
                    self.rejected_sources.set(self.rejected_sources.get() + 1);
                    completer.reject(XrError::HitTestSourceRejected(
                        "hit testing temporarily unavailable".into(),
                    ));
                } else {
                    let id = self.next_source_id.get();
                    self.next_source_id.set(id + 1);
                    self.live_sources.borrow_mut().insert(id);
                    completer.resolve(HitTestSource::new(id));
                }
            }
        }
    }

    /// End the session: raise the end token, reject outstanding requests,
    /// and invalidate every live hit-test source.
    pub fn end(&self) {
        if self.ended.replace(true) {
            return;
        }
        log::info!("simulated session ending");
        self.end.raise();
        self.live_sources.borrow_mut().clear();
        for (_, request) in self.pending.borrow_mut().drain(..) {
            match request {
                Pending::Space(_, completer) => completer.reject(XrError::SessionEnded),
                Pending::Source(_, completer) => completer.reject(XrError::SessionEnded),
            }
        }
    }
}

impl XrSession for SimSession {
    fn request_reference_space(&self, kind: ReferenceSpaceKind) -> XrRequest<ReferenceSpace> {
        let (request, completer) = oneshot();
        if self.ended.get() {
            completer.reject(XrError::SessionEnded);
        } else {
            let due = self.now.get() + self.config.acquisition_latency;
            self.pending
                .borrow_mut()
                .push((due, Pending::Space(kind, completer)));
        }
        request
    }

    fn request_hit_test_source(&self, space: &ReferenceSpace) -> XrRequest<HitTestSource> {
        let (request, completer) = oneshot();
        if self.ended.get() {
            completer.reject(XrError::SessionEnded);
        } else {
            let due = self.now.get() + self.config.acquisition_latency;
            self.pending
                .borrow_mut()
                .push((due, Pending::Source(space.kind(), completer)));
        }
        request
    }

    fn end_token(&self) -> EndToken {
        self.end.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ara_xr::RequestPoll;

    #[test]
    fn test_requests_resolve_after_latency() {
        let session = SimSession::new(SessionConfig {
            acquisition_latency: 2,
            ..Default::default()
        });
        session.pump(0);

        let mut req = session.request_reference_space(ReferenceSpaceKind::Viewer);
        assert!(matches!(req.poll(), RequestPoll::Pending));

        session.pump(1);
        assert!(matches!(req.poll(), RequestPoll::Pending));

        session.pump(2);
        match req.poll() {
            RequestPoll::Resolved(space) => assert_eq!(space.kind(), ReferenceSpaceKind::Viewer),
            other => panic!("expected resolution, got {other:?}"),
        }
    }

    #[test]
    fn test_source_rejection_schedule() {
        let session = SimSession::new(SessionConfig {
            acquisition_latency: 0,
            source_rejections: 1,
            ..Default::default()
        });
        session.pump(0);
        let viewer = ReferenceSpace::new(ReferenceSpaceKind::Viewer, 1);

        let mut first = session.request_hit_test_source(&viewer);
        session.pump(1);
        assert!(matches!(first.poll(), RequestPoll::Rejected(_)));

        let mut second = session.request_hit_test_source(&viewer);
        session.pump(2);
        match second.poll() {
            RequestPoll::Resolved(source) => assert!(session.is_live_source(source.id())),
            other => panic!("expected resolution, got {other:?}"),
        }
    }

    #[test]
    fn test_non_viewer_space_is_rejected() {
        let session = SimSession::new(SessionConfig {
            acquisition_latency: 0,
            ..Default::default()
        });
        session.pump(0);

        let mut req = session.request_hit_test_source(&session.tracking_space());
        session.pump(1);
        assert!(matches!(
            req.poll(),
            RequestPoll::Rejected(XrError::HitTestSourceRejected(_))
        ));
    }

    #[test]
    fn test_end_rejects_pending_and_invalidates_sources() {
        let session = SimSession::new(SessionConfig {
            acquisition_latency: 0,
            ..Default::default()
        });
        session.pump(0);
        let viewer = ReferenceSpace::new(ReferenceSpaceKind::Viewer, 1);

        let mut resolved = session.request_hit_test_source(&viewer);
        session.pump(1);
        let source = match resolved.poll() {
            RequestPoll::Resolved(source) => source,
            other => panic!("expected resolution, got {other:?}"),
        };
        assert!(session.is_live_source(source.id()));

        let mut pending = session.request_reference_space(ReferenceSpaceKind::Viewer);
        session.end();

        assert!(session.end_token().is_ended());
        assert!(!session.is_live_source(source.id()));
        assert!(matches!(
            pending.poll(),
            RequestPoll::Rejected(XrError::SessionEnded)
        ));

        // Requests after end fail immediately
        let mut late = session.request_reference_space(ReferenceSpaceKind::Viewer);
        assert!(matches!(
            late.poll(),
            RequestPoll::Rejected(XrError::SessionEnded)
        ));
    }
}
