//! Cooperative one-shot requests and the session-end token.
//!
//! The immersive host runs everything on one thread: frame callbacks are
//! strictly sequential and asynchronous continuations run as discrete tasks
//! between frames, never inside one. `XrRequest` models that: the session
//! hands back a request immediately, completes it from its own side of the
//! shared slot between frames, and the tracker observes the outcome the next
//! time it polls. A completion during frame N is therefore visible at frame
//! N+1 at the earliest.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::error::XrError;

/// Outcome of polling an [`XrRequest`].
#[derive(Debug)]
pub enum RequestPoll<T> {
    /// The host has not completed the request yet.
    Pending,
    /// The request resolved; the value is handed over exactly once.
    Resolved(T),
    /// The request was rejected by the host.
    Rejected(XrError),
}

/// A pending one-shot request against the immersive session.
///
/// The caller side polls; the host side completes through the paired
/// [`RequestCompleter`]. Once a poll returns `Resolved` or `Rejected` the
/// request is spent and every later poll reports `Pending` on an empty slot,
/// so callers are expected to consume the outcome when they see it.
pub struct XrRequest<T> {
    slot: Rc<RefCell<Option<Result<T, XrError>>>>,
}

/// Host-side handle used to complete an [`XrRequest`].
pub struct RequestCompleter<T> {
    slot: Rc<RefCell<Option<Result<T, XrError>>>>,
}

/// Create a paired request and completer.
pub fn oneshot<T>() -> (XrRequest<T>, RequestCompleter<T>) {
    let slot = Rc::new(RefCell::new(None));
    (
        XrRequest { slot: slot.clone() },
        RequestCompleter { slot },
    )
}

impl<T> XrRequest<T> {
    /// Poll the request, taking the outcome if one has arrived.
    pub fn poll(&mut self) -> RequestPoll<T> {
        match self.slot.borrow_mut().take() {
            None => RequestPoll::Pending,
            Some(Ok(value)) => RequestPoll::Resolved(value),
            Some(Err(err)) => RequestPoll::Rejected(err),
        }
    }
}

impl<T> RequestCompleter<T> {
    /// Resolve the request with a value.
    pub fn resolve(self, value: T) {
        *self.slot.borrow_mut() = Some(Ok(value));
    }

    /// Reject the request.
    pub fn reject(self, err: XrError) {
        *self.slot.borrow_mut() = Some(Err(err));
    }
}

/// Session-scoped cancellation token.
///
/// The host raises the token when the immersive session ends; consumers check
/// it at the top of every frame and tear down anything scoped to the session
/// (hit-test sources, pending acquisitions). Clones share the flag.
#[derive(Clone, Default)]
pub struct EndToken {
    ended: Rc<Cell<bool>>,
}

impl EndToken {
    /// Create a fresh, un-raised token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the session as ended.
    pub fn raise(&self) {
        self.ended.set(true);
    }

    /// Whether the session this token is scoped to has ended.
    pub fn is_ended(&self) -> bool {
        self.ended.get()
    }
}

/// A shared FIFO of host events, polled once per frame.
///
/// Same cooperative model as [`XrRequest`]: the host pushes between frames,
/// consumers drain at the top of their frame callback.
pub struct EventQueue<T> {
    inner: Rc<RefCell<VecDeque<T>>>,
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self {
            inner: Rc::new(RefCell::new(VecDeque::new())),
        }
    }
}

impl<T> Clone for EventQueue<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an event onto the queue (host side).
    pub fn push(&self, event: T) {
        self.inner.borrow_mut().push_back(event);
    }

    /// Pop the oldest undelivered event, if any (consumer side).
    pub fn poll(&self) -> Option<T> {
        self.inner.borrow_mut().pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_pending_until_resolved() {
        let (mut req, completer) = oneshot::<u32>();

        assert!(matches!(req.poll(), RequestPoll::Pending));
        assert!(matches!(req.poll(), RequestPoll::Pending));

        completer.resolve(7);
        assert!(matches!(req.poll(), RequestPoll::Resolved(7)));
    }

    #[test]
    fn test_request_outcome_taken_once() {
        let (mut req, completer) = oneshot::<u32>();
        completer.resolve(1);

        assert!(matches!(req.poll(), RequestPoll::Resolved(1)));
        // Spent: the slot stays empty afterwards
        assert!(matches!(req.poll(), RequestPoll::Pending));
    }

    #[test]
    fn test_request_rejection() {
        let (mut req, completer) = oneshot::<u32>();
        completer.reject(XrError::HitTestSourceRejected("unsupported".into()));

        match req.poll() {
            RequestPoll::Rejected(XrError::HitTestSourceRejected(msg)) => {
                assert_eq!(msg, "unsupported");
            }
            other => panic!("unexpected poll outcome: {other:?}"),
        }
    }

    #[test]
    fn test_end_token_shared_across_clones() {
        let token = EndToken::new();
        let observer = token.clone();

        assert!(!observer.is_ended());
        token.raise();
        assert!(observer.is_ended());
    }

    #[test]
    fn test_event_queue_fifo() {
        let queue = EventQueue::new();
        queue.push(1);
        queue.push(2);

        let consumer = queue.clone();
        assert_eq!(consumer.poll(), Some(1));
        assert_eq!(consumer.poll(), Some(2));
        assert_eq!(consumer.poll(), None);
    }
}
