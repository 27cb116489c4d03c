//! Immersive-session contracts.
//!
//! These traits describe the slice of the host AR runtime the tracker needs:
//! reference-space negotiation, a hit-test-source request, an end-of-session
//! signal, and per-frame access to hit-test samples. The production host is
//! the platform's immersive runtime; `ara_host` provides a deterministic
//! simulated one for desktop runs and tests.

use ara_math::Mat4;

use crate::request::{EndToken, XrRequest};

/// Kinds of coordinate frame a session can hand out.
///
/// `Viewer` is anchored to the device and is what hit-test sources are bound
/// to; `LocalFloor` is the surface's tracking space that poses are expressed
/// in when updating scene content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceSpaceKind {
    Viewer,
    LocalFloor,
}

/// An opaque coordinate frame negotiated with the session.
///
/// Spaces are only meaningful to the session that created them; the `id`
/// ties poses and hit results back to the space they were sampled against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceSpace {
    kind: ReferenceSpaceKind,
    id: u32,
}

impl ReferenceSpace {
    /// Create a reference space handle. Normally only hosts do this.
    pub const fn new(kind: ReferenceSpaceKind, id: u32) -> Self {
        Self { kind, id }
    }

    pub fn kind(&self) -> ReferenceSpaceKind {
        self.kind
    }

    pub fn id(&self) -> u32 {
        self.id
    }
}

/// Ownership handle for a continuous surface-hit-testing subscription.
///
/// Created at most once per session by the tracker and dropped when the
/// session ends. Deliberately not `Clone`: exactly one owner exists.
#[derive(Debug, PartialEq, Eq)]
pub struct HitTestSource {
    id: u64,
}

impl HitTestSource {
    /// Create a source handle. Normally only hosts do this.
    pub const fn new(id: u64) -> Self {
        Self { id }
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

/// A position and orientation expressed in some reference space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XrPose {
    matrix: Mat4,
}

impl XrPose {
    pub fn new(matrix: Mat4) -> Self {
        Self { matrix }
    }

    /// The pose as a 4x4 transform (column-major, like the host's
    /// 16-element transform array).
    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }
}

/// One surface intersection returned by a hit-test query.
///
/// Results are ranked by the host; the first entry of a query is the best
/// (closest) hit.
#[derive(Debug, Clone)]
pub struct HitResult {
    pose: XrPose,
    space_id: u32,
}

impl HitResult {
    /// Create a result whose pose is expressed in `space`.
    pub fn new(pose: XrPose, space: &ReferenceSpace) -> Self {
        Self {
            pose,
            space_id: space.id(),
        }
    }

    /// The hit pose relative to `space`, or `None` when the host cannot
    /// express this result in that space.
    pub fn pose(&self, space: &ReferenceSpace) -> Option<XrPose> {
        if space.id() == self.space_id {
            Some(self.pose)
        } else {
            None
        }
    }
}

/// The session half of the immersive-runtime contract.
pub trait XrSession {
    /// Ask the session for a reference space of the given kind. Resolves (or
    /// rejects) asynchronously between frames.
    fn request_reference_space(&self, kind: ReferenceSpaceKind) -> XrRequest<ReferenceSpace>;

    /// Subscribe to continuous hit testing along `space`'s forward ray.
    /// Resolves (or rejects) asynchronously between frames.
    fn request_hit_test_source(&self, space: &ReferenceSpace) -> XrRequest<HitTestSource>;

    /// The cancellation token raised when this session ends.
    fn end_token(&self) -> EndToken;
}

/// The per-frame half of the contract: a snapshot of the host's environment
/// understanding for one rendered frame.
pub trait XrFrame {
    /// Current hit-test results for `source`, best first. Empty when no
    /// surface is under the ray this frame.
    fn hit_test_results(&self, source: &HitTestSource) -> Vec<HitResult>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use ara_math::Vec3;

    #[test]
    fn test_hit_result_pose_space_mismatch() {
        let tracking = ReferenceSpace::new(ReferenceSpaceKind::LocalFloor, 1);
        let other = ReferenceSpace::new(ReferenceSpaceKind::LocalFloor, 2);

        let pose = XrPose::new(Mat4::from_translation(Vec3::new(0.0, 0.0, -1.0)));
        let hit = HitResult::new(pose, &tracking);

        assert_eq!(hit.pose(&tracking), Some(pose));
        assert_eq!(hit.pose(&other), None);
    }
}
