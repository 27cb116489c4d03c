//! Mesh geometry for the AR demo scenes.
//!
//! GPU-agnostic triangle meshes plus builders for the two shapes the demos
//! need: the flat ring used as the surface reticle and the small box
//! anchored in front of the camera.

use ara_math::Vec3;

/// A mesh of vertex positions, normals, and triangle indices.
#[derive(Clone, Debug)]
pub struct Mesh {
    /// Vertex positions (one Vec3 per vertex)
    pub positions: Vec<Vec3>,

    /// Vertex normals (one per vertex)
    pub normals: Vec<Vec3>,

    /// Triangle indices (every 3 indices form a triangle)
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new(positions: Vec<Vec3>, normals: Vec<Vec3>, indices: Vec<u32>) -> Self {
        debug_assert_eq!(positions.len(), normals.len());
        Self {
            positions,
            normals,
            indices,
        }
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}

/// Build a flat ring lying in the XZ plane, facing +Y.
///
/// This is the reticle shape: an annulus of `segments` quads between
/// `inner_radius` and `outer_radius`, pre-rotated to lie on a horizontal
/// surface (the demo ring is authored in XY and tipped back a quarter turn).
pub fn ring_mesh(inner_radius: f32, outer_radius: f32, segments: u32) -> Mesh {
    let segments = segments.max(3);
    let mut positions = Vec::with_capacity((segments as usize + 1) * 2);
    let mut normals = Vec::with_capacity(positions.capacity());
    let mut indices = Vec::with_capacity(segments as usize * 6);

    // One vertex pair (inner, outer) per segment boundary, closed by reusing
    // index 0 via modulo
    for i in 0..segments {
        let theta = (i as f32 / segments as f32) * std::f32::consts::TAU;
        let (sin, cos) = theta.sin_cos();

        positions.push(Vec3::new(inner_radius * cos, 0.0, -inner_radius * sin));
        positions.push(Vec3::new(outer_radius * cos, 0.0, -outer_radius * sin));
        normals.push(Vec3::Y);
        normals.push(Vec3::Y);
    }

    for i in 0..segments {
        let a = i * 2;
        let b = i * 2 + 1;
        let c = ((i + 1) % segments) * 2;
        let d = ((i + 1) % segments) * 2 + 1;

        indices.extend_from_slice(&[a, b, d]);
        indices.extend_from_slice(&[a, d, c]);
    }

    Mesh::new(positions, normals, indices)
}

/// Build an axis-aligned box centered on the origin.
pub fn box_mesh(width: f32, height: f32, depth: f32) -> Mesh {
    let hw = width * 0.5;
    let hh = height * 0.5;
    let hd = depth * 0.5;

    // 4 vertices per face so each face gets a flat normal
    let faces: [(Vec3, [Vec3; 4]); 6] = [
        (
            Vec3::X,
            [
                Vec3::new(hw, -hh, hd),
                Vec3::new(hw, -hh, -hd),
                Vec3::new(hw, hh, -hd),
                Vec3::new(hw, hh, hd),
            ],
        ),
        (
            Vec3::NEG_X,
            [
                Vec3::new(-hw, -hh, -hd),
                Vec3::new(-hw, -hh, hd),
                Vec3::new(-hw, hh, hd),
                Vec3::new(-hw, hh, -hd),
            ],
        ),
        (
            Vec3::Y,
            [
                Vec3::new(-hw, hh, hd),
                Vec3::new(hw, hh, hd),
                Vec3::new(hw, hh, -hd),
                Vec3::new(-hw, hh, -hd),
            ],
        ),
        (
            Vec3::NEG_Y,
            [
                Vec3::new(-hw, -hh, -hd),
                Vec3::new(hw, -hh, -hd),
                Vec3::new(hw, -hh, hd),
                Vec3::new(-hw, -hh, hd),
            ],
        ),
        (
            Vec3::Z,
            [
                Vec3::new(-hw, -hh, hd),
                Vec3::new(hw, -hh, hd),
                Vec3::new(hw, hh, hd),
                Vec3::new(-hw, hh, hd),
            ],
        ),
        (
            Vec3::NEG_Z,
            [
                Vec3::new(hw, -hh, -hd),
                Vec3::new(-hw, -hh, -hd),
                Vec3::new(-hw, hh, -hd),
                Vec3::new(hw, hh, -hd),
            ],
        ),
    ];

    let mut positions = Vec::with_capacity(24);
    let mut normals = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (normal, corners) in faces {
        let base = positions.len() as u32;
        positions.extend_from_slice(&corners);
        normals.extend_from_slice(&[normal; 4]);
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    Mesh::new(positions, normals, indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_counts() {
        let ring = ring_mesh(0.15, 0.2, 32);

        assert_eq!(ring.vertex_count(), 64);
        assert_eq!(ring.triangle_count(), 64);
    }

    #[test]
    fn test_ring_lies_flat() {
        let ring = ring_mesh(0.15, 0.2, 32);

        for p in &ring.positions {
            assert!(p.y.abs() < 1e-6);
            let r = (p.x * p.x + p.z * p.z).sqrt();
            assert!(r >= 0.15 - 1e-5 && r <= 0.2 + 1e-5);
        }
        for n in &ring.normals {
            assert_eq!(*n, Vec3::Y);
        }
    }

    #[test]
    fn test_ring_segment_floor() {
        // Degenerate segment counts are clamped to a valid ring
        let ring = ring_mesh(0.1, 0.2, 1);
        assert_eq!(ring.triangle_count(), 6);
    }

    #[test]
    fn test_box_counts_and_extent() {
        let mesh = box_mesh(0.1, 0.1, 0.1);

        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.triangle_count(), 12);
        for p in &mesh.positions {
            assert!(p.x.abs() <= 0.05 + 1e-6);
            assert!(p.y.abs() <= 0.05 + 1e-6);
            assert!(p.z.abs() <= 0.05 + 1e-6);
        }
    }

    #[test]
    fn test_box_normals_unit_axis() {
        let mesh = box_mesh(1.0, 1.0, 1.0);
        for n in &mesh.normals {
            assert!((n.length() - 1.0).abs() < 1e-6);
        }
    }
}
