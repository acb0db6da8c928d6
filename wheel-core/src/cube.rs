/// Indexed cube used as the scene's pivot marker
use nalgebra::Vector3;

pub const CUBE_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

/// Indexed vertex attributes for a `drawElements` call
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedBuffers {
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    pub colors: Vec<f32>,
    pub indices: Vec<u16>,
}

impl IndexedBuffers {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }
}

/// Create an axis-aligned cube centred on the origin.
///
/// Each face has its own four vertices so that normals stay flat.
pub fn cube_buffers(size: f32) -> IndexedBuffers {
    let half = size / 2.0;

    // (normal, four corners wound counter-clockwise seen from outside)
    let faces: [(Vector3<f32>, [[f32; 3]; 4]); 6] = [
        // Front
        (
            Vector3::new(0.0, 0.0, 1.0),
            [[-half, -half, half], [half, -half, half], [half, half, half], [-half, half, half]],
        ),
        // Back
        (
            Vector3::new(0.0, 0.0, -1.0),
            [[-half, -half, -half], [-half, half, -half], [half, half, -half], [half, -half, -half]],
        ),
        // Top
        (
            Vector3::new(0.0, 1.0, 0.0),
            [[-half, half, -half], [-half, half, half], [half, half, half], [half, half, -half]],
        ),
        // Bottom
        (
            Vector3::new(0.0, -1.0, 0.0),
            [[-half, -half, -half], [half, -half, -half], [half, -half, half], [-half, -half, half]],
        ),
        // Right
        (
            Vector3::new(1.0, 0.0, 0.0),
            [[half, -half, -half], [half, half, -half], [half, half, half], [half, -half, half]],
        ),
        // Left
        (
            Vector3::new(-1.0, 0.0, 0.0),
            [[-half, -half, -half], [-half, -half, half], [-half, half, half], [-half, half, -half]],
        ),
    ];

    let mut buffers = IndexedBuffers {
        positions: Vec::with_capacity(24 * 3),
        normals: Vec::with_capacity(24 * 3),
        colors: Vec::with_capacity(24 * 4),
        indices: Vec::with_capacity(36),
    };

    for (face, (normal, corners)) in faces.iter().enumerate() {
        for corner in corners {
            buffers.positions.extend_from_slice(corner);
            buffers.normals.extend_from_slice(normal.as_slice());
            buffers.colors.extend_from_slice(&CUBE_COLOR);
        }

        let base = (face * 4) as u16;
        buffers
            .indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    buffers
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    use crate::geometry::face_normal;

    fn position(buffers: &IndexedBuffers, index: u16) -> Point3<f32> {
        let i = index as usize * 3;
        Point3::new(
            buffers.positions[i],
            buffers.positions[i + 1],
            buffers.positions[i + 2],
        )
    }

    #[test]
    fn test_cube_layout() {
        let cube = cube_buffers(2.0);
        assert_eq!(cube.vertex_count(), 24);
        assert_eq!(cube.index_count(), 36);
        assert_eq!(cube.normals.len(), 72);
        assert_eq!(cube.colors.len(), 96);
        assert_eq!(&cube.positions[..3], &[-1.0, -1.0, 1.0]);
        assert!(cube.colors.chunks(4).all(|c| c == CUBE_COLOR));
    }

    #[test]
    fn test_cube_winding_matches_normals() {
        let cube = cube_buffers(1.0);
        for triangle in cube.indices.chunks(3) {
            let winding = face_normal(
                &position(&cube, triangle[0]),
                &position(&cube, triangle[1]),
                &position(&cube, triangle[2]),
            );
            let n = triangle[0] as usize * 3;
            let stored = Vector3::new(cube.normals[n], cube.normals[n + 1], cube.normals[n + 2]);
            assert!((winding - stored).norm() < 1e-6);
        }
    }
}
