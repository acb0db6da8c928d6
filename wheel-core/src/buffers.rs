/// Flat, per-corner vertex attribute arrays ready for GPU upload
use nalgebra::{Point3, Vector3};

use crate::geometry::Mesh;

/// Flat mid-gray, since OBJ carries no color
pub const DEFAULT_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
pub const DEFAULT_TEX_COORD: [f32; 2] = [0.0, 0.0];

pub const POSITION_COMPONENTS: usize = 3;
pub const NORMAL_COMPONENTS: usize = 3;
pub const TEX_COORD_COMPONENTS: usize = 2;
pub const COLOR_COMPONENTS: usize = 4;

/// Four parallel attribute arrays with one entry per triangle corner.
///
/// Corners are never deduplicated: a vertex shared by six triangles appears six times.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderBuffers {
    positions: Vec<f32>,
    normals: Vec<f32>,
    tex_coords: Vec<f32>,
    colors: Vec<f32>,
}

impl RenderBuffers {
    pub(crate) fn with_corner_capacity(corners: usize) -> Self {
        Self {
            positions: Vec::with_capacity(corners * POSITION_COMPONENTS),
            normals: Vec::with_capacity(corners * NORMAL_COMPONENTS),
            tex_coords: Vec::with_capacity(corners * TEX_COORD_COMPONENTS),
            colors: Vec::with_capacity(corners * COLOR_COMPONENTS),
        }
    }

    /// Expand an indexed mesh directly, without going through OBJ text
    pub fn from_mesh(mesh: &Mesh) -> Self {
        let mut buffers = Self::with_corner_capacity(mesh.faces().len() * 3);
        for face in mesh.faces() {
            for corner in &face.corners {
                buffers.push_corner(
                    &mesh.vertices()[corner.vertex],
                    &mesh.normals()[corner.normal],
                );
            }
        }
        buffers
    }

    pub(crate) fn push_corner(&mut self, position: &Point3<f32>, normal: &Vector3<f32>) {
        self.positions
            .extend_from_slice(&[position.x, position.y, position.z]);
        self.normals.extend_from_slice(&[normal.x, normal.y, normal.z]);
        self.tex_coords.extend_from_slice(&DEFAULT_TEX_COORD);
        self.colors.extend_from_slice(&DEFAULT_COLOR);
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn normals(&self) -> &[f32] {
        &self.normals
    }

    pub fn tex_coords(&self) -> &[f32] {
        &self.tex_coords
    }

    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    /// Number of triangle corners, i.e. the vertex count for a non-indexed draw call
    pub fn corner_count(&self) -> usize {
        self.positions.len() / POSITION_COMPONENTS
    }

    pub fn triangle_count(&self) -> usize {
        self.corner_count() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
