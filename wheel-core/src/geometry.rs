/// Indexed geometry primitives shared by the generator and the OBJ codec
use nalgebra::{Point3, Vector3};

/// One triangle corner: an index into the vertex table and one into the normal table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corner {
    pub vertex: usize,
    pub normal: usize,
}

impl Corner {
    pub fn new(vertex: usize, normal: usize) -> Self {
        Self { vertex, normal }
    }
}

/// A triangle face defined by three corners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    pub corners: [Corner; 3],
}

impl Face {
    pub fn new(c0: Corner, c1: Corner, c2: Corner) -> Self {
        Self {
            corners: [c0, c1, c2],
        }
    }

    /// A flat-shaded face: every corner shares the same normal
    pub fn flat(vertices: [usize; 3], normal: usize) -> Self {
        Self::new(
            Corner::new(vertices[0], normal),
            Corner::new(vertices[1], normal),
            Corner::new(vertices[2], normal),
        )
    }
}

/// Calculate the unit face normal of a counter-clockwise triangle.
///
/// Degenerate triangles are not guarded: a zero cross product normalizes to NaN.
pub fn face_normal(p0: &Point3<f32>, p1: &Point3<f32>, p2: &Point3<f32>) -> Vector3<f32> {
    let edge1 = p1 - p0;
    let edge2 = p2 - p0;

    edge1.cross(&edge2).normalize()
}

/// An immutable indexed triangle mesh. Built through `MeshBuilder`.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<Point3<f32>>,
    normals: Vec<Vector3<f32>>,
    faces: Vec<Face>,
}

impl Mesh {
    pub(crate) fn from_parts(
        vertices: Vec<Point3<f32>>,
        normals: Vec<Vector3<f32>>,
        faces: Vec<Face>,
    ) -> Self {
        Self {
            vertices,
            normals,
            faces,
        }
    }

    pub fn vertices(&self) -> &[Point3<f32>] {
        &self.vertices
    }

    pub fn normals(&self) -> &[Vector3<f32>] {
        &self.normals
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Resolve a face's corners to positions
    pub fn face_positions(&self, face: &Face) -> [Point3<f32>; 3] {
        face.corners.map(|corner| self.vertices[corner.vertex])
    }
}
