/// Growable vertex/normal/face tables that freeze into a `Mesh`
use nalgebra::{Point3, Vector3};

use crate::geometry::{face_normal, Face, Mesh};

#[derive(Debug, Default)]
pub struct MeshBuilder {
    vertices: Vec<Point3<f32>>,
    normals: Vec<Vector3<f32>>,
    faces: Vec<Face>,
}

impl MeshBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize, normals: usize, faces: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(normals),
            faces: Vec::with_capacity(faces),
        }
    }

    /// Append a vertex and return its 0-based index
    pub fn push_vertex(&mut self, position: Point3<f32>) -> usize {
        self.vertices.push(position);
        self.vertices.len() - 1
    }

    /// Append a normal and return its 0-based index
    pub fn push_normal(&mut self, normal: Vector3<f32>) -> usize {
        self.normals.push(normal);
        self.normals.len() - 1
    }

    /// Append a face whose corners reference already pushed records.
    ///
    /// Panics if a corner's vertex or normal index has not been pushed yet.
    pub fn push_face(&mut self, face: Face) {
        for corner in &face.corners {
            assert!(
                corner.vertex < self.vertices.len() && corner.normal < self.normals.len(),
                "corner {:?} references a record not yet pushed ({} vertices, {} normals)",
                corner,
                self.vertices.len(),
                self.normals.len()
            );
        }
        self.faces.push(face);
    }

    /// Append a triangle with its own freshly computed normal.
    ///
    /// Panics if any index has not been pushed yet.
    pub fn push_flat_triangle(&mut self, vertices: [usize; 3]) {
        let normal = face_normal(
            &self.vertices[vertices[0]],
            &self.vertices[vertices[1]],
            &self.vertices[vertices[2]],
        );
        let normal_index = self.push_normal(normal);
        self.push_face(Face::flat(vertices, normal_index));
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn build(self) -> Mesh {
        Mesh::from_parts(self.vertices, self.normals, self.faces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_returns_indices() {
        let mut builder = MeshBuilder::new();
        assert_eq!(builder.push_vertex(Point3::origin()), 0);
        assert_eq!(builder.push_vertex(Point3::new(1.0, 0.0, 0.0)), 1);
        assert_eq!(builder.push_normal(Vector3::z()), 0);
        assert_eq!(builder.vertex_count(), 2);
    }

    #[test]
    fn test_flat_triangle_gets_own_normal() {
        let mut builder = MeshBuilder::new();
        let a = builder.push_vertex(Point3::new(0.0, 0.0, 0.0));
        let b = builder.push_vertex(Point3::new(1.0, 0.0, 0.0));
        let c = builder.push_vertex(Point3::new(0.0, 1.0, 0.0));
        builder.push_flat_triangle([a, b, c]);
        builder.push_flat_triangle([a, c, b]);

        let mesh = builder.build();
        assert_eq!(mesh.normals().len(), 2);
        assert_eq!(mesh.faces().len(), 2);
        assert!((mesh.normals()[0] - Vector3::z()).norm() < 1e-6);
        assert!((mesh.normals()[1] + Vector3::z()).norm() < 1e-6);
        assert_eq!(mesh.faces()[1], Face::flat([a, c, b], 1));
    }

    #[test]
    #[should_panic(expected = "not yet pushed")]
    fn test_face_with_unknown_vertex_panics() {
        let mut builder = MeshBuilder::new();
        builder.push_vertex(Point3::origin());
        let normal = builder.push_normal(Vector3::z());
        builder.push_face(Face::flat([0, 0, 7], normal));
    }

    #[test]
    #[should_panic(expected = "not yet pushed")]
    fn test_face_with_unknown_normal_panics() {
        let mut builder = MeshBuilder::new();
        let a = builder.push_vertex(Point3::origin());
        builder.push_face(Face::flat([a, a, a], 0));
    }
}
