/// 3D transformation matrices for scene nodes
use nalgebra::{Matrix4, Vector3};

/// Transform builder for 3D transformations
pub struct Transform;

impl Transform {
    /// Create a rotation matrix from per-axis angles in degrees.
    ///
    /// Applied as `Rx * Ry * Rz`, so vertices are rotated about Z first.
    pub fn rotation_matrix(degrees: &Vector3<f32>) -> Matrix4<f32> {
        let radians = degrees.map(f32::to_radians);
        let rx = Matrix4::new_rotation(Vector3::new(radians.x, 0.0, 0.0));
        let ry = Matrix4::new_rotation(Vector3::new(0.0, radians.y, 0.0));
        let rz = Matrix4::new_rotation(Vector3::new(0.0, 0.0, radians.z));

        rx * ry * rz
    }

    /// Create a translation matrix
    pub fn translation_matrix(offset: &Vector3<f32>) -> Matrix4<f32> {
        Matrix4::new_translation(offset)
    }

    /// Create a scale matrix
    pub fn scale_matrix(scale: &Vector3<f32>) -> Matrix4<f32> {
        Matrix4::new_nonuniform_scaling(scale)
    }

    /// Create a model-view-projection matrix
    pub fn mvp_matrix(
        model: &Matrix4<f32>,
        view: &Matrix4<f32>,
        projection: &Matrix4<f32>,
    ) -> Matrix4<f32> {
        projection * view * model
    }

    /// Inverse-transpose of a world matrix, for transforming normals.
    /// Singular matrices (zero scale) fall back to identity.
    pub fn normal_matrix(world: &Matrix4<f32>) -> Matrix4<f32> {
        world
            .try_inverse()
            .map(|inverse| inverse.transpose())
            .unwrap_or_else(Matrix4::identity)
    }
}
