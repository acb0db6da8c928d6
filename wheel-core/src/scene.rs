/// Slider-driven scene parameters for the pivot cube and the wheel
use std::ops::RangeInclusive;

use nalgebra::{Matrix4, Point3, Vector3};

use crate::transform::Transform;

pub const POSITION_RANGE: RangeInclusive<f32> = -5.0..=5.0;
pub const ROTATION_RANGE: RangeInclusive<f32> = 0.0..=360.0;
pub const SCALE_RANGE: RangeInclusive<f32> = 0.1..=5.0;

/// The two drawable nodes of the demo scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    Cube,
    Wheel,
}

pub fn light_position() -> Point3<f32> {
    Point3::new(10.0, 10.0, 10.0)
}

/// Transform parameters. The wheel's transform is relative to the pivot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneParams {
    pivot: Vector3<f32>,
    wheel_translation: Vector3<f32>,
    wheel_rotation: Vector3<f32>,
    wheel_scale: Vector3<f32>,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            pivot: Vector3::zeros(),
            wheel_translation: Vector3::new(2.0, 0.0, 0.0),
            wheel_rotation: Vector3::zeros(),
            wheel_scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }
}

fn clamp(value: Vector3<f32>, range: &RangeInclusive<f32>) -> Vector3<f32> {
    value.map(|c| c.clamp(*range.start(), *range.end()))
}

impl SceneParams {
    pub fn pivot(&self) -> Vector3<f32> {
        self.pivot
    }

    pub fn wheel_translation(&self) -> Vector3<f32> {
        self.wheel_translation
    }

    /// Per-axis rotation in degrees
    pub fn wheel_rotation(&self) -> Vector3<f32> {
        self.wheel_rotation
    }

    pub fn wheel_scale(&self) -> Vector3<f32> {
        self.wheel_scale
    }

    pub fn set_pivot(&mut self, pivot: Vector3<f32>) {
        self.pivot = clamp(pivot, &POSITION_RANGE);
    }

    pub fn set_wheel_translation(&mut self, translation: Vector3<f32>) {
        self.wheel_translation = clamp(translation, &POSITION_RANGE);
    }

    pub fn set_wheel_rotation(&mut self, degrees: Vector3<f32>) {
        self.wheel_rotation = clamp(degrees, &ROTATION_RANGE);
    }

    pub fn set_wheel_scale(&mut self, scale: Vector3<f32>) {
        self.wheel_scale = clamp(scale, &SCALE_RANGE);
    }

    pub fn cube_world(&self) -> Matrix4<f32> {
        Transform::translation_matrix(&self.pivot)
    }

    /// Pivot, then offset, then rotation, then scale
    pub fn wheel_world(&self) -> Matrix4<f32> {
        Transform::translation_matrix(&self.pivot)
            * Transform::translation_matrix(&self.wheel_translation)
            * Transform::rotation_matrix(&self.wheel_rotation)
            * Transform::scale_matrix(&self.wheel_scale)
    }

    pub fn world(&self, node: Node) -> Matrix4<f32> {
        match node {
            Node::Cube => self.cube_world(),
            Node::Wheel => self.wheel_world(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_places_wheel_beside_cube() {
        let params = SceneParams::default();
        assert_eq!(params.cube_world(), Matrix4::identity());

        let centre = params.wheel_world().transform_point(&Point3::origin());
        assert!((centre - Point3::new(2.0, 0.0, 0.0)).norm() < 1e-6);
    }

    #[test]
    fn test_wheel_follows_pivot() {
        let mut params = SceneParams::default();
        params.set_pivot(Vector3::new(0.0, 1.0, -1.0));

        let cube = params.world(Node::Cube).transform_point(&Point3::origin());
        let wheel = params.world(Node::Wheel).transform_point(&Point3::origin());
        assert!((cube - Point3::new(0.0, 1.0, -1.0)).norm() < 1e-6);
        assert!((wheel - Point3::new(2.0, 1.0, -1.0)).norm() < 1e-6);
    }

    #[test]
    fn test_scale_applies_before_rotation() {
        let mut params = SceneParams::default();
        params.set_wheel_translation(Vector3::zeros());
        params.set_wheel_scale(Vector3::new(2.0, 1.0, 1.0));
        params.set_wheel_rotation(Vector3::new(0.0, 0.0, 90.0));

        let p = params.wheel_world().transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert!((p - Point3::new(0.0, 2.0, 0.0)).norm() < 1e-5);
    }

    #[test]
    fn test_setters_clamp_to_slider_ranges() {
        let mut params = SceneParams::default();
        params.set_pivot(Vector3::new(-9.0, 2.0, 9.0));
        params.set_wheel_rotation(Vector3::new(-10.0, 400.0, 45.0));
        params.set_wheel_scale(Vector3::new(0.0, 10.0, 1.0));

        assert_eq!(params.pivot(), Vector3::new(-5.0, 2.0, 5.0));
        assert_eq!(params.wheel_rotation(), Vector3::new(0.0, 360.0, 45.0));
        assert_eq!(params.wheel_scale(), Vector3::new(0.1, 5.0, 1.0));
    }
}
