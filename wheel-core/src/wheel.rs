/// Procedural wheel: a regular n-gon extruded along Z and capped at both ends
use std::f32::consts::TAU;

use log::debug;
use nalgebra::{Point3, Vector3};

use crate::builder::MeshBuilder;
use crate::error::GenerateError;
use crate::geometry::{Face, Mesh};

pub const MIN_SIDES: u32 = 3;
pub const MAX_SIDES: u32 = 360;

pub const DEFAULT_SIDES: u32 = 8;
pub const DEFAULT_RADIUS: f32 = 1.0;
pub const DEFAULT_WIDTH: f32 = 0.5;

/// Validated wheel dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelParams {
    sides: u32,
    radius: f32,
    width: f32,
}

impl WheelParams {
    pub fn new(sides: u32, radius: f32, width: f32) -> Result<Self, GenerateError> {
        if !(MIN_SIDES..=MAX_SIDES).contains(&sides) {
            return Err(GenerateError::InvalidSides(i64::from(sides)));
        }
        // Written so that NaN fails the check
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(GenerateError::InvalidRadius(radius));
        }
        if !(width > 0.0 && width.is_finite()) {
            return Err(GenerateError::InvalidWidth(width));
        }

        Ok(Self {
            sides,
            radius,
            width,
        })
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Vertices the generated mesh will contain: two rims plus two cap centres
    pub fn vertex_count(&self) -> usize {
        2 * self.sides as usize + 2
    }

    /// Triangles the generated mesh will contain: two per side quad, one per cap wedge
    pub fn face_count(&self) -> usize {
        4 * self.sides as usize
    }
}

impl Default for WheelParams {
    fn default() -> Self {
        Self {
            sides: DEFAULT_SIDES,
            radius: DEFAULT_RADIUS,
            width: DEFAULT_WIDTH,
        }
    }
}

/// Build the wheel mesh.
///
/// Rim vertices are interleaved: index `2i` is the front (+Z) point at step `i`,
/// `2i + 1` the back point. The two cap centres follow the rims. Every side
/// triangle carries its own normal; each cap shares a single normal.
pub fn generate_wheel(params: &WheelParams) -> Mesh {
    let sides = params.sides as usize;
    let half_width = params.width / 2.0;
    let angle_step = TAU / sides as f32;

    let mut builder =
        MeshBuilder::with_capacity(params.vertex_count(), 2 * sides + 2, params.face_count());

    for i in 0..sides {
        let angle = i as f32 * angle_step;
        let x = params.radius * angle.cos();
        let y = params.radius * angle.sin();

        builder.push_vertex(Point3::new(x, y, half_width));
        builder.push_vertex(Point3::new(x, y, -half_width));
    }

    let front_center = builder.push_vertex(Point3::new(0.0, 0.0, half_width));
    let back_center = builder.push_vertex(Point3::new(0.0, 0.0, -half_width));

    let front = |i: usize| 2 * i;
    let back = |i: usize| 2 * i + 1;

    // Side quads, wound counter-clockwise seen from outside. The corners run
    // opposite to (f_i, f_next, b_next) / (f_i, b_next, b_i); that order faces inward.
    for i in 0..sides {
        let next = (i + 1) % sides;

        builder.push_flat_triangle([front(i), back(next), front(next)]);
        builder.push_flat_triangle([front(i), back(i), back(next)]);
    }

    let front_normal = builder.push_normal(Vector3::new(0.0, 0.0, 1.0));
    for i in 0..sides {
        let next = (i + 1) % sides;
        builder.push_face(Face::flat([front_center, front(i), front(next)], front_normal));
    }

    let back_normal = builder.push_normal(Vector3::new(0.0, 0.0, -1.0));
    for i in 0..sides {
        let next = (i + 1) % sides;
        builder.push_face(Face::flat([back_center, back(next), back(i)], back_normal));
    }

    let mesh = builder.build();
    debug!(
        "generated wheel: {} sides, radius {}, width {} -> {} vertices, {} faces",
        params.sides,
        params.radius,
        params.width,
        mesh.vertices().len(),
        mesh.faces().len()
    );
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::face_normal;

    fn wheel(sides: u32, radius: f32, width: f32) -> Mesh {
        generate_wheel(&WheelParams::new(sides, radius, width).unwrap())
    }

    #[test]
    fn test_default_params() {
        let params = WheelParams::default();
        assert_eq!(params.sides(), 8);
        assert_eq!(params.radius(), 1.0);
        assert_eq!(params.width(), 0.5);
    }

    #[test]
    fn test_rejects_side_count_out_of_range() {
        assert_eq!(
            WheelParams::new(2, 1.0, 1.0),
            Err(GenerateError::InvalidSides(2))
        );
        assert_eq!(
            WheelParams::new(361, 1.0, 1.0),
            Err(GenerateError::InvalidSides(361))
        );
        assert!(WheelParams::new(3, 1.0, 1.0).is_ok());
        assert!(WheelParams::new(360, 1.0, 1.0).is_ok());
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        assert_eq!(
            WheelParams::new(8, 0.0, 1.0),
            Err(GenerateError::InvalidRadius(0.0))
        );
        assert_eq!(
            WheelParams::new(8, 1.0, -0.5),
            Err(GenerateError::InvalidWidth(-0.5))
        );
        assert!(matches!(
            WheelParams::new(8, f32::NAN, 1.0),
            Err(GenerateError::InvalidRadius(_))
        ));
        assert!(matches!(
            WheelParams::new(8, 1.0, f32::INFINITY),
            Err(GenerateError::InvalidWidth(_))
        ));
    }

    #[test]
    fn test_counts_match_side_count() {
        for sides in [3, 4, 8, 17, 360] {
            let mesh = wheel(sides, 1.5, 0.25);
            let n = sides as usize;
            assert_eq!(mesh.vertices().len(), 2 * n + 2);
            assert_eq!(mesh.normals().len(), 2 * n + 2);
            assert_eq!(mesh.faces().len(), 4 * n);
        }
    }

    #[test]
    fn test_square_wheel_example() {
        let mesh = wheel(4, 2.0, 1.0);
        assert_eq!(mesh.vertices().len(), 10);
        assert_eq!(mesh.faces().len(), 16);

        let first = mesh.vertices()[0];
        assert_eq!((first.x, first.y, first.z), (2.0, 0.0, 0.5));
        let second = mesh.vertices()[1];
        assert_eq!((second.x, second.y, second.z), (2.0, 0.0, -0.5));

        // Front cap faces start after the 8 side triangles
        let front_cap = mesh.faces()[8];
        let normal = mesh.normals()[front_cap.corners[0].normal];
        assert_eq!((normal.x, normal.y, normal.z), (0.0, 0.0, 1.0));
        assert_eq!(front_cap.corners[0].vertex, 8);

        let back_cap = mesh.faces()[12];
        let normal = mesh.normals()[back_cap.corners[0].normal];
        assert_eq!((normal.x, normal.y, normal.z), (0.0, 0.0, -1.0));
        assert_eq!(back_cap.corners[0].vertex, 9);
    }

    #[test]
    fn test_normals_are_unit_length() {
        let mesh = wheel(7, 3.0, 0.8);
        for normal in mesh.normals() {
            assert!((normal.norm() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_side_normals_point_outward() {
        let sides = 12;
        let mesh = wheel(sides, 1.0, 0.5);
        let angle_step = TAU / sides as f32;

        for (index, face) in mesh.faces()[..2 * sides as usize].iter().enumerate() {
            let angle = (index / 2) as f32 * angle_step;
            let radial = Vector3::new(angle.cos(), angle.sin(), 0.0);
            let normal = mesh.normals()[face.corners[0].normal];
            assert!(normal.dot(&radial) > 0.0, "face {} points inward", index);
            assert!(normal.z.abs() < 1e-6);
        }
    }

    #[test]
    fn test_winding_agrees_with_stored_normals() {
        let mesh = wheel(6, 1.0, 0.5);
        for face in mesh.faces() {
            let [p0, p1, p2] = mesh.face_positions(face);
            let winding = face_normal(&p0, &p1, &p2);
            let stored = mesh.normals()[face.corners[0].normal];
            assert!(winding.dot(&stored) > 0.99);
        }
    }

    #[test]
    fn test_every_face_is_flat_shaded() {
        let mesh = wheel(5, 1.0, 0.5);
        for face in mesh.faces() {
            let normal = face.corners[0].normal;
            assert!(face.corners.iter().all(|c| c.normal == normal));
        }
    }
}
