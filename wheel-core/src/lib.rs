/// Wheel Core Library - Procedural wheel geometry and OBJ round-tripping
///
/// This library provides the stateless core of the wheel demo: the wheel
/// generator, the OBJ writer and parser, the flat render buffers handed to the
/// GPU, and the small amount of scene math the browser page needs.

pub mod buffers;
pub mod builder;
pub mod cube;
pub mod error;
pub mod geometry;
pub mod obj;
pub mod projection;
pub mod scene;
pub mod transform;
pub mod wheel;

// Re-export commonly used types
pub use buffers::{RenderBuffers, DEFAULT_COLOR, DEFAULT_TEX_COORD};
pub use builder::MeshBuilder;
pub use cube::{cube_buffers, IndexedBuffers};
pub use error::{GenerateError, ObjError, RecordKind};
pub use geometry::{Corner, Face, Mesh};
pub use obj::{parse_obj, to_obj_string, write_obj, ParsedObj, ParseWarning};
pub use projection::Camera;
pub use scene::{Node, SceneParams};
pub use transform::Transform;
pub use wheel::{generate_wheel, WheelParams};
