/// Wheel Web - WASM bindings for the browser demo
///
/// The page fetches `wheel.obj`, hands the text to `parseWheelObj`, and uploads
/// the returned arrays to WebGL itself. Scene matrices come from `WheelScene`,
/// driven by the page's GUI sliders. All matrices are column-major, ready for
/// `uniformMatrix4fv`.

use nalgebra::{Matrix4, Vector3};
use wasm_bindgen::prelude::*;
use wheel_core::scene::light_position;
use wheel_core::{
    cube_buffers, parse_obj, Camera, IndexedBuffers, Node, ObjError, RenderBuffers, SceneParams,
    Transform,
};

/// Edge length of the pivot cube
const CUBE_SIZE: f32 = 2.0;

/// Flat per-corner buffers for a `drawArrays` call
#[wasm_bindgen]
pub struct WheelModel {
    buffers: RenderBuffers,
}

#[wasm_bindgen]
impl WheelModel {
    #[wasm_bindgen(getter)]
    pub fn positions(&self) -> Vec<f32> {
        self.buffers.positions().to_vec()
    }

    #[wasm_bindgen(getter)]
    pub fn normals(&self) -> Vec<f32> {
        self.buffers.normals().to_vec()
    }

    #[wasm_bindgen(getter, js_name = texCoords)]
    pub fn tex_coords(&self) -> Vec<f32> {
        self.buffers.tex_coords().to_vec()
    }

    #[wasm_bindgen(getter)]
    pub fn colors(&self) -> Vec<f32> {
        self.buffers.colors().to_vec()
    }

    #[wasm_bindgen(getter, js_name = vertexCount)]
    pub fn vertex_count(&self) -> usize {
        self.buffers.corner_count()
    }
}

/// Parse OBJ text, returning the model and the messages for skipped faces
fn load_model(text: &str) -> Result<(WheelModel, Vec<String>), ObjError> {
    let (buffers, warnings) = parse_obj(text)?.into_parts();
    let messages = warnings.iter().map(ToString::to_string).collect();
    Ok((WheelModel { buffers }, messages))
}

/// Parse the wheel's OBJ text. Skipped faces are reported on the console;
/// malformed records and bad indices throw.
#[wasm_bindgen(js_name = parseWheelObj)]
pub fn parse_wheel_obj(text: &str) -> Result<WheelModel, JsValue> {
    let (model, warnings) = load_model(text).map_err(|e| JsValue::from_str(&e.to_string()))?;
    for warning in &warnings {
        web_sys::console::warn_1(&JsValue::from_str(warning));
    }
    Ok(model)
}

/// Indexed buffers for a `drawElements` call
#[wasm_bindgen]
pub struct CubeModel {
    buffers: IndexedBuffers,
}

#[wasm_bindgen]
impl CubeModel {
    #[wasm_bindgen(getter)]
    pub fn positions(&self) -> Vec<f32> {
        self.buffers.positions.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn normals(&self) -> Vec<f32> {
        self.buffers.normals.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn colors(&self) -> Vec<f32> {
        self.buffers.colors.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn indices(&self) -> Vec<u16> {
        self.buffers.indices.clone()
    }

    #[wasm_bindgen(getter, js_name = indexCount)]
    pub fn index_count(&self) -> usize {
        self.buffers.index_count()
    }
}

#[wasm_bindgen(js_name = cubeModel)]
pub fn cube_model() -> CubeModel {
    CubeModel {
        buffers: cube_buffers(CUBE_SIZE),
    }
}

/// Which node a per-node matrix is requested for
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneNode {
    Cube,
    Wheel,
}

impl From<SceneNode> for Node {
    fn from(node: SceneNode) -> Self {
        match node {
            SceneNode::Cube => Node::Cube,
            SceneNode::Wheel => Node::Wheel,
        }
    }
}

fn to_column_major(matrix: &Matrix4<f32>) -> Vec<f32> {
    matrix.as_slice().to_vec()
}

/// Camera plus slider state for the cube/wheel scene
#[wasm_bindgen]
pub struct WheelScene {
    params: SceneParams,
    camera: Camera,
}

#[wasm_bindgen]
impl WheelScene {
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> WheelScene {
        WheelScene {
            params: SceneParams::default(),
            camera: Camera::new(width, height),
        }
    }

    /// Track the canvas size
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
    }

    #[wasm_bindgen(js_name = setPivot)]
    pub fn set_pivot(&mut self, x: f32, y: f32, z: f32) {
        self.params.set_pivot(Vector3::new(x, y, z));
    }

    #[wasm_bindgen(js_name = setWheelTranslation)]
    pub fn set_wheel_translation(&mut self, x: f32, y: f32, z: f32) {
        self.params.set_wheel_translation(Vector3::new(x, y, z));
    }

    /// Angles in degrees
    #[wasm_bindgen(js_name = setWheelRotation)]
    pub fn set_wheel_rotation(&mut self, x: f32, y: f32, z: f32) {
        self.params.set_wheel_rotation(Vector3::new(x, y, z));
    }

    #[wasm_bindgen(js_name = setWheelScale)]
    pub fn set_wheel_scale(&mut self, x: f32, y: f32, z: f32) {
        self.params.set_wheel_scale(Vector3::new(x, y, z));
    }

    #[wasm_bindgen(js_name = worldMatrix)]
    pub fn world_matrix(&self, node: SceneNode) -> Vec<f32> {
        to_column_major(&self.params.world(node.into()))
    }

    #[wasm_bindgen(js_name = viewProjection)]
    pub fn view_projection(&self) -> Vec<f32> {
        to_column_major(&self.camera.view_projection())
    }

    #[wasm_bindgen(js_name = worldViewProjection)]
    pub fn world_view_projection(&self, node: SceneNode) -> Vec<f32> {
        let mvp = Transform::mvp_matrix(
            &self.params.world(node.into()),
            &self.camera.view_matrix(),
            &self.camera.projection_matrix(),
        );
        to_column_major(&mvp)
    }

    #[wasm_bindgen(js_name = worldInverseTranspose)]
    pub fn world_inverse_transpose(&self, node: SceneNode) -> Vec<f32> {
        to_column_major(&Transform::normal_matrix(&self.params.world(node.into())))
    }

    #[wasm_bindgen(getter, js_name = cameraPosition)]
    pub fn camera_position(&self) -> Vec<f32> {
        self.camera.position.coords.as_slice().to_vec()
    }

    #[wasm_bindgen(getter, js_name = lightPosition)]
    pub fn light_position(&self) -> Vec<f32> {
        light_position().coords.as_slice().to_vec()
    }
}
