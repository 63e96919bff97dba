use js_sys::{Float32Array, Uint16Array};
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlContextAttributes,
    WebGlPowerPreference, WebGlProgram, WebGlShader, WebGlUniformLocation, WebGlVertexArrayObject,
};

use crate::error::{ShaderStage, SketchError};
use crate::geometry::PlaneGeometry;
use crate::viewport::Viewport;

const VERTEX_SHADER: &str = include_str!("../shader/vertex.glsl");
const FRAGMENT_SHADER: &str = include_str!("../shader/fragment.glsl");

const POSITION_LOCATION: u32 = 0;
const UV_LOCATION: u32 = 1;

/// Values uploaded to the shader program before each draw.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct FrameUniforms {
    pub projection: [f32; 16],
    pub model_view: [f32; 16],
    pub time: f32,
    pub resolution: [f32; 4],
    pub mouse: [f32; 4],
}

struct UniformLocations {
    projection: Option<WebGlUniformLocation>,
    model_view: Option<WebGlUniformLocation>,
    time: Option<WebGlUniformLocation>,
    resolution: Option<WebGlUniformLocation>,
    mouse: Option<WebGlUniformLocation>,
}

impl UniformLocations {
    // The GLSL compiler drops unused uniforms; a missing location turns the
    // matching upload into a no-op.
    fn lookup(gl: &GL, program: &WebGlProgram) -> Self {
        Self {
            projection: gl.get_uniform_location(program, "projectionMatrix"),
            model_view: gl.get_uniform_location(program, "modelViewMatrix"),
            time: gl.get_uniform_location(program, "time"),
            resolution: gl.get_uniform_location(program, "resolution"),
            mouse: gl.get_uniform_location(program, "mouse"),
        }
    }
}

/// WebGL2 surface drawing one indexed mesh with the sketch's shader program.
pub struct Renderer {
    gl: GL,
    canvas: HtmlCanvasElement,
    program: WebGlProgram,
    vao: WebGlVertexArrayObject,
    // Held so the GL objects outlive the VAO that references them.
    _buffers: [WebGlBuffer; 3],
    index_count: i32,
    locations: UniformLocations,
    clear_color: [f32; 4],
}

impl Renderer {
    pub fn new(
        canvas: HtmlCanvasElement,
        geometry: &PlaneGeometry,
        clear_color: [f32; 4],
    ) -> Result<Self, SketchError> {
        let attrs = WebGlContextAttributes::new();
        attrs.set_antialias(true);
        attrs.set_power_preference(WebGlPowerPreference::HighPerformance);

        let gl: GL = canvas
            .get_context_with_context_options("webgl2", &attrs)?
            .ok_or(SketchError::ContextUnavailable)?
            .dyn_into()
            .map_err(|_| SketchError::ContextUnavailable)?;

        let vertex = compile_shader(&gl, ShaderStage::Vertex, VERTEX_SHADER)?;
        let fragment = compile_shader(&gl, ShaderStage::Fragment, FRAGMENT_SHADER)?;
        let program = link_program(&gl, &vertex, &fragment)?;
        // Shaders are no longer needed once linked into the program.
        gl.delete_shader(Some(&vertex));
        gl.delete_shader(Some(&fragment));

        let vao = gl
            .create_vertex_array()
            .ok_or(SketchError::Allocation("vertex array"))?;
        gl.bind_vertex_array(Some(&vao));

        let positions = upload_attribute(&gl, POSITION_LOCATION, 3, &geometry.positions)?;
        let uvs = upload_attribute(&gl, UV_LOCATION, 2, &geometry.uvs)?;

        let indices = gl
            .create_buffer()
            .ok_or(SketchError::Allocation("index buffer"))?;
        gl.bind_buffer(GL::ELEMENT_ARRAY_BUFFER, Some(&indices));
        let data = Uint16Array::from(geometry.indices.as_slice());
        gl.buffer_data_with_array_buffer_view(GL::ELEMENT_ARRAY_BUFFER, &data, GL::STATIC_DRAW);

        gl.bind_vertex_array(None);

        // Double sided: the plane must render regardless of winding.
        gl.disable(GL::CULL_FACE);

        let locations = UniformLocations::lookup(&gl, &program);
        log::debug!(
            "renderer ready: {} vertices, {} indices",
            geometry.vertex_count(),
            geometry.indices.len()
        );

        Ok(Self {
            gl,
            canvas,
            program,
            vao,
            _buffers: [positions, uvs, indices],
            index_count: geometry.indices.len() as i32,
            locations,
            clear_color,
        })
    }

    /// Resizes the drawing buffer to the viewport and keeps the canvas laid
    /// out at its CSS size.
    pub fn set_size(&self, viewport: &Viewport) -> Result<(), SketchError> {
        let (w, h) = viewport.drawing_buffer_size();
        self.canvas.set_width(w);
        self.canvas.set_height(h);

        let style = self.canvas.style();
        style.set_property("width", &format!("{}px", viewport.width))?;
        style.set_property("height", &format!("{}px", viewport.height))?;
        style.set_property("display", "block")?;

        self.gl.viewport(0, 0, w as i32, h as i32);
        Ok(())
    }

    pub fn render(&self, uniforms: &FrameUniforms) {
        let gl = &self.gl;
        let [r, g, b, a] = self.clear_color;
        gl.clear_color(r, g, b, a);
        gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);

        gl.use_program(Some(&self.program));
        gl.uniform_matrix4fv_with_f32_array(
            self.locations.projection.as_ref(),
            false,
            &uniforms.projection,
        );
        gl.uniform_matrix4fv_with_f32_array(
            self.locations.model_view.as_ref(),
            false,
            &uniforms.model_view,
        );
        gl.uniform1f(self.locations.time.as_ref(), uniforms.time);
        gl.uniform4fv_with_f32_array(self.locations.resolution.as_ref(), &uniforms.resolution);
        gl.uniform4fv_with_f32_array(self.locations.mouse.as_ref(), &uniforms.mouse);

        gl.bind_vertex_array(Some(&self.vao));
        gl.draw_elements_with_i32(GL::TRIANGLES, self.index_count, GL::UNSIGNED_SHORT, 0);
        gl.bind_vertex_array(None);
    }
}

fn compile_shader(gl: &GL, stage: ShaderStage, source: &str) -> Result<WebGlShader, SketchError> {
    let kind = match stage {
        ShaderStage::Vertex => GL::VERTEX_SHADER,
        ShaderStage::Fragment => GL::FRAGMENT_SHADER,
    };
    let shader = gl
        .create_shader(kind)
        .ok_or(SketchError::Allocation("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    let compiled = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if compiled {
        Ok(shader)
    } else {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(SketchError::ShaderCompile { stage, log })
    }
}

fn link_program(
    gl: &GL,
    vertex: &WebGlShader,
    fragment: &WebGlShader,
) -> Result<WebGlProgram, SketchError> {
    let program = gl
        .create_program()
        .ok_or(SketchError::Allocation("program"))?;
    gl.attach_shader(&program, vertex);
    gl.attach_shader(&program, fragment);
    gl.link_program(&program);

    let linked = gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if linked {
        Ok(program)
    } else {
        let log = gl.get_program_info_log(&program).unwrap_or_default();
        gl.delete_program(Some(&program));
        Err(SketchError::ProgramLink(log))
    }
}

fn upload_attribute(
    gl: &GL,
    location: u32,
    size: i32,
    data: &[f32],
) -> Result<WebGlBuffer, SketchError> {
    let buffer = gl
        .create_buffer()
        .ok_or(SketchError::Allocation("vertex buffer"))?;
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
    let array = Float32Array::from(data);
    gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &array, GL::STATIC_DRAW);
    gl.enable_vertex_attrib_array(location);
    gl.vertex_attrib_pointer_with_i32(location, size, GL::FLOAT, false, 0, 0);
    Ok(buffer)
}
