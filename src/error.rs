use std::fmt;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// Shader stage a compile error belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Failures while mounting a sketch.
#[derive(Debug, Clone, PartialEq)]
pub enum SketchError {
    NoWindow,
    NoDocument,
    ContainerNotFound(String),
    /// WebGL2 is unavailable or context creation was refused.
    ContextUnavailable,
    ShaderCompile { stage: ShaderStage, log: String },
    ProgramLink(String),
    /// The context failed to allocate a GL object (usually context loss).
    Allocation(&'static str),
    /// A browser API threw.
    Js(String),
}

impl fmt::Display for SketchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SketchError::NoWindow => f.write_str("no window"),
            SketchError::NoDocument => f.write_str("no document"),
            SketchError::ContainerNotFound(id) => write!(f, "container element #{id} not found"),
            SketchError::ContextUnavailable => f.write_str("WebGL2 not supported"),
            SketchError::ShaderCompile { stage, log } => {
                write!(f, "{stage} shader failed to compile: {log}")
            }
            SketchError::ProgramLink(log) => write!(f, "shader program failed to link: {log}"),
            SketchError::Allocation(what) => write!(f, "failed to create {what}"),
            SketchError::Js(msg) => write!(f, "javascript error: {msg}"),
        }
    }
}

impl std::error::Error for SketchError {}

#[cfg(target_arch = "wasm32")]
impl From<SketchError> for wasm_bindgen::JsValue {
    fn from(err: SketchError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for SketchError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let msg = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|e| String::from(e.message()))
            })
            .unwrap_or_else(|| format!("{value:?}"));
        SketchError::Js(msg)
    }
}
