use sketch_wasm::error::{ShaderStage, SketchError};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_test::wasm_bindgen_test as test;

#[cfg(target_arch = "wasm32")]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[test]
fn messages_name_the_failure() {
    assert_eq!(
        SketchError::ContainerNotFound("app".into()).to_string(),
        "container element #app not found"
    );
    assert_eq!(SketchError::ContextUnavailable.to_string(), "WebGL2 not supported");

    let err = SketchError::ShaderCompile {
        stage: ShaderStage::Fragment,
        log: "ERROR: 0:12: 'foo' : undeclared identifier".into(),
    };
    assert_eq!(
        err.to_string(),
        "fragment shader failed to compile: ERROR: 0:12: 'foo' : undeclared identifier"
    );
}

#[test]
fn is_a_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(SketchError::Allocation("vertex buffer"));
    assert_eq!(err.to_string(), "failed to create vertex buffer");
}
