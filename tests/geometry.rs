use glam::{Vec3, Vec4};
use sketch_wasm::camera::OrthographicCamera;
use sketch_wasm::geometry::{PlaneGeometry, PlaneMesh, MAX_VERTICES};
use sketch_wasm::viewport::Viewport;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_test::wasm_bindgen_test as test;

#[cfg(target_arch = "wasm32")]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn approx_eq3(a: Vec3, b: Vec3, eps: f32) -> bool {
    (a - b).abs().max_element() < eps
}

#[test]
fn single_segment_plane_layout() {
    let plane = PlaneGeometry::new(800.0, 600.0, 1, 1);
    assert_eq!(plane.vertex_count(), 4);
    assert_eq!(
        plane.positions,
        vec![
            -400.0, 300.0, 0.0, //
            400.0, 300.0, 0.0, //
            -400.0, -300.0, 0.0, //
            400.0, -300.0, 0.0,
        ]
    );
    // top row has v = 1, bottom row v = 0
    assert_eq!(plane.uvs, vec![0.0, 1.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0]);
    assert_eq!(plane.indices, vec![0, 2, 1, 2, 3, 1]);
}

#[test]
fn segmented_plane_counts() {
    let plane = PlaneGeometry::new(2.0, 2.0, 3, 2);
    assert_eq!(plane.vertex_count(), 4 * 3);
    assert_eq!(plane.uvs.len(), 4 * 3 * 2);
    assert_eq!(plane.indices.len(), 3 * 2 * 6);
    let max = plane.indices.iter().copied().max().unwrap();
    assert_eq!(max as usize, plane.vertex_count() - 1);
}

#[test]
fn zero_segments_behave_like_one() {
    assert_eq!(
        PlaneGeometry::new(1.0, 1.0, 0, 0),
        PlaneGeometry::new(1.0, 1.0, 1, 1)
    );
}

#[test]
fn camera_frustum_matches_viewport() {
    let mut camera = OrthographicCamera::new(800.0, 600.0);
    assert_eq!(
        (camera.left, camera.right, camera.top, camera.bottom),
        (-400.0, 400.0, 300.0, -300.0)
    );
    assert_eq!((camera.near, camera.far), (-1000.0, 1000.0));
    assert_eq!(camera.position, Vec3::new(0.0, 0.0, 2.0));

    camera.set_viewport(1024.0, 768.0);
    assert_eq!(
        (camera.left, camera.right, camera.top, camera.bottom),
        (-512.0, 512.0, 384.0, -384.0)
    );
}

#[test]
fn plane_corners_project_to_ndc_corners() {
    let camera = OrthographicCamera::new(800.0, 600.0);
    let mesh = PlaneMesh::new(800.0, 600.0);
    let mvp = camera.projection_matrix() * camera.view_matrix() * mesh.model_matrix();

    let corners = [
        (Vec3::new(-400.0, 300.0, 0.0), Vec3::new(-1.0, 1.0, 0.0)),
        (Vec3::new(400.0, 300.0, 0.0), Vec3::new(1.0, 1.0, 0.0)),
        (Vec3::new(-400.0, -300.0, 0.0), Vec3::new(-1.0, -1.0, 0.0)),
        (Vec3::new(400.0, -300.0, 0.0), Vec3::new(1.0, -1.0, 0.0)),
    ];
    for (world, ndc) in corners {
        let clip = mvp * Vec4::new(world.x, world.y, world.z, 1.0);
        let projected = clip.truncate() / clip.w;
        assert!(approx_eq3(projected.truncate().extend(0.0), ndc, 1e-5), "{world} -> {projected}");
        assert!(projected.z.abs() <= 1.0);
    }
}

#[test]
fn fitted_plane_still_covers_viewport_after_resize() {
    let mut camera = OrthographicCamera::new(800.0, 600.0);
    let mut mesh = PlaneMesh::new(800.0, 600.0);

    camera.set_viewport(1600.0, 300.0);
    mesh.fit(1600.0, 300.0);

    let mvp = camera.projection_matrix() * camera.view_matrix() * mesh.model_matrix();
    // top-right vertex of the unscaled geometry
    let clip = mvp * Vec4::new(400.0, 300.0, 0.0, 1.0);
    let projected = clip.truncate() / clip.w;
    assert!((projected.x - 1.0).abs() < 1e-5 && (projected.y - 1.0).abs() < 1e-5);

    assert!(approx_eq3(
        mesh.model_matrix().transform_point3(Vec3::new(400.0, 300.0, 0.0)),
        Vec3::new(800.0, 150.0, 0.0),
        1e-4
    ));
}

#[test]
fn pixel_ratio_is_capped() {
    let vp = Viewport::new(800.0, 600.0, 3.0, 2.0);
    assert_eq!(vp.pixel_ratio, 2.0);
    assert_eq!(vp.drawing_buffer_size(), (1600, 1200));

    let vp = Viewport::new(800.0, 600.0, 1.5, 2.0);
    assert_eq!(vp.drawing_buffer_size(), (1200, 900));

    let vp = Viewport::new(800.0, 600.0, 0.0, 2.0);
    assert_eq!(vp.pixel_ratio, 1.0);
}

#[test]
fn empty_viewport_keeps_a_drawable_buffer() {
    let vp = Viewport::new(0.0, 0.0, 2.0, 2.0);
    assert_eq!(vp.drawing_buffer_size(), (1, 1));
}

#[test]
fn oversized_grid_is_shrunk_to_u16_indices() {
    let plane = PlaneGeometry::new(2.0, 2.0, 300, 300);
    assert!(plane.vertex_count() <= MAX_VERTICES);
    let max = plane.indices.iter().copied().max().unwrap();
    assert_eq!(max as usize, plane.vertex_count() - 1);
    // 301 columns are kept; rows drop to fit.
    assert_eq!(plane.vertex_count(), 301 * 217);

    let wide = PlaneGeometry::new(2.0, 2.0, u16::MAX, u16::MAX);
    assert_eq!(wide.vertex_count(), MAX_VERTICES);
    let max = wide.indices.iter().copied().max().unwrap();
    assert_eq!(max, u16::MAX);
}

#[test]
fn zero_height_camera_projects_finite_values() {
    let camera = OrthographicCamera::new(0.0, 0.0);
    assert!(camera.right > camera.left && camera.top > camera.bottom);
    assert!(camera
        .projection_matrix()
        .to_cols_array()
        .iter()
        .all(|v| v.is_finite()));
}
