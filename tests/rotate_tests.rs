//! Rotate applicator tests
//!
//! Tests for:
//! - Pointer travel to angle mapping
//! - Rotation about the viewer's forward axis, weighted by falloff
//! - `affect_selected_only` filtering
//! - Euler bones switching to quaternion mode and back on cancel

use glam::{Affine3A, Quat, Vec2, Vec3};
use proportional_pose::apply::rotate::rotation_angle;
use proportional_pose::host::{PoseProvider, RecordedKeyframes};
use proportional_pose::input::{InputEvent, Key};
use proportional_pose::rig::{Bone, BoneRotation, EditMode, PoseScene, Skeleton, SkeletonKey};
use proportional_pose::session::PoseEditor;
use proportional_pose::{Configuration, TransformKind, ViewOrientation};

// ============================================================================
// Helper
// ============================================================================

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn quat_approx(a: Quat, b: Quat) -> bool {
    a.dot(b).abs() > 1.0 - EPSILON
}

/// `center` (selected) at the origin, `side` at distance 1 and `out` at
/// distance 3. Rest frames are identity.
fn scene() -> (PoseScene, SkeletonKey) {
    let mut skeleton = Skeleton::new("Armature", Affine3A::IDENTITY);
    for (name, x, selected) in [("center", 0.0, true), ("side", 1.0, false), ("out", 3.0, false)] {
        let head = Vec3::new(x, 0.0, 0.0);
        skeleton.add_bone(
            Bone::new(name, head, head + Vec3::Y)
                .with_rest_matrix(Affine3A::IDENTITY)
                .with_selected(selected),
        );
    }

    let mut scene = PoseScene::new();
    scene.mode = EditMode::Pose;
    let key = scene.add_skeleton(skeleton);
    scene.select(key);
    (scene, key)
}

fn editor() -> PoseEditor {
    let mut config = Configuration::enabled();
    config.radius = 2.0;
    config.falloff_exponent = 2.0;
    config.power = 1.0;
    PoseEditor::new(config)
}

fn rotation(scene: &PoseScene, key: SkeletonKey, name: &str) -> BoneRotation {
    scene.skeleton(key).unwrap().bone(name).unwrap().pose.rotation
}

fn drag(editor: &mut PoseEditor, scene: &mut PoseScene, to: Vec2) {
    let mut sink = RecordedKeyframes::new();
    editor
        .handle_event(
            &InputEvent::PointerMoved { position: to },
            &ViewOrientation::IDENTITY,
            scene,
            &mut sink,
        )
        .unwrap();
}

// ============================================================================
// Angle
// ============================================================================

#[test]
fn angle_scales_with_vertical_travel_and_power() {
    // Dragging down (positive pixel y) turns positively about forward
    assert!(approx_eq(rotation_angle(Vec2::new(0.0, 10.0), 1.0), 0.5));
    assert!(approx_eq(rotation_angle(Vec2::new(0.0, -10.0), 0.5), -0.25));
    // Horizontal travel is ignored
    assert!(approx_eq(rotation_angle(Vec2::new(50.0, 0.0), 1.0), 0.0));
}

// ============================================================================
// Applicator
// ============================================================================

#[test]
fn rotates_about_view_forward_weighted() {
    let (mut scene, key) = scene();
    let mut editor = editor();
    editor
        .invoke(TransformKind::Rotate, Vec2::ZERO, &scene)
        .unwrap();
    drag(&mut editor, &mut scene, Vec2::new(0.0, 10.0));

    // Identity view looks down -Z
    let forward = Vec3::NEG_Z;
    let center = rotation(&scene, key, "center").to_quat();
    assert!(quat_approx(center, Quat::from_axis_angle(forward, 0.5)));

    let side = rotation(&scene, key, "side").to_quat();
    assert!(quat_approx(side, Quat::from_axis_angle(forward, 0.5 * 0.25)));

    assert_eq!(rotation(&scene, key, "out"), BoneRotation::IDENTITY);

    // Rotation never moves bones
    let skeleton = scene.skeleton(key).unwrap();
    assert!(skeleton.bones.iter().all(|b| b.pose.translation == Vec3::ZERO));
}

#[test]
fn horizontal_drag_does_not_rotate() {
    let (mut scene, key) = scene();
    let mut editor = editor();
    editor
        .invoke(TransformKind::Rotate, Vec2::ZERO, &scene)
        .unwrap();
    drag(&mut editor, &mut scene, Vec2::new(40.0, 0.0));

    assert_eq!(rotation(&scene, key, "center"), BoneRotation::IDENTITY);
    assert_eq!(rotation(&scene, key, "side"), BoneRotation::IDENTITY);
}

#[test]
fn selected_only_limits_rotation() {
    let (mut scene, key) = scene();
    let mut editor = editor();
    editor.config_mut().affect_selected_only = true;
    editor
        .invoke(TransformKind::Rotate, Vec2::ZERO, &scene)
        .unwrap();
    drag(&mut editor, &mut scene, Vec2::new(0.0, 10.0));

    assert!(!rotation(&scene, key, "center").approx_eq(&BoneRotation::IDENTITY, 1e-6));
    assert_eq!(rotation(&scene, key, "side"), BoneRotation::IDENTITY);
}

#[test]
fn rotation_is_composed_onto_existing_pose() {
    let (mut scene, key) = scene();
    let base = Quat::from_rotation_x(0.3);
    scene
        .skeleton_mut(key)
        .unwrap()
        .bone_mut("center")
        .unwrap()
        .pose
        .rotation = BoneRotation::Quaternion(base);

    let mut editor = editor();
    editor
        .invoke(TransformKind::Rotate, Vec2::ZERO, &scene)
        .unwrap();
    drag(&mut editor, &mut scene, Vec2::new(0.0, 10.0));

    let expected = Quat::from_axis_angle(Vec3::NEG_Z, 0.5) * base;
    assert!(quat_approx(rotation(&scene, key, "center").to_quat(), expected));
}

#[test]
fn euler_mode_restored_on_cancel() {
    let (mut scene, key) = scene();
    scene
        .skeleton_mut(key)
        .unwrap()
        .bone_mut("side")
        .unwrap()
        .pose
        .set_rotation_euler(0.1, 0.2, 0.3);
    let original = rotation(&scene, key, "side");

    let mut editor = editor();
    editor
        .invoke(TransformKind::Rotate, Vec2::ZERO, &scene)
        .unwrap();
    drag(&mut editor, &mut scene, Vec2::new(0.0, 30.0));
    assert!(rotation(&scene, key, "side").is_quaternion());

    let mut sink = RecordedKeyframes::new();
    editor
        .handle_event(
            &InputEvent::key_press(Key::Escape),
            &ViewOrientation::IDENTITY,
            &mut scene,
            &mut sink,
        )
        .unwrap();
    assert_eq!(rotation(&scene, key, "side"), original);
}
