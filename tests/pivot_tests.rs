//! Center resolver tests
//!
//! Tests for:
//! - Active-bone precedence
//! - Selection mean across several skeletons
//! - Origin fallback when nothing is selected
//! - Snapshot capture and restore across rigs

use glam::{Affine3A, Vec3};
use proportional_pose::host::PoseProvider;
use proportional_pose::pivot::{PivotSource, resolve_pivot};
use proportional_pose::rig::{Bone, BoneKey, EditMode, PoseScene, Skeleton, SkeletonKey};
use proportional_pose::Snapshot;

// ============================================================================
// Helper
// ============================================================================

const EPSILON: f32 = 1e-5;

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    (a - b).abs().max_element() < EPSILON
}

fn rig(name: &str, world: Affine3A, bones: &[(&str, Vec3, bool)]) -> Skeleton {
    let mut skeleton = Skeleton::new(name, world);
    for &(bone_name, head, selected) in bones {
        skeleton.add_bone(Bone::new(bone_name, head, head + Vec3::Y).with_selected(selected));
    }
    skeleton
}

fn scene_of(rigs: Vec<Skeleton>) -> (PoseScene, Vec<SkeletonKey>) {
    let mut scene = PoseScene::new();
    scene.mode = EditMode::Pose;
    let keys: Vec<_> = rigs.into_iter().map(|s| scene.add_skeleton(s)).collect();
    for &key in &keys {
        scene.select(key);
    }
    (scene, keys)
}

// ============================================================================
// Precedence
// ============================================================================

#[test]
fn active_bone_wins_when_requested() {
    let mut skeleton = rig(
        "A",
        Affine3A::from_translation(Vec3::new(0.0, 0.0, 2.0)),
        &[("a", Vec3::ZERO, true), ("b", Vec3::new(4.0, 0.0, 0.0), true)],
    );
    skeleton.set_active("b");
    let (scene, keys) = scene_of(vec![skeleton]);

    let pivot = resolve_pivot(&scene, &keys, true);
    assert!(vec3_approx(pivot.point, Vec3::new(4.0, 0.0, 2.0)));
    assert_eq!(pivot.source, PivotSource::ActiveBone(keys[0]));

    let mean = resolve_pivot(&scene, &keys, false);
    assert!(vec3_approx(mean.point, Vec3::new(2.0, 0.0, 2.0)));
    assert_eq!(mean.source, PivotSource::SelectionMean(2));
}

#[test]
fn first_active_in_selection_order_wins() {
    let mut first = rig("A", Affine3A::IDENTITY, &[("a", Vec3::X, false)]);
    let mut second = rig("B", Affine3A::IDENTITY, &[("b", Vec3::Y, false)]);
    first.set_active("a");
    second.set_active("b");
    let (scene, keys) = scene_of(vec![first, second]);

    let pivot = resolve_pivot(&scene, &keys, true);
    assert!(vec3_approx(pivot.point, Vec3::X));

    let reversed = [keys[1], keys[0]];
    let pivot = resolve_pivot(&scene, &reversed, true);
    assert!(vec3_approx(pivot.point, Vec3::Y));
}

#[test]
fn falls_back_to_mean_without_active_bone() {
    let skeleton = rig(
        "A",
        Affine3A::IDENTITY,
        &[("a", Vec3::ZERO, true), ("b", Vec3::new(0.0, 2.0, 0.0), true)],
    );
    let (scene, keys) = scene_of(vec![skeleton]);

    let pivot = resolve_pivot(&scene, &keys, true);
    assert!(vec3_approx(pivot.point, Vec3::new(0.0, 1.0, 0.0)));
    assert_eq!(pivot.source, PivotSource::SelectionMean(2));
}

#[test]
fn mean_spans_all_skeletons() {
    let a = rig("A", Affine3A::IDENTITY, &[("root", Vec3::ZERO, true)]);
    let b = rig(
        "B",
        Affine3A::from_translation(Vec3::new(3.0, 0.0, 0.0)),
        &[("root", Vec3::ZERO, true), ("skip", Vec3::ONE, false)],
    );
    let (scene, keys) = scene_of(vec![a, b]);

    let pivot = resolve_pivot(&scene, &keys, false);
    assert!(vec3_approx(pivot.point, Vec3::new(1.5, 0.0, 0.0)));
}

#[test]
fn nothing_selected_resolves_to_origin() {
    let skeleton = rig("A", Affine3A::IDENTITY, &[("a", Vec3::ONE, false)]);
    let (scene, keys) = scene_of(vec![skeleton]);

    let pivot = resolve_pivot(&scene, &keys, false);
    assert_eq!(pivot.point, Vec3::ZERO);
    assert_eq!(pivot.source, PivotSource::Origin);

    let unknown = resolve_pivot(&scene, &[], true);
    assert_eq!(unknown.source, PivotSource::Origin);
}

// ============================================================================
// Snapshot
// ============================================================================

#[test]
fn snapshot_keys_by_skeleton_and_name() {
    let a = rig("A", Affine3A::IDENTITY, &[("root", Vec3::ZERO, true)]);
    let b = rig("B", Affine3A::IDENTITY, &[("root", Vec3::ZERO, true)]);
    let (mut scene, keys) = scene_of(vec![a, b]);
    scene.skeleton_mut(keys[0]).unwrap().bones[0].pose.translation = Vec3::X;
    scene.skeleton_mut(keys[1]).unwrap().bones[0].pose.translation = Vec3::Z;

    let snapshot = Snapshot::capture(&scene, &keys);
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot.skeletons(), keys.as_slice());
    assert_eq!(
        snapshot.get_key(&BoneKey::new(keys[0], "root")).unwrap().translation,
        Vec3::X
    );
    assert_eq!(snapshot.get(keys[1], "root").unwrap().translation, Vec3::Z);
}

#[test]
fn restore_skips_missing_bones() {
    let skeleton = rig(
        "A",
        Affine3A::IDENTITY,
        &[("keep", Vec3::ZERO, true), ("drop", Vec3::X, false)],
    );
    let (mut scene, keys) = scene_of(vec![skeleton]);
    let snapshot = Snapshot::capture(&scene, &keys);

    {
        let skeleton = scene.skeleton_mut(keys[0]).unwrap();
        skeleton.remove_bone("drop");
        skeleton.bones[0].pose.translation = Vec3::ONE;
    }

    assert_eq!(snapshot.restore_all(&mut scene), 1);
    let restored = scene.skeleton(keys[0]).unwrap().bone("keep").unwrap();
    assert_eq!(restored.pose.translation, Vec3::ZERO);
}
