//! Headless Proportional Move Example
//!
//! Builds a small bone chain in memory, runs a scripted translate session
//! through the editor and prints the resulting pose and keyframes.
//!
//! Script:
//! - Ctrl+G: start a proportional move at the pointer
//! - Scroll up twice: widen the radius
//! - Pointer drag: move the chain
//! - 6: cloth mode, bones swing to follow
//! - Left click: commit and keyframe
//!
//! Run with `RUST_LOG=debug` to see every recomputation.

use anyhow::Result;
use glam::{Affine3A, Vec2, Vec3};
use proportional_pose::input::{ButtonState, InputEvent, Key, Modifiers, MouseButton, ScrollDirection};
use proportional_pose::rig::{Bone, EditMode, PoseScene, Skeleton};
use proportional_pose::{Configuration, PoseEditor, PoseProvider, RecordedKeyframes, ViewOrientation};

fn build_chain() -> Skeleton {
    let mut skeleton = Skeleton::new("Tail", Affine3A::IDENTITY);
    for i in 0..6 {
        let head = Vec3::new(0.0, i as f32 * 0.2, 0.0);
        let bone = Bone::new(&format!("tail.{i:03}"), head, head + Vec3::new(0.0, 0.2, 0.0))
            .with_selected(i == 0);
        skeleton.add_bone(bone);
    }
    skeleton.set_active("tail.000");
    skeleton
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut scene = PoseScene::new();
    scene.mode = EditMode::Pose;
    scene.current_frame = 12;
    let key = scene.add_skeleton(build_chain());
    scene.select(key);

    let mut editor = PoseEditor::new(Configuration {
        radius: 0.8,
        ..Configuration::enabled()
    });
    let mut sink = RecordedKeyframes::new();
    let view = ViewOrientation::looking_at(Vec3::new(0.0, 0.5, 5.0), Vec3::new(0.0, 0.5, 0.0), Vec3::Y);

    let mut script = vec![
        InputEvent::pointer(400.0, 300.0),
        InputEvent::Key {
            key: Key::G,
            state: ButtonState::Pressed,
            modifiers: Modifiers::CTRL,
        },
        InputEvent::Scroll {
            direction: ScrollDirection::Up,
        },
        InputEvent::Scroll {
            direction: ScrollDirection::Up,
        },
    ];
    script.extend((1..=8).map(|step| InputEvent::PointerDelta {
        delta: Vec2::new(6.0, -2.0) * step as f32,
    }));
    script.push(InputEvent::key_press(Key::Key6));
    script.push(InputEvent::button_press(MouseButton::Left));
    script.push(InputEvent::button_release(MouseButton::Left));

    for event in &script {
        let transition = editor.handle_event(event, &view, &mut scene, &mut sink)?;
        for effect in &transition.effects {
            println!("host effect: {effect:?}");
        }
        if let Some(overlay) = editor.overlay(&view) {
            log::debug!(
                "overlay: {} rings, {} vertices",
                overlay.rings.len(),
                overlay.vertices().len()
            );
        }
    }

    let skeleton = scene
        .skeleton(key)
        .ok_or_else(|| anyhow::anyhow!("skeleton disappeared"))?;
    println!("\nFinal pose of '{}':", skeleton.name);
    for bone in &skeleton.bones {
        println!(
            "  {:<10} translation {:.4?}  rotation {:.4?}",
            bone.name,
            bone.pose.translation,
            bone.pose.rotation_quat()
        );
    }

    println!("\n{} keyframe(s) recorded:", sink.len());
    for request in &sink.requests {
        println!("  frame {:>3}  {}", request.frame, request.bone.name);
    }

    Ok(())
}
