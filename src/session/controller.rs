//! Session Controller
//!
//! [`PoseEditor`] owns the configuration and, while active, the single
//! [`Session`]. The host feeds it input events in program order; each call
//! runs to completion and returns a [`Transition`] describing the new state,
//! what happened to the event, and which host hooks to (un)register.
//!
//! ```text
//!            invoke / keymap             primary release
//!   Idle ─────────────────────► Active ──────────────────► Idle (Finished)
//!                                 │   secondary press, Escape,
//!                                 │   cloth toggled off
//!                                 └──────────────────────► Idle (Cancelled)
//! ```
//!
//! Every pointer or parameter change recomputes the whole pose from the
//! session snapshot, so event order never accumulates drift.

use glam::Vec2;
use smallvec::SmallVec;

use crate::apply::{ApplyContext, ApplyStats, TransformKind};
use crate::config::Configuration;
use crate::errors::{PoseEditError, Result, ValidationError};
use crate::host::{KeyframeRequest, KeyframeSink, PoseProvider};
use crate::input::{ButtonState, InputEvent};
use crate::overlay::Overlay;
use crate::pivot::resolve_pivot;
use crate::rig::{BoneKey, SkeletonKey};
use crate::session::command::Command;
use crate::session::keymap::Keymap;
use crate::session::state::Session;
use crate::snapshot::Snapshot;
use crate::view::ViewOrientation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorState {
    #[default]
    Idle,
    Active(TransformKind),
}

impl EditorState {
    #[inline]
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active(_))
    }
}

/// What the controller did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Consumed; the session keeps running.
    Running,
    /// The session was committed.
    Finished,
    /// The session was cancelled and the pose restored.
    Cancelled,
    /// Not consumed; the host should handle the event itself.
    PassThrough,
}

/// Requests to the host's viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEffect {
    /// Start calling [`PoseEditor::overlay`] every frame.
    RegisterOverlay,
    UnregisterOverlay,
}

pub type HostEffects = SmallVec<[HostEffect; 2]>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: EditorState,
    pub outcome: EventOutcome,
    pub effects: HostEffects,
}

impl Transition {
    #[must_use]
    pub fn new(state: EditorState, outcome: EventOutcome) -> Self {
        Self {
            state,
            outcome,
            effects: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn pass_through() -> Self {
        Self::new(EditorState::Idle, EventOutcome::PassThrough)
    }

    #[must_use]
    pub fn with_effect(mut self, effect: HostEffect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Whether the editor swallowed the event.
    #[inline]
    #[must_use]
    pub fn is_consumed(&self) -> bool {
        self.outcome != EventOutcome::PassThrough
    }
}

// ---------------------------------------------------------------------------
// PoseEditor
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct PoseEditor {
    config: Configuration,
    keymap: Keymap,
    session: Option<Session>,
    // Tracked while idle so keymap invokes start from the real pointer
    last_pointer: Vec2,
}

impl PoseEditor {
    #[must_use]
    pub fn new(config: Configuration) -> Self {
        Self {
            config: config.sanitized(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_keymap(mut self, keymap: Keymap) -> Self {
        self.keymap = keymap;
        self
    }

    #[must_use]
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Host-side settings access (UI panels, loading presets).
    ///
    /// Written values are clamped on the next session start or recompute.
    pub fn config_mut(&mut self) -> &mut Configuration {
        &mut self.config
    }

    fn clamp_config(&mut self) {
        self.config = std::mem::take(&mut self.config).sanitized();
    }

    #[must_use]
    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    #[must_use]
    pub fn state(&self) -> EditorState {
        match &self.session {
            Some(session) => EditorState::Active(session.kind),
            None => EditorState::Idle,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn last_pointer(&self) -> Vec2 {
        self.last_pointer
    }

    // ========================================================================
    // Idle → Active
    // ========================================================================

    /// Starts a session at the given pointer position.
    ///
    /// Refusals leave both the pose and the configuration untouched.
    pub fn invoke<P>(&mut self, kind: TransformKind, pointer: Vec2, pose: &P) -> Result<Transition>
    where
        P: PoseProvider + ?Sized,
    {
        if self.session.is_some() {
            return Err(PoseEditError::SessionActive);
        }

        let skeletons = self.validate(pose)?;
        self.clamp_config();
        let snapshot = Snapshot::capture(pose, &skeletons);
        let pivot = resolve_pivot(pose, &skeletons, self.config.use_active_as_center);

        log::info!(
            "{} started: {} skeleton(s), {} bone(s) tracked, pivot {:?}",
            kind.label(),
            skeletons.len(),
            snapshot.len(),
            pivot.source
        );

        self.last_pointer = pointer;
        self.session = Some(Session::new(kind, pointer, pivot, snapshot, skeletons));

        Ok(Transition::new(EditorState::Active(kind), EventOutcome::Running)
            .with_effect(HostEffect::RegisterOverlay))
    }

    fn validate<P>(&self, pose: &P) -> std::result::Result<Vec<SkeletonKey>, ValidationError>
    where
        P: PoseProvider + ?Sized,
    {
        if !pose.in_pose_mode() {
            return Err(ValidationError::NotInPoseMode);
        }
        if !self.config.enabled {
            return Err(ValidationError::FeatureDisabled);
        }

        let skeletons: Vec<SkeletonKey> = pose
            .selected_skeletons()
            .iter()
            .copied()
            .filter(|&key| pose.skeleton(key).is_some())
            .collect();

        if skeletons.is_empty() {
            return Err(ValidationError::NoSkeletonSelected);
        }
        Ok(skeletons)
    }

    // ========================================================================
    // Event dispatch
    // ========================================================================

    /// Handles one input event.
    ///
    /// While idle, only the invoke shortcuts are consumed. While active,
    /// every event is consumed, including ones with no effect.
    pub fn handle_event<P, K>(
        &mut self,
        event: &InputEvent,
        view: &ViewOrientation,
        pose: &mut P,
        sink: &mut K,
    ) -> Result<Transition>
    where
        P: PoseProvider + ?Sized,
        K: KeyframeSink + ?Sized,
    {
        let Some(kind) = self.session.as_ref().map(|s| s.kind) else {
            return self.handle_idle_event(event, &*pose);
        };

        let transition = match Command::from_event(kind, event) {
            Some(command) => self.handle_command(command, view, pose, sink),
            None => Transition::new(self.state(), EventOutcome::Running),
        };
        Ok(transition)
    }

    fn handle_idle_event<P>(&mut self, event: &InputEvent, pose: &P) -> Result<Transition>
    where
        P: PoseProvider + ?Sized,
    {
        match *event {
            InputEvent::PointerMoved { position } => self.last_pointer = position,
            InputEvent::PointerDelta { delta } => self.last_pointer += delta,
            InputEvent::Key {
                key,
                state: ButtonState::Pressed,
                modifiers,
            } => {
                if let Some(kind) = self.keymap.match_invoke(key, modifiers) {
                    return self.invoke(kind, self.last_pointer, pose);
                }
            }
            _ => {}
        }
        Ok(Transition::pass_through())
    }

    /// Applies one classified command to the active session.
    ///
    /// Returns a pass-through transition when idle.
    pub fn handle_command<P, K>(
        &mut self,
        command: Command,
        view: &ViewOrientation,
        pose: &mut P,
        sink: &mut K,
    ) -> Transition
    where
        P: PoseProvider + ?Sized,
        K: KeyframeSink + ?Sized,
    {
        let Some(session) = self.session.as_mut() else {
            return Transition::pass_through();
        };
        let rig_count = session.skeletons.len();

        match command {
            Command::Cancel => return self.cancel(pose),
            Command::Commit => return self.commit(&*pose, sink),

            Command::PointerTo(position) => session.pointer = position,
            Command::PointerBy(delta) => session.pointer += delta,

            Command::Focus(parameter) => self.config.focused_parameter = parameter,
            Command::CycleFocus => {
                self.config.focused_parameter = self.config.focused_parameter.next();
            }
            Command::ToggleActiveCenter => {
                self.config.use_active_as_center = !self.config.use_active_as_center;
            }
            Command::ToggleSelectedOnly => {
                self.config.affect_selected_only = !self.config.affect_selected_only;
            }
            Command::ToggleCloth => {
                if self.config.simulation_cloth {
                    log::debug!("Cloth mode switched off, cancelling session");
                    return self.cancel(pose);
                }
                self.config.simulation_cloth = true;
            }
            Command::ToggleInvert => {
                if self.config.simulation_cloth {
                    self.config.invert_falloff = !self.config.invert_falloff;
                }
            }
            Command::Scroll(direction) => {
                let parameter = self.config.focused_parameter;
                let value = self.config.scroll(direction);
                log::debug!("{} → {value:.4}", parameter.label());
            }
        }

        if command.is_parameter_change() {
            log::debug!("Parameter change: {command:?}");
        }

        // Selection-restricted editing is not supported across rigs
        if rig_count > 1 && self.config.affect_selected_only {
            self.config.affect_selected_only = false;
        }

        self.recompute(view, pose);
        Transition::new(self.state(), EventOutcome::Running)
    }

    // ========================================================================
    // Recompute
    // ========================================================================

    /// Rebuilds the pose from the snapshot for the current pointer and
    /// parameters. No-op while idle.
    pub fn recompute<P>(&mut self, view: &ViewOrientation, pose: &mut P) -> ApplyStats
    where
        P: PoseProvider + ?Sized,
    {
        self.clamp_config();
        let Some(session) = self.session.as_mut() else {
            return ApplyStats::default();
        };

        session.pivot = resolve_pivot(&*pose, &session.skeletons, self.config.use_active_as_center);

        let ctx = ApplyContext {
            pivot: session.pivot.point,
            pointer_delta: session.pointer_delta(),
            config: &self.config,
            view,
            snapshot: &session.snapshot,
        };
        let stats = session.kind.apply(&ctx, pose);

        log::debug!(
            "{}: delta {:?}, pivot {:?} ({:?}), {:?}",
            session.kind.label(),
            ctx.pointer_delta,
            ctx.pivot,
            session.pivot.source,
            stats
        );
        stats
    }

    // ========================================================================
    // Active → Idle
    // ========================================================================

    /// Restores every tracked bone from the snapshot and ends the session.
    pub fn cancel<P>(&mut self, pose: &mut P) -> Transition
    where
        P: PoseProvider + ?Sized,
    {
        let Some(session) = self.session.take() else {
            return Transition::pass_through();
        };

        let restored = session.snapshot.restore_all(pose);
        self.config.clear_session_toggles();

        log::info!("{} cancelled, {restored} bone(s) restored", session.kind.label());
        Self::ended(EventOutcome::Cancelled)
    }

    /// Records a keyframe for every bone of every affected skeleton at the
    /// host's current frame and ends the session.
    pub fn commit<P, K>(&mut self, pose: &P, sink: &mut K) -> Transition
    where
        P: PoseProvider + ?Sized,
        K: KeyframeSink + ?Sized,
    {
        let Some(session) = self.session.take() else {
            return Transition::pass_through();
        };

        let frame = pose.current_frame();
        let mut recorded = 0usize;

        for &key in &session.skeletons {
            let Some(skeleton) = pose.skeleton(key) else {
                log::debug!("Commit: skeleton {key:?} no longer exists, skipping");
                continue;
            };
            for bone in &skeleton.bones {
                sink.record(KeyframeRequest {
                    bone: BoneKey::new(key, &bone.name),
                    skeleton_id: skeleton.id,
                    frame,
                    translation: bone.pose.translation,
                    rotation: bone.pose.rotation,
                    scale: bone.pose.scale,
                });
                recorded += 1;
            }
        }

        self.config.clear_session_toggles();

        log::info!(
            "{} finished, {recorded} keyframe(s) at frame {frame}",
            session.kind.label()
        );
        Self::ended(EventOutcome::Finished)
    }

    fn ended(outcome: EventOutcome) -> Transition {
        Transition::new(EditorState::Idle, outcome).with_effect(HostEffect::UnregisterOverlay)
    }

    // ========================================================================
    // Host surfaces
    // ========================================================================

    /// Influence-area overlay for the current frame, `None` when idle or
    /// when the feature is disabled.
    #[must_use]
    pub fn overlay(&self, view: &ViewOrientation) -> Option<Overlay> {
        if !self.config.enabled {
            return None;
        }
        let session = self.session.as_ref()?;
        let config = self.config.clone().sanitized();
        Some(Overlay::build(session.pivot.point, &config, view))
    }

    /// Help lines for a host panel.
    #[must_use]
    pub fn shortcut_hints(&self) -> Vec<String> {
        let mut hints = vec![
            format!("Change on wheel: {}", self.config.focused_parameter.label()),
            "Ctrl + G - Proportional move".to_owned(),
            "Ctrl + R - Proportional rotate".to_owned(),
            "1 - Set radius mode".to_owned(),
            "2 - Set falloff mode".to_owned(),
            "3 - Set power mode".to_owned(),
            "Tab - Cycle wheel parameter".to_owned(),
            "4 - Use active as center".to_owned(),
            "5 - Affect only selected bones".to_owned(),
        ];

        if self.state() == EditorState::Active(TransformKind::Translate) {
            hints.push("6 - Use simulation cloth (only within move)".to_owned());
            if self.config.simulation_cloth {
                hints.push("7 - Invert falloff (only within simulation cloth)".to_owned());
            }
        }
        hints
    }
}
