//! Error Types
//!
//! This module defines the error types surfaced by the pose editor.
//!
//! # Overview
//!
//! [`ValidationError`] covers the preconditions checked when a session is
//! invoked. [`PoseEditError`] wraps it together with the remaining failure
//! modes (re-invocation, configuration persistence).
//!
//! None of these are fatal to the host: a refused invoke leaves the pose and
//! the configuration untouched.
//!
//! # Usage
//!
//! ```rust,ignore
//! use proportional_pose::errors::{PoseEditError, Result, ValidationError};
//!
//! match editor.invoke(TransformKind::Translate, pointer, &scene) {
//!     Err(PoseEditError::Validation(ValidationError::NotInPoseMode)) => { /* report */ }
//!     _ => {}
//! }
//! ```

use thiserror::Error;

/// Preconditions that must hold before a session may start.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The host is not in pose-editing mode.
    #[error("Must be in pose mode")]
    NotInPoseMode,

    /// The proportional edit feature flag is off.
    #[error("Enable proportional editing first")]
    FeatureDisabled,

    /// No skeleton is part of the current selection.
    #[error("No skeletons selected")]
    NoSkeletonSelected,
}

/// The main error type for the pose editor.
#[derive(Error, Debug)]
pub enum PoseEditError {
    // ========================================================================
    // Session Errors
    // ========================================================================
    /// Invoke was refused because a precondition failed.
    #[error("Invoke refused: {0}")]
    Validation(#[from] ValidationError),

    /// A session is already running; only one may be active at a time.
    #[error("A proportional edit session is already active")]
    SessionActive,

    // ========================================================================
    // Configuration Persistence Errors
    // ========================================================================
    /// File I/O error while loading or saving the configuration.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Alias for `Result<T, PoseEditError>`.
pub type Result<T> = std::result::Result<T, PoseEditError>;
