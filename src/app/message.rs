// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the preview application.

use super::config::Config;
use crate::logging::LogBroadcaster;
use crate::telemetry::Severity;
use std::path::PathBuf;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Report the motor keyword at the given severity.
    Observe(Severity),
    /// Report the motor keyword as no longer current.
    MarkStale,
    /// Flip the bypass keyword that drives the maintenance badge.
    ToggleBypass,
    ToggleMotorHold,
    /// Run the interpreter without a keyword.
    Reinterpret,
    GalleryPressed(String),
    GalleryHovered(String),
    GalleryLeft(String),
}

/// Runtime flags passed into the application at startup.
#[derive(Debug, Default)]
pub struct Flags {
    /// Image directory from `--images`; takes precedence over `[images] base_dir`.
    pub images_dir: Option<PathBuf>,
    pub config: Config,
    /// Warning produced while loading the settings file.
    pub config_warning: Option<String>,
    /// Present when logging was initialized.
    pub broadcaster: Option<LogBroadcaster>,
}
