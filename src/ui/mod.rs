// SPDX-License-Identifier: MPL-2.0
//! Widgets and styling for operator panels.
//!
//! - [`status`] - Status icons driven by telemetry and motor hold
//! - [`button`] - Image buttons and the interactive behaviours they share
//! - [`fonts`] - Named fonts for buttons, displays and inputs
//! - [`styles`] - Centralized styling
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod button;
pub mod design_tokens;
pub mod fonts;
pub mod status;
pub mod styles;
