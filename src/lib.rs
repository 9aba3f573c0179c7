// SPDX-License-Identifier: MPL-2.0
//! `iced_status` provides status artwork for control-system operator panels
//! built with the Iced GUI framework.
//!
//! An [`media::ImageLibrary`] maps logical image names to files and decodes
//! them lazily; a [`ui::status::StatusIcon`] turns telemetry keywords and a
//! motor-hold flag into the image it displays.

#![doc(html_root_url = "https://docs.rs/iced_status/0.1.0")]

pub mod app;
pub mod error;
pub mod logging;
pub mod media;
pub mod telemetry;
pub mod ui;
