// SPDX-License-Identifier: MPL-2.0
//! Live status icons.
//!
//! - [`icon`]: the widget and its redraw policy
//! - [`composite`]: layered artwork drawn above the health image
//! - [`interpreter`]: telemetry to [`Health`] mapping
//! - [`health`]: health states and their library images

pub mod composite;
pub mod health;
pub mod icon;
pub mod interpreter;

pub use composite::{Corner, OverlayRule, StatusComposite, StatusPil, ICON_SIZE};
pub use health::Health;
pub use icon::{StatusIcon, DEFAULT_BACKGROUND};
pub use interpreter::{keyword_health, Interpreter, SeverityInterpreter};
