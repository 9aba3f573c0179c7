// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration constants.

use crate::ui::status::ICON_SIZE;

// ==========================================================================
// Status Icon Defaults
// ==========================================================================

/// Default background behind status artwork, as `#rrggbb`.
pub const DEFAULT_STATUS_BACKGROUND: &str = "#ffffff";

/// Default edge length of a status icon in pixels.
pub const DEFAULT_ICON_SIZE: u32 = ICON_SIZE;

/// Smallest icon edge accepted from the settings file.
pub const MIN_ICON_SIZE: u32 = 8;

/// Largest icon edge accepted from the settings file.
pub const MAX_ICON_SIZE: u32 = 256;

// ==========================================================================
// Images Defaults
// ==========================================================================

/// Image directory used when neither `--images` nor `[images] base_dir` is set.
pub const DEFAULT_IMAGES_DIR: &str = "images";

const _: () = {
    assert!(MIN_ICON_SIZE <= DEFAULT_ICON_SIZE);
    assert!(DEFAULT_ICON_SIZE <= MAX_ICON_SIZE);
};
