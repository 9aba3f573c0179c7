// SPDX-License-Identifier: MPL-2.0
//! Built-in image catalog.
//!
//! Logical names the image library registers on startup, each mapped to a
//! file relative to the library's base directory. Names describe the
//! meaning of the image (`path_block`), file names describe its look
//! (`path-arrow-stop.png`).

/// A logical image name and the file it resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub file: &'static str,
}

const fn entry(name: &'static str, file: &'static str) -> CatalogEntry {
    CatalogEntry { name, file }
}

// =============================================================================
// Status
// =============================================================================

pub const OK: &str = "ok";
pub const WARNING: &str = "warning";
pub const CANT_PROCEED: &str = "cant_proceed";
pub const ERROR: &str = "error";
pub const UNKNOWN: &str = "unknown";
pub const LOCKED: &str = "locked";
pub const MAINTENANCE: &str = "maintenance";

/// Every entry seeded into a fresh library.
pub const CATALOG: &[CatalogEntry] = &[
    entry(OK, "ok.png"),
    entry(WARNING, "warning.png"),
    entry(CANT_PROCEED, "cant_proceed.png"),
    entry(ERROR, "error.png"),
    entry(UNKNOWN, "unknown.png"),
    entry(LOCKED, "locked.png"),
    entry(MAINTENANCE, "gears.png"),
    // Actions
    entry("apply", "apply.png"),
    entry("checked", "checked.png"),
    entry("up", "up.png"),
    entry("down", "down.png"),
    entry("refresh", "refresh.png"),
    // Motion
    entry("forward_small", "forward-small.png"),
    entry("forward_large", "forward-large.png"),
    entry("reverse_small", "reverse-small.png"),
    entry("reverse_large", "reverse-large.png"),
    // Indicators
    entry("bulb_on", "bulb-on.png"),
    entry("bulb_off", "bulb-off.png"),
    entry("path_allow", "path-arrow.png"),
    entry("path_block", "path-arrow-stop.png"),
];
