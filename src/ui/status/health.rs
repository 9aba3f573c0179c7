// SPDX-License-Identifier: MPL-2.0
//! Health states a status icon can show.

use crate::media::catalog;
use crate::telemetry::Severity;

/// Overall health, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Health {
    Ok,
    #[default]
    Unknown,
    Warning,
    Error,
    CantProceed,
}

impl Health {
    /// Library name of the image shown for this state.
    #[must_use]
    pub fn image_name(self) -> &'static str {
        match self {
            Health::Ok => catalog::OK,
            Health::Unknown => catalog::UNKNOWN,
            Health::Warning => catalog::WARNING,
            Health::Error => catalog::ERROR,
            Health::CantProceed => catalog::CANT_PROCEED,
        }
    }
}

impl From<Severity> for Health {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Normal => Health::Ok,
            Severity::Warning => Health::Warning,
            Severity::Error => Health::Error,
            Severity::Critical => Health::CantProceed,
        }
    }
}
