// SPDX-License-Identifier: MPL-2.0
//! Named fonts for operator panels.
//!
//! Three roles cover every text element: button captions, read-only
//! displays of telemetry values, and editable inputs. Widgets ask the
//! registry for a role instead of hard-coding a font.

use crate::ui::design_tokens::typography;
use iced::font::{Family, Weight};
use iced::widget::{text, Text};
use iced::Font;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontRole {
    Button,
    Display,
    Input,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamily {
    #[default]
    SansSerif,
    Serif,
    Monospace,
}

impl From<FontFamily> for Family {
    fn from(family: FontFamily) -> Self {
        match family {
            FontFamily::SansSerif => Family::SansSerif,
            FontFamily::Serif => Family::Serif,
            FontFamily::Monospace => Family::Monospace,
        }
    }
}

/// Persisted description of one font role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FontSettings {
    #[serde(default)]
    pub family: FontFamily,
    pub size: f32,
    #[serde(default)]
    pub bold: bool,
}

impl FontSettings {
    #[must_use]
    pub const fn new(family: FontFamily, size: f32, bold: bool) -> Self {
        Self { family, size, bold }
    }
}

/// A resolved font plus the size to render it at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamedFont {
    pub font: Font,
    pub size: f32,
}

impl From<FontSettings> for NamedFont {
    fn from(settings: FontSettings) -> Self {
        let weight = if settings.bold {
            Weight::Bold
        } else {
            Weight::Normal
        };
        Self {
            font: Font {
                family: settings.family.into(),
                weight,
                ..Font::DEFAULT
            },
            size: settings.size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE),
        }
    }
}

pub const MIN_FONT_SIZE: f32 = 6.0;
pub const MAX_FONT_SIZE: f32 = 72.0;

pub const DEFAULT_BUTTON_FONT: FontSettings =
    FontSettings::new(FontFamily::SansSerif, typography::BODY, false);
pub const DEFAULT_DISPLAY_FONT: FontSettings =
    FontSettings::new(FontFamily::SansSerif, typography::BODY_LG, true);
pub const DEFAULT_INPUT_FONT: FontSettings =
    FontSettings::new(FontFamily::Monospace, typography::BODY, false);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontRegistry {
    button: NamedFont,
    display: NamedFont,
    input: NamedFont,
}

impl Default for FontRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_BUTTON_FONT, DEFAULT_DISPLAY_FONT, DEFAULT_INPUT_FONT)
    }
}

impl FontRegistry {
    #[must_use]
    pub fn new(button: FontSettings, display: FontSettings, input: FontSettings) -> Self {
        Self {
            button: button.into(),
            display: display.into(),
            input: input.into(),
        }
    }

    #[must_use]
    pub fn get(&self, role: FontRole) -> NamedFont {
        match role {
            FontRole::Button => self.button,
            FontRole::Display => self.display,
            FontRole::Input => self.input,
        }
    }

    /// A text widget styled for `role`.
    pub fn text<'a>(&self, role: FontRole, content: impl text::IntoFragment<'a>) -> Text<'a> {
        let named = self.get(role);
        text(content).font(named.font).size(named.size)
    }
}
