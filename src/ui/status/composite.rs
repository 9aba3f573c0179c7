// SPDX-License-Identifier: MPL-2.0
//! Layered status artwork.
//!
//! A composite owns every layer a status icon draws above its health image:
//! keyword-driven overlays and the motor-hold lock. Status icons require the
//! full [`StatusComposite`] capability set, motor hold included.

use crate::error::{Error, Result};
use crate::media::catalog;
use crate::media::{ImageData, ImageLibrary};
use crate::telemetry::{Keyword, ValueSlice};
use image_rs::imageops::{self, FilterType};
use image_rs::RgbaImage;
use std::rc::Rc;

/// Edge length of rendered status icons, in pixels.
pub const ICON_SIZE: u32 = 24;

pub trait StatusComposite {
    /// Ingests a keyword; returns true if the rendered output changes.
    fn update(&mut self, keyword: &Keyword, slice: Option<&ValueSlice>) -> bool;

    /// Sets the motor-hold overlay; returns true if the rendered output changes.
    fn set_motor_hold(&mut self, hold: bool) -> bool;

    /// Draws the current layers on top of `base`.
    fn render(&self, base: &ImageData) -> Result<ImageData>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

impl Corner {
    /// Top-left position of a `badge`-sized square inside a `size` square.
    fn origin(self, size: u32, badge: u32) -> (i64, i64) {
        let far = i64::from(size.saturating_sub(badge));
        match self {
            Corner::TopLeft => (0, 0),
            Corner::TopRight => (far, 0),
            Corner::BottomLeft => (0, far),
            Corner::BottomRight => (far, far),
        }
    }
}

/// Shows library image `overlay` in `corner` while value `index` of
/// `keyword` is truthy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayRule {
    pub keyword: String,
    pub index: usize,
    pub overlay: String,
    pub corner: Corner,
}

impl OverlayRule {
    #[must_use]
    pub fn new(
        keyword: impl Into<String>,
        index: usize,
        overlay: impl Into<String>,
        corner: Corner,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            index,
            overlay: overlay.into(),
            corner,
        }
    }
}

/// Default composite: health image plus corner badges.
#[derive(Debug)]
pub struct StatusPil {
    library: Rc<ImageLibrary>,
    size: u32,
    rules: Vec<OverlayRule>,
    active: Vec<bool>,
    motor_hold: bool,
}

impl StatusPil {
    #[must_use]
    pub fn new(library: Rc<ImageLibrary>) -> Self {
        Self::with_size(library, ICON_SIZE)
    }

    #[must_use]
    pub fn with_size(library: Rc<ImageLibrary>, size: u32) -> Self {
        Self {
            library,
            size: size.max(1),
            rules: Vec::new(),
            active: Vec::new(),
            motor_hold: false,
        }
    }

    /// Adds an overlay rule, initially inactive.
    #[must_use]
    pub fn with_rule(mut self, rule: OverlayRule) -> Self {
        self.rules.push(rule);
        self.active.push(false);
        self
    }

    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[must_use]
    pub fn motor_hold(&self) -> bool {
        self.motor_hold
    }

    /// Overlay names currently drawn, in drawing order.
    pub fn active_overlays(&self) -> impl Iterator<Item = &str> {
        self.rules
            .iter()
            .zip(&self.active)
            .filter(|(_, on)| **on)
            .map(|(rule, _)| rule.overlay.as_str())
    }

    fn badge(&self, name: &str) -> Result<RgbaImage> {
        let badge_size = (self.size / 2).max(1);
        let image = self.library.get(name)?;
        let raster = to_raster(&image)?;
        Ok(imageops::resize(
            &raster,
            badge_size,
            badge_size,
            FilterType::Triangle,
        ))
    }
}

fn to_raster(image: &ImageData) -> Result<RgbaImage> {
    image
        .to_rgba_image()
        .ok_or_else(|| Error::Io("image buffer does not match its dimensions".into()))
}

impl StatusComposite for StatusPil {
    fn update(&mut self, keyword: &Keyword, slice: Option<&ValueSlice>) -> bool {
        let mut changed = false;
        for (rule, active) in self.rules.iter().zip(self.active.iter_mut()) {
            if rule.keyword != keyword.name || slice.is_some_and(|s| !s.contains(rule.index)) {
                continue;
            }
            let on = keyword.is_current
                && keyword
                    .values
                    .get(rule.index)
                    .is_some_and(|kv| kv.value.is_truthy());
            if *active != on {
                *active = on;
                changed = true;
            }
        }
        changed
    }

    fn set_motor_hold(&mut self, hold: bool) -> bool {
        if self.motor_hold == hold {
            return false;
        }
        self.motor_hold = hold;
        true
    }

    fn render(&self, base: &ImageData) -> Result<ImageData> {
        let mut canvas = imageops::resize(
            &to_raster(base)?,
            self.size,
            self.size,
            FilterType::Triangle,
        );

        let badges = self
            .rules
            .iter()
            .zip(&self.active)
            .filter(|(_, on)| **on)
            .map(|(rule, _)| (rule.overlay.as_str(), rule.corner));
        let hold = self
            .motor_hold
            .then_some((catalog::LOCKED, Corner::BottomRight));

        for (name, corner) in badges.chain(hold) {
            let badge = self.badge(name)?;
            let (x, y) = corner.origin(self.size, badge.width());
            imageops::overlay(&mut canvas, &badge, x, y);
        }

        Ok(ImageData::from_rgba_image(canvas))
    }
}
