// SPDX-License-Identifier: MPL-2.0
//! Status icon widget.
//!
//! A [`StatusIcon`] shows one image on a flat, non-interactive button. Two
//! independent inputs decide that image:
//!
//! | Axis | Source | Drawn by |
//! |------|--------|----------|
//! | Health (ok / warning / error / unknown / cant_proceed) | [`Interpreter`] | base library image |
//! | Motion gating (held / free) | motor-hold flag | [`StatusComposite`] overlay |
//!
//! Redraws are collapsed: an update that changes neither the composite nor
//! the selected health image leaves the displayed image untouched.

use super::composite::{StatusComposite, StatusPil, ICON_SIZE};
use super::health::Health;
use super::interpreter::{Interpreter, SeverityInterpreter};
use crate::error::Result;
use crate::media::catalog;
use crate::media::{ImageData, ImageLibrary};
use crate::telemetry::{Keyword, ValueSlice};
use crate::ui::button::ButtonBehavior;
use crate::ui::styles;
use iced::widget::{button, image};
use iced::{Color, Element, Length};
use std::fmt;
use std::rc::Rc;

/// Default background behind status artwork.
pub const DEFAULT_BACKGROUND: Color = Color::WHITE;

pub struct StatusIcon<C = StatusPil, I = SeverityInterpreter> {
    library: Rc<ImageLibrary>,
    composite: C,
    interpreter: I,
    background: Color,
    motor_hold: Option<bool>,
    displayed: ImageData,
    redraws: u64,
    /// Set while an accepted change has not reached the displayed image.
    redraw_owed: bool,
}

impl<C, I: Interpreter> fmt::Debug for StatusIcon<C, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatusIcon")
            .field("health", &self.interpreter.health())
            .field("motor_hold", &self.motor_hold)
            .field("redraws", &self.redraws)
            .finish()
    }
}

impl StatusIcon {
    /// Icon backed by the default composite and interpreter.
    pub fn with_defaults(library: Rc<ImageLibrary>, background: Color) -> Result<Self> {
        let composite = StatusPil::new(Rc::clone(&library));
        Self::new(library, composite, SeverityInterpreter::new(), background)
    }
}

impl<C: StatusComposite, I: Interpreter> StatusIcon<C, I> {
    /// Creates an icon showing the library's `unknown` image.
    ///
    /// # Errors
    ///
    /// Fails if `unknown` is not registered or cannot be decoded.
    pub fn new(
        library: Rc<ImageLibrary>,
        composite: C,
        interpreter: I,
        background: Color,
    ) -> Result<Self> {
        let unknown = library.get(catalog::UNKNOWN)?;
        let mut icon = Self {
            library,
            composite,
            interpreter,
            background,
            motor_hold: None,
            displayed: unknown.clone(),
            redraws: 0,
            redraw_owed: false,
        };
        icon.set_image(unknown);
        Ok(icon)
    }

    /// Pushes a motor-hold value into the composite.
    ///
    /// The value is remembered only when the composite reports a visible
    /// change. Does not redraw; call [`StatusIcon::redraw`] afterwards.
    pub fn set_motor_hold(&mut self, hold: bool) -> bool {
        let changed = self.composite.set_motor_hold(hold);
        if changed {
            self.motor_hold = Some(hold);
        }
        changed
    }

    /// Applies an observation and redraws once if anything visible changed.
    ///
    /// The keyword (when present) goes to the composite, then the interpreter
    /// always runs, even without a keyword. A redraw that failed earlier is
    /// retried here even when nothing new changed. Returns whether a redraw
    /// happened.
    pub fn update(
        &mut self,
        keyword: Option<&Keyword>,
        slice: Option<&ValueSlice>,
    ) -> Result<bool> {
        let composite_changed = keyword.is_some_and(|kw| self.composite.update(kw, slice));
        let health_changed = self.interpreter.interpret(keyword, slice);

        if composite_changed || health_changed || self.redraw_owed {
            self.redraw_owed = true;
            self.redraw()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Renders the composite over the current health image and displays it.
    pub fn redraw(&mut self) -> Result<()> {
        let health = self.interpreter.health();
        let base = self.library.get(health.image_name())?;
        let rendered = self.composite.render(&base)?;
        tracing::trace!(?health, motor_hold = ?self.motor_hold, "status icon redraw");
        self.set_image(rendered);
        self.redraw_owed = false;
        Ok(())
    }

    /// Displays `image` directly, bypassing the composite.
    pub fn set_image(&mut self, image: ImageData) {
        self.displayed = image;
        self.redraws += 1;
    }

    /// Displays the library image registered under `name`.
    pub fn show(&mut self, name: &str) -> Result<()> {
        let image = self.library.get(name)?;
        self.set_image(image);
        Ok(())
    }

    /// Last motor-hold value the composite accepted; `None` until one was.
    #[must_use]
    pub fn motor_hold(&self) -> Option<bool> {
        self.motor_hold
    }

    #[must_use]
    pub fn health(&self) -> Health {
        self.interpreter.health()
    }

    #[must_use]
    pub fn displayed(&self) -> &ImageData {
        &self.displayed
    }

    /// Number of images pushed to the button so far.
    #[must_use]
    pub fn redraw_count(&self) -> u64 {
        self.redraws
    }

    #[must_use]
    pub fn background(&self) -> Color {
        self.background
    }

    #[must_use]
    pub fn composite(&self) -> &C {
        &self.composite
    }

    /// Flat button without a press handler, so it never looks interactive.
    pub fn view<'a, Message: Clone + 'a>(&self) -> Element<'a, Message> {
        let size = Length::Fixed(ICON_SIZE as f32);
        let picture = image(self.displayed.handle.clone())
            .width(size)
            .height(size);

        button(picture)
            .padding(0)
            .style(styles::button::status_icon(self.background))
            .into()
    }
}

/// Status icons are ornamental: every interactive behaviour is a no-op.
impl<C, I, Message> ButtonBehavior<Message> for StatusIcon<C, I> {
    fn make_highlight(&mut self) {}

    fn remove_highlight(&mut self) {}

    fn connect(&mut self, _on_press: Message) {}

    fn disconnect(&mut self) {}
}
