// SPDX-License-Identifier: MPL-2.0
//! Image-bearing buttons.
//!
//! [`ButtonBehavior`] names the four interactive behaviours of a button:
//! hover highlight on and off, and wiring or unwiring its press message.
//! [`ImageButton`] implements them for ordinary clickable images; status
//! icons implement them as no-ops.

use crate::media::ImageData;
use crate::ui::styles;
use iced::widget::{button, image};
use iced::{Element, Length};

pub trait ButtonBehavior<Message> {
    /// Shows hover feedback.
    fn make_highlight(&mut self);

    /// Removes hover feedback.
    fn remove_highlight(&mut self);

    /// Emits `on_press` when the button is clicked.
    fn connect(&mut self, on_press: Message);

    /// Stops emitting press messages.
    fn disconnect(&mut self);
}

/// A clickable image with optional hover feedback.
#[derive(Debug, Clone)]
pub struct ImageButton<Message> {
    image: ImageData,
    size: f32,
    highlighted: bool,
    on_press: Option<Message>,
}

impl<Message: Clone> ImageButton<Message> {
    #[must_use]
    pub fn new(image: ImageData, size: f32) -> Self {
        Self {
            image,
            size,
            highlighted: false,
            on_press: None,
        }
    }

    pub fn set_image(&mut self, image: ImageData) {
        self.image = image;
    }

    #[must_use]
    pub fn image(&self) -> &ImageData {
        &self.image
    }

    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.on_press.is_some()
    }

    pub fn view<'a>(&self) -> Element<'a, Message>
    where
        Message: 'a,
    {
        let size = Length::Fixed(self.size);
        let picture = image(self.image.handle.clone()).width(size).height(size);

        button(picture)
            .padding(2)
            .on_press_maybe(self.on_press.clone())
            .style(styles::button::image_button(self.highlighted))
            .into()
    }
}

impl<Message: Clone> ButtonBehavior<Message> for ImageButton<Message> {
    fn make_highlight(&mut self) {
        self.highlighted = true;
    }

    fn remove_highlight(&mut self) {
        self.highlighted = false;
    }

    fn connect(&mut self, on_press: Message) {
        self.on_press = Some(on_press);
    }

    fn disconnect(&mut self) {
        self.on_press = None;
    }
}
