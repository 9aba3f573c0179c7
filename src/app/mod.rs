// SPDX-License-Identifier: MPL-2.0
//! Preview application.
//!
//! Seeds an image library from the configured directory, shows a live
//! status icon driven by simulated telemetry, a gallery of every registered
//! image as hover-aware image buttons, and the most recent log records.

pub mod config;
mod message;
pub mod paths;

pub use message::{Flags, Message};

use crate::error::Result;
use crate::logging::{LogBroadcaster, Subscription};
use crate::media::ImageLibrary;
use crate::telemetry::{Keyword, KeywordValue, Severity, Value};
use crate::ui::button::{ButtonBehavior, ImageButton};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::fonts::{FontRegistry, FontRole};
use crate::ui::status::{
    Corner, OverlayRule, SeverityInterpreter, StatusIcon, StatusPil,
};
use crate::ui::styles;
use iced::widget::{button, column, mouse_area, row, scrollable, Column, Row};
use iced::{window, Element, Task};
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::Level;

/// Keyword the preview reports motor health on.
pub const MOTOR_KEYWORD: &str = "motor_status";
/// Keyword whose first value turns the maintenance badge on.
pub const BYPASS_KEYWORD: &str = "bypass";

const LOG_LINES: usize = 8;

pub const WINDOW_DEFAULT_WIDTH: u32 = 640;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 480;

struct Gallery {
    buttons: Vec<(String, ImageButton<Message>)>,
}

impl Gallery {
    fn from_library(library: &ImageLibrary) -> Self {
        let buttons = library
            .names()
            .into_iter()
            .filter_map(|name| match library.get(&name) {
                Ok(image) => {
                    let mut button = ImageButton::new(image, sizing::ICON_LG);
                    button.connect(Message::GalleryPressed(name.clone()));
                    Some((name, button))
                }
                Err(err) => {
                    tracing::warn!(%name, %err, "skipping gallery image");
                    None
                }
            })
            .collect();
        Self { buttons }
    }

    fn find(&mut self, name: &str) -> Option<&mut ImageButton<Message>> {
        self.buttons
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, button)| button)
    }
}

/// Everything that exists only when the image directory could be loaded.
struct Panel {
    status: StatusIcon,
    gallery: Gallery,
}

impl Panel {
    fn new(library: Rc<ImageLibrary>, config: &config::Config) -> Result<Self> {
        let composite = StatusPil::with_size(Rc::clone(&library), config.status.icon_size())
            .with_rule(OverlayRule::new(
                BYPASS_KEYWORD,
                0,
                crate::media::catalog::MAINTENANCE,
                Corner::TopLeft,
            ));
        let status = StatusIcon::new(
            Rc::clone(&library),
            composite,
            SeverityInterpreter::new(),
            config.status.background_color(),
        )?;
        let gallery = Gallery::from_library(&library);
        Ok(Self { status, gallery })
    }
}

/// Root state of the preview window.
pub struct App {
    panel: Option<Panel>,
    load_error: Option<String>,
    config_warning: Option<String>,
    fonts: FontRegistry,
    bypass: bool,
    motor_hold: bool,
    last_pressed: Option<String>,
    broadcaster: Option<LogBroadcaster>,
    warnings: Arc<AtomicUsize>,
    _warning_subscription: Option<Subscription>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("loaded", &self.panel.is_some())
            .field("bypass", &self.bypass)
            .field("motor_hold", &self.motor_hold)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let Flags {
            images_dir,
            config,
            config_warning,
            broadcaster,
        } = flags;

        if let Some(warning) = &config_warning {
            tracing::warn!(%warning, "using default settings");
        }

        let warnings = Arc::new(AtomicUsize::new(0));
        let warning_subscription = broadcaster.as_ref().map(|b| {
            let counter = Arc::clone(&warnings);
            b.subscribe(move |record| {
                if record.level <= Level::WARN {
                    counter.fetch_add(1, Ordering::Relaxed);
                }
            })
        });

        let base_dir = images_dir.unwrap_or_else(|| config.images.base_dir());
        let (panel, load_error) = match ImageLibrary::seeded(&base_dir)
            .and_then(|library| Panel::new(Rc::new(library), &config))
        {
            Ok(panel) => (Some(panel), None),
            Err(err) => {
                tracing::error!(base_dir = %base_dir.display(), %err, "cannot load status images");
                (None, Some(err.to_string()))
            }
        };

        let app = Self {
            panel,
            load_error,
            config_warning,
            fonts: config.fonts.registry(),
            bypass: false,
            motor_hold: false,
            last_pressed: None,
            broadcaster,
            warnings,
            _warning_subscription: warning_subscription,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        match &self.panel {
            Some(panel) => format!("Status preview - {:?}", panel.status.health()),
            None => "Status preview".to_string(),
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let Some(panel) = self.panel.as_mut() else {
            return Task::none();
        };

        let result = match message {
            Message::Observe(severity) => {
                let keyword = Keyword::new(
                    MOTOR_KEYWORD,
                    vec![KeywordValue::new(Value::Int(1), severity)],
                );
                panel.status.update(Some(&keyword), None).map(|_| ())
            }
            Message::MarkStale => {
                let keyword = Keyword::stale(MOTOR_KEYWORD, Vec::new());
                panel.status.update(Some(&keyword), None).map(|_| ())
            }
            Message::ToggleBypass => {
                self.bypass = !self.bypass;
                let keyword = Keyword::new(
                    BYPASS_KEYWORD,
                    vec![KeywordValue::normal(Value::Bool(self.bypass))],
                );
                panel.status.update(Some(&keyword), None).map(|_| ())
            }
            Message::ToggleMotorHold => {
                self.motor_hold = !self.motor_hold;
                if panel.status.set_motor_hold(self.motor_hold) {
                    panel.status.redraw()
                } else {
                    Ok(())
                }
            }
            Message::Reinterpret => panel.status.update(None, None).map(|_| ()),
            Message::GalleryPressed(name) => {
                tracing::info!(%name, "gallery image pressed");
                self.last_pressed = Some(name);
                Ok(())
            }
            Message::GalleryHovered(name) => {
                if let Some(button) = panel.gallery.find(&name) {
                    button.make_highlight();
                }
                Ok(())
            }
            Message::GalleryLeft(name) => {
                if let Some(button) = panel.gallery.find(&name) {
                    button.remove_highlight();
                }
                Ok(())
            }
        };

        if let Err(err) = result {
            tracing::error!(%err, "status update failed");
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let header = self.fonts.text(FontRole::Display, "Status preview");

        let body: Element<'_, Message> = match (&self.panel, &self.load_error) {
            (Some(panel), _) => self.panel_view(panel),
            (None, error) => self
                .fonts
                .text(
                    FontRole::Display,
                    error.clone().unwrap_or_else(|| "no images".to_string()),
                )
                .into(),
        };

        let mut content = column![header, body].spacing(spacing::MD).padding(spacing::MD);
        if let Some(warning) = &self.config_warning {
            content = content.push(self.fonts.text(FontRole::Input, warning.clone()));
        }
        content.push(self.log_view()).into()
    }

    fn panel_view<'a>(&'a self, panel: &'a Panel) -> Element<'a, Message> {
        let control = |label: &'a str, message: Message| {
            button(self.fonts.text(FontRole::Button, label))
                .on_press(message)
                .style(styles::button_primary)
        };

        let controls = row![
            control("Ok", Message::Observe(Severity::Normal)),
            control("Warning", Message::Observe(Severity::Warning)),
            control("Error", Message::Observe(Severity::Error)),
            control("Critical", Message::Observe(Severity::Critical)),
            control("Stale", Message::MarkStale),
            control("Bypass", Message::ToggleBypass),
            control("Motor hold", Message::ToggleMotorHold),
            control("Reinterpret", Message::Reinterpret),
        ]
        .spacing(spacing::XS);

        let summary = self.fonts.text(
            FontRole::Display,
            format!(
                "{:?}  redraws: {}",
                panel.status.health(),
                panel.status.redraw_count()
            ),
        );

        let gallery = Row::with_children(panel.gallery.buttons.iter().map(|(name, button)| {
            mouse_area(button.view())
                .on_enter(Message::GalleryHovered(name.clone()))
                .on_exit(Message::GalleryLeft(name.clone()))
                .into()
        }))
        .spacing(spacing::XXS)
        .wrap();

        let pressed = self.fonts.text(
            FontRole::Button,
            match &self.last_pressed {
                Some(name) => format!("last pressed: {name}"),
                None => "press an image".to_string(),
            },
        );

        column![
            row![panel.status.view::<Message>(), summary].spacing(spacing::MD),
            controls,
            gallery,
            pressed
        ]
        .spacing(spacing::MD)
        .into()
    }

    fn log_view(&self) -> Element<'_, Message> {
        let Some(broadcaster) = &self.broadcaster else {
            return Column::new().into();
        };

        let heading = self.fonts.text(
            FontRole::Button,
            format!("log (warnings: {})", self.warnings.load(Ordering::Relaxed)),
        );
        let lines = broadcaster
            .recent(LOG_LINES)
            .into_iter()
            .map(|record| self.fonts.text(FontRole::Input, record.to_string()).into());

        column![heading, scrollable(Column::with_children(lines))]
            .spacing(spacing::XXS)
            .into()
    }
}
