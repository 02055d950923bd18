// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the three panels.
//!
//! The `App` struct wires together localization, configuration, the
//! stylesheet and the panel states, and translates panel events into screen
//! transitions. Window policy (size limits, panel width) lives here too.

pub mod config;
mod message;
pub mod paths;
pub mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::{Navigation, Screen};

use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use crate::ui::{forgot_password, login, logo, signup, stylesheet};
use config::{
    Config, MIN_PANEL_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, PANEL_WIDTH_RATIO,
    WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH,
};
use iced::widget::svg;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use stylesheet::Stylesheet;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    login: login::State,
    forgot_password: forgot_password::State,
    signup: signup::State,
    stylesheet: Stylesheet,
    logo: Option<svg::Handle>,
    theme_mode: ThemeMode,
    /// Keep typed values when navigating between panels.
    preserve_fields: bool,
    /// Width of the panel column, recomputed on every resize.
    panel_width: f32,
    /// i18n keys of problems met while loading config and stylesheet.
    warnings: Vec<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("panel_width", &self.panel_width)
            .field("has_logo", &self.logo.is_some())
            .finish()
    }
}

/// Width of the panel column for a window `window_width` pixels wide.
#[must_use]
pub fn panel_width(window_width: f32) -> f32 {
    (window_width * PANEL_WIDTH_RATIO).max(MIN_PANEL_WIDTH)
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        icon: crate::icon::load_window_icon(),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::default(),
            login: login::State::default(),
            forgot_password: forgot_password::State::default(),
            signup: signup::State::default(),
            stylesheet: Stylesheet::default(),
            logo: None,
            theme_mode: ThemeMode::System,
            preserve_fields: config::DEFAULT_PRESERVE_FIELDS,
            panel_width: panel_width(WINDOW_DEFAULT_WIDTH),
            warnings: Vec::new(),
        }
    }
}

impl App {
    /// Initializes application state from the user configuration and the
    /// resource directory.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        (Self::with_startup_warning(flags, &config, config_warning), Task::none())
    }

    /// Builds the application and lists `config_warning` ahead of any
    /// stylesheet warning.
    fn with_startup_warning(flags: Flags, config: &Config, config_warning: Option<String>) -> Self {
        let mut app = Self::with_config(flags, config);
        if let Some(warning) = config_warning {
            app.warnings.insert(0, warning);
        }
        app
    }

    /// Builds the application from an already loaded configuration.
    pub fn with_config(flags: Flags, config: &Config) -> Self {
        let i18n = I18n::new(flags.lang, config);
        let resource_dir = paths::get_resource_dir();

        let stylesheet_path = flags
            .stylesheet
            .map(PathBuf::from)
            .unwrap_or_else(|| config.appearance.stylesheet_path(&resource_dir));
        let (stylesheet, stylesheet_warning) = stylesheet::load(&stylesheet_path);
        let logo = logo::load(&config.appearance.logo_path(&resource_dir));

        tracing::info!(
            locale = %i18n.current_locale(),
            resources = %resource_dir.display(),
            "login screen ready"
        );

        App {
            i18n,
            stylesheet,
            logo,
            theme_mode: config.general.theme_mode,
            preserve_fields: config.forms.preserve_fields(),
            warnings: stylesheet_warning.into_iter().collect(),
            ..Self::default()
        }
    }

    /// The panel currently shown.
    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn panel_width(&self) -> f32 {
        self.panel_width
    }

    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    #[must_use]
    pub fn login_state(&self) -> &login::State {
        &self.login
    }

    #[must_use]
    pub fn forgot_password_state(&self) -> &forgot_password::State {
        &self.forgot_password
    }

    #[must_use]
    pub fn signup_state(&self) -> &signup::State {
        &self.signup
    }

    pub fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let panel = self.i18n.tr(self.screen.title_key());
        format!("{panel} - {app_name}")
    }

    pub fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_window_subscription()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            login: &mut self.login,
            forgot_password: &mut self.forgot_password,
            signup: &mut self.signup,
            preserve_fields: self.preserve_fields,
            panel_width: &mut self.panel_width,
            warnings: &mut self.warnings,
        };
        update::update(&mut ctx, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            login: &self.login,
            forgot_password: &self.forgot_password,
            signup: &self.signup,
            stylesheet: &self.stylesheet,
            logo: self.logo.as_ref(),
            panel_width: self.panel_width,
            warnings: &self.warnings,
        })
    }
}
