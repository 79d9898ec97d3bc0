// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the example selector,
//! the image pane and the prompt.
//!
//! The `App` struct owns the shared state and the components reading it, and
//! translates component events into side effects like config persistence or
//! the upload dialog.

pub mod config;
mod message;
pub mod paths;
pub mod shared_state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::detection::{AnnotationDetector, Detector};
use crate::diagnostics::{DiagnosticsCollector, WarningType};
use crate::i18n::fluent::I18n;
use crate::media::ImageOptionsProvider;
use crate::ui::example_images;
use crate::ui::notifications::{self, Notification};
use crate::ui::prompt;
use crate::ui::theming::ThemeMode;
use config::{
    Config, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH,
};
use iced::{window, Element, Subscription, Task, Theme};
use shared_state::SharedState;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    /// Where the config is saved; `None` uses the resolved default.
    config_dir: Option<PathBuf>,
    shared: SharedState,
    provider: Arc<dyn ImageOptionsProvider>,
    detector: Arc<dyn Detector>,
    examples: example_images::State,
    prompt: prompt::State,
    theme_mode: ThemeMode,
    /// Whether the upload dialog is open.
    upload_pending: bool,
    notifications: notifications::Manager,
    diagnostics: DiagnosticsCollector,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("image_source", &self.shared.image_source())
            .field("uploaded", &self.shared.is_uploaded_image())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants an `Fn` boot; the flags are consumed on the first call.
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

impl App {
    /// Loads the config, resolves the locale and mounts the example selector.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let config_dir = flags.config_dir.clone().map(PathBuf::from);
        Self::with_config(flags, config, config_warning, config_dir)
    }

    /// Builds the app from an already loaded config.
    ///
    /// Returns the selector's initial load task.
    pub fn with_config(
        flags: Flags,
        config: Config,
        config_warning: Option<String>,
        config_dir: Option<PathBuf>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), &config);
        let provider = config
            .examples
            .provider(flags.examples_dir.map(PathBuf::from));

        let diagnostics = DiagnosticsCollector::default();
        let mut notifications = notifications::Manager::new();
        notifications.set_diagnostics(diagnostics.handle());

        if let Some(key) = config_warning {
            notifications.push(
                Notification::warning(key).with_warning_type(WarningType::ConfigLoadFailed),
            );
        }

        let mut examples = example_images::State::new(provider.as_ref());
        let task = examples.mount(provider.as_ref()).map(Message::Examples);

        let app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            config,
            config_dir,
            shared: SharedState::new(),
            provider,
            detector: Arc::new(AnnotationDetector::new()),
            examples,
            prompt: prompt::State::new(),
            upload_pending: false,
            notifications,
            diagnostics,
        };

        (app, task)
    }

    #[must_use]
    pub fn shared(&self) -> &SharedState {
        &self.shared
    }

    #[must_use]
    pub fn examples(&self) -> &example_images::State {
        &self.examples
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    pub fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.shared.image_source() {
            Some(source) => format!("{} - {app_name}", source.display_name()),
            None => app_name,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, tick_sub])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.diagnostics.process_pending();

        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            config: &mut self.config,
            config_dir: &self.config_dir,
            shared: &mut self.shared,
            provider: &self.provider,
            detector: &self.detector,
            examples: &mut self.examples,
            prompt: &mut self.prompt,
            theme_mode: &mut self.theme_mode,
            upload_pending: &mut self.upload_pending,
            notifications: &mut self.notifications,
            diagnostics: &mut self.diagnostics,
        };

        match message {
            Message::TopBar(message) => update::handle_top_bar_message(&mut ctx, message),
            Message::Examples(message) => update::handle_examples_message(&mut ctx, message),
            Message::Prompt(message) => update::handle_prompt_message(&mut ctx, message),
            Message::Notification(message) => {
                update::handle_notification_message(&mut ctx, message)
            }
            Message::DetectionFinished { ticket, result } => {
                update::handle_detection_finished(&mut ctx, ticket, result)
            }
            Message::UploadDialogClosed(path) => {
                update::handle_upload_dialog_closed(&mut ctx, path)
            }
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path),
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            shared: &self.shared,
            examples: &self.examples,
            prompt: &self.prompt,
            theme_mode: self.theme_mode,
            upload_pending: self.upload_pending,
            notifications: &self.notifications,
        })
    }
}
