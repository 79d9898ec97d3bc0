// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Components report what happened through their `Event` types; the handlers
//! here apply those events to the shared state and trigger side effects such
//! as the upload dialog or config persistence.

use super::config::{self, Config};
use super::shared_state::{DetectionTicket, SharedState};
use super::Message;
use crate::detection::{Detections, Detector};
use crate::diagnostics::{
    AppStateEvent, DiagnosticsCollector, UserAction, WarningEvent, WarningType,
};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::extensions::IMAGE_EXTENSIONS;
use crate::media::{is_supported_image, ImageOption, ImageOptionsProvider};
use crate::ui::example_images;
use crate::ui::notifications::{self, Notification};
use crate::ui::prompt;
use crate::ui::theming::ThemeMode;
use crate::ui::top_bar;
use iced::Task;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Mutable borrows of the `App` fields a handler may touch.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a mut Config,
    pub config_dir: &'a Option<PathBuf>,
    pub shared: &'a mut SharedState,
    pub provider: &'a Arc<dyn ImageOptionsProvider>,
    pub detector: &'a Arc<dyn Detector>,
    pub examples: &'a mut example_images::State,
    pub prompt: &'a mut prompt::State,
    pub theme_mode: &'a mut ThemeMode,
    pub upload_pending: &'a mut bool,
    pub notifications: &'a mut notifications::Manager,
    pub diagnostics: &'a mut DiagnosticsCollector,
}

pub fn handle_top_bar_message(
    ctx: &mut UpdateContext<'_>,
    message: top_bar::Message,
) -> Task<Message> {
    match top_bar::update(message) {
        top_bar::Event::UploadRequested => open_upload_dialog(ctx),
        top_bar::Event::ThemeToggled => {
            toggle_theme(ctx);
            Task::none()
        }
    }
}

fn open_upload_dialog(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if *ctx.upload_pending {
        return Task::none();
    }
    *ctx.upload_pending = true;
    ctx.diagnostics.log_action(UserAction::OpenUploadDialog);

    let title = ctx.i18n.tr("upload-dialog-title");
    let filter_name = ctx.i18n.tr("upload-dialog-filter");

    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(&title)
                .add_filter(&filter_name, IMAGE_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::UploadDialogClosed,
    )
}

fn toggle_theme(ctx: &mut UpdateContext<'_>) {
    let mode = ctx.theme_mode.next();
    *ctx.theme_mode = mode;
    ctx.config.general.theme_mode = mode;
    ctx.diagnostics
        .log_action_with_details(UserAction::ToggleTheme, Some(format!("{mode:?}")));

    if config::save_with_override(ctx.config, ctx.config_dir.clone()).is_err() {
        ctx.notifications.push(
            Notification::warning("notification-config-save-error")
                .with_warning_type(WarningType::ConfigSaveFailed),
        );
    }
}

pub fn handle_examples_message(
    ctx: &mut UpdateContext<'_>,
    message: example_images::Message,
) -> Task<Message> {
    match ctx.examples.update(message) {
        example_images::Event::Selected(option) => {
            ctx.diagnostics
                .log_action_with_details(UserAction::SelectExample, Some(option.to_string()));
            ctx.shared.select_example(option);
            ctx.prompt.clear();
            log_source_change(ctx);
            Task::none()
        }
        example_images::Event::OptionsLoaded { count } => {
            ctx.diagnostics
                .log_state(AppStateEvent::OptionsLoaded { count });
            Task::none()
        }
        example_images::Event::OptionsLoadFailed(err) => {
            // The selector keeps its last known list, so this is not surfaced.
            ctx.diagnostics.log_warning(WarningEvent::new(
                WarningType::OptionsLoadFailed,
                err.to_string(),
            ));
            Task::none()
        }
        example_images::Event::StaleResultDiscarded => {
            ctx.diagnostics.log_state(AppStateEvent::StaleOptionsDiscarded);
            Task::none()
        }
        example_images::Event::ReloadRequested => reload_examples(ctx),
    }
}

/// Replaces the selector with a fresh instance and mounts it.
fn reload_examples(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.diagnostics.log_action(UserAction::ReloadExamples);
    ctx.examples.unmount();

    let mut examples = example_images::State::new(ctx.provider.as_ref());
    let task = examples.mount(ctx.provider.as_ref());
    *ctx.examples = examples;
    task.map(Message::Examples)
}

/// Records a submitted prompt and asks the detector to locate it.
pub fn handle_prompt_message(
    ctx: &mut UpdateContext<'_>,
    message: prompt::Message,
) -> Task<Message> {
    let has_image = ctx.shared.image_source().is_some();
    let prompt::Event::Submitted(text) = ctx.prompt.update(message, has_image) else {
        return Task::none();
    };
    let Some(image) = ctx.shared.image_source().map(|source| source.as_path().to_path_buf())
    else {
        return Task::none();
    };

    ctx.diagnostics
        .log_action_with_details(UserAction::SubmitPrompt, Some(text.clone()));
    let detection = ctx.detector.detect(&image, &text);
    let ticket = ctx.shared.record_prompt(text);

    Task::perform(detection, move |result| Message::DetectionFinished {
        ticket,
        result,
    })
}

/// Applies the detector's answer if it still belongs to the current prompt.
pub fn handle_detection_finished(
    ctx: &mut UpdateContext<'_>,
    ticket: DetectionTicket,
    result: Result<Detections, Error>,
) -> Task<Message> {
    match result {
        Ok(detections) => {
            let detections = detections.confident(ctx.config.detection.confidence_threshold());
            let found = detections.len();
            if ctx.shared.finish_detection(ticket, detections) {
                ctx.diagnostics
                    .log_state(AppStateEvent::DetectionFinished { found });
            } else {
                ctx.diagnostics.log_state(AppStateEvent::StaleDetectionDiscarded);
            }
        }
        Err(err) => {
            if ctx.shared.fail_detection(ticket) {
                ctx.notifications.push(
                    Notification::warning("notification-detection-failed")
                        .with_arg("reason", err.to_string())
                        .with_warning_type(WarningType::DetectionFailed),
                );
            } else {
                ctx.diagnostics.log_state(AppStateEvent::StaleDetectionDiscarded);
            }
        }
    }
    Task::none()
}

pub fn handle_upload_dialog_closed(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    *ctx.upload_pending = false;
    match path {
        Some(path) => apply_upload(ctx, path),
        None => ctx.diagnostics.log_action(UserAction::CancelUpload),
    }
    Task::none()
}

pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    apply_upload(ctx, path);
    Task::none()
}

fn apply_upload(ctx: &mut UpdateContext<'_>, path: PathBuf) {
    let option = if is_supported_image(&path) {
        ImageOption::try_from(path)
    } else {
        Err(path)
    };
    let option = match option {
        Ok(option) => option,
        Err(path) => {
            // the lossy name is only shown, never used to open the file
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            ctx.notifications.push(
                Notification::warning("notification-upload-unsupported")
                    .with_arg("name", name)
                    .with_warning_type(WarningType::UnsupportedUpload),
            );
            return;
        }
    };

    ctx.diagnostics
        .log_action_with_details(UserAction::UploadImage, Some(option.to_string()));
    ctx.shared.select_upload(option);
    ctx.prompt.clear();
    log_source_change(ctx);
}

fn log_source_change(ctx: &mut UpdateContext<'_>) {
    ctx.diagnostics.log_state(AppStateEvent::ImageSourceChanged {
        uploaded: ctx.shared.is_uploaded_image(),
    });
    ctx.diagnostics.log_state(AppStateEvent::DependentStateReset {
        session: ctx.shared.session(),
    });
}

pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: notifications::NotificationMessage,
) -> Task<Message> {
    if ctx.notifications.handle_message(&message) {
        ctx.diagnostics.log_action(UserAction::DismissNotification);
    }
    Task::none()
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.notifications.tick(now);
    Task::none()
}
