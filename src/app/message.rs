// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::shared_state::DetectionTicket;
use crate::detection::Detections;
use crate::error::Error;
use crate::ui::example_images;
use crate::ui::notifications;
use crate::ui::prompt;
use crate::ui::top_bar;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    TopBar(top_bar::Message),
    Examples(example_images::Message),
    Prompt(prompt::Message),
    Notification(notifications::NotificationMessage),
    /// Result from the upload dialog; `None` when cancelled.
    UploadDialogClosed(Option<PathBuf>),
    /// The detector answered a prompt.
    DetectionFinished {
        ticket: DetectionTicket,
        result: Result<Detections, Error>,
    },
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Periodic tick while toasts are on screen.
    Tick(Instant),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP 47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (`--config-dir`).
    pub config_dir: Option<String>,
    /// Directory scanned for example images, overriding the config file.
    pub examples_dir: Option<String>,
}
