// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.

use std::fmt;
use std::time::Instant;

/// User-initiated actions worth correlating with later problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// Clicked an example thumbnail.
    SelectExample,
    /// Opened the upload dialog.
    OpenUploadDialog,
    /// Closed the upload dialog without choosing a file.
    CancelUpload,
    /// Chose a file in the upload dialog.
    UploadImage,
    /// Submitted a prompt for the current image.
    SubmitPrompt,
    /// Asked for the example list to be loaded again.
    ReloadExamples,
    /// Switched the theme mode.
    ToggleTheme,
    /// Closed a toast notification.
    DismissNotification,
}

/// Application state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppStateEvent {
    /// The example loader resolved and replaced the displayed list.
    OptionsLoaded { count: usize },
    /// A load result arrived for a selector that no longer accepts it.
    StaleOptionsDiscarded,
    ImageSourceChanged { uploaded: bool },
    /// Dependent state went back to its defaults.
    DependentStateReset { session: u64 },
    /// The detector answered the current prompt.
    DetectionFinished { found: usize },
    /// A detector answer arrived after the image or prompt changed.
    StaleDetectionDiscarded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningType {
    OptionsLoadFailed,
    ConfigLoadFailed,
    ConfigSaveFailed,
    UnsupportedUpload,
    DetectionFailed,
    Other,
}

/// Non-critical problem with a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// Monotonic timestamp.
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
        /// Extra context such as the selected image.
        details: Option<String>,
    },
    AppState {
        state: AppStateEvent,
    },
    Warning {
        event: WarningEvent,
    },
    Error {
        message: String,
    },
}

impl fmt::Display for DiagnosticEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticEventKind::UserAction {
                action,
                details: Some(details),
            } => write!(f, "action {:?}: {}", action, details),
            DiagnosticEventKind::UserAction {
                action,
                details: None,
            } => write!(f, "action {:?}", action),
            DiagnosticEventKind::AppState { state } => write!(f, "state {:?}", state),
            DiagnosticEventKind::Warning { event } => {
                write!(f, "warning {:?}: {}", event.warning_type, event.message)
            }
            DiagnosticEventKind::Error { message } => write!(f, "error: {}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_event_new_uses_current_time() {
        let before = Instant::now();
        let event = DiagnosticEvent::new(DiagnosticEventKind::Error {
            message: "boom".to_string(),
        });
        let after = Instant::now();

        assert!(event.timestamp >= before);
        assert!(event.timestamp <= after);
    }

    #[test]
    fn display_includes_details() {
        let kind = DiagnosticEventKind::UserAction {
            action: UserAction::SelectExample,
            details: Some("kitchen.jpg".to_string()),
        };
        assert_eq!(kind.to_string(), "action SelectExample: kitchen.jpg");
    }

    #[test]
    fn display_formats_warning_category() {
        let kind = DiagnosticEventKind::Warning {
            event: WarningEvent::new(WarningType::OptionsLoadFailed, "missing dir"),
        };
        assert_eq!(kind.to_string(), "warning OptionsLoadFailed: missing dir");
    }
}
