// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle: queueing, expiry and dismissal.

use super::notification::{Notification, NotificationId, Severity};
use crate::diagnostics::{DiagnosticsHandle, WarningEvent, WarningType};
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of notifications visible at once.
pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

/// Visible toasts plus a FIFO queue for the overflow.
#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirrors pushed warnings and errors into the diagnostics log.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    pub fn push(&mut self, notification: Notification) {
        if let Some(handle) = &self.diagnostics {
            match notification.severity() {
                Severity::Warning => handle.log_warning(WarningEvent::new(
                    notification.warning_type().unwrap_or(WarningType::Other),
                    notification.message_key(),
                )),
                Severity::Error => handle.log_error(notification.message_key()),
                Severity::Success | Severity::Info => {}
            }
        }

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Removes a notification wherever it is. Returns `false` if unknown.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }
        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }
        false
    }

    /// Drops every visible notification expired at `now`.
    pub fn tick(&mut self, now: Instant) {
        let before = self.visible.len();
        self.visible.retain(|n| !n.is_expired(now));
        if self.visible.len() < before {
            self.promote_from_queue();
        }
    }

    /// Returns `true` when a notification was closed by the user.
    pub fn handle_message(&mut self, message: &Message) -> bool {
        match message {
            Message::Dismiss(id) => self.dismiss(*id),
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            match self.queue.pop_front() {
                Some(notification) => self.visible.push_front(notification),
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn overflow_is_queued_and_promoted_on_dismiss() {
        let mut manager = Manager::new();
        let first = Notification::error("first");
        let first_id = first.id();
        manager.push(first);
        for key in ["second", "third", "fourth"] {
            manager.push(Notification::error(key));
        }

        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 1);

        assert!(manager.handle_message(&Message::Dismiss(first_id)));

        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);
        assert!(manager.visible().any(|n| n.message_key() == "fourth"));
    }

    #[test]
    fn newest_visible_notification_comes_first() {
        let mut manager = Manager::new();
        manager.push(Notification::info("old"));
        manager.push(Notification::info("new"));

        let keys: Vec<_> = manager.visible().map(Notification::message_key).collect();
        assert_eq!(keys, vec!["new", "old"]);
    }

    #[test]
    fn promoted_notification_is_listed_first() {
        let mut manager = Manager::new();
        let oldest = Notification::error("oldest");
        let oldest_id = oldest.id();
        manager.push(oldest);
        for key in ["middle", "newer", "queued"] {
            manager.push(Notification::error(key));
        }

        manager.dismiss(oldest_id);

        let keys: Vec<_> = manager.visible().map(Notification::message_key).collect();
        assert_eq!(keys, vec!["queued", "newer", "middle"]);
    }

    #[test]
    fn dismiss_unknown_id_returns_false() {
        let mut manager = Manager::new();
        let orphan = Notification::info("x");
        assert!(!manager.dismiss(orphan.id()));
    }

    #[test]
    fn tick_expires_only_timed_notifications() {
        let mut manager = Manager::new();
        manager.push(Notification::info("short"));
        manager.push(Notification::error("sticky"));

        manager.tick(Instant::now() + Duration::from_secs(10));

        let keys: Vec<_> = manager.visible().map(Notification::message_key).collect();
        assert_eq!(keys, vec!["sticky"]);
    }

    #[test]
    fn tick_promotes_queued_notifications() {
        let mut manager = Manager::new();
        for _ in 0..MAX_VISIBLE {
            manager.push(Notification::success("done"));
        }
        manager.push(Notification::error("queued"));

        manager.tick(Instant::now() + Duration::from_secs(4));

        assert_eq!(manager.visible_count(), 1);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn warnings_are_mirrored_to_diagnostics() {
        let mut collector = DiagnosticsCollector::default();
        let mut manager = Manager::new();
        manager.set_diagnostics(collector.handle());

        manager.push(
            Notification::warning("notification-config-load-error")
                .with_warning_type(WarningType::ConfigLoadFailed),
        );
        manager.push(Notification::success("ignored"));
        collector.process_pending();

        assert_eq!(collector.len(), 1);
        match collector.latest().map(|event| &event.kind) {
            Some(DiagnosticEventKind::Warning { event }) => {
                assert_eq!(event.warning_type, WarningType::ConfigLoadFailed);
                assert_eq!(event.message, "notification-config-load-error");
            }
            other => panic!("expected warning, got {:?}", other),
        }
    }
}
