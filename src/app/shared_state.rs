// SPDX-License-Identifier: MPL-2.0
//! Application-wide UI state shared between components.
//!
//! `SharedState` is owned by the [`App`](super::App) root and handed to views
//! by reference. Components never mutate it directly: they emit events and the
//! root calls one of the mutation entry points below.

use crate::detection::Detections;
use crate::media::ImageOption;

/// Progress of the object location for the current prompt.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DetectionStatus {
    #[default]
    Idle,
    Locating,
    Done(Detections),
    Failed,
}

/// Identifies one prompt submission so its result can be matched back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectionTicket {
    session: u64,
    request: u64,
}

/// UI state read by several components.
///
/// `image_source` and `is_uploaded_image` are independent cells. Everything
/// else is dependent state that [`SharedState::reset_dependent_state`]
/// restores to its defaults whenever a new image is chosen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SharedState {
    image_source: Option<ImageOption>,
    is_uploaded_image: bool,
    /// Whether the current image has been sent along with a prompt.
    image_sent: bool,
    /// Last prompt submitted for the current image.
    submitted_prompt: Option<String>,
    /// Objects located for the last prompt.
    detection: DetectionStatus,
    /// Bumped on every reset so consumers can tell sessions apart.
    session: u64,
    /// Bumped on every prompt submission.
    request: u64,
}

impl SharedState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn image_source(&self) -> Option<&ImageOption> {
        self.image_source.as_ref()
    }

    #[must_use]
    pub fn is_uploaded_image(&self) -> bool {
        self.is_uploaded_image
    }

    #[must_use]
    pub fn image_sent(&self) -> bool {
        self.image_sent
    }

    #[must_use]
    pub fn submitted_prompt(&self) -> Option<&str> {
        self.submitted_prompt.as_deref()
    }

    #[must_use]
    pub fn detection(&self) -> &DetectionStatus {
        &self.detection
    }

    #[must_use]
    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn set_image_source(&mut self, source: ImageOption) {
        self.image_source = Some(source);
    }

    pub fn set_is_uploaded_image(&mut self, uploaded: bool) {
        self.is_uploaded_image = uploaded;
    }

    /// Restores every dependent cell to its default.
    ///
    /// Leaves `image_source` and `is_uploaded_image` untouched.
    pub fn reset_dependent_state(&mut self) {
        self.image_sent = false;
        self.submitted_prompt = None;
        self.detection = DetectionStatus::Idle;
        self.session = self.session.wrapping_add(1);
    }

    /// Applies an example image selection.
    ///
    /// The reset runs last so the freshly selected image survives it.
    pub fn select_example(&mut self, option: ImageOption) {
        self.set_is_uploaded_image(false);
        self.set_image_source(option);
        self.reset_dependent_state();
    }

    /// Applies a user-uploaded image.
    pub fn select_upload(&mut self, option: ImageOption) {
        self.set_is_uploaded_image(true);
        self.set_image_source(option);
        self.reset_dependent_state();
    }

    /// Records a prompt submitted for the current image and starts locating.
    ///
    /// The returned ticket must accompany the detector's answer.
    pub fn record_prompt(&mut self, prompt: String) -> DetectionTicket {
        self.image_sent = true;
        self.submitted_prompt = Some(prompt);
        self.detection = DetectionStatus::Locating;
        self.request = self.request.wrapping_add(1);
        DetectionTicket {
            session: self.session,
            request: self.request,
        }
    }

    fn is_current(&self, ticket: DetectionTicket) -> bool {
        ticket.session == self.session && ticket.request == self.request
    }

    /// Stores the located objects. Returns false for a stale ticket.
    pub fn finish_detection(&mut self, ticket: DetectionTicket, detections: Detections) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.detection = DetectionStatus::Done(detections);
        true
    }

    /// Marks the location as failed. Returns false for a stale ticket.
    pub fn fail_detection(&mut self, ticket: DetectionTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.detection = DetectionStatus::Failed;
        true
    }
}
