// SPDX-License-Identifier: MPL-2.0
//! Display of the current image source.
//!
//! Shows the image scaled to fit, an "uploaded" badge for user files, the
//! last prompt submitted for it and the boxes of the objects located for
//! that prompt. Without an image, shows a hint instead.

use crate::app::shared_state::{DetectionStatus, SharedState};
use crate::i18n::fluent::I18n;
use crate::media::ImageOption;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::detection_overlay::DetectionOverlay;
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{canvas, Column, Container, Row, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};

/// What the pane shows for a given shared state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pane<'a> {
    Empty,
    Image {
        source: &'a ImageOption,
        uploaded: bool,
        last_prompt: Option<&'a str>,
        detection: &'a DetectionStatus,
    },
}

#[must_use]
pub fn pane(shared: &SharedState) -> Pane<'_> {
    match shared.image_source() {
        None => Pane::Empty,
        Some(source) => Pane::Image {
            source,
            uploaded: shared.is_uploaded_image(),
            last_prompt: shared.submitted_prompt(),
            detection: shared.detection(),
        },
    }
}

/// Footer line describing the location progress, if any.
fn status_text(detection: &DetectionStatus, i18n: &I18n) -> Option<String> {
    match detection {
        DetectionStatus::Idle | DetectionStatus::Failed => None,
        DetectionStatus::Locating => Some(i18n.tr("image-pane-locating")),
        DetectionStatus::Done(found) if found.is_empty() => Some(i18n.tr("image-pane-no-matches")),
        DetectionStatus::Done(found) => {
            let count = found.len().to_string();
            Some(i18n.tr_with_args("image-pane-found", &[("count", count.as_str())]))
        }
    }
}

pub fn view<'a, Message: 'a>(shared: &'a SharedState, i18n: &'a I18n) -> Element<'a, Message> {
    let content: Element<'a, Message> = match pane(shared) {
        Pane::Empty => Container::new(
            Text::new(i18n.tr("image-pane-empty"))
                .size(typography::BODY)
                .color(palette::GRAY_400),
        )
        .center(Length::Fill)
        .into(),
        Pane::Image {
            source,
            uploaded,
            last_prompt,
            detection,
        } => {
            let image = Image::new(Handle::from_path(source.as_path()))
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill);
            let picture: Element<'a, Message> = match detection {
                DetectionStatus::Done(found) if !found.is_empty() => Stack::new()
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .push(image)
                    .push(
                        canvas::Canvas::new(DetectionOverlay::new(found))
                            .width(Length::Fill)
                            .height(Length::Fill),
                    )
                    .into(),
                _ => image.into(),
            };

            let mut footer = Row::new()
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center);
            if uploaded {
                footer = footer.push(
                    Container::new(
                        Text::new(i18n.tr("image-pane-uploaded-badge")).size(typography::CAPTION),
                    )
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::container::badge),
                );
            }
            if let Some(prompt) = last_prompt {
                footer = footer.push(
                    Text::new(i18n.tr_with_args("image-pane-last-prompt", &[("prompt", prompt)]))
                        .size(typography::BODY_SM),
                );
            }
            if let Some(status) = status_text(detection, i18n) {
                footer = footer.push(
                    Text::new(status)
                        .size(typography::BODY_SM)
                        .color(palette::GRAY_400),
                );
            }

            Column::new()
                .spacing(spacing::XS)
                .push(picture)
                .push(footer)
                .into()
        }
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::image_frame)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::{BoundingBox, DetectionResult, Detections};

    fn en() -> I18n {
        I18n::new(Some("en-US".to_string()), &crate::app::config::Config::default())
    }

    #[test]
    fn empty_state_without_image() {
        assert_eq!(pane(&SharedState::new()), Pane::Empty);
    }

    #[test]
    fn example_image_has_no_badge() {
        let mut shared = SharedState::new();
        shared.select_example(ImageOption::new("a.png"));

        assert_eq!(
            pane(&shared),
            Pane::Image {
                source: &ImageOption::new("a.png"),
                uploaded: false,
                last_prompt: None,
                detection: &DetectionStatus::Idle,
            }
        );
    }

    #[test]
    fn uploaded_image_shows_badge_and_prompt() {
        let mut shared = SharedState::new();
        shared.select_upload(ImageOption::new("/home/me/desk.jpg"));
        shared.record_prompt("stapler".into());

        match pane(&shared) {
            Pane::Image {
                uploaded,
                last_prompt,
                ..
            } => {
                assert!(uploaded);
                assert_eq!(last_prompt, Some("stapler"));
            }
            Pane::Empty => panic!("expected an image"),
        }
    }

    #[test]
    fn status_follows_detection_progress() {
        let i18n = en();
        let bbox = BoundingBox::new(0.0, 0.0, 0.5, 0.5).expect("finite");
        let found = Detections::new(4, 2, vec![DetectionResult::new(bbox, "mug", 0.9)]);

        assert_eq!(status_text(&DetectionStatus::Idle, &i18n), None);
        assert_eq!(
            status_text(&DetectionStatus::Locating, &i18n).as_deref(),
            Some("Locating objects...")
        );
        assert_eq!(
            status_text(&DetectionStatus::Done(Detections::new(4, 2, Vec::new())), &i18n)
                .as_deref(),
            Some("No matching objects found.")
        );
        let found_text = status_text(&DetectionStatus::Done(found), &i18n).expect("status");
        assert!(found_text.contains('1'));
    }

    #[test]
    fn view_renders_every_detection_state() {
        let i18n = en();
        let mut shared = SharedState::new();
        let _element: Element<'_, ()> = view(&shared, &i18n);
        drop(_element);

        shared.select_example(ImageOption::new("a.png"));
        let ticket = shared.record_prompt("mug".into());
        let _element: Element<'_, ()> = view(&shared, &i18n);
        drop(_element);

        let bbox = BoundingBox::new(0.1, 0.1, 0.4, 0.4).expect("finite");
        let found = Detections::new(4, 2, vec![DetectionResult::new(bbox, "mug", 0.9)]);
        shared.finish_detection(ticket, found);
        let _element: Element<'_, ()> = view(&shared, &i18n);
    }
}
