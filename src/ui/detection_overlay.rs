// SPDX-License-Identifier: MPL-2.0
//! Bounding boxes drawn over the image pane.
//!
//! The canvas is stacked on top of an image shown with `ContentFit::Contain`,
//! so boxes are mapped through the same letterboxing the image gets.
#![allow(clippy::cast_precision_loss)]

use crate::detection::Detections;
use crate::ui::design_tokens::{border, opacity, palette, typography};
use iced::widget::canvas::{self, Frame, Path, Stroke, Text};
use iced::{mouse, Color, Point, Rectangle, Renderer, Size, Theme};

/// Space between a box and its label.
const LABEL_GAP: f32 = 2.0;

/// Rough glyph width relative to the font size, used to size label plates.
const GLYPH_WIDTH_RATIO: f32 = 0.6;

/// Canvas program drawing one box and label per located object.
#[derive(Debug, Clone, Copy)]
pub struct DetectionOverlay<'a> {
    detections: &'a Detections,
}

impl<'a> DetectionOverlay<'a> {
    #[must_use]
    pub fn new(detections: &'a Detections) -> Self {
        Self { detections }
    }
}

/// Area an image of `width`×`height` pixels occupies when contain-fitted in
/// `bounds`. `None` for an empty image or an empty area.
#[must_use]
pub fn contain_rect(bounds: Size, width: u32, height: u32) -> Option<Rectangle> {
    if width == 0 || height == 0 || bounds.width <= 0.0 || bounds.height <= 0.0 {
        return None;
    }

    let img_aspect = width as f32 / height as f32;
    let bounds_aspect = bounds.width / bounds.height;

    let rect = if img_aspect > bounds_aspect {
        // wider than the area: fit to width
        let display_height = bounds.width / img_aspect;
        Rectangle {
            x: 0.0,
            y: (bounds.height - display_height) / 2.0,
            width: bounds.width,
            height: display_height,
        }
    } else {
        let display_width = bounds.height * img_aspect;
        Rectangle {
            x: (bounds.width - display_width) / 2.0,
            y: 0.0,
            width: display_width,
            height: bounds.height,
        }
    };
    Some(rect)
}

fn box_color(rank: usize) -> Color {
    const COLORS: [Color; 4] = [
        palette::PRIMARY_400,
        palette::WARNING_500,
        palette::INFO_500,
        palette::SUCCESS_500,
    ];
    COLORS[rank % COLORS.len()]
}

impl<Message> canvas::Program<Message> for DetectionOverlay<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let Some(image) = contain_rect(
            bounds.size(),
            self.detections.image_width,
            self.detections.image_height,
        ) else {
            return vec![frame.into_geometry()];
        };

        for (rank, result) in self.detections.results.iter().enumerate() {
            let color = box_color(rank);
            let bbox = result.bounding_box;
            let top_left = Point::new(
                image.x + bbox.left() * image.width,
                image.y + bbox.top() * image.height,
            );
            let size = Size::new(bbox.width() * image.width, bbox.height() * image.height);

            frame.stroke(
                &Path::rectangle(top_left, size),
                Stroke::default()
                    .with_width(border::WIDTH_MD)
                    .with_color(color),
            );

            let label = result.to_string();
            let plate = Size::new(
                label.chars().count() as f32 * typography::CAPTION * GLYPH_WIDTH_RATIO,
                typography::CAPTION + 2.0 * LABEL_GAP,
            );
            // above the box unless that leaves the image
            let plate_y = if top_left.y - plate.height >= image.y {
                top_left.y - plate.height
            } else {
                top_left.y
            };
            frame.fill_rectangle(
                Point::new(top_left.x, plate_y),
                plate,
                Color {
                    a: opacity::OVERLAY_STRONG,
                    ..palette::BLACK
                },
            );
            frame.fill_text(Text {
                content: label,
                position: Point::new(top_left.x + LABEL_GAP, plate_y + LABEL_GAP),
                color,
                size: typography::CAPTION.into(),
                ..Text::default()
            });
        }

        vec![frame.into_geometry()]
    }
}
