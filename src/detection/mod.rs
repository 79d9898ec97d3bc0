// SPDX-License-Identifier: MPL-2.0
//! Object location results and the detectors that produce them.
//!
//! A [`Detector`] receives the current image and the submitted prompt and
//! answers with every object it found, each with a normalized bounding box,
//! a label and a confidence score. Callers keep only the confident ones with
//! [`Detections::confident`].

pub mod annotations;

pub use annotations::AnnotationDetector;

use crate::error::Result;
use futures_util::future::BoxFuture;
use std::fmt;
use std::path::Path;

/// Axis-aligned box in image-relative coordinates, each edge in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
}

impl BoundingBox {
    /// Builds a box from any two corners, clamped to the image.
    ///
    /// Returns `None` when a coordinate is not finite.
    #[must_use]
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Option<Self> {
        if ![left, top, right, bottom].iter().all(|v| v.is_finite()) {
            return None;
        }
        let clamp = |v: f32| v.clamp(0.0, 1.0);
        Some(Self {
            left: clamp(left.min(right)),
            top: clamp(top.min(bottom)),
            right: clamp(left.max(right)),
            bottom: clamp(top.max(bottom)),
        })
    }

    #[must_use]
    pub fn left(&self) -> f32 {
        self.left
    }

    #[must_use]
    pub fn top(&self) -> f32 {
        self.top
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// One located object.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionResult {
    pub bounding_box: BoundingBox,
    pub label: String,
    /// Score in `0.0..=1.0`.
    pub confidence: f32,
}

impl DetectionResult {
    pub fn new(bounding_box: BoundingBox, label: impl Into<String>, confidence: f32) -> Self {
        Self {
            bounding_box,
            label: label.into(),
            confidence: confidence.clamp(0.0, 1.0),
        }
    }
}

impl fmt::Display for DetectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2})", self.label, self.confidence)
    }
}

/// Everything a detector found in one image.
///
/// Carries the pixel size of the analyzed image so overlays can map the
/// normalized boxes onto the displayed picture.
#[derive(Debug, Clone, PartialEq)]
pub struct Detections {
    pub image_width: u32,
    pub image_height: u32,
    pub results: Vec<DetectionResult>,
}

impl Detections {
    #[must_use]
    pub fn new(image_width: u32, image_height: u32, results: Vec<DetectionResult>) -> Self {
        Self {
            image_width,
            image_height,
            results,
        }
    }

    /// Keeps results scoring at least `threshold`, most confident first.
    #[must_use]
    pub fn confident(mut self, threshold: f32) -> Self {
        self.results.retain(|result| result.confidence >= threshold);
        self.results.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }
}

/// Locates the objects described by a prompt in an image.
pub trait Detector: Send + Sync {
    fn detect(&self, image: &Path, query: &str) -> BoxFuture<'static, Result<Detections>>;
}

/// Lowercased words of `text`, with a plural `s` dropped.
fn terms(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let word = word.to_lowercase();
            match word.strip_suffix('s') {
                Some(stem) if stem.chars().count() >= 3 => stem.to_string(),
                _ => word,
            }
        })
}

/// Returns true when `label` shares a word with `query`.
#[must_use]
pub fn label_matches(label: &str, query: &str) -> bool {
    let wanted: Vec<String> = terms(query).collect();
    terms(label).any(|term| wanted.contains(&term))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> BoundingBox {
        BoundingBox::new(0.0, 0.0, 1.0, 1.0).expect("finite")
    }

    #[test]
    fn bounding_box_orders_and_clamps_corners() {
        let bbox = BoundingBox::new(0.8, 1.4, -0.2, 0.5).expect("finite");

        assert_eq!(bbox.left(), 0.0);
        assert_eq!(bbox.top(), 0.5);
        assert!((bbox.width() - 0.8).abs() < f32::EPSILON);
        assert!((bbox.height() - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn bounding_box_rejects_nan() {
        assert!(BoundingBox::new(f32::NAN, 0.0, 1.0, 1.0).is_none());
    }

    #[test]
    fn confident_drops_low_scores_and_sorts() {
        let detections = Detections::new(
            10,
            10,
            vec![
                DetectionResult::new(unit_box(), "cup", 0.55),
                DetectionResult::new(unit_box(), "mug", 0.9),
                DetectionResult::new(unit_box(), "bowl", 0.2),
            ],
        );

        let kept = detections.confident(0.5);

        let labels: Vec<_> = kept.results.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["mug", "cup"]);
    }

    #[test]
    fn threshold_is_inclusive() {
        let detections = Detections::new(1, 1, vec![DetectionResult::new(unit_box(), "cup", 0.5)]);
        assert_eq!(detections.confident(0.5).len(), 1);
    }

    #[test]
    fn display_shows_label_and_score() {
        let result = DetectionResult::new(unit_box(), "chair", 0.856);
        assert_eq!(result.to_string(), "chair (0.86)");
    }

    #[test]
    fn confidence_is_clamped() {
        assert_eq!(DetectionResult::new(unit_box(), "x", 1.7).confidence, 1.0);
    }

    #[test]
    fn labels_match_on_shared_words() {
        assert!(label_matches("coffee mug", "find the red mug"));
        assert!(label_matches("Mug", "mugs"));
        assert!(label_matches("keys", "Where are my KEYS?"));
        assert!(!label_matches("chair", "table"));
        assert!(!label_matches("bus", "b"));
    }
}
