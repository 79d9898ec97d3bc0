// SPDX-License-Identifier: MPL-2.0
//! Detector backed by annotation files stored next to each image.
//!
//! `kitchen.jpg` is described by `kitchen.jpg.objects.toml`:
//!
//! ```toml
//! [[objects]]
//! label = "mug"
//! confidence = 0.92
//! bounds = [0.10, 0.40, 0.25, 0.62] # left, top, right, bottom
//! ```
//!
//! An image without annotations simply has no matches.

use super::{label_matches, BoundingBox, DetectionResult, Detections, Detector};
use crate::error::{Error, Result};
use futures_util::future::{BoxFuture, FutureExt};
use serde::Deserialize;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

/// Suffix appended to the image file name to find its annotations.
pub const ANNOTATION_SUFFIX: &str = ".objects.toml";

#[derive(Debug, Default, Deserialize)]
struct AnnotationFile {
    #[serde(default)]
    objects: Vec<Annotation>,
}

#[derive(Debug, Deserialize)]
struct Annotation {
    label: String,
    confidence: f32,
    bounds: [f32; 4],
}

/// Answers queries from the annotation file of each image.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnnotationDetector;

impl AnnotationDetector {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Path of the annotation file describing `image`.
#[must_use]
pub fn annotation_path(image: &Path) -> PathBuf {
    let mut name = image
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(ANNOTATION_SUFFIX);
    image.with_file_name(name)
}

async fn image_size(image: PathBuf) -> Result<(u32, u32)> {
    let display = image.display().to_string();
    tokio::task::spawn_blocking(move || image_rs::image_dimensions(&image))
        .await
        .map_err(|err| Error::Detection(format!("{display}: {err}")))?
        .map_err(|err| Error::Detection(format!("{display}: {err}")))
}

async fn read_annotations(path: &Path) -> Result<AnnotationFile> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => toml::from_str(&content)
            .map_err(|err| Error::Detection(format!("{}: {err}", path.display()))),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(AnnotationFile::default()),
        Err(err) => Err(err.into()),
    }
}

fn matching(file: AnnotationFile, query: &str) -> Vec<DetectionResult> {
    file.objects
        .into_iter()
        .filter(|object| label_matches(&object.label, query))
        .filter_map(|object| {
            let [left, top, right, bottom] = object.bounds;
            let bounding_box = BoundingBox::new(left, top, right, bottom)?;
            Some(DetectionResult::new(
                bounding_box,
                object.label,
                object.confidence,
            ))
        })
        .collect()
}

impl Detector for AnnotationDetector {
    fn detect(&self, image: &Path, query: &str) -> BoxFuture<'static, Result<Detections>> {
        let image = image.to_path_buf();
        let query = query.to_owned();
        async move {
            let (width, height) = image_size(image.clone()).await?;
            let file = read_annotations(&annotation_path(&image)).await?;
            Ok(Detections::new(width, height, matching(file, &query)))
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_image(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        image_rs::RgbImage::new(4, 2)
            .save(&path)
            .expect("write test image");
        path
    }

    #[test]
    fn annotation_path_appends_suffix() {
        assert_eq!(
            annotation_path(Path::new("/data/kitchen.jpg")),
            PathBuf::from("/data/kitchen.jpg.objects.toml")
        );
    }

    #[tokio::test]
    async fn returns_matching_objects_with_image_size() {
        let dir = tempdir().expect("tempdir");
        let image = write_image(dir.path(), "desk.png");
        std::fs::write(
            annotation_path(&image),
            r#"
[[objects]]
label = "coffee mug"
confidence = 0.92
bounds = [0.1, 0.4, 0.25, 0.6]

[[objects]]
label = "laptop"
confidence = 0.88
bounds = [0.3, 0.2, 0.9, 0.7]
"#,
        )
        .expect("write annotations");

        let detections = AnnotationDetector::new()
            .detect(&image, "Find the mugs")
            .await
            .expect("detect");

        assert_eq!((detections.image_width, detections.image_height), (4, 2));
        assert_eq!(detections.len(), 1);
        assert_eq!(detections.results[0].label, "coffee mug");
    }

    #[tokio::test]
    async fn missing_annotations_mean_no_matches() {
        let dir = tempdir().expect("tempdir");
        let image = write_image(dir.path(), "plain.png");

        let detections = AnnotationDetector::new()
            .detect(&image, "cat")
            .await
            .expect("detect");

        assert!(detections.is_empty());
    }

    #[tokio::test]
    async fn malformed_annotations_are_a_detection_error() {
        let dir = tempdir().expect("tempdir");
        let image = write_image(dir.path(), "broken.png");
        std::fs::write(annotation_path(&image), "objects = 3").expect("write annotations");

        let result = AnnotationDetector::new().detect(&image, "cat").await;

        assert!(matches!(result, Err(Error::Detection(_))));
    }

    #[tokio::test]
    async fn unreadable_image_is_a_detection_error() {
        let dir = tempdir().expect("tempdir");
        let image = dir.path().join("missing.png");

        let result = AnnotationDetector::new().detect(&image, "cat").await;

        assert!(matches!(result, Err(Error::Detection(_))));
    }

    #[test]
    fn non_finite_bounds_are_skipped() {
        let file = AnnotationFile {
            objects: vec![
                Annotation {
                    label: "cup".into(),
                    confidence: 0.9,
                    bounds: [f32::NAN, 0.0, 1.0, 1.0],
                },
                Annotation {
                    label: "cup".into(),
                    confidence: 0.7,
                    bounds: [0.0, 0.0, 0.5, 0.5],
                },
            ],
        };

        let results = matching(file, "cup");

        assert_eq!(results.len(), 1);
        assert!((results[0].confidence - 0.7).abs() < f32::EPSILON);
    }
}
