// SPDX-License-Identifier: MPL-2.0
//! Example image options and the providers that supply them.
//!
//! A provider hands out two lists: a synchronous default available the moment
//! the selector is mounted, and an asynchronously loaded list that replaces it
//! once ready.

use crate::error::{OptionsError, Result};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::fmt;
use std::path::{Path, PathBuf};

/// Opaque identifier for one selectable example image.
///
/// The identifier doubles as the image source (a filesystem path) and as the
/// unique key of its thumbnail in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageOption(String);

impl ImageOption {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    /// Human-facing name: the file stem, or the whole identifier when it
    /// has no stem.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.as_path()
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(&self.0)
    }
}

impl fmt::Display for ImageOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageOption {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ImageOption {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Fails, handing the path back, when it is not valid UTF-8.
impl TryFrom<PathBuf> for ImageOption {
    type Error = PathBuf;

    fn try_from(path: PathBuf) -> std::result::Result<Self, Self::Error> {
        path.into_os_string()
            .into_string()
            .map(Self)
            .map_err(PathBuf::from)
    }
}

/// Ordered list of image options. Order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageOptionList(Vec<ImageOption>);

impl ImageOptionList {
    #[must_use]
    pub fn new(options: Vec<ImageOption>) -> Self {
        Self(options)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageOption> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ImageOption] {
        &self.0
    }
}

impl<T: Into<ImageOption>> FromIterator<T> for ImageOptionList {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a ImageOptionList {
    type Item = &'a ImageOption;
    type IntoIter = std::slice::Iter<'a, ImageOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Supplies the example images shown by the selector.
pub trait ImageOptionsProvider: Send + Sync {
    /// List available immediately, before any loading happens.
    fn default_options(&self) -> ImageOptionList;

    /// Loads the up-to-date list. Takes no parameters and is awaited at most
    /// once per selector mount.
    fn load_options(&self) -> BoxFuture<'static, Result<ImageOptionList>>;
}

/// Provider backed by a fixed list; loading resolves to that same list.
#[derive(Debug, Clone, Default)]
pub struct StaticOptions {
    options: ImageOptionList,
}

impl StaticOptions {
    #[must_use]
    pub fn new(options: ImageOptionList) -> Self {
        Self { options }
    }
}

impl ImageOptionsProvider for StaticOptions {
    fn default_options(&self) -> ImageOptionList {
        self.options.clone()
    }

    fn load_options(&self) -> BoxFuture<'static, Result<ImageOptionList>> {
        let options = self.options.clone();
        async move { Ok(options) }.boxed()
    }
}

/// Provider that scans a directory for supported image files.
///
/// The synchronous defaults come from configuration; the loaded list is every
/// supported image directly inside `directory`, sorted by path.
#[derive(Debug, Clone)]
pub struct DirectoryOptions {
    directory: PathBuf,
    defaults: ImageOptionList,
}

impl DirectoryOptions {
    pub fn new(directory: impl Into<PathBuf>, defaults: ImageOptionList) -> Self {
        Self {
            directory: directory.into(),
            defaults,
        }
    }
}

impl ImageOptionsProvider for DirectoryOptions {
    fn default_options(&self) -> ImageOptionList {
        self.defaults.clone()
    }

    fn load_options(&self) -> BoxFuture<'static, Result<ImageOptionList>> {
        scan_directory(self.directory.clone()).boxed()
    }
}

/// Returns true when the path has an extension the `image` crate can decode.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    image_rs::ImageFormat::from_path(path)
        .map(|format| format.can_read())
        .unwrap_or(false)
}

async fn scan_directory(directory: PathBuf) -> Result<ImageOptionList> {
    let metadata = tokio::fs::metadata(&directory)
        .await
        .map_err(|_| OptionsError::MissingDirectory(directory.display().to_string()))?;
    if !metadata.is_dir() {
        return Err(OptionsError::MissingDirectory(directory.display().to_string()).into());
    }

    let unreadable = |err: std::io::Error| OptionsError::Unreadable(err.to_string());
    let mut entries = tokio::fs::read_dir(&directory).await.map_err(unreadable)?;

    let mut images = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(unreadable)? {
        let path = entry.path();
        let is_file = entry
            .file_type()
            .await
            .map(|file_type| file_type.is_file())
            .unwrap_or(false);
        if is_file && is_supported_image(&path) {
            images.push(path);
        }
    }

    // read_dir order is platform dependent
    images.sort();
    images.dedup();

    // a lossy identifier would point at a file that does not exist
    Ok(images
        .into_iter()
        .filter_map(|path| ImageOption::try_from(path).ok())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn image_option_uses_identifier_as_path_and_display() {
        let option = ImageOption::new("examples/kitchen.jpg");
        assert_eq!(option.as_str(), "examples/kitchen.jpg");
        assert_eq!(option.as_path(), Path::new("examples/kitchen.jpg"));
        assert_eq!(option.display_name(), "kitchen");
        assert_eq!(option.to_string(), "examples/kitchen.jpg");
    }

    #[test]
    fn display_name_falls_back_to_identifier() {
        let option = ImageOption::new("");
        assert_eq!(option.display_name(), "");
    }

    #[test]
    fn option_list_preserves_order() {
        let list: ImageOptionList = ["b.png", "a.png", "c.png"].into_iter().collect();
        let ids: Vec<_> = list.iter().map(ImageOption::as_str).collect();
        assert_eq!(ids, vec!["b.png", "a.png", "c.png"]);
        assert_eq!(list.len(), 3);
        assert!(!list.is_empty());
    }

    #[test]
    fn supported_image_detection_uses_extension() {
        assert!(is_supported_image(Path::new("photo.png")));
        assert!(is_supported_image(Path::new("photo.JPG")));
        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("no_extension")));
    }

    #[tokio::test]
    async fn static_options_load_returns_defaults() {
        let list: ImageOptionList = ["a.png", "b.png"].into_iter().collect();
        let provider = StaticOptions::new(list.clone());

        assert_eq!(provider.default_options(), list);
        assert_eq!(provider.load_options().await.expect("load"), list);
    }

    #[tokio::test]
    async fn directory_options_scan_sorted_supported_files() {
        let dir = tempdir().expect("temp dir");
        for name in ["zebra.png", "apple.jpg", "readme.txt", "middle.webp"] {
            fs::write(dir.path().join(name), b"").expect("write file");
        }
        fs::create_dir(dir.path().join("nested.png")).expect("create dir");

        let defaults: ImageOptionList = ["default.png"].into_iter().collect();
        let provider = DirectoryOptions::new(dir.path(), defaults.clone());

        assert_eq!(provider.default_options(), defaults);

        let loaded = provider.load_options().await.expect("scan");
        let names: Vec<_> = loaded.iter().map(ImageOption::display_name).collect();
        assert_eq!(names, vec!["apple", "middle", "zebra"]);
    }

    #[test]
    fn path_conversion_keeps_utf8_paths_verbatim() {
        let option = ImageOption::try_from(PathBuf::from("/tmp/café.png")).expect("utf-8 path");
        assert_eq!(option.as_str(), "/tmp/café.png");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn directory_options_skip_names_that_are_not_utf8() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().expect("temp dir");
        let latin1 = dir.path().join(OsStr::from_bytes(b"caf\xe9.png"));
        if fs::write(&latin1, b"").is_err() {
            // some filesystems reject non UTF-8 names outright
            return;
        }
        fs::write(dir.path().join("mug.png"), b"").expect("write file");
        assert!(ImageOption::try_from(latin1).is_err());

        let provider = DirectoryOptions::new(dir.path(), ImageOptionList::default());
        let loaded = provider.load_options().await.expect("scan");

        let names: Vec<_> = loaded.iter().map(ImageOption::display_name).collect();
        assert_eq!(names, vec!["mug"]);
        assert!(loaded.iter().all(|option| option.as_path().exists()));
    }

    #[tokio::test]
    async fn directory_options_empty_directory_loads_empty_list() {
        let dir = tempdir().expect("temp dir");
        let provider = DirectoryOptions::new(dir.path(), ImageOptionList::default());

        let loaded = provider.load_options().await.expect("scan");
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn directory_options_missing_directory_errors() {
        let dir = tempdir().expect("temp dir");
        let missing = dir.path().join("absent");
        let provider = DirectoryOptions::new(&missing, ImageOptionList::default());

        match provider.load_options().await {
            Err(Error::Options(OptionsError::MissingDirectory(path))) => {
                assert!(path.contains("absent"));
            }
            other => panic!("expected MissingDirectory, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn directory_options_file_instead_of_directory_errors() {
        let dir = tempdir().expect("temp dir");
        let file = dir.path().join("not_a_dir.png");
        fs::write(&file, b"").expect("write file");
        let provider = DirectoryOptions::new(&file, ImageOptionList::default());

        assert!(matches!(
            provider.load_options().await,
            Err(Error::Options(OptionsError::MissingDirectory(_)))
        ));
    }
}
