// SPDX-License-Identifier: MPL-2.0
//! Image sources for the application.
//!
//! [`options`] defines the example image identifiers and the providers that
//! list them; [`extensions`] holds the file extensions offered in dialogs.

pub mod options;

pub use options::{
    is_supported_image, DirectoryOptions, ImageOption, ImageOptionList, ImageOptionsProvider,
    StaticOptions,
};

pub mod extensions {
    /// Image file extensions offered by the upload dialog.
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico",
    ];
}
