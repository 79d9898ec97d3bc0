// SPDX-License-Identifier: MPL-2.0
//! User interface components, Elm-style: state down, messages up.
//!
//! # Components
//!
//! - [`top_bar`] - Title, upload button and theme toggle
//! - [`example_images`] - Grid of selectable example images
//! - [`image_pane`] - The current image with its badge and last prompt
//! - [`detection_overlay`] - Boxes and labels of located objects
//! - [`prompt`] - Text input for what to locate
//! - [`notifications`] - Toast notification system
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized button and container styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode

pub mod design_tokens;
pub mod detection_overlay;
pub mod example_images;
pub mod image_pane;
pub mod notifications;
pub mod prompt;
pub mod styles;
pub mod theming;
pub mod top_bar;
