// SPDX-License-Identifier: MPL-2.0
//! `object_locator` lets the user pick an example image or upload one, then
//! describe what to locate in it.
//!
//! Built with the Iced GUI framework, with Fluent localization, sectioned
//! TOML preferences and an in-memory diagnostics log.

pub mod app;
pub mod detection;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod media;
pub mod text;
pub mod ui;
