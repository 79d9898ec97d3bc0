// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support using the Fluent localization system.
//!
//! - Locale detection from CLI, config, or system settings
//! - `.ftl` translation files embedded at compile time
//! - Fallback to `en-US` when the requested locale is unavailable

pub mod fluent;

pub use fluent::I18n;
