// SPDX-License-Identifier: MPL-2.0
//! Small string helpers used by view code.

/// Uppercases the first character of `s` and leaves the rest untouched.
///
/// Characters whose uppercase form spans several code points (e.g. `ß`)
/// expand accordingly. Empty input returns an empty string.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
