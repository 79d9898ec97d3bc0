// SPDX-License-Identifier: MPL-2.0
//! In-memory activity log.
//!
//! - [`CircularBuffer`]: Generic ring buffer with bounded capacity
//! - [`DiagnosticEvent`]: Timestamped user actions, state changes, warnings and errors
//! - [`DiagnosticsCollector`] / [`DiagnosticsHandle`]: Direct and channel-based logging

mod buffer;
mod collector;
mod events;

pub use buffer::CircularBuffer;
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    AppStateEvent, DiagnosticEvent, DiagnosticEventKind, UserAction, WarningEvent, WarningType,
};
