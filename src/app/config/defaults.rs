// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for layout and timing constants.
//!
//! # Categories
//!
//! - **Example grid**: Thumbnail size and wrapping column
//! - **Window**: Initial and minimum window size
//! - **Detection**: Confidence threshold bounds
//! - **Diagnostics**: Event buffer capacity

// ==========================================================================
// Example Grid Defaults
// ==========================================================================

/// Edge length of a square example thumbnail, in logical pixels.
pub const THUMBNAIL_SIZE: f32 = 56.0;

/// Horizontal and vertical gap between thumbnails.
pub const THUMBNAIL_GAP: f32 = 12.0;

/// Width of the column the thumbnail grid wraps inside.
pub const EXAMPLE_GRID_WIDTH: f32 = 190.0;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 960.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 640.0;

/// Minimum width keeps the grid column and the image pane side by side.
pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 420.0;

// ==========================================================================
// Detection Defaults
// ==========================================================================

/// Located objects scoring below this are not shown.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.5;
pub const MIN_CONFIDENCE_THRESHOLD: f32 = 0.0;
pub const MAX_CONFIDENCE_THRESHOLD: f32 = 1.0;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Number of diagnostic events kept in memory.
pub const DIAGNOSTICS_BUFFER_CAPACITY: usize = 500;

/// Lower bound for the diagnostics buffer.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 16;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(THUMBNAIL_SIZE > 0.0);
    assert!(THUMBNAIL_GAP >= 0.0);
    // at least one thumbnail must fit per row
    assert!(EXAMPLE_GRID_WIDTH >= THUMBNAIL_SIZE);

    assert!(MIN_WINDOW_WIDTH > EXAMPLE_GRID_WIDTH);
    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);

    assert!(MIN_CONFIDENCE_THRESHOLD <= DEFAULT_CONFIDENCE_THRESHOLD);
    assert!(DEFAULT_CONFIDENCE_THRESHOLD <= MAX_CONFIDENCE_THRESHOLD);

    assert!(DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
};
