//! `statmark` is a library implementing the embedded widget marker protocol
//! of a desktop status display.
//!
//! A display string is ordinary template text interleaved with compact,
//! self-delimiting marker tokens for live visual elements (progress bars,
//! graphs, gauges, inline images). Markers survive as plain characters
//! through the template-building stage; at draw time the scanner in
//! `scanner` splits the string into ordered text and directive segments for
//! the renderer to consume.
//!
//! "Hello world" example:
//! ```
//! use statmark::writer::MarkupWriter;
//! use statmark::scanner::scan;
//!
//! let display = MarkupWriter::new()
//!     .text("CPU: ")
//!     .bar(75.0)
//!     .into_string();
//!
//! let segments = scan(&display);
//! assert_eq!(segments.len(), 2);
//! ```

pub mod config;
pub mod constants;
pub mod directive;
pub mod error;
pub mod log;
pub mod markers;
pub mod render;
pub mod scanner;
pub mod writer;

/// The statmark prelude
///
/// This module re-exports the most commonly used items from statmark.
/// You can use it with `use statmark::prelude::*;` to bring all common
/// items into scope.
pub mod prelude {
    // Re-export commonly used traits
    pub use crate::render::DrawTarget;

    // Re-export commonly used types
    pub use crate::directive::{ImageDirective, Segment, WidgetDirective, WidgetKind};
    pub use crate::error::Result;

    // Re-export commonly used constants
    pub use crate::constants::marker;

    // Re-export commonly used functions
    pub use crate::markers::{contains_image_marker, contains_marker};
    pub use crate::scanner::scan;
}
