//! Marker codecs for the embedded directive protocol
//! Currently supports the following marker families:
//! - `widget` : Progress bars, graphs and gauges
//! - `image` : Inline or absolutely positioned images

pub mod image;
pub mod widget;

pub use image::contains_image_marker;
pub use widget::contains_marker;
