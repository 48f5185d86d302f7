//! Producer-facing construction of display strings.
//!
//! The template-building stage concatenates literal text with encoded
//! marker tokens into one ordinary string; [`MarkupWriter`] is the helper
//! that does the concatenation, pulling default geometry from a
//! [`DisplayConfig`] whenever the caller gives no explicit dimensions.

use crate::config::DisplayConfig;
use crate::directive::{ImageDirective, WidgetDirective, WidgetKind};
use crate::markers;

pub struct MarkupWriter {
    config: DisplayConfig,
    buffer: String,
}

impl Default for MarkupWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupWriter {
    pub fn new() -> Self {
        Self::with_config(DisplayConfig::new())
    }

    /// Creates a writer whose default widget geometry comes from `config`
    pub fn with_config(config: DisplayConfig) -> Self {
        Self {
            config,
            buffer: String::new(),
        }
    }

    /// Appends literal template text
    pub fn text<S: AsRef<str>>(mut self, text: S) -> Self {
        self.buffer.push_str(text.as_ref());
        self
    }

    /// Appends a progress bar marker using the configured default size
    pub fn bar(self, value: f64) -> Self {
        let (width, height) = (self.config.widgets.bar_width, self.config.widgets.bar_height);
        self.bar_sized(value, width, height)
    }

    pub fn bar_sized(self, value: f64, width: u32, height: u32) -> Self {
        self.widget(WidgetDirective::new(WidgetKind::Bar, value, width, height))
    }

    /// Appends a graph marker correlated with the `id` data series
    pub fn graph<S: Into<String>>(self, value: f64, id: S) -> Self {
        let (width, height) = (
            self.config.widgets.graph_width,
            self.config.widgets.graph_height,
        );
        self.graph_sized(value, id, width, height)
    }

    pub fn graph_sized<S: Into<String>>(self, value: f64, id: S, width: u32, height: u32) -> Self {
        self.widget(WidgetDirective::new(WidgetKind::Graph, value, width, height).with_id(id))
    }

    /// Appends a radial gauge marker using the configured default size
    pub fn gauge(self, value: f64) -> Self {
        let (width, height) = (
            self.config.widgets.gauge_width,
            self.config.widgets.gauge_height,
        );
        self.gauge_sized(value, width, height)
    }

    pub fn gauge_sized(self, value: f64, width: u32, height: u32) -> Self {
        self.widget(WidgetDirective::new(WidgetKind::Gauge, value, width, height))
    }

    /// Appends an already built widget directive
    pub fn widget(mut self, directive: WidgetDirective) -> Self {
        self.buffer.push_str(&markers::widget::encode(&directive));
        self
    }

    /// Appends an inline image marker using the configured defaults
    pub fn image<S: Into<String>>(self, path: S) -> Self {
        let (width, height, no_cache) = (
            self.config.images.width,
            self.config.images.height,
            self.config.images.no_cache,
        );
        self.image_directive(ImageDirective::new(path, width, height).no_cache(no_cache))
    }

    /// Appends an image marker pinned to absolute window coordinates
    pub fn image_at<S: Into<String>>(
        self,
        path: S,
        width: u32,
        height: u32,
        x: i32,
        y: i32,
    ) -> Self {
        let no_cache = self.config.images.no_cache;
        self.image_directive(
            ImageDirective::new(path, width, height)
                .at(x, y)
                .no_cache(no_cache),
        )
    }

    /// Appends an already built image directive
    pub fn image_directive(mut self, directive: ImageDirective) -> Self {
        self.buffer.push_str(&markers::image::encode(&directive));
        self
    }

    /// Consumes the writer, yielding the assembled display string
    pub fn into_string(self) -> String {
        self.buffer
    }
}
