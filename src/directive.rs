use strum_macros::Display;

use crate::constants::{image, widget};

/// The closed set of drawable widget families.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    #[strum(serialize = "bar")]
    Bar,
    #[strum(serialize = "graph")]
    Graph,
    #[strum(serialize = "gauge")]
    Gauge,
}

impl WidgetKind {
    /// Returns the wire token for this kind
    pub fn as_token(&self) -> &'static str {
        match self {
            WidgetKind::Bar => widget::BAR_TOKEN,
            WidgetKind::Graph => widget::GRAPH_TOKEN,
            WidgetKind::Gauge => widget::GAUGE_TOKEN,
        }
    }

    /// Resolves a wire token back to a kind
    ///
    /// # Arguments
    /// * `token` - The kind token as found in a marker
    ///
    /// # Returns
    /// The matching kind, or `None` for an unrecognized token
    pub fn from_token(token: &str) -> Option<WidgetKind> {
        match token {
            widget::BAR_TOKEN => Some(WidgetKind::Bar),
            widget::GRAPH_TOKEN => Some(WidgetKind::Graph),
            widget::GAUGE_TOKEN => Some(WidgetKind::Gauge),
            _ => None,
        }
    }

    /// Display label for a raw kind index, mapping anything outside the
    /// known range to the literal `"unknown"`. Out-of-range indices are
    /// displayable but never encodable.
    pub fn name_of(raw: u8) -> &'static str {
        match raw {
            0 => widget::BAR_TOKEN,
            1 => widget::GRAPH_TOKEN,
            2 => widget::GAUGE_TOKEN,
            _ => widget::UNKNOWN_LABEL,
        }
    }
}

/// A decoded widget placement: one bar, graph or gauge to be drawn.
///
/// The `value` field is a percentage by convention (0-100) but is not
/// clamped at this layer; range policy belongs to the drawing side.
/// `id` correlates a graph with a historical data series (e.g. "cpu",
/// "net_eth0_down") across repeated renders; bars and gauges conventionally
/// carry none. An empty `id` encodes to the older 4-field marker format.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetDirective {
    pub kind: WidgetKind,
    pub value: f64,
    pub width: u32,
    pub height: u32,
    pub id: String,
}

impl WidgetDirective {
    pub fn new(kind: WidgetKind, value: f64, width: u32, height: u32) -> Self {
        Self {
            kind,
            value,
            width,
            height,
            id: String::new(),
        }
    }

    /// Attaches a series id to the directive
    pub fn with_id<S: Into<String>>(mut self, id: S) -> Self {
        self.id = id.into();
        self
    }
}

/// A decoded image placement.
///
/// A coordinate of −1 on either axis means "place inline at the current
/// text cursor" rather than at an absolute position. `path` is free text
/// and may itself contain the marker field separator (drive-letter paths).
#[derive(Debug, Clone, PartialEq)]
pub struct ImageDirective {
    pub path: String,
    pub width: u32,
    pub height: u32,
    pub x: i32,
    pub y: i32,
    pub no_cache: bool,
}

impl ImageDirective {
    /// Creates an inline, cached image placement
    pub fn new<S: Into<String>>(path: S, width: u32, height: u32) -> Self {
        Self {
            path: path.into(),
            width,
            height,
            x: image::INLINE_POSITION,
            y: image::INLINE_POSITION,
            no_cache: false,
        }
    }

    /// Pins the image to absolute window coordinates
    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Marks the image as bypassing the pixmap cache
    pub fn no_cache(mut self, no_cache: bool) -> Self {
        self.no_cache = no_cache;
        self
    }

    /// True when the image follows the text flow instead of a fixed position
    pub fn is_inline(&self) -> bool {
        self.x == image::INLINE_POSITION || self.y == image::INLINE_POSITION
    }
}

/// One element of a scanned display string: literal text or a decoded
/// directive, in source order.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Text(String),
    Widget(WidgetDirective),
    Image(ImageDirective),
}
