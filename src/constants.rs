//! Module for shared constants used across the codebase

/// Marker framing characters and prefixes.
///
/// Every marker is delimited on both sides by the NUL control byte, which
/// cannot appear in ordinary renderable text, so a marker can never be
/// confused with surrounding template content.
pub mod marker {
    /// Opening and closing delimiter of every marker token
    pub const DELIMITER: char = '\u{0}';
    /// Opening sequence of a widget marker (delimiter included)
    pub const WIDGET_PREFIX: &str = "\u{0}WGT:";
    /// Opening sequence of an image marker (delimiter included)
    pub const IMAGE_PREFIX: &str = "\u{0}IMG:";
    /// Field separator inside a marker token
    pub const FIELD_SEPARATOR: char = ':';
}

pub mod widget {
    /// Kind token for a progress bar
    pub const BAR_TOKEN: &str = "bar";
    /// Kind token for a line/bar graph
    pub const GRAPH_TOKEN: &str = "graph";
    /// Kind token for a radial gauge
    pub const GAUGE_TOKEN: &str = "gauge";
    /// Label rendered for a kind index outside the known range
    pub const UNKNOWN_LABEL: &str = "unknown";
}

pub mod image {
    /// Sentinel coordinate meaning "place inline at the current text cursor"
    pub const INLINE_POSITION: i32 = -1;
}
