//! Splits a display string into literal text and decoded directives.
//!
//! The template-building stage and the draw stage are decoupled: markers
//! travel as plain characters inside an ordinary string until the draw
//! stage consumes them. This module is the sole parsing surface that stage
//! needs — it walks the string once and emits an ordered sequence of
//! [`Segment`]s, decoding every complete marker it finds and leaving
//! anything marker-looking but malformed as literal text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::marker;
use crate::directive::Segment;
use crate::markers::{image, widget};

// Regex to locate the next opening sequence of either marker family
static MARKER_START: Lazy<Regex> = Lazy::new(|| Regex::new("\u{0}(?:WGT|IMG):").unwrap());

/// Scans a display string into an ordered sequence of segments.
///
/// Repeatedly finds the leftmost marker opening at or after the scan
/// cursor, emits the pending literal span (when non-empty) and the decoded
/// directive, and continues past the token's closing delimiter. When a
/// candidate fails to decode, scanning resumes one byte past its opening
/// delimiter and the failed text stays inside the pending literal span, so
/// corrupt input degrades to visible text instead of aborting the scan.
///
/// # Arguments
/// * `text` - The display string to scan
///
/// # Returns
/// At least one segment; a marker-free input (the empty string included)
/// yields exactly one text segment holding the whole input. Concatenating
/// the literal segments with the re-encoded directives reconstructs the
/// input byte for byte.
pub fn scan(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut search_from = 0;

    while let Some(found) = MARKER_START.find(&text[search_from..]) {
        let start = search_from + found.start();
        match decode_at(text, start) {
            Some((segment, token_end)) => {
                if start > literal_start {
                    segments.push(Segment::Text(text[literal_start..start].to_string()));
                }
                crate::debug!(
                    "decoded marker at {}..{}: {:?}",
                    start,
                    token_end,
                    segment
                );
                segments.push(segment);
                literal_start = token_end;
                search_from = token_end;
            }
            None => {
                // Not a real marker; keep it literal and look past the opener
                search_from = start + 1;
            }
        }
    }

    if literal_start < text.len() || segments.is_empty() {
        segments.push(Segment::Text(text[literal_start..].to_string()));
    }
    segments
}

/// Attempts to decode the full token opening at `start`.
///
/// # Returns
/// The decoded segment and the byte offset just past the closing delimiter,
/// or `None` when no closing delimiter exists or the token is malformed.
fn decode_at(text: &str, start: usize) -> Option<(Segment, usize)> {
    // The opening byte is itself the delimiter, so search past it
    let close = start + 1 + text[start + 1..].find(marker::DELIMITER)?;
    let token = &text[start..=close];
    let segment = if token.starts_with(marker::WIDGET_PREFIX) {
        Segment::Widget(widget::decode(token)?)
    } else {
        Segment::Image(image::decode(token)?)
    };
    Some((segment, close + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directive::WidgetKind;
    use crate::markers;

    /// Rebuilds the input from a scan result, re-encoding directives
    fn reconstruct(segments: &[Segment]) -> String {
        segments
            .iter()
            .map(|segment| match segment {
                Segment::Text(text) => text.clone(),
                Segment::Widget(directive) => markers::widget::encode(directive),
                Segment::Image(directive) => markers::image::encode(directive),
            })
            .collect()
    }

    #[test]
    fn test_scan_plain_text() {
        let segments = scan("just plain text");
        assert_eq!(segments, vec![Segment::Text("just plain text".to_string())]);
    }

    #[test]
    fn test_scan_empty_input() {
        // The scanner never returns an empty sequence
        let segments = scan("");
        assert_eq!(segments, vec![Segment::Text(String::new())]);
    }

    #[test]
    fn test_scan_mixed() {
        let segments = scan("CPU: \u{0}WGT:bar:75.00:100:8\u{0}");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], Segment::Text("CPU: ".to_string()));
        match &segments[1] {
            Segment::Widget(directive) => {
                assert_eq!(directive.kind, WidgetKind::Bar);
                assert!((directive.value - 75.0).abs() < f64::EPSILON);
                assert_eq!((directive.width, directive.height), (100, 8));
            }
            other => panic!("expected a widget segment, got {:?}", other),
        }
    }

    #[test]
    fn test_scan_interleaved_kinds() {
        let input = "CPU: \u{0}WGT:bar:50.00:100:8\u{0} \u{0}IMG:/icon.png:16:16:-1:-1:0\u{0}";
        let segments = scan(input);
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[0], Segment::Text("CPU: ".to_string()));
        assert!(matches!(segments[1], Segment::Widget(_)));
        assert_eq!(segments[2], Segment::Text(" ".to_string()));
        match &segments[3] {
            Segment::Image(directive) => {
                assert_eq!(directive.path, "/icon.png");
                assert!(directive.is_inline());
            }
            other => panic!("expected an image segment, got {:?}", other),
        }
        assert_eq!(reconstruct(&segments), input);
    }

    #[test]
    fn test_scan_adjacent_markers_skip_empty_spans() {
        let input = "\u{0}WGT:bar:10.00:50:4\u{0}\u{0}WGT:gauge:20.00:40:40\u{0}";
        let segments = scan(input);
        assert_eq!(segments.len(), 2);
        assert!(matches!(segments[0], Segment::Widget(_)));
        assert!(matches!(segments[1], Segment::Widget(_)));
        assert_eq!(reconstruct(&segments), input);
    }

    #[test]
    fn test_scan_marker_at_boundaries() {
        // Leading marker, trailing text
        let segments = scan("\u{0}WGT:bar:10.00:50:4\u{0} tail");
        assert_eq!(segments.len(), 2);
        assert!(matches!(segments[0], Segment::Widget(_)));
        assert_eq!(segments[1], Segment::Text(" tail".to_string()));

        // Leading text, trailing marker: no empty final text segment
        let segments = scan("head \u{0}WGT:bar:10.00:50:4\u{0}");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], Segment::Text("head ".to_string()));
        assert!(matches!(segments[1], Segment::Widget(_)));
    }

    #[test]
    fn test_malformed_marker_stays_literal() {
        // Bad kind: the whole candidate is surfaced verbatim as text
        let input = "before \u{0}WGT:bogus:50.00:10:2\u{0} after";
        let segments = scan(input);
        assert_eq!(segments, vec![Segment::Text(input.to_string())]);

        // Truncated token with no closing delimiter
        let input = "value: \u{0}WGT:bar:50.00:100:8";
        let segments = scan(input);
        assert_eq!(segments, vec![Segment::Text(input.to_string())]);
    }

    #[test]
    fn test_failed_decode_resumes_past_opening_delimiter() {
        // The corrupt candidate's closing search hits the next marker's
        // opener; resuming one byte past the failed opener still finds the
        // valid marker that follows.
        let input = "\u{0}WGT:bad\u{0}WGT:bar:50.00:10:2\u{0}";
        let segments = scan(input);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], Segment::Text("\u{0}WGT:bad".to_string()));
        match &segments[1] {
            Segment::Widget(directive) => assert_eq!(directive.kind, WidgetKind::Bar),
            other => panic!("expected a widget segment, got {:?}", other),
        }
        assert_eq!(reconstruct(&segments), input);
    }

    #[test]
    fn test_scan_totality_reconstructs_input() {
        let inputs = vec![
            "".to_string(),
            "plain".to_string(),
            "\u{0}".to_string(),
            "\u{0}WGT:".to_string(),
            "a\u{0}IMG:b".to_string(),
            "CPU: \u{0}WGT:bar:75.00:100:8\u{0}".to_string(),
            "\u{0}IMG:C:/Users/image.png:64:48:100:-1:1\u{0}".to_string(),
            "x\u{0}WGT:graph:1.00:2:3:cpu\u{0}y\u{0}IMG:/i.png:1:1:-1:-1:0\u{0}z".to_string(),
            "\u{0}WGT:bar:nope\u{0} then \u{0}WGT:gauge:5.00:4:4\u{0}".to_string(),
        ];
        for input in inputs {
            let segments = scan(&input);
            assert!(!segments.is_empty());
            assert_eq!(reconstruct(&segments), input, "input: {:?}", input);
        }
    }
}
