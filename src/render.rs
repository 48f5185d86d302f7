//! Consumer-facing dispatch over scanned segments.
//!
//! The actual drawing of bars, graphs, gauges and images lives outside this
//! crate; [`DrawTarget`] is the seam it plugs into. [`render`] scans a
//! display string and hands each segment to the target in source order.

use crate::directive::{ImageDirective, Segment, WidgetDirective};
use crate::error::Result;
use crate::scanner::scan;

/// Trait for the drawing side of the protocol
///
/// Implementors resolve widget ids and image paths to live data; the codec
/// performs no such resolution.
pub trait DrawTarget {
    /// Draws a literal text span at the current cursor
    fn draw_text(&mut self, text: &str) -> Result<()>;

    /// Draws one bar, graph or gauge
    fn draw_widget(&mut self, directive: &WidgetDirective) -> Result<()>;

    /// Draws one image, inline or at absolute coordinates
    fn draw_image(&mut self, directive: &ImageDirective) -> Result<()>;
}

/// Scans a display string and dispatches every segment to the target
///
/// # Arguments
/// * `text` - The display string to render
/// * `target` - The drawing collaborator receiving the segments
///
/// # Returns
/// `Ok(())` once every segment has been dispatched, or the first error
/// reported by the target
pub fn render(text: &str, target: &mut dyn DrawTarget) -> Result<()> {
    for segment in scan(text) {
        match &segment {
            Segment::Text(text) => target.draw_text(text)?,
            Segment::Widget(directive) => target.draw_widget(directive)?,
            Segment::Image(directive) => target.draw_image(directive)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[derive(Default)]
    struct RecordingTarget {
        calls: Vec<String>,
        fail_on_widget: bool,
    }

    impl DrawTarget for RecordingTarget {
        fn draw_text(&mut self, text: &str) -> Result<()> {
            self.calls.push(format!("text:{}", text));
            Ok(())
        }

        fn draw_widget(&mut self, directive: &WidgetDirective) -> Result<()> {
            if self.fail_on_widget {
                return Err(Error::DrawError("widget backend unavailable".to_string()));
            }
            self.calls.push(format!("widget:{}", directive.kind));
            Ok(())
        }

        fn draw_image(&mut self, directive: &ImageDirective) -> Result<()> {
            self.calls.push(format!("image:{}", directive.path));
            Ok(())
        }
    }

    #[test]
    fn test_render_dispatch_order() {
        let mut target = RecordingTarget::default();
        render(
            "CPU: \u{0}WGT:bar:50.00:100:8\u{0} \u{0}IMG:/icon.png:16:16:-1:-1:0\u{0}",
            &mut target,
        )
        .unwrap();
        assert_eq!(
            target.calls,
            vec!["text:CPU: ", "widget:bar", "text: ", "image:/icon.png"]
        );
    }

    #[test]
    fn test_render_propagates_target_errors() {
        let mut target = RecordingTarget {
            fail_on_widget: true,
            ..Default::default()
        };
        let result = render("\u{0}WGT:bar:50.00:100:8\u{0}", &mut target);
        assert!(matches!(result, Err(Error::DrawError(_))));
    }
}
