//! Widget marker codec.
//!
//! A widget marker is the self-delimited wire form of a [`WidgetDirective`]:
//!
//! ```text
//! \0WGT:<kind>:<value>:<width>:<height>[:<id>]\0
//! ```
//!
//! The trailing `:<id>` field is present only for identified markers; its
//! absence is the older 4-field format, which stays decodable.

use crate::constants::marker;
use crate::directive::{WidgetDirective, WidgetKind};

/// Encodes a widget directive into its marker token.
///
/// The value is always formatted with two decimal digits so that a decoded
/// directive reproduces it within ±0.01. An empty `id` is omitted entirely,
/// producing the legacy 4-field form.
///
/// # Arguments
/// * `directive` - The directive to encode
///
/// # Returns
/// The marker token, delimited on both sides by the NUL byte
pub fn encode(directive: &WidgetDirective) -> String {
    let mut token = format!(
        "{}{}:{:.2}:{}:{}",
        marker::WIDGET_PREFIX,
        directive.kind.as_token(),
        directive.value,
        directive.width,
        directive.height
    );
    if !directive.id.is_empty() {
        token.push(marker::FIELD_SEPARATOR);
        token.push_str(&directive.id);
    }
    token.push(marker::DELIMITER);
    token
}

/// Decodes a widget marker token.
///
/// Succeeds only when the token carries the full `\0WGT:` prefix, a trailing
/// NUL, a recognized kind, a numeric value and at least 4 interior fields.
/// A 5th field is taken verbatim as the id (embedded separators included);
/// its absence yields an empty id. Any malformed or truncated token yields
/// `None` rather than an error: a failed decode just means "this was not
/// actually a marker".
///
/// # Arguments
/// * `token` - The candidate token, delimiters included
///
/// # Returns
/// The decoded directive, or `None` when the token is not a valid marker
pub fn decode(token: &str) -> Option<WidgetDirective> {
    let interior = token
        .strip_prefix(marker::WIDGET_PREFIX)?
        .strip_suffix(marker::DELIMITER)?;

    // Bounded split: everything past the 4th separator belongs to the id
    let mut fields = interior.splitn(5, marker::FIELD_SEPARATOR);
    let kind = WidgetKind::from_token(fields.next()?)?;
    let value = fields.next()?.parse::<f64>().ok()?;
    let width = fields.next()?.parse::<u32>().ok()?;
    let height = fields.next()?.parse::<u32>().ok()?;
    let id = fields.next().unwrap_or("");

    Some(WidgetDirective::new(kind, value, width, height).with_id(id))
}

/// Cheap existence probe for a widget marker pairing.
///
/// Checks only that a `\0WGT:` prefix is followed by a closing NUL somewhere
/// later in the text; callers pay for a full scan only when this is true.
pub fn contains_marker(text: &str) -> bool {
    match text.find(marker::WIDGET_PREFIX) {
        Some(pos) => text[pos + marker::WIDGET_PREFIX.len()..].contains(marker::DELIMITER),
        None => false,
    }
}
