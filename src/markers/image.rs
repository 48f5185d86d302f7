//! Image marker codec.
//!
//! An image marker is the self-delimited wire form of an [`ImageDirective`]:
//!
//! ```text
//! \0IMG:<path>:<width>:<height>:<x>:<y>:<nocache>\0
//! ```
//!
//! Unlike the widget marker, the leading field is free text that may itself
//! contain the field separator (drive-letter paths such as `C:/...`). The
//! encoder does not escape it; the decoder instead anchors on the five
//! right-most fields and treats everything to their left as the path.

use crate::constants::marker;
use crate::directive::ImageDirective;

/// Encodes an image directive into its marker token.
///
/// # Arguments
/// * `directive` - The directive to encode
///
/// # Returns
/// The marker token, delimited on both sides by the NUL byte
pub fn encode(directive: &ImageDirective) -> String {
    format!(
        "{}{}:{}:{}:{}:{}:{}{}",
        marker::IMAGE_PREFIX,
        directive.path,
        directive.width,
        directive.height,
        directive.x,
        directive.y,
        if directive.no_cache { '1' } else { '0' },
        marker::DELIMITER
    )
}

/// Decodes an image marker token.
///
/// The five right-most `:`-delimited fields are taken as
/// `width, height, x, y, nocache`; whatever remains on the left, embedded
/// separators included, is the path. Yields `None` when either delimiter is
/// missing, fewer than 6 fields exist, a dimension or coordinate does not
/// parse, or the cache flag is not `0`/`1`.
///
/// # Arguments
/// * `token` - The candidate token, delimiters included
///
/// # Returns
/// The decoded directive, or `None` when the token is not a valid marker
pub fn decode(token: &str) -> Option<ImageDirective> {
    let interior = token
        .strip_prefix(marker::IMAGE_PREFIX)?
        .strip_suffix(marker::DELIMITER)?;

    // Right-anchored split: the path absorbs any leftover separators
    let mut fields = interior.rsplitn(6, marker::FIELD_SEPARATOR);
    let no_cache = match fields.next()? {
        "1" => true,
        "0" => false,
        _ => return None,
    };
    let y = fields.next()?.parse::<i32>().ok()?;
    let x = fields.next()?.parse::<i32>().ok()?;
    let height = fields.next()?.parse::<u32>().ok()?;
    let width = fields.next()?.parse::<u32>().ok()?;
    let path = fields.next()?;

    Some(
        ImageDirective::new(path, width, height)
            .at(x, y)
            .no_cache(no_cache),
    )
}

/// Cheap existence probe for an image marker pairing.
pub fn contains_image_marker(text: &str) -> bool {
    match text.find(marker::IMAGE_PREFIX) {
        Some(pos) => text[pos + marker::IMAGE_PREFIX.len()..].contains(marker::DELIMITER),
        None => false,
    }
}
