//! Contrast color rule for role badges

use shared::{InvalidColorFormatError, PortalError, Result};

/// Neutral gray substituted for the unset-color sentinel
pub const DEFAULT_BADGE_COLOR: &str = "#99AAB5";

/// Role color the upstream service uses to mean "no color set"
pub const UNSET_ROLE_COLOR: &str = "#000000";

/// Text color chosen for contrast against a badge background
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    Black,
    White,
}

impl TextColor {
    /// The "#RRGGBB" form of this text color
    pub fn as_hex(&self) -> &'static str {
        match self {
            TextColor::Black => "#000000",
            TextColor::White => "#FFFFFF",
        }
    }
}

/// Substitute the unset-color sentinel with the neutral default.
///
/// Applies only to the background swatch; role names and IDs are untouched.
pub fn effective_badge_color(role_color: &str) -> &str {
    if role_color == UNSET_ROLE_COLOR {
        DEFAULT_BADGE_COLOR
    } else {
        role_color
    }
}

/// Pick black or white text for a "#RRGGBB" background.
///
/// Luminance is computed on the raw 0-255 channels with a fixed 127.5 cutoff.
/// This is intentionally simpler than the normalized WCAG formula; the
/// threshold decides which badges get black vs. white text and must not
/// change.
pub fn text_color_for(background: &str) -> Result<TextColor> {
    let (r, g, b) = decode_hex(background)?;

    let luminance = 0.2126 * f64::from(r) + 0.7152 * f64::from(g) + 0.0722 * f64::from(b);

    Ok(if luminance > 127.5 {
        TextColor::Black
    } else {
        TextColor::White
    })
}

/// Decode a "#RRGGBB" string into its three byte channels
pub fn decode_hex(color: &str) -> Result<(u8, u8, u8)> {
    let digits = match color.strip_prefix('#') {
        Some(rest) if rest.len() == 6 && rest.chars().all(|c| c.is_ascii_hexdigit()) => rest,
        _ => return Err(invalid(color)),
    };

    // All-ASCII after the check above, so byte slicing is safe
    let channel = |digits: &str, at: usize| {
        u8::from_str_radix(&digits[at..at + 2], 16).map_err(|_| invalid(color))
    };

    Ok((channel(digits, 0)?, channel(digits, 2)?, channel(digits, 4)?))
}

fn invalid(value: &str) -> PortalError {
    InvalidColorFormatError {
        value: value.to_string(),
    }
    .into()
}
