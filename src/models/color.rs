//! Display colors for calendar events and charts

/// Color given to events when the user doesn't pick one
pub const DEFAULT_EVENT_COLOR: &str = "#fbb6ce";

/// Palette offered by the event form and used for chart slices
pub const PALETTE: [&str; 6] = [
    "#fbb6ce", "#9f7aea", "#4fd1c5", "#f687b3", "#feb2b2", "#fbd38d",
];

/// Parse a `#rrggbb` hex color into its components
pub fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Palette entry after `current`, wrapping around
pub fn next_in_palette(current: &str) -> &'static str {
    let index = PALETTE
        .iter()
        .position(|c| c.eq_ignore_ascii_case(current))
        .map(|i| (i + 1) % PALETTE.len())
        .unwrap_or(0);
    PALETTE[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#fbb6ce"), Some((0xfb, 0xb6, 0xce)));
        assert_eq!(parse_hex("#FFFFFF"), Some((255, 255, 255)));
        assert_eq!(parse_hex("fbb6ce"), None);
        assert_eq!(parse_hex("#fff"), None);
        assert_eq!(parse_hex("#gggggg"), None);
    }

    #[test]
    fn test_next_in_palette_wraps() {
        assert_eq!(next_in_palette("#fbb6ce"), "#9f7aea");
        assert_eq!(next_in_palette("#fbd38d"), "#fbb6ce");
        assert_eq!(next_in_palette("#123456"), "#fbb6ce");
    }
}
