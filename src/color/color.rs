//! Color conversions between normalized RGB, HSV and hex forms.

/// Converts an RGB color to HSV. Channels are in `[0, 1]` on both sides.
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> [f64; 3] {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;
    let s = if max == 0.0 { 0.0 } else { d / max };

    let h = if d == 0.0 {
        0.0
    } else if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    [h / 6.0, s, max]
}

/// Converts an HSV color to RGB. Channels are in `[0, 1]` on both sides.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> [f64; 3] {
    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    match (i as i64).rem_euclid(6) {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

/// Converts normalized `[r, g, b]` floats to a hexadecimal color number.
pub fn rgb_to_hex(rgb: [f64; 3]) -> u32 {
    let channel = |c: f64| (c * 255.0).round().clamp(0.0, 255.0) as u32;
    (channel(rgb[0]) << 16) + (channel(rgb[1]) << 8) + channel(rgb[2])
}

/// Converts a hexadecimal color number to normalized `[r, g, b]` floats.
pub fn hex_to_rgb(hex: u32) -> [f64; 3] {
    [
        f64::from((hex >> 16) & 0xFF) / 255.0,
        f64::from((hex >> 8) & 0xFF) / 255.0,
        f64::from(hex & 0xFF) / 255.0,
    ]
}

/// Formats a hex color as a CSS `rgba(...)` string.
pub fn hex_to_rgba_string(hex: u32, alpha: f64) -> String {
    let (r, g, b) = ((hex >> 16) & 0xFF, (hex >> 8) & 0xFF, hex & 0xFF);
    format!("rgba({}, {}, {}, {})", r, g, b, alpha)
}

/// Parses a `#rrggbb` (or bare `rrggbb`) string into a hex color number.
pub fn color_string_to_hex(color: &str) -> Option<u32> {
    let digits = color.strip_prefix('#').unwrap_or(color);
    if digits.is_empty() {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: [f64; 3], b: [f64; 3]) {
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < 1e-9, "{:?} != {:?}", a, b);
        }
    }

    #[test]
    fn test_rgb_hsv_primaries() {
        assert_close(rgb_to_hsv(1.0, 0.0, 0.0), [0.0, 1.0, 1.0]);
        assert_close(rgb_to_hsv(0.0, 1.0, 0.0), [1.0 / 3.0, 1.0, 1.0]);
        assert_close(rgb_to_hsv(0.0, 0.0, 1.0), [2.0 / 3.0, 1.0, 1.0]);
        assert_close(rgb_to_hsv(0.5, 0.5, 0.5), [0.0, 0.0, 0.5]);
        assert_close(rgb_to_hsv(0.0, 0.0, 0.0), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_hsv_to_rgb() {
        assert_close(hsv_to_rgb(0.0, 1.0, 1.0), [1.0, 0.0, 0.0]);
        assert_close(hsv_to_rgb(1.0 / 3.0, 1.0, 1.0), [0.0, 1.0, 0.0]);
        let hsv = rgb_to_hsv(0.2, 0.4, 0.6);
        assert_close(hsv_to_rgb(hsv[0], hsv[1], hsv[2]), [0.2, 0.4, 0.6]);
    }

    #[test]
    fn test_hex_conversions() {
        assert_eq!(rgb_to_hex([1.0, 0.0, 0.0]), 0xFF0000);
        assert_eq!(rgb_to_hex(hex_to_rgb(0x336699)), 0x336699);
        assert_close(hex_to_rgb(0x00FF00), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_rgba_string() {
        assert_eq!(hex_to_rgba_string(0xFF8000, 0.5), "rgba(255, 128, 0, 0.5)");
    }

    #[test]
    fn test_color_string_to_hex() {
        assert_eq!(color_string_to_hex("#ff0000"), Some(0xFF0000));
        assert_eq!(color_string_to_hex("00ff00"), Some(0x00FF00));
        assert_eq!(color_string_to_hex(""), None);
        assert_eq!(color_string_to_hex("#zz"), None);
    }
}
