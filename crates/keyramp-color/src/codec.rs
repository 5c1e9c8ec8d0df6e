//! Converting colors to and from channel triples and text notation.
//!
//! # Text notation
//!
//! | Space  | Example                      |
//! |--------|------------------------------|
//! | RGB    | `rgb(255, 136, 0)`           |
//! | HSL    | `hsl(32deg, 100%, 50%)`      |
//! | HSV    | `hsv(32deg, 100%, 100%)`     |
//! | HSLuv  | `hsluv(33, 100, 69)`         |
//! | LAB    | `lab(69%, 39, 75)`           |
//! | LCH    | `lch(69%, 84, 63deg)`        |
//! | CAM02  | `jab(74%, 17, 29)`           |
//! | CAM02p | `jch(74%, 34, 59deg)`        |
//! | HEX    | `#ff8800`                    |
//!
//! [`parse`] also accepts `#rgb`, bare hex digits and CSS color names. The
//! `%` and `deg` suffixes are optional on input; for HSL and HSV the second
//! and third components are percentages, so `parse(&format(c, space))`
//! always lands back near `c`.

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::trace;

use crate::color::Color;
use crate::error::{ParseError, Result};
use crate::model;
use crate::named;
use crate::space::{ChannelUnit, ColorSpace};
use crate::util::{filter_nan, round};

/// Channels of `color` in `space`, with undefined values coerced to `0`.
///
/// HEX yields the RGB channels.
///
/// ```rust
/// use keyramp_color::{to_space, Color, ColorSpace};
///
/// let [h, s, l] = to_space(&Color::from_rgb8(128, 128, 128), ColorSpace::Hsl);
/// assert_eq!(h, 0.0); // greys have no hue
/// assert_eq!(s, 0.0);
/// assert!((l - 0.502).abs() < 1e-3);
/// ```
pub fn to_space(color: &Color, space: ColorSpace) -> [f64; 3] {
    color.channels_raw(space).map(filter_nan)
}

/// Builds a color from channels in `space`, clamping into sRGB.
pub fn from_space(channels: [f64; 3], space: ColorSpace) -> Color {
    Color::from_array(model::from_channels(channels, space))
}

/// Parses color text.
///
/// ```rust
/// use keyramp_color::parse;
///
/// assert_eq!(parse("#f80").unwrap().to_hex(), "#ff8800");
/// assert_eq!(parse("hsl(0deg, 100%, 50%)").unwrap().to_hex(), "#ff0000");
/// assert_eq!(parse("Tomato").unwrap().to_hex(), "#ff6347");
/// assert!(parse("lab(50%, 10)").is_err());
/// ```
pub fn parse(text: &str) -> Result<Color> {
    let s = text.trim();
    if s.is_empty() {
        return Err(ParseError::Empty(text.to_string()));
    }

    if let Some(open) = s.find('(') {
        return parse_function(s, open);
    }

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }

    if let Some([r, g, b]) = named::lookup(s) {
        return Ok(Color::from_rgb8(r, g, b));
    }

    if matches!(s.len(), 3 | 6) && s.chars().all(|c| c.is_ascii_hexdigit()) {
        trace!(text = s, "reading bare digits as hex");
        return parse_hex(s);
    }

    Err(ParseError::UnknownName(s.to_string()))
}

/// Parses `name(c1, c2, c3)`; `open` is the byte index of `(`.
fn parse_function(s: &str, open: usize) -> Result<Color> {
    let malformed = |reason: String| ParseError::Malformed {
        value: s.to_string(),
        reason,
    };

    let name = s[..open].trim().to_ascii_lowercase();
    let space = ColorSpace::from_function_name(&name)
        .ok_or_else(|| malformed(format!("unknown color function '{}'", name)))?;

    let inner = s[open + 1..]
        .strip_suffix(')')
        .ok_or_else(|| malformed("missing closing parenthesis".to_string()))?;

    let parts: Vec<&str> = inner.split(',').map(|p| p.trim()).collect();
    if parts.len() != 3 {
        return Err(malformed(format!(
            "expected 3 components, got {}",
            parts.len()
        )));
    }

    let mut values = [0.0f64; 3];
    for (i, part) in parts.iter().enumerate() {
        let num_str = part.trim_end_matches('%');
        let num_str = num_str.strip_suffix("deg").unwrap_or(num_str).trim();
        values[i] = num_str
            .parse::<f64>()
            .map_err(|_| malformed(format!("invalid component '{}': expected a number", part)))?;
    }

    if matches!(space, ColorSpace::Hsl | ColorSpace::Hsv) {
        values[1] /= 100.0;
        values[2] /= 100.0;
    }

    Ok(from_space(values, space))
}

/// Parses a hex color code (without the `#` prefix).
fn parse_hex(hex: &str) -> Result<Color> {
    let invalid = || ParseError::InvalidHex(format!("#{}", hex));
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let digit = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
    };

    match hex.len() {
        // #rgb -> #rrggbb
        3 => Ok(Color::from_rgb8(
            digit(0..1)? * 17,
            digit(1..2)? * 17,
            digit(2..3)? * 17,
        )),
        6 => Ok(Color::from_rgb8(digit(0..2)?, digit(2..4)?, digit(4..6)?)),
        _ => Err(invalid()),
    }
}

/// Text notation of `color` in `space`.
///
/// ```rust
/// use keyramp_color::{format, Color, ColorSpace};
///
/// let orange = Color::from_rgb8(255, 136, 0);
/// assert_eq!(format(&orange, ColorSpace::Rgb), "rgb(255, 136, 0)");
/// assert_eq!(format(&orange, ColorSpace::Hsl), "hsl(32deg, 100%, 50%)");
/// assert_eq!(format(&orange, ColorSpace::Hex), "#ff8800");
/// ```
pub fn format(color: &Color, space: ColorSpace) -> String {
    let Some(function) = space.function_name() else {
        return color.to_hex();
    };

    let values = to_space(color, space);
    let fraction_percent = matches!(space, ColorSpace::Hsl | ColorSpace::Hsv);
    let parts: Vec<String> = values
        .iter()
        .zip(space.units())
        .map(|(&value, unit)| match unit {
            ChannelUnit::Plain => format!("{}", round(value, 0)),
            ChannelUnit::Degrees => format!("{}deg", round(value, 0)),
            ChannelUnit::Percent if fraction_percent => format!("{}%", round(value * 100.0, 0)),
            ChannelUnit::Percent => format!("{}%", round(value, 0)),
        })
        .collect();

    format!("{}({})", function, parts.join(", "))
}

/// Named channel values of a color in one space.
///
/// Serializes as a map keyed by channel name (`{"J": .., "a": .., "b": ..}`);
/// HEX serializes integer `{r, g, b}`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelObject {
    space: ColorSpace,
    values: [f64; 3],
}

impl ChannelObject {
    pub fn space(&self) -> ColorSpace {
        self.space
    }

    pub fn values(&self) -> [f64; 3] {
        self.values
    }

    /// Value of the channel called `key`, if the space has one.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.iter().find(|(name, _)| *name == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.space
            .channel_names()
            .into_iter()
            .zip(self.values.iter().copied())
    }
}

impl Serialize for ChannelObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        for (name, value) in self.iter() {
            if self.space == ColorSpace::Hex {
                map.serialize_entry(name, &(value as u8))?;
            } else {
                map.serialize_entry(name, &value)?;
            }
        }
        map.end()
    }
}

/// Structured channels of `color` in `space`, rounded to 2 decimals.
///
/// HSL and HSV keep saturation, lightness and value as fractions; HEX
/// yields the rounded RGB bytes.
pub fn format_object(color: &Color, space: ColorSpace) -> ChannelObject {
    let values = if space == ColorSpace::Hex {
        color.rgb8().map(f64::from)
    } else {
        to_space(color, space).map(|v| round(v, 2))
    };
    ChannelObject { space, values }
}

/// Either notation produced by [`convert_color_value`].
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum ConvertedValue {
    Text(String),
    Object(ChannelObject),
}

impl ConvertedValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ConvertedValue::Text(s) => Some(s),
            ConvertedValue::Object(_) => None,
        }
    }

    pub fn as_object(&self) -> Option<&ChannelObject> {
        match self {
            ConvertedValue::Object(o) => Some(o),
            ConvertedValue::Text(_) => None,
        }
    }
}

fn convert(color: &Color, space: ColorSpace, as_object: bool) -> ConvertedValue {
    if as_object {
        ConvertedValue::Object(format_object(color, space))
    } else {
        ConvertedValue::Text(format(color, space))
    }
}

/// Converts color text into the space named by `space_tag`.
///
/// ```rust
/// use keyramp_color::{convert_color_value, ParseError};
///
/// let v = convert_color_value("#ff0000", "LCH", false).unwrap();
/// assert_eq!(v.as_text(), Some("lch(53%, 105, 40deg)"));
///
/// assert_eq!(
///     convert_color_value("#ff0000", "XYZ", false),
///     Err(ParseError::UnknownSpace("XYZ".into()))
/// );
/// ```
pub fn convert_color_value(text: &str, space_tag: &str, as_object: bool) -> Result<ConvertedValue> {
    if text.trim().is_empty() {
        return Err(ParseError::Empty(text.to_string()));
    }
    let space: ColorSpace = space_tag.parse()?;
    let color = parse(text)?;
    Ok(convert(&color, space, as_object))
}

/// [`format`] or [`format_object`] over a batch.
pub fn bulk_convert(colors: &[Color], space: ColorSpace, as_object: bool) -> Vec<ConvertedValue> {
    colors
        .iter()
        .map(|color| convert(color, space, as_object))
        .collect()
}

/// The `key` channel of every color, from [`format_object`].
///
/// Returns `None` when `space` has no channel called `key`.
pub fn channel_values(colors: &[Color], space: ColorSpace, key: &str) -> Option<Vec<f64>> {
    if !space.channel_names().contains(&key) {
        return None;
    }
    colors
        .iter()
        .map(|color| format_object(color, space).get(key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> Color {
        parse(s).unwrap()
    }

    #[test]
    fn parse_hex_forms() {
        assert_eq!(hex("#fff"), Color::WHITE);
        assert_eq!(hex("000000"), Color::BLACK);
        assert_eq!(hex("  #FF8800 ").to_hex(), "#ff8800");
        assert_eq!(
            parse("#ff88"),
            Err(ParseError::InvalidHex("#ff88".to_string()))
        );
        assert!(matches!(parse("#+fffff"), Err(ParseError::InvalidHex(_))));
    }

    #[test]
    fn named_colors_win_over_bare_hex() {
        // "red" is not hex; "bad" is not a name.
        assert_eq!(hex("red").to_hex(), "#ff0000");
        assert_eq!(hex("bad").to_hex(), "#bbaadd");
    }

    #[test]
    fn parse_errors() {
        assert_eq!(parse("   "), Err(ParseError::Empty("   ".to_string())));
        assert!(matches!(parse("notacolor"), Err(ParseError::UnknownName(_))));
        assert!(matches!(parse("xyz(1, 2, 3)"), Err(ParseError::Malformed { .. })));
        assert!(matches!(parse("lab(50%, 1, 2"), Err(ParseError::Malformed { .. })));
        assert!(matches!(parse("lab(50%, one, 2)"), Err(ParseError::Malformed { .. })));
        assert!(matches!(parse("lab(1, 2, 3, 4)"), Err(ParseError::Malformed { .. })));
    }

    #[test]
    fn parse_function_notations() {
        assert_eq!(hex("rgb(255, 136, 0)").to_hex(), "#ff8800");
        assert_eq!(hex("hsv(120deg, 100%, 100%)").to_hex(), "#00ff00");
        assert!(hex("lch(0%, 0, 0deg)").approx_eq(&Color::BLACK, 1e-6));
        assert!(hex("lab(100%, 0, 0)").approx_eq(&Color::WHITE, 1e-6));
        assert!(hex("hsluv(0, 0, 100)").approx_eq(&Color::WHITE, 1e-6));
    }

    #[test]
    fn formatted_text_parses_back() {
        let orange = Color::from_rgb8(255, 136, 0);
        for space in ColorSpace::ALL {
            let back = hex(&format(&orange, space));
            // Whole-number channels: CAM02-UCS and HSLuv move furthest.
            assert!(back.approx_eq(&orange, 20.0), "{} -> {}", space, back);
        }
    }

    #[test]
    fn format_greys_never_print_nan() {
        let grey = Color::from_rgb8(128, 128, 128);
        assert_eq!(format(&grey, ColorSpace::Hsl), "hsl(0deg, 0%, 50%)");
        assert!(!format(&grey, ColorSpace::Lch).contains("NaN"));
    }

    #[test]
    fn object_keys_follow_channel_names() {
        let obj = format_object(&Color::from_rgb8(255, 136, 0), ColorSpace::Cam02p);
        assert!(obj.get("J").is_some());
        assert!(obj.get("C").is_some());
        assert!(obj.get("c").is_none());

        let hsl = format_object(&Color::from_rgb8(255, 136, 0), ColorSpace::Hsl);
        assert_eq!(hsl.get("s"), Some(1.0));
        assert_eq!(hsl.get("l"), Some(0.5));
    }

    #[test]
    fn hex_object_serializes_integers() {
        let obj = format_object(&Color::from_rgb(254.6, 0.0, 17.0), ColorSpace::Hex);
        let json = serde_json::to_string(&obj).unwrap();
        assert_eq!(json, r#"{"r":255,"g":0,"b":17}"#);
    }

    #[test]
    fn convert_color_value_errors() {
        assert_eq!(
            convert_color_value("", "LAB", false),
            Err(ParseError::Empty(String::new()))
        );
        assert!(matches!(
            convert_color_value("#fff", "Lab", true),
            Err(ParseError::UnknownSpace(tag)) if tag == "Lab"
        ));
    }

    #[test]
    fn channel_values_by_key() {
        let colors = [Color::BLACK, Color::WHITE];
        assert_eq!(
            channel_values(&colors, ColorSpace::Rgb, "g"),
            Some(vec![0.0, 255.0])
        );
        assert_eq!(channel_values(&colors, ColorSpace::Rgb, "J"), None);
    }
}
