//! Ordering colors and bucketing them by hue.

use keyramp_color::{color_difference, to_space, Color, ColorSpace};
use tracing::trace;

/// Hue distance that starts a new bucket.
const HUE_GROUP_THRESHOLD: f64 = 22.0;
/// Largest hue distance a color may have to the closest member of a bucket.
const HUE_THRESHOLD: f64 = 22.0;
/// A color joins a bucket only if it is at least this distinct (ΔE00) from every member...
const COLOR_DIFFERENCE_MIN: f64 = 16.0;
/// ...and not wildly different from any of them.
const COLOR_DIFFERENCE_MAX: f64 = 100.0;
/// Colors at or below this LCH chroma are too grey to name a hue.
const MIN_CHROMA: f64 = 30.0;
/// Colors at or below this LCH lightness are too dark to name a hue.
const MIN_LIGHTNESS: f64 = 8.0;

/// Attribute used by [`order_colors`], read from CAM02-UCS polar channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Hue,
    /// Colorfulness (`C`).
    Saturation,
    Lightness,
}

/// Direction for [`order_by_luminosity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LuminosityOrder {
    #[default]
    LightestFirst,
    DarkestFirst,
}

fn floored_jch(color: &Color) -> [i64; 3] {
    to_space(color, ColorSpace::Cam02p).map(|v| v.floor() as i64)
}

fn key_value(jch: &[i64; 3], key: SortKey) -> i64 {
    match key {
        SortKey::Hue => jch[2],
        SortKey::Saturation => jch[1],
        SortKey::Lightness => jch[0],
    }
}

/// Stable sort by `primary`, then `secondary`, on floored Jch values.
///
/// ```rust
/// use keyramp::{order_colors, SortKey};
/// use keyramp::color::parse;
///
/// let colors = ["blue", "red", "lime"].map(|c| parse(c).unwrap());
/// let sorted = order_colors(&colors, SortKey::Hue, None);
/// let hex: Vec<String> = sorted.iter().map(|c| c.to_hex()).collect();
/// assert_eq!(hex, ["#ff0000", "#00ff00", "#0000ff"]);
/// ```
pub fn order_colors(colors: &[Color], primary: SortKey, secondary: Option<SortKey>) -> Vec<Color> {
    let mut keyed: Vec<([i64; 3], Color)> = colors.iter().map(|c| (floored_jch(c), *c)).collect();
    keyed.sort_by_key(|(jch, _)| {
        (
            key_value(jch, primary),
            secondary.map_or(0, |key| key_value(jch, key)),
        )
    });
    keyed.into_iter().map(|(_, c)| c).collect()
}

/// Stable sort by HSLuv lightness.
pub fn order_by_luminosity(colors: &[Color], order: LuminosityOrder) -> Vec<Color> {
    let mut keyed: Vec<(f64, Color)> = colors.iter().map(|c| (c.luminosity(), *c)).collect();
    match order {
        LuminosityOrder::LightestFirst => keyed.sort_by(|a, b| b.0.total_cmp(&a.0)),
        LuminosityOrder::DarkestFirst => keyed.sort_by(|a, b| a.0.total_cmp(&b.0)),
    }
    keyed.into_iter().map(|(_, c)| c).collect()
}

fn jch_hue(color: &Color) -> f64 {
    to_space(color, ColorSpace::Cam02p)[2]
}

/// Groups colors of visually similar hue.
///
/// Colors are ordered by hue then colorfulness; greys and very dark colors
/// are dropped. Walking the ordered list, a color whose hue is far
/// from its predecessor's (the first color compares against the last)
/// opens a new bucket. Otherwise it is offered to every existing bucket
/// and joins each one it is distinct from yet close in hue to, so a color
/// may land in several buckets or in none.
pub fn group_common_hues(colors: &[Color]) -> Vec<Vec<Color>> {
    let ordered = order_colors(colors, SortKey::Hue, Some(SortKey::Saturation));

    let filtered: Vec<(Color, f64)> = ordered
        .into_iter()
        .filter(|color| {
            let [l, c, _] = to_space(color, ColorSpace::Lch);
            let keep = c > MIN_CHROMA && l > MIN_LIGHTNESS;
            if !keep {
                trace!(color = %color, chroma = c, lightness = l, "dropping achromatic color");
            }
            keep
        })
        .map(|color| (color, jch_hue(&color)))
        .collect();

    let mut buckets: Vec<Vec<(Color, f64)>> = Vec::new();
    for (i, &(color, hue)) in filtered.iter().enumerate() {
        let previous = if i == 0 { filtered.len() - 1 } else { i - 1 };
        let hue_diff = (hue - filtered[previous].1).abs();

        if hue_diff >= HUE_GROUP_THRESHOLD || buckets.is_empty() {
            buckets.push(vec![(color, hue)]);
            continue;
        }

        for bucket in buckets.iter_mut() {
            let (mut min_de, mut max_de, mut min_hue) = (f64::INFINITY, 0.0f64, f64::INFINITY);
            for (member, member_hue) in bucket.iter() {
                let de = color_difference(member, &color);
                min_de = min_de.min(de);
                max_de = max_de.max(de);
                min_hue = min_hue.min((hue - member_hue).abs());
            }

            if min_de > COLOR_DIFFERENCE_MIN && max_de < COLOR_DIFFERENCE_MAX && min_hue <= HUE_THRESHOLD
            {
                bucket.push((color, hue));
            }
        }
    }

    buckets
        .into_iter()
        .map(|bucket| bucket.into_iter().map(|(c, _)| c).collect())
        .collect()
}
