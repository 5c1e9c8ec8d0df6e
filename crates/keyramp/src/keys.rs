//! Editable key-color sets and the scales built from them.
//!
//! [`KeyColors`] is never empty: construction rejects an empty list and
//! [`KeyColors::remove`] refuses to take the last key away.

use keyramp_color::{from_space, to_space, Color, ColorSpace};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ScaleError;
use crate::scale::{ColorScale, DivergingColorScale, ScaleOptions};

/// Smoothing needs at least this many keys.
pub const MIN_SMOOTH_KEYS: usize = 3;

/// An ordered, non-empty list of key colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Color>", into = "Vec<Color>")]
pub struct KeyColors(Vec<Color>);

impl KeyColors {
    /// # Errors
    ///
    /// Returns [`ScaleError::NoKeys`] when `keys` is empty.
    pub fn new(keys: Vec<Color>) -> Result<Self, ScaleError> {
        if keys.is_empty() {
            return Err(ScaleError::NoKeys);
        }
        Ok(Self(keys))
    }

    pub fn as_slice(&self) -> &[Color] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Inserts `color` at `index`, clamped to the end of the list.
    pub fn insert(&mut self, index: usize, color: Color) {
        let index = index.min(self.0.len());
        self.0.insert(index, color);
    }

    /// Replaces the key at `index`, returning the old one.
    pub fn replace(&mut self, index: usize, color: Color) -> Option<Color> {
        self.0
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, color))
    }

    /// Removes the key at `index`.
    ///
    /// Returns `None` when `index` is out of range or the key is the only
    /// one left.
    pub fn remove(&mut self, index: usize) -> Option<Color> {
        if self.0.len() <= 1 || index >= self.0.len() {
            debug!(index, keys = self.0.len(), "refusing to remove key color");
            return None;
        }
        Some(self.0.remove(index))
    }

    /// Appends a key derived from the last one and returns it.
    ///
    /// A light last key (HSLuv lightness at least 50) gets a shade at half
    /// its lightness; a dark one gets a tint a third of the way to white.
    pub fn push_generated(&mut self) -> Color {
        let last = self.0[self.0.len() - 1];
        let [h, s, l] = to_space(&last, ColorSpace::Hsluv);
        let lightness = if l >= 50.0 { l / 2.0 } else { (100.0 - l) / 3.0 + l };
        let generated = from_space([h, s, lightness], ColorSpace::Hsluv);
        self.0.push(generated);
        generated
    }
}

impl TryFrom<Vec<Color>> for KeyColors {
    type Error = ScaleError;

    fn try_from(keys: Vec<Color>) -> Result<Self, Self::Error> {
        Self::new(keys)
    }
}

impl From<KeyColors> for Vec<Color> {
    fn from(keys: KeyColors) -> Self {
        keys.0
    }
}

/// A single-direction scale definition.
#[derive(Debug, Clone, PartialEq)]
pub struct SequentialScale {
    keys: KeyColors,
    space: ColorSpace,
    smooth: bool,
}

impl SequentialScale {
    pub fn new(keys: KeyColors, space: ColorSpace) -> Self {
        Self {
            keys,
            space,
            smooth: false,
        }
    }

    pub fn keys(&self) -> &KeyColors {
        &self.keys
    }

    pub fn space(&self) -> ColorSpace {
        self.space
    }

    pub fn set_space(&mut self, space: ColorSpace) {
        self.space = space;
    }

    pub fn is_smooth(&self) -> bool {
        self.smooth
    }

    /// Whether smoothing can currently be turned on.
    pub fn can_smooth(&self) -> bool {
        self.keys.len() >= MIN_SMOOTH_KEYS
    }

    /// Requests smoothing; ignored while [`can_smooth`](Self::can_smooth) is false.
    pub fn set_smooth(&mut self, smooth: bool) {
        self.smooth = smooth && self.can_smooth();
    }

    /// Mutates the key set, then re-checks the smoothing rule.
    pub fn edit_keys<T>(&mut self, edit: impl FnOnce(&mut KeyColors) -> T) -> T {
        let result = edit(&mut self.keys);
        if self.smooth && !self.can_smooth() {
            debug!(keys = self.keys.len(), "too few keys, smoothing turned off");
            self.smooth = false;
        }
        result
    }

    pub fn options(&self) -> ScaleOptions {
        ScaleOptions::new(self.space).smooth(self.smooth)
    }

    pub fn scale(&self) -> ColorScale {
        ColorScale::from_keys(&self.keys, self.options())
    }
}

/// A two-sided scale definition meeting at a middle key.
#[derive(Debug, Clone, PartialEq)]
pub struct DivergingScale {
    pub start: KeyColors,
    pub end: KeyColors,
    pub middle: Color,
    pub space: ColorSpace,
    pub smooth: bool,
    /// Replace `middle` by a low-chroma key at the same lightness.
    pub equiluminant: bool,
}

impl DivergingScale {
    pub fn new(start: KeyColors, middle: Color, end: KeyColors, space: ColorSpace) -> Self {
        Self {
            start,
            end,
            middle,
            space,
            smooth: false,
            equiluminant: false,
        }
    }

    pub fn scale(&self) -> DivergingColorScale {
        DivergingColorScale::from_keys(
            &self.start,
            self.middle,
            &self.end,
            ScaleOptions::new(self.space).smooth(self.smooth),
            self.equiluminant,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::Ramp;
    use keyramp_color::parse;

    fn keys(hex: &[&str]) -> KeyColors {
        KeyColors::new(hex.iter().map(|h| parse(h).unwrap()).collect()).unwrap()
    }

    #[test]
    fn empty_set_is_rejected() {
        assert_eq!(KeyColors::new(Vec::new()), Err(ScaleError::NoKeys));
    }

    #[test]
    fn last_key_cannot_be_removed() {
        let mut set = keys(&["#ff0000"]);
        assert_eq!(set.remove(0), None);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn insert_and_remove_keep_order() {
        let mut set = keys(&["#000000", "#ffffff"]);
        set.insert(1, parse("#ff0000").unwrap());
        assert_eq!(set.as_slice()[1].to_hex(), "#ff0000");
        assert_eq!(set.remove(0).map(|c| c.to_hex()).as_deref(), Some("#000000"));
        assert_eq!(set.remove(9), None);
        assert_eq!(set.as_slice()[0].to_hex(), "#ff0000");
    }

    #[test]
    fn replace_returns_previous() {
        let mut set = keys(&["#000000"]);
        let old = set.replace(0, Color::WHITE);
        assert_eq!(old, Some(Color::BLACK));
        assert_eq!(set.replace(3, Color::WHITE), None);
    }

    #[test]
    fn generated_key_shades_light_and_tints_dark() {
        let mut light = keys(&["#ffffff"]);
        let shade = light.push_generated();
        assert!((shade.luminosity() - 50.0).abs() < 0.5);

        let mut dark = keys(&["#000000"]);
        let tint = dark.push_generated();
        assert!((tint.luminosity() - 100.0 / 3.0).abs() < 0.5);
        assert_eq!(dark.len(), 2);
    }

    #[test]
    fn smoothing_follows_key_count() {
        let mut scale = SequentialScale::new(keys(&["#000000", "#ffffff"]), ColorSpace::Lab);
        scale.set_smooth(true);
        assert!(!scale.is_smooth());
        assert!(!scale.can_smooth());

        scale.edit_keys(|k| k.insert(1, parse("#ff0000").unwrap()));
        assert!(scale.can_smooth());
        scale.set_smooth(true);
        assert!(scale.is_smooth());

        scale.edit_keys(|k| k.remove(1));
        assert!(!scale.is_smooth());
    }

    #[test]
    fn sequential_scale_samples_keys() {
        let scale = SequentialScale::new(keys(&["#000000", "#ffffff"]), ColorSpace::Rgb).scale();
        assert_eq!(scale.at(1.0), Color::WHITE);
    }

    #[test]
    fn diverging_scale_uses_middle() {
        let def = DivergingScale::new(
            keys(&["#0000ff"]),
            Color::WHITE,
            keys(&["#ff0000"]),
            ColorSpace::Lab,
        );
        assert_eq!(def.scale().at(0.5), Color::WHITE);
    }

    #[test]
    fn equiluminant_diverging_scale_replaces_middle() {
        let mut def = DivergingScale::new(
            keys(&["#0000ff", "#ffeecc"]),
            parse("#f0f0f0").unwrap(),
            keys(&["#880000"]),
            ColorSpace::Lab,
        );
        def.equiluminant = true;
        let scale = def.scale();
        assert_ne!(scale.middle(), def.middle);
        assert_eq!(scale.at(0.5), scale.middle());
    }

    #[test]
    fn serde_rejects_empty_lists() {
        let err = serde_json::from_str::<KeyColors>("[]");
        assert!(err.is_err());
        let ok: KeyColors = serde_json::from_str(r##"["#ff0000", "blue"]"##).unwrap();
        assert_eq!(ok.len(), 2);
    }
}
