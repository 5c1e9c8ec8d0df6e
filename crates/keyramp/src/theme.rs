//! Themes: a background, named color scales and a shared ratio list.
//!
//! A [`Theme`] is a plain value. Every editing operation takes the theme
//! by value and returns the updated one, recomputing the affected
//! [`RatioEntry`] values so ratio, luminosity and swatch always agree.
//!
//! Themes load from YAML or JSON:
//!
//! ```yaml
//! name: ocean
//! background: "#f5f5f5"
//! ratios: [3, 4.5, 7]
//! colors:
//!   - name: blue
//!     keys: ["#0055ff", "navy"]
//!     space: CAM02
//!     smooth: false
//! ```
//!
//! Color fields accept any text [`parse`](keyramp_color::parse) accepts;
//! `space` takes a color-space tag and defaults to `CAM02`.

use std::path::{Path, PathBuf};

use keyramp_color::{Color, ColorSpace};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::contrast::{ContrastEngine, WcagEngine};
use crate::error::ThemeError;
use crate::keys::{KeyColors, SequentialScale};
use crate::ratios::{distribute_evenly, distribute_luminosity, next_ratio, RatioEntry};
use crate::scale::ScaleOptions;

/// On-disk shape of a theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default = "default_background")]
    pub background: Color,
    #[serde(default)]
    pub ratios: Vec<f64>,
    #[serde(default)]
    pub colors: Vec<ColorDocument>,
}

/// On-disk shape of one theme color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorDocument {
    pub name: String,
    pub keys: Vec<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space: Option<String>,
    #[serde(default)]
    pub smooth: bool,
}

fn default_background() -> Color {
    Color::WHITE
}

/// A named scale inside a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeColor {
    pub name: String,
    pub scale: SequentialScale,
}

impl ThemeColor {
    pub fn new(name: impl Into<String>, scale: SequentialScale) -> Self {
        Self {
            name: name.into(),
            scale,
        }
    }

    fn from_document(doc: ColorDocument) -> Result<Self, ThemeError> {
        let space = match doc.space.as_deref() {
            Some(tag) => tag.parse::<ColorSpace>()?,
            None => ColorSpace::default(),
        };
        let keys = KeyColors::new(doc.keys).map_err(|_| ThemeError::EmptyColor(doc.name.clone()))?;
        let mut scale = SequentialScale::new(keys, space);
        scale.set_smooth(doc.smooth);
        Ok(Self::new(doc.name, scale))
    }

    fn to_document(&self) -> ColorDocument {
        ColorDocument {
            name: self.name.clone(),
            keys: self.scale.keys().as_slice().to_vec(),
            space: Some(self.scale.space().tag().to_string()),
            smooth: self.scale.is_smooth(),
        }
    }
}

/// The colors one theme color produces, one per ratio.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastColors {
    pub name: String,
    pub values: Vec<Color>,
}

/// A background, its colors and the contrast ratios they are rendered at.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    name: Option<String>,
    source_path: Option<PathBuf>,
    background: Color,
    colors: Vec<ThemeColor>,
    ratios: Vec<RatioEntry>,
}

impl Theme {
    /// An empty theme on `background`.
    pub fn new(background: Color) -> Self {
        Self {
            name: None,
            source_path: None,
            background,
            colors: Vec::new(),
            ratios: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Validates a parsed document.
    ///
    /// # Errors
    ///
    /// Fails when the document has no colors, a color has no keys, or a
    /// `space` tag is unknown.
    pub fn from_document(doc: ThemeDocument) -> Result<Self, ThemeError> {
        if doc.colors.is_empty() {
            return Err(ThemeError::Empty);
        }
        let colors = doc
            .colors
            .into_iter()
            .map(ThemeColor::from_document)
            .collect::<Result<Vec<_>, _>>()?;

        let mut theme = Self {
            name: doc.name,
            source_path: None,
            background: doc.background,
            colors,
            ratios: Vec::new(),
        };
        theme.ratios = theme.entries_for(&doc.ratios);
        Ok(theme)
    }

    /// Creates a theme from YAML content.
    ///
    /// ```rust
    /// use keyramp::Theme;
    ///
    /// let theme = Theme::from_yaml(r##"
    /// background: "#ffffff"
    /// ratios: [3, 4.5]
    /// colors:
    ///   - name: blue
    ///     keys: ["#0055ff"]
    /// "##).unwrap();
    ///
    /// assert_eq!(theme.ratio_values(), vec![3.0, 4.5]);
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self, ThemeError> {
        let doc: ThemeDocument = serde_yaml::from_str(yaml)?;
        Self::from_document(doc)
    }

    /// Creates a theme from JSON content.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        let doc: ThemeDocument = serde_json::from_str(json)?;
        Self::from_document(doc)
    }

    /// Loads a theme from a `.yaml`, `.yml` or `.json` file.
    ///
    /// Without a `name` field the theme is named after the file stem. The
    /// source path is stored for [`refresh`](Theme::refresh).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let mut theme = Self::read_file(path)?;
        if theme.name.is_none() {
            theme.name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .map(|s| s.to_string());
        }
        theme.source_path = Some(path.to_path_buf());
        debug!(
            path = %path.display(),
            colors = theme.colors.len(),
            ratios = theme.ratios.len(),
            "loaded theme"
        );
        Ok(theme)
    }

    fn read_file(path: &Path) -> Result<Self, ThemeError> {
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let content = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml(&content),
            "json" => Self::from_json(&content),
            other => Err(ThemeError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Reloads the theme from its source file, keeping its name.
    pub fn refresh(&mut self) -> Result<(), ThemeError> {
        let path = self.source_path.clone().ok_or(ThemeError::NoSource)?;
        let reloaded = Self::read_file(&path)?;
        self.background = reloaded.background;
        self.colors = reloaded.colors;
        self.ratios = reloaded.ratios;
        Ok(())
    }

    pub fn to_document(&self) -> ThemeDocument {
        ThemeDocument {
            name: self.name.clone(),
            background: self.background,
            ratios: self.ratio_values(),
            colors: self.colors.iter().map(ThemeColor::to_document).collect(),
        }
    }

    pub fn to_yaml(&self) -> Result<String, ThemeError> {
        Ok(serde_yaml::to_string(&self.to_document())?)
    }

    pub fn to_json(&self) -> Result<String, ThemeError> {
        Ok(serde_json::to_string_pretty(&self.to_document())?)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn colors(&self) -> &[ThemeColor] {
        &self.colors
    }

    pub fn color(&self, name: &str) -> Option<&ThemeColor> {
        self.colors.iter().find(|c| c.name == name)
    }

    pub fn ratios(&self) -> &[RatioEntry] {
        &self.ratios
    }

    pub fn ratio_values(&self) -> Vec<f64> {
        self.ratios.iter().map(|e| e.ratio).collect()
    }

    pub fn luminosities(&self) -> Vec<f64> {
        self.ratios.iter().map(|e| e.luminosity).collect()
    }

    /// Engine for `color`'s keys against this background.
    pub fn engine_for(&self, color: &ThemeColor) -> WcagEngine {
        WcagEngine::for_keys(
            self.background,
            color.scale.keys().as_slice(),
            color.scale.options(),
        )
    }

    /// Engine used for ratio sync: the first color's scale, or a plain
    /// white-to-black ramp when the theme has no colors.
    pub fn engine(&self) -> WcagEngine {
        match self.colors.first() {
            Some(color) => self.engine_for(color),
            None => WcagEngine::for_keys(self.background, &[], ScaleOptions::default()),
        }
    }

    /// Every color rendered at every ratio, in theme order.
    pub fn contrast_colors(&self) -> Vec<ContrastColors> {
        let ratios = self.ratio_values();
        self.colors
            .iter()
            .map(|color| {
                let engine = self.engine_for(color);
                ContrastColors {
                    name: color.name.clone(),
                    values: ratios.iter().map(|&r| engine.generate(r)).collect(),
                }
            })
            .collect()
    }

    fn entries_for(&self, ratios: &[f64]) -> Vec<RatioEntry> {
        let engine = self.engine();
        ratios
            .iter()
            .map(|&ratio| RatioEntry::from_ratio(&engine, ratio))
            .collect()
    }

    /// Recomputes every entry from its ratio.
    fn resynced(mut self) -> Self {
        self.ratios = self.entries_for(&self.ratio_values());
        self
    }

    /// Adds a color; ratio entries are recomputed when it becomes the first.
    pub fn with_color(mut self, color: ThemeColor) -> Self {
        self.colors.push(color);
        if self.colors.len() == 1 {
            self.resynced()
        } else {
            self
        }
    }

    /// Swaps the background and recomputes every entry from its ratio.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self.resynced()
    }

    /// Appends the ratio [`next_ratio`] picks.
    pub fn with_added_ratio(mut self) -> Self {
        let ratio = next_ratio(&self.ratio_values());
        let entry = RatioEntry::from_ratio(&self.engine(), ratio);
        self.ratios.push(entry);
        self
    }

    /// Sets the ratio at `index`; out-of-range indices leave the theme as is.
    pub fn with_ratio(mut self, index: usize, ratio: f64) -> Self {
        let engine = self.engine();
        match self.ratios.get_mut(index) {
            Some(entry) => *entry = RatioEntry::from_ratio(&engine, ratio),
            None => debug!(index, "no ratio entry to update"),
        }
        self
    }

    /// Sets the luminosity at `index` and re-measures its ratio.
    pub fn with_luminosity(mut self, index: usize, luminosity: f64) -> Self {
        let engine = self.engine();
        match self.ratios.get_mut(index) {
            Some(entry) => *entry = entry.with_luminosity(&engine, luminosity),
            None => debug!(index, "no ratio entry to update"),
        }
        self
    }

    pub fn without_ratio(mut self, index: usize) -> Self {
        if index < self.ratios.len() {
            self.ratios.remove(index);
        } else {
            debug!(index, "no ratio entry to remove");
        }
        self
    }

    /// Spreads ratios evenly between the lowest and highest.
    pub fn with_distributed_ratios(mut self) -> Self {
        if self.ratios.len() < 2 {
            return self;
        }
        let spread = distribute_evenly(&self.ratio_values());
        self.ratios = self.entries_for(&spread);
        self
    }

    /// Spreads luminosities evenly, lightest first, then sorts by ratio.
    pub fn with_distributed_luminosity(mut self) -> Self {
        if self.ratios.len() < 2 {
            return self;
        }
        let engine = self.engine();
        let spread = distribute_luminosity(&self.luminosities());
        self.ratios = self
            .ratios
            .iter()
            .zip(spread)
            .map(|(entry, luminosity)| entry.with_luminosity(&engine, luminosity))
            .collect();
        self.with_sorted_ratios()
    }

    /// Stable ascending sort of the entries by ratio.
    pub fn with_sorted_ratios(mut self) -> Self {
        self.ratios.sort_by(|a, b| a.ratio.total_cmp(&b.ratio));
        self
    }
}
