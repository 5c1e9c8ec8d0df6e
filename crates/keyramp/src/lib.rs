//! Keyramp - accessible color scales from key colors.
//!
//! Keyramp turns a handful of designer-picked key colors into continuous
//! color scales, and resolves swatches on those scales by luminosity or by
//! contrast ratio against a background. It provides:
//!
//! - Scales interpolated in any supported color space, stepped or smooth
//! - Diverging scales with an optional equi-luminant middle key
//! - Luminosity search over a scale's domain
//! - Hue grouping of arbitrary color sets
//! - WCAG contrast ratios kept in sync with their luminosities
//! - Themes loadable from YAML or JSON
//!
//! Color parsing, formatting and conversion live in [`keyramp-color`],
//! re-exported here as [`color`].
//!
//! [`keyramp-color`]: keyramp_color
//!
//! # Quick Start
//!
//! ```rust
//! use keyramp::{locate, ColorScale, Ramp, ScaleOptions};
//! use keyramp::color::{parse, ColorSpace};
//!
//! let keys = ["#ffffcc", "#41b6c4", "#081d58"].map(|c| parse(c).unwrap());
//! let scale = ColorScale::build(&keys, ScaleOptions::new(ColorSpace::Cam02).smooth(true))
//!     .unwrap()
//!     .with_domain(100.0);
//!
//! // Nine evenly spaced swatches.
//! assert_eq!(scale.colors(9).len(), 9);
//!
//! // Where on the scale is HSLuv lightness 50?
//! let found = locate(&scale, 100.0, 50.0);
//! assert!(found.converged);
//! ```
//!
//! # Themes
//!
//! A [`Theme`] pairs a background with named scales and a list of contrast
//! ratios. Editing operations take and return the theme by value:
//!
//! ```rust
//! use keyramp::Theme;
//!
//! let theme = Theme::from_yaml(r##"
//! background: "#ffffff"
//! ratios: [3, 4.5]
//! colors:
//!   - name: blue
//!     keys: ["#0055ff"]
//! "##)
//! .unwrap()
//! .with_added_ratio()
//! .with_distributed_ratios();
//!
//! assert_eq!(theme.ratio_values(), vec![3.0, 4.25, 5.5]);
//! ```

pub mod contrast;
mod error;
pub mod group;
pub mod keys;
pub mod locate;
pub mod ratios;
pub mod scale;
pub mod theme;

pub use keyramp_color as color;

pub use contrast::{ContrastEngine, WcagEngine};
pub use error::{ScaleError, ThemeError};
pub use group::{group_common_hues, order_by_luminosity, order_colors, LuminosityOrder, SortKey};
pub use keys::{DivergingScale, KeyColors, SequentialScale};
pub use locate::{find_matching_luminosity, locate, Location};
pub use ratios::{
    distribute_evenly, distribute_luminosity, next_ratio, sort_by_value, step_ratio,
    sync_from_luminosity, sync_from_ratio, RatioEntry, Step,
};
pub use scale::{equiluminant_key, ColorScale, DivergingColorScale, Ramp, ScaleOptions};
pub use theme::{ColorDocument, ContrastColors, Theme, ThemeColor, ThemeDocument};
