//! Chart-ready channel series.
//!
//! A batch of colors is projected onto three series `a`, `b` and `c` so that
//! plotting `a` against `c` shows the chromatic plane of a space and `b` its
//! lightness axis. Polar spaces are unrolled to cartesian coordinates first,
//! so hue wheels render as discs rather than strips.

use serde::Serialize;

use crate::color::Color;
use crate::space::ColorSpace;
use crate::util::filter_nan;

/// Which canonical channel feeds each projection slot.
///
/// Indices point into the space's channel triple (see
/// [`ColorSpace::channel_names`]). For polar spaces `c1` is the hue and `c2`
/// the radius (chroma or saturation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelLayout {
    pub c1: usize,
    pub c2: usize,
    pub c3: usize,
}

/// Projection slots for `space`.
///
/// ```rust
/// use keyramp_color::{channel_layout, ColorSpace};
///
/// // LAB plots a against b, with lightness as the third axis.
/// let layout = channel_layout(ColorSpace::Lab);
/// assert_eq!((layout.c1, layout.c2, layout.c3), (1, 2, 0));
/// ```
pub fn channel_layout(space: ColorSpace) -> ChannelLayout {
    let (c1, c2, c3) = match space {
        ColorSpace::Lab | ColorSpace::Cam02 => (1, 2, 0),
        ColorSpace::Lch | ColorSpace::Cam02p => (2, 1, 0),
        ColorSpace::Rgb
        | ColorSpace::Hex
        | ColorSpace::Hsl
        | ColorSpace::Hsv
        | ColorSpace::Hsluv => (0, 1, 2),
    };
    ChannelLayout { c1, c2, c3 }
}

/// A point in the chromatic plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Polar → cartesian, with `angle` in degrees.
///
/// When `clamp` is set a radius above `100` is capped to `100`.
///
/// ```rust
/// use keyramp_color::convert_to_cartesian;
///
/// let p = convert_to_cartesian(150.0, 90.0, true);
/// assert!(p.x.abs() < 1e-9);
/// assert!((p.y - 100.0).abs() < 1e-9);
/// ```
pub fn convert_to_cartesian(radius: f64, angle: f64, clamp: bool) -> Point {
    let radius = if clamp && radius > 100.0 { 100.0 } else { radius };
    let (sin, cos) = angle.to_radians().sin_cos();
    Point {
        x: radius * cos,
        y: radius * sin,
    }
}

/// Three parallel series, one value per projected color.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChannelSeries {
    pub a: Vec<f64>,
    pub b: Vec<f64>,
    pub c: Vec<f64>,
}

impl ChannelSeries {
    pub fn len(&self) -> usize {
        self.a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }
}

/// Projects `colors` onto the chart axes of `space`.
///
/// `a` is the first slot and `b` the third; `c` is the second. For polar
/// spaces `a` and `c` become the `x` and `y` of the hue/radius pair. HSL and
/// HSV radius and third channel are scaled ×100 to share the axes of the
/// other spaces. Undefined values (grey hues) come out as `0`.
pub fn project(colors: &[Color], space: ColorSpace) -> ChannelSeries {
    let layout = channel_layout(space);
    let percent = matches!(space, ColorSpace::Hsl | ColorSpace::Hsv);
    let scale = if percent { 100.0 } else { 1.0 };

    let mut series = ChannelSeries {
        a: Vec::with_capacity(colors.len()),
        b: Vec::with_capacity(colors.len()),
        c: Vec::with_capacity(colors.len()),
    };

    for color in colors {
        let channels = color.channels_raw(space);
        let first = channels[layout.c1];
        let second = channels[layout.c2] * scale;
        let third = channels[layout.c3] * scale;

        let (a, c) = if space.is_polar() {
            let p = convert_to_cartesian(second, first, false);
            (p.x, p.y)
        } else {
            (first, second)
        };

        series.a.push(filter_nan(a));
        series.b.push(filter_nan(third));
        series.c.push(filter_nan(c));
    }

    series
}
