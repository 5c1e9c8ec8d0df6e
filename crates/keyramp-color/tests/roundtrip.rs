//! Property-based tests for channel conversion using proptest.

use keyramp_color::{from_space, parse, project, to_space, Color, ColorSpace};
use proptest::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

fn color_strategy() -> impl Strategy<Value = Color> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Color::from_rgb8(r, g, b))
}

fn space_strategy() -> impl Strategy<Value = ColorSpace> {
    prop::sample::select(ColorSpace::ALL.to_vec())
}

const BOUNDARY: [[u8; 3]; 8] = [
    [0, 0, 0],
    [255, 255, 255],
    [255, 0, 0],
    [0, 255, 0],
    [0, 0, 255],
    [255, 255, 0],
    [0, 255, 255],
    [255, 0, 255],
];

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Every space converts back to the same color.
    #[test]
    fn channels_roundtrip(color in color_strategy(), space in space_strategy()) {
        let channels = to_space(&color, space);
        let back = from_space(channels, space);
        prop_assert!(
            back.approx_eq(&color, 1e-2),
            "{} via {} {:?} came back as {:?}", color, space, channels, back.rgb()
        );
    }

    /// Converted channels never carry NaN.
    #[test]
    fn channels_are_finite(color in color_strategy(), space in space_strategy()) {
        prop_assert!(to_space(&color, space).iter().all(|v| v.is_finite()));
    }

    /// Hex text is lossless for byte colors.
    #[test]
    fn hex_text_roundtrip(color in color_strategy()) {
        prop_assert_eq!(parse(&color.to_hex()).unwrap(), color);
    }

    /// Projection yields one finite value per color in every series.
    #[test]
    fn projection_is_nan_safe(
        colors in prop::collection::vec(color_strategy(), 0..20),
        space in space_strategy(),
    ) {
        let series = project(&colors, space);
        prop_assert_eq!(series.a.len(), colors.len());
        prop_assert_eq!(series.b.len(), colors.len());
        prop_assert_eq!(series.c.len(), colors.len());
        for v in series.a.iter().chain(&series.b).chain(&series.c) {
            prop_assert!(v.is_finite());
        }
    }
}

// ============================================================================
// Boundary colors
// ============================================================================

#[test]
fn boundary_colors_roundtrip_in_every_space() {
    for [r, g, b] in BOUNDARY {
        let color = Color::from_rgb8(r, g, b);
        for space in ColorSpace::ALL {
            let back = from_space(to_space(&color, space), space);
            assert!(
                back.approx_eq(&color, 1e-2),
                "{} via {} came back as {:?}",
                color,
                space,
                back.rgb()
            );
        }
    }
}
