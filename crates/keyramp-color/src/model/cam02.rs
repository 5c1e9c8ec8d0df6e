//! CIECAM02 appearance model and its uniform color space CAM02-UCS.
//!
//! The viewing conditions are fixed: an average surround, a 20% grey
//! background and an adapting luminance of `64 / π / 5` cd/m². They are
//! derived once on first use.
//!
//! Channels are `[J', a', b']` (cartesian, "Jab"); the polar form ("Jch") is
//! produced by [`super::lab::to_polar`].

use std::f64::consts::PI;

use once_cell::sync::Lazy;

use super::srgb::{mul, rgb_to_xyz, xyz_to_rgb, RGB_TO_XYZ};

// ─── Matrices ──────────────────────────────────────────────────────────────

const XYZ_TO_CAT02: [[f64; 3]; 3] = [
    [0.7328, 0.4296, -0.1624],
    [-0.7036, 1.6975, 0.0061],
    [0.0030, 0.0136, 0.9834],
];

const CAT02_TO_XYZ: [[f64; 3]; 3] = [
    [1.0961238208355142, -0.27886900021828726, 0.1827451793827731],
    [0.45436904197535916, 0.4735331543074117, 0.07209780371722913],
    [-0.009627608738429355, -0.005698031216113421, 1.0153256399545427],
];

const CAT02_TO_HPE: [[f64; 3]; 3] = [
    [0.7409792, 0.2180250, 0.0410058],
    [0.2853532, 0.6242014, 0.0904454],
    [-0.0096280, -0.0056980, 1.0153260],
];

const HPE_TO_CAT02: [[f64; 3]; 3] = [
    [1.5591519556453473, -0.5447222871038176, -0.014445260061086148],
    [-0.7143265794813783, 1.850310265486268, -0.13597654273909482],
    [0.010776127252792218, 0.005218502936500394, 0.9840052620494348],
];

// ─── Viewing conditions ────────────────────────────────────────────────────

/// Surround exponent (average surround).
const C: f64 = 0.69;
/// Chromatic induction factor.
const NC: f64 = 1.0;
/// Maximum degree of adaptation.
const F: f64 = 1.0;
/// Background relative luminance.
const YB: f64 = 20.0;

// CAM02-UCS coefficients.
const UCS_C1: f64 = 0.007;
const UCS_C2: f64 = 0.0228;

struct ViewingConditions {
    /// Cone response of the adopted white.
    white: [f64; 3],
    /// Degree of adaptation.
    d: f64,
    /// Luminance-level adaptation factor.
    fl: f64,
    n: f64,
    nbb: f64,
    z: f64,
    /// Achromatic response of the adopted white.
    aw: f64,
}

static VC: Lazy<ViewingConditions> = Lazy::new(|| {
    let la = (64.0 / PI) / 5.0;
    let white_xyz = [0, 1, 2].map(|i| 100.0 * RGB_TO_XYZ[i].iter().sum::<f64>());
    let white = mul(&XYZ_TO_CAT02, white_xyz);

    let n = YB / 100.0;
    let k = 1.0 / (5.0 * la + 1.0);
    let k4 = k.powi(4);
    let fl = 0.2 * k4 * (5.0 * la) + 0.1 * (1.0 - k4).powi(2) * (5.0 * la).cbrt();
    let nbb = 0.725 * (1.0 / n).powf(0.2);
    let d = F * (1.0 - (1.0 / 3.6) * ((-la - 42.0) / 92.0).exp());

    let mut vc = ViewingConditions {
        white,
        d,
        fl,
        n,
        nbb,
        z: 1.48 + n.sqrt(),
        aw: 0.0,
    };
    let adapted = vc.adapt(white);
    let [l, m, s] = mul(&CAT02_TO_HPE, adapted).map(|c| vc.compress(c));
    vc.aw = (2.0 * l + m + 0.05 * s - 0.305) * nbb;
    vc
});

impl ViewingConditions {
    /// Von Kries style chromatic adaptation toward the adopted white.
    fn adapt(&self, lms: [f64; 3]) -> [f64; 3] {
        [0, 1, 2].map(|i| lms[i] * (100.0 * self.d / self.white[i] + 1.0 - self.d))
    }

    fn unadapt(&self, lms: [f64; 3]) -> [f64; 3] {
        [0, 1, 2].map(|i| lms[i] / (100.0 * self.d / self.white[i] + 1.0 - self.d))
    }

    /// Post-adaptation non-linear response compression (sign preserving).
    fn compress(&self, c: f64) -> f64 {
        let p = (self.fl * c.abs() / 100.0).powf(0.42);
        (400.0 * p / (27.13 + p)).copysign(c) + 0.1
    }

    fn decompress(&self, c: f64) -> f64 {
        let x = c - 0.1;
        let magnitude = (100.0 / self.fl) * ((27.13 * x.abs()) / (400.0 - x.abs())).powf(1.0 / 0.42);
        magnitude.copysign(x)
    }

    fn eccentricity(h_deg: f64) -> f64 {
        0.25 * ((h_deg.to_radians() + 2.0).cos() + 3.8)
    }

    fn chroma_scale(&self) -> f64 {
        (1.64 - 0.29f64.powf(self.n)).powf(0.73)
    }
}

// ─── CIECAM02 (J, C, h) ────────────────────────────────────────────────────

fn rgb_to_jch_appearance(rgb: [f64; 3]) -> [f64; 3] {
    let vc = &*VC;
    let xyz = rgb_to_xyz(rgb).map(|c| c * 100.0);
    let adapted = vc.adapt(mul(&XYZ_TO_CAT02, xyz));
    let [la, ma, sa] = mul(&CAT02_TO_HPE, adapted).map(|c| vc.compress(c));

    let ca = la - 12.0 * ma / 11.0 + sa / 11.0;
    let cb = (la + ma - 2.0 * sa) / 9.0;
    let h = cb.atan2(ca).to_degrees().rem_euclid(360.0);

    let a = (2.0 * la + ma + 0.05 * sa - 0.305) * vc.nbb;
    let j = 100.0 * (a.max(0.0) / vc.aw).powf(C * vc.z);

    let et = ViewingConditions::eccentricity(h);
    let t = (50_000.0 / 13.0 * NC * vc.nbb * et * ca.hypot(cb)) / (la + ma + 21.0 / 20.0 * sa);
    let chroma = t.powf(0.9) * (j / 100.0).sqrt() * vc.chroma_scale();

    [j, chroma, h]
}

fn jch_appearance_to_rgb(jch: [f64; 3]) -> [f64; 3] {
    let vc = &*VC;
    let [j, chroma, h] = jch;
    if j <= 0.0 {
        return [0.0, 0.0, 0.0];
    }

    let t = (chroma / ((j / 100.0).sqrt() * vc.chroma_scale())).powf(1.0 / 0.9);
    let et = ViewingConditions::eccentricity(h);
    let a = (j / 100.0).powf(1.0 / (C * vc.z)) * vc.aw;

    let p2 = a / vc.nbb + 0.305;
    let p3 = 21.0 / 20.0;
    let hr = h.to_radians();
    let (sin, cos) = hr.sin_cos();

    let (ca, cb) = if t == 0.0 {
        (0.0, 0.0)
    } else {
        let p1 = (50_000.0 / 13.0 * NC * vc.nbb) * et / t;
        if sin.abs() >= cos.abs() {
            let p4 = p1 / sin;
            let cb = (p2 * (2.0 + p3) * (460.0 / 1403.0))
                / (p4 + (2.0 + p3) * (220.0 / 1403.0) * (cos / sin) - 27.0 / 1403.0
                    + p3 * (6300.0 / 1403.0));
            (cb * (cos / sin), cb)
        } else {
            let p5 = p1 / cos;
            let ca = (p2 * (2.0 + p3) * (460.0 / 1403.0))
                / (p5 + (2.0 + p3) * (220.0 / 1403.0)
                    - (27.0 / 1403.0 - p3 * (6300.0 / 1403.0)) * (sin / cos));
            (ca, ca * (sin / cos))
        }
    };

    let hpe = [
        (460.0 * p2 + 451.0 * ca + 288.0 * cb) / 1403.0,
        (460.0 * p2 - 891.0 * ca - 261.0 * cb) / 1403.0,
        (460.0 * p2 - 220.0 * ca - 6300.0 * cb) / 1403.0,
    ]
    .map(|c| vc.decompress(c));

    let lms = vc.unadapt(mul(&HPE_TO_CAT02, hpe));
    let xyz = mul(&CAT02_TO_XYZ, lms).map(|c| c / 100.0);
    xyz_to_rgb(xyz)
}

// ─── CAM02-UCS (J', a', b') ────────────────────────────────────────────────

pub(crate) fn rgb_to_jab(rgb: [f64; 3]) -> [f64; 3] {
    let [j, chroma, h] = rgb_to_jch_appearance(rgb);
    let j_prime = (1.0 + 100.0 * UCS_C1) * j / (1.0 + UCS_C1 * j);
    let m = chroma * VC.fl.powf(0.25);
    let m_prime = (1.0 + UCS_C2 * m).ln() / UCS_C2;
    let hr = h.to_radians();
    [j_prime, m_prime * hr.cos(), m_prime * hr.sin()]
}

pub(crate) fn jab_to_rgb(jab: [f64; 3]) -> [f64; 3] {
    let [j_prime, a, b] = jab;
    let m_prime = a.hypot(b);
    let m = ((m_prime * UCS_C2).exp() - 1.0) / UCS_C2;
    let h = b.atan2(a).to_degrees().rem_euclid(360.0);
    let chroma = m / VC.fl.powf(0.25);
    let j = j_prime / (1.0 + UCS_C1 * (100.0 - j_prime));
    jch_appearance_to_rgb([j, chroma, h])
}
