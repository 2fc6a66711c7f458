/*
 * Ephemera
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Mean obliquity, the five Delaunay fundamental arguments, and IAU 2000A
//! nutation (standard-truncated or full) — spec §4.6.

use super::nutation_series::{FULL_TERMS, PLANETARY_TERMS, STANDARD_TERMS};
use crate::config::NutationMode;
use crate::math::rotation::{r1, r3};
use crate::math::Matrix3;

const ARCSEC_TO_RAD: f64 = std::f64::consts::PI / (180.0 * 3600.0);
const TURN_ARCSEC: f64 = 1_296_000.0;

fn arcsec_to_rad(arcsec: f64) -> f64 {
    arcsec * ARCSEC_TO_RAD
}

/// IAU 2006 mean obliquity of the ecliptic, radians, for Julian centuries
/// `t` since J2000 TDB.
pub fn mean_obliquity(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    let eps_arcsec = 84_381.406 - 46.836_769 * t - 0.000_183_1 * t2 + 0.002_003_40 * t3
        - 0.000_000_576 * t4
        - 0.000_000_043_4 * t5;
    arcsec_to_rad(eps_arcsec)
}

/// The five Delaunay fundamental arguments `(l, l', F, D, Ω)`, radians,
/// reduced to `[0, 2π)` (IERS Conventions 2003 polynomials).
pub fn fundamental_arguments(t: f64) -> (f64, f64, f64, f64, f64) {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let reduce = |arcsec: f64| -> f64 { arcsec_to_rad(arcsec.rem_euclid(TURN_ARCSEC)) };

    let l = reduce(
        485_868.249_036 + 1_717_915_923.217_8 * t + 31.879_2 * t2 + 0.051_635 * t3
            - 0.000_244_70 * t4,
    );
    let lp = reduce(
        1_287_104.793_05 + 129_596_581.048_1 * t - 0.553_2 * t2 + 0.000_136 * t3
            - 0.000_011_49 * t4,
    );
    let f = reduce(
        335_779.526_232 + 1_739_527_262.847_8 * t - 12.751_2 * t2 - 0.001_037 * t3
            + 0.000_004_17 * t4,
    );
    let d = reduce(
        1_072_260.703_69 + 1_602_961_601.209_0 * t - 6.370_6 * t2 + 0.006_593 * t3
            - 0.000_031_69 * t4,
    );
    let om = reduce(
        450_160.398_036 - 6_962_890.543_1 * t + 7.472_2 * t2 + 0.007_702 * t3
            - 0.000_059_39 * t4,
    );

    (l, lp, f, d, om)
}

/// Rough linear mean longitudes of Mercury through Saturn plus the general
/// precession in longitude, radians — the planetary-argument inputs to the
/// `full`-mode planetary nutation terms (spec §4.6 "full" mode).
fn planetary_arguments(t: f64) -> [f64; 7] {
    let turn = 2.0 * std::f64::consts::PI;
    let reduce = |rad: f64| rad.rem_euclid(turn);
    [
        reduce(4.402_608_842 + 2608.790_314_157_4 * t),
        reduce(3.176_146_697 + 1021.328_554_621_1 * t),
        reduce(1.753_470_314 + 628.307_584_999_1 * t),
        reduce(6.203_480_913 + 334.061_242_670_0 * t),
        reduce(0.599_546_497 + 52.969_096_264_1 * t),
        reduce(0.874_016_757 + 21.329_910_496_0 * t),
        reduce(0.024_381_750 * t + 0.000_005_386_91 * t * t),
    ]
}

/// `(Δψ, Δε)` in radians: sum of the truncated or full IAU 2000A luni-solar
/// series (plus, in `full` mode, the planetary series) at Julian centuries
/// `t` (spec §4.6 `nutation_angles`).
pub fn nutation_angles(t: f64, mode: NutationMode) -> (f64, f64) {
    let (l, lp, f, d, om) = fundamental_arguments(t);
    let terms = match mode {
        NutationMode::Standard => STANDARD_TERMS,
        NutationMode::Full => FULL_TERMS,
    };

    let mut dpsi_milliarcsec = 0.0_f64;
    let mut deps_milliarcsec = 0.0_f64;
    for &(nl, nlp, nf, nd, nom, sin_a, sin_at, cos_a, cos_at) in terms {
        let phi = nl as f64 * l + nlp as f64 * lp + nf as f64 * f + nd as f64 * d + nom as f64 * om;
        dpsi_milliarcsec += (sin_a + sin_at * t) * phi.sin();
        deps_milliarcsec += (cos_a + cos_at * t) * phi.cos();
    }

    if matches!(mode, NutationMode::Full) {
        let planets = planetary_arguments(t);
        for &(l_ve, l_ea, l_ma, l_ju, l_sa, l_d, l_om, l_pa, sin_a, cos_a) in PLANETARY_TERMS {
            let phi = l_ve as f64 * planets[0]
                + l_ea as f64 * planets[2]
                + l_ma as f64 * planets[3]
                + l_ju as f64 * planets[4]
                + l_sa as f64 * planets[5]
                + l_d as f64 * d
                + l_om as f64 * om
                + l_pa as f64 * planets[6];
            dpsi_milliarcsec += sin_a * phi.sin();
            deps_milliarcsec += cos_a * phi.cos();
        }
    }

    // Table amplitudes are in units of 0.0001 arcsec.
    (
        arcsec_to_rad(dpsi_milliarcsec * 0.0001),
        arcsec_to_rad(deps_milliarcsec * 0.0001),
    )
}

/// `N^T`: the nutation matrix transposed, rotating from the true equator
/// of date back to the mean equator of date (spec §4.6
/// `nutation_matrix_transpose`).
pub fn nutation_matrix_transpose(dpsi: f64, deps: f64, eps_mean: f64) -> Matrix3 {
    let n = r1(-(eps_mean + deps)) * r3(-dpsi) * r1(eps_mean);
    n.transpose()
}
