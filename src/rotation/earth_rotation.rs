/*
 * Ephemera
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! GMST, GAST, and the Earth Rotation Angle, all as degrees of a UT1
//! Julian date (spec §4.6).

use crate::config::NutationMode;
use crate::constants::J2000_JD;

use super::nutation::{mean_obliquity, nutation_angles};

fn centuries_since_j2000(jd_ut1: f64) -> f64 {
    (jd_ut1 - J2000_JD) / 36_525.0
}

fn normalize_deg(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// IAU 1982 Greenwich Mean Sidereal Time, degrees.
pub fn gmst(jd_ut1: f64) -> f64 {
    let d = jd_ut1 - J2000_JD;
    let t = centuries_since_j2000(jd_ut1);
    let deg = 280.460_618_37
        + 360.985_647_366_29 * d
        + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    normalize_deg(deg)
}

/// Greenwich Apparent Sidereal Time: GMST plus the equation of the
/// equinoxes `Δψ·cos(ε_mean)` (spec §4.6 `gast`). `mode` selects which
/// nutation series supplies `Δψ`.
pub fn gast(jd_ut1: f64, mode: NutationMode) -> f64 {
    let t = centuries_since_j2000(jd_ut1);
    let eps_mean = mean_obliquity(t);
    let (dpsi, _deps) = nutation_angles(t, mode);
    let equation_of_equinoxes_deg = (dpsi * eps_mean.cos()).to_degrees();
    normalize_deg(gmst(jd_ut1) + equation_of_equinoxes_deg)
}

/// IAU 2000/2006 Earth Rotation Angle, degrees.
pub fn earth_rotation_angle(jd_ut1: f64) -> f64 {
    let d = jd_ut1 - J2000_JD;
    let frac = d.fract();
    let turns = 0.779_057_273_264_0 + 0.002_737_811_911_354_48 * d + frac;
    normalize_deg(turns * 360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gmst_is_within_a_full_turn() {
        let g = gmst(2_451_545.0);
        assert!((0.0..360.0).contains(&g));
    }

    #[test]
    fn gast_is_close_to_gmst() {
        let g = gmst(2_451_545.5);
        let a = gast(2_451_545.5, NutationMode::Standard);
        // Equation of the equinoxes is at most a few arcseconds, well
        // under a degree.
        assert!((g - a).abs() < 0.01 || (360.0 - (g - a).abs()) < 0.01);
    }

    #[test]
    fn era_is_within_a_full_turn() {
        let e = earth_rotation_angle(2_451_545.25);
        assert!((0.0..360.0).contains(&e));
    }
}
