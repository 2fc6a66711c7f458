/*
 * Ephemera
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! IAU 2006 precession angles and matrix (spec §4.6).

use crate::math::rotation::{r2, r3};
use crate::math::Matrix3;

fn arcsec_to_rad(arcsec: f64) -> f64 {
    arcsec.to_radians() / 3600.0
}

/// IAU 2006 precession angles `(zeta_A, z_A, theta_A)` in radians, for
/// Julian centuries `t` since J2000 TDB.
pub fn precession_angles(t: f64) -> (f64, f64, f64) {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;

    let zeta_a = 2.650_545 + 2306.083_227 * t + 0.298_849_9 * t2 + 0.018_018_28 * t3
        - 0.000_005_971 * t4
        - 0.000_000_317_3 * t5;
    let z_a = -2.650_545 + 2306.077_181 * t + 1.092_734_8 * t2 + 0.018_268_37 * t3
        - 0.000_028_596 * t4
        - 0.000_000_290_4 * t5;
    let theta_a = 2004.191_903 * t - 0.429_493_4 * t2 - 0.041_822_64 * t3 - 0.000_007_089 * t4
        - 0.000_000_127_4 * t5;

    (
        arcsec_to_rad(zeta_a),
        arcsec_to_rad(z_a),
        arcsec_to_rad(theta_a),
    )
}

/// `P^T`: the precession matrix transposed, rotating from the mean
/// equator/equinox of date back to J2000 (spec §4.6
/// `precession_matrix_inverse`).
pub fn precession_matrix_inverse(t: f64) -> Matrix3 {
    let (zeta_a, z_a, theta_a) = precession_angles(t);
    let p = r3(-z_a) * r2(theta_a) * r3(-zeta_a);
    p.transpose()
}
