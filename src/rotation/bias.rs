/*
 * Ephemera
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Frame-bias matrix B: the small, fixed rotation from ICRS to the mean
//! equator and equinox of J2000 (spec §4.6 "State").

use crate::math::Matrix3;

/// Frame-bias offsets (IERS Conventions 2003), arcseconds.
const XI_0: f64 = -0.016_617;
const ETA_0: f64 = -0.006_819;
const DALPHA_0: f64 = -0.014_6;

fn arcsec_to_rad(arcsec: f64) -> f64 {
    arcsec.to_radians() / 3600.0
}

/// The frame-bias matrix B, constant for the lifetime of the process
/// (it depends on no epoch). Small-angle composition of the three offsets:
/// `B = R1(-η0) · R2(ξ0) · R3(Δα0)`.
pub fn frame_bias_matrix() -> Matrix3 {
    use crate::math::rotation::{r1, r2, r3};
    r1(-arcsec_to_rad(ETA_0)) * r2(arcsec_to_rad(XI_0)) * r3(arcsec_to_rad(DALPHA_0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::rotation::is_orthogonal;

    #[test]
    fn frame_bias_is_orthogonal_and_near_identity() {
        let b = frame_bias_matrix();
        assert!(is_orthogonal(&b, 1e-9));
        assert!((b - Matrix3::identity()).norm() < 1e-6);
    }
}
