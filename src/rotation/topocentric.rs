/*
 * Ephemera
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! `altaz` and `hour_angle_dec`: the final legs of the rotation pipeline
//! that turn a geocentric ICRF vector into topocentric observables (spec
//! §4.6).

use crate::config::NutationMode;
use crate::math::rotation::{r3, Matrix3};
use crate::math::Vector3;

use super::bias::frame_bias_matrix;
use super::earth_rotation::gast;
use super::nutation::{mean_obliquity, nutation_angles, nutation_matrix_transpose};
use super::precession::precession_matrix_inverse;
use crate::constants::J2000_JD;

fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / 36_525.0
}

/// `N · P · B`: rotates a geocentric ICRF vector into the true equator and
/// equinox of date at Julian centuries `t`.
fn icrf_to_true_of_date(t: f64, mode: NutationMode) -> Matrix3 {
    let b = frame_bias_matrix();
    let p = precession_matrix_inverse(t).transpose();
    let eps_mean = mean_obliquity(t);
    let (dpsi, deps) = nutation_angles(t, mode);
    let n = nutation_matrix_transpose(dpsi, deps, eps_mean).transpose();
    n * p * b
}

/// Rotates a true-of-date-frame vector by latitude into topocentric
/// (North, East, Up), per spec §4.6's "pitch-down rotation... with row
/// re-ordering".
fn north_east_up_matrix(lat_rad: f64) -> Matrix3 {
    let (sin_lat, cos_lat) = lat_rad.sin_cos();
    Matrix3::new(
        -sin_lat, 0.0, cos_lat, //
        0.0, 1.0, 0.0, //
        cos_lat, 0.0, sin_lat,
    )
}

/// Apparent altitude/azimuth/distance of a geocentric ICRF position as
/// seen from `(lat, lon)` at UT1 Julian date `jd_ut1` (spec §4.6 `altaz`).
pub fn altaz(pos_icrf: Vector3, lat_deg: f64, lon_deg: f64, jd_ut1: f64, mode: NutationMode) -> (f64, f64, f64) {
    let t = centuries_since_j2000(jd_ut1);
    let dist_km = pos_icrf.norm();

    let date_vec = icrf_to_true_of_date(t, mode) * pos_icrf;
    let gast_rad = gast(jd_ut1, mode).to_radians();
    let lon_rad = lon_deg.to_radians();

    let earth_fixed = r3(-gast_rad) * date_vec;
    let local = r3(-lon_rad) * earth_fixed;
    let neu = north_east_up_matrix(lat_deg.to_radians()) * local;

    let (north, east, up) = (neu.x, neu.y, neu.z);
    let alt_deg = up.atan2((north * north + east * east).sqrt()).to_degrees();
    let az_deg = east.atan2(north).to_degrees().rem_euclid(360.0);

    (alt_deg, az_deg, dist_km)
}

/// Hour angle, declination, and true-of-date right ascension of a
/// geocentric ICRF position (spec §4.6 `hour_angle_dec`).
pub fn hour_angle_dec(pos_icrf: Vector3, lon_deg: f64, jd_ut1: f64, mode: NutationMode) -> (f64, f64, f64) {
    let t = centuries_since_j2000(jd_ut1);
    let date_vec = icrf_to_true_of_date(t, mode) * pos_icrf;

    let dec_deg = (date_vec.z / date_vec.norm()).asin().to_degrees();
    let ra_deg = date_vec.y.atan2(date_vec.x).to_degrees().rem_euclid(360.0);
    let hour_angle_deg = (gast(jd_ut1, mode) + lon_deg - ra_deg).rem_euclid(360.0);

    (hour_angle_deg, dec_deg, ra_deg)
}
