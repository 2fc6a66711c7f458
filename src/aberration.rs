/*
 * Ephemera
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The apparent-position pipeline (component C7): gravitational light
//! deflection by a fixed deflector list, then full-Lorentz stellar
//! aberration, layered over [`crate::ephemeris::Ephemeris::observe`]
//! (spec §4.7).

use crate::config::EphemeraConfig;
use crate::constants::{bodies, SPEED_OF_LIGHT_KM_DAY, SPEED_OF_LIGHT_KM_S};
use crate::ephemeris::Ephemeris;
use crate::math::Vector3;
use crate::NaifId;

/// Sun's gravitational parameter, km^3/s^2.
const GM_SUN_KM3_S2: f64 = 132_712_440_018.0;

/// One deflector: its NAIF ID and the Sun-to-body mass ratio (spec §4.7
/// names the Sun, Jupiter barycenter, and Saturn barycenter, in that
/// fixed order).
struct Deflector {
    id: NaifId,
    reciprocal_mass: f64,
}

const DEFLECTORS: &[Deflector] = &[
    Deflector { id: bodies::SUN, reciprocal_mass: 1.0 },
    Deflector { id: bodies::JUPITER_BARYCENTER, reciprocal_mass: 1047.348_6 },
    Deflector { id: bodies::SATURN_BARYCENTER, reciprocal_mass: 3497.898 },
];

/// Guard against the near-collinear singularity in the deflection formula
/// (spec §4.7 step 1 "Guard").
const SINGULARITY_GUARD: f64 = 0.999_999_999_99;

fn gravitational_deflection(eph: &Ephemeris, observer: NaifId, p: Vector3, tdb_jd: f64, light_time: f64) -> Vector3 {
    let observer_pos = eph.body_pos_wrt_ssb(observer, tdb_jd);
    let mut p = p;

    for deflector in DEFLECTORS {
        let gpv = eph.body_pos_wrt_ssb(deflector.id, tdb_jd) - observer_pos;
        let dlt = p.dot(&gpv) / (SPEED_OF_LIGHT_KM_DAY * p.norm());

        let deflector_pos = eph.body_pos_wrt_ssb(deflector.id, tdb_jd - light_time + dlt);
        let e = deflector_pos - observer_pos;

        let p_hat = p.normalize();
        let e_hat = e.normalize();

        if (e_hat.dot(&p_hat)).abs() > SINGULARITY_GUARD {
            continue;
        }

        let q = p + e;
        let q_hat = q.normalize();

        let gm = GM_SUN_KM3_S2 / deflector.reciprocal_mass;
        let term = p.dot(&q_hat) * e_hat - e_hat.dot(&p_hat) * q_hat;
        let delta = (2.0 * gm / (SPEED_OF_LIGHT_KM_S.powi(2) * e.norm()))
            * term
            / (1.0 + q_hat.dot(&e_hat))
            * p.norm();

        p += delta;
    }

    p
}

/// Full-Lorentz stellar aberration (spec §4.7 step 2).
fn stellar_aberration(p: Vector3, obs_vel: Vector3, light_time: f64) -> Vector3 {
    let beta = obs_vel.norm() / SPEED_OF_LIGHT_KM_DAY;
    let cos_theta = p.dot(&obs_vel) / (p.norm() * obs_vel.norm());
    let gamma_inv = (1.0 - beta * beta).sqrt();
    let big_p = beta * cos_theta;
    let big_q = (1.0 + big_p / (1.0 + gamma_inv)) * light_time;
    let big_r = 1.0 + big_p;

    (gamma_inv * p + big_q * obs_vel) / big_r
}

/// The apparent position of `target` as seen from `observer` at
/// `tdb_jd`: light-time, gravitational deflection, then stellar
/// aberration (spec §4.7).
pub fn apparent(eph: &Ephemeris, observer: NaifId, target: NaifId, tdb_jd: f64, config: &EphemeraConfig) -> Vector3 {
    let (p, light_time) = eph.observe(observer, target, tdb_jd, config);
    let obs_vel = eph.body_vel_wrt_ssb(observer, tdb_jd);

    let deflected = gravitational_deflection(eph, observer, p, tdb_jd, light_time);
    stellar_aberration(deflected, obs_vel, light_time)
}
