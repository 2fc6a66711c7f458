/*
 * Ephemera
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Lunar eclipse finder (component C10): full-moon detection via the
//! moon-phase discrete function, refinement to the instant of closest
//! Moon-shadow-axis approach, and shadow-cone classification with Danjon
//! atmospheric enlargement (spec §4.10).

use super::moon_phase::moon_phases;
use crate::config::EphemeraConfig;
use crate::constants::{bodies, radii_km};
use crate::ephemeris::Ephemeris;
use crate::search::{find_minima, SearchError};

/// Half-width, in days, of the window searched around each full moon for
/// the instant of closest shadow-axis approach (spec §4.10 step 2).
const SEARCH_HALF_WINDOW_DAYS: f64 = 1.5;
/// Step size for the continuous minimum search (spec §4.10 step 2).
const SEARCH_STEP_DAYS: f64 = 0.02;
/// Danjon atmospheric enlargement factor applied to both shadow cones
/// (spec §4.10 step 3).
const DANJON_ENLARGEMENT: f64 = 1.02;

/// Eclipse severity, ordered by increasing magnitude (spec §4.10 step 5).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EclipseKind {
    Penumbral = 1,
    Partial = 2,
    Total = 3,
}

/// A classified lunar eclipse (spec §3 "Lunar eclipse").
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarEclipse {
    pub t: f64,
    pub kind: EclipseKind,
    pub umbral_mag: f64,
    pub penumbral_mag: f64,
    pub closest_approach_km: f64,
    pub umbral_radius_km: f64,
    pub penumbral_radius_km: f64,
}

/// Perpendicular distance, km, of the Moon from the Earth-shadow axis at
/// `tdb_jd`, using geocentric (not light-time-corrected) Sun/Moon
/// positions (spec §4.10 step 3 "no light-time").
fn shadow_axis_separation_km(eph: &Ephemeris, tdb_jd: f64) -> f64 {
    let sun = eph.geocentric_position(bodies::SUN, tdb_jd);
    let moon = eph.geocentric_position(bodies::MOON, tdb_jd);
    let axis = -sun.normalize();
    let d_along = moon.dot(&axis);
    (moon - d_along * axis).norm()
}

/// Shadow geometry and classification at the candidate maximum-eclipse
/// instant `tdb_jd` (spec §4.10 steps 3-5). Returns `None` if neither
/// shadow cone covers the Moon at all (not an eclipse).
fn classify(eph: &Ephemeris, tdb_jd: f64) -> Option<LunarEclipse> {
    let sun = eph.geocentric_position(bodies::SUN, tdb_jd);
    let moon = eph.geocentric_position(bodies::MOON, tdb_jd);
    let sun_dist = sun.norm();
    let axis = -sun.normalize();
    let d_along = moon.dot(&axis);
    let perp = (moon - d_along * axis).norm();

    let r_umbra = (radii_km::EARTH - d_along * (radii_km::SUN - radii_km::EARTH) / sun_dist) * DANJON_ENLARGEMENT;
    let r_pen = (radii_km::EARTH + d_along * (radii_km::SUN + radii_km::EARTH) / sun_dist) * DANJON_ENLARGEMENT;

    let umbral_mag = (r_umbra + radii_km::MOON - perp) / (2.0 * radii_km::MOON);
    let penumbral_mag = (r_pen + radii_km::MOON - perp) / (2.0 * radii_km::MOON);

    let kind = if umbral_mag >= 1.0 {
        EclipseKind::Total
    } else if umbral_mag > 0.0 {
        EclipseKind::Partial
    } else if penumbral_mag > 0.0 {
        EclipseKind::Penumbral
    } else {
        return None;
    };

    Some(LunarEclipse {
        t: tdb_jd,
        kind,
        umbral_mag,
        penumbral_mag,
        closest_approach_km: perp,
        umbral_radius_km: r_umbra,
        penumbral_radius_km: r_pen,
    })
}

/// Lunar eclipses over `[start_jd, end_jd]` (spec §4.10), time-sorted.
pub fn find_lunar_eclipses(
    eph: &Ephemeris,
    config: &EphemeraConfig,
    start_jd: f64,
    end_jd: f64,
) -> Result<Vec<LunarEclipse>, SearchError> {
    let full_moons = moon_phases(eph, config, start_jd, end_jd)?
        .into_iter()
        .filter(|e| e.new_value == 2);

    let mut eclipses = Vec::new();
    for full_moon in full_moons {
        let t_fm = full_moon.t;
        let window_start = (t_fm - SEARCH_HALF_WINDOW_DAYS).max(start_jd);
        let window_end = (t_fm + SEARCH_HALF_WINDOW_DAYS).min(end_jd);
        if window_start >= window_end {
            continue;
        }

        let minima = find_minima(window_start, window_end, SEARCH_STEP_DAYS, crate::search::DEFAULT_EXTREMUM_EPSILON_DAYS, |t| {
            shadow_axis_separation_km(eph, t)
        })?;

        let candidate = minima.into_iter().min_by(|a, b| (a.t - t_fm).abs().partial_cmp(&(b.t - t_fm).abs()).unwrap());

        if let Some(candidate) = candidate {
            if let Some(eclipse) = classify(eph, candidate.t) {
                eclipses.push(eclipse);
            }
        }
    }

    eclipses.sort_by(|a, b| a.t.partial_cmp(&b.t).unwrap());
    Ok(eclipses)
}
