/*
 * Ephemera
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The satellite event finder (component C11): wraps an external SGP4
//! propagator, converts its TEME output to ICRF by inverting the same
//! precession/nutation matrices [`crate::rotation`] already builds for
//! C6, and drives [`crate::search`] to find rise/culmination/set events
//! (spec §4.11).

use hifitime::{Epoch, Unit};
use log::warn;
use snafu::prelude::*;

use crate::config::NutationMode;
use crate::constants::radii_km;
use crate::math::rotation::{r3, Matrix3};
use crate::math::Vector3;
use crate::rotation::{altaz, gast, mean_obliquity, nutation_angles, nutation_matrix_transpose, precession_matrix_inverse};
use crate::search::{find_discrete, find_maxima, SearchError};
use crate::time::tt_jd_to_ut1_jd;

fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - crate::constants::J2000_JD) / 36_525.0
}

/// `(precession date→J2000)⁻¹ · (nutation true→mean)⁻¹`, the TEME→ICRF
/// rotation with frame bias omitted (spec §4.11 "(added detail)" — TEME
/// is defined relative to the true equator of date, not the mean J2000
/// equator frame bias bridges to).
fn date_to_icrf_no_bias(t: f64, mode: NutationMode) -> Matrix3 {
    let p_inv = precession_matrix_inverse(t);
    let eps_mean = mean_obliquity(t);
    let (dpsi, deps) = nutation_angles(t, mode);
    let n_inv = nutation_matrix_transpose(dpsi, deps, eps_mean);
    p_inv * n_inv
}

/// Converts a TEME-frame position (as returned by SGP4) into ICRF at UT1
/// Julian date `jd_ut1` (spec §4.11).
fn teme_to_icrf(teme_pos_km: Vector3, jd_ut1: f64, mode: NutationMode) -> Vector3 {
    let t = centuries_since_j2000(jd_ut1);
    date_to_icrf_no_bias(t, mode) * teme_pos_km
}

/// Converts a spherical-Earth geodetic observer position into the same
/// (bias-omitted) ICRF-adjacent frame as [`teme_to_icrf`], so the two
/// vectors subtract cleanly in [`SatelliteTarget::altitude_deg`] (spec
/// §4.11's `altaz(TEME_to_ICRF(...) − geodetic_to_icrf(...), ...)`).
fn geodetic_to_icrf(lat_deg: f64, lon_deg: f64, jd_ut1: f64, mode: NutationMode) -> Vector3 {
    let t = centuries_since_j2000(jd_ut1);
    let lat_rad = lat_deg.to_radians();
    let lon_rad = lon_deg.to_radians();
    let earth_fixed = Vector3::new(lat_rad.cos() * lon_rad.cos(), lat_rad.cos() * lon_rad.sin(), lat_rad.sin())
        * radii_km::EARTH;

    let gast_rad = gast(jd_ut1, mode).to_radians();
    let true_of_date = r3(gast_rad) * earth_fixed;
    date_to_icrf_no_bias(t, mode) * true_of_date
}

/// Failures specific to the satellite event finder (spec §4.11).
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum SatelliteError {
    #[snafu(display("invalid TLE: {source}"))]
    InvalidElements { source: sgp4::Error },

    #[snafu(display("{source}"))]
    Search { source: SearchError },
}

impl From<SearchError> for SatelliteError {
    fn from(source: SearchError) -> Self {
        Self::Search { source }
    }
}

/// A TLE-backed SGP4 propagator paired with its reference epoch. The
/// epoch is supplied by the caller as a [`hifitime::Epoch`] rather than
/// parsed from the TLE text a second time, so this crate never needs to
/// depend on the calendar-parsing machinery `sgp4::Elements` carries for
/// its own internal epoch bookkeeping.
pub struct SatelliteTarget {
    constants: sgp4::Constants,
    epoch: Epoch,
}

impl SatelliteTarget {
    /// Builds a propagator from a two-line element set. `epoch` must be
    /// the TLE's own reference epoch, expressed as a `hifitime::Epoch`.
    pub fn from_tle(name: Option<String>, line1: &str, line2: &str, epoch: Epoch) -> Result<Self, SatelliteError> {
        let elements =
            sgp4::Elements::from_tle(name, line1.as_bytes(), line2.as_bytes()).context(InvalidElementsSnafu)?;
        let constants = sgp4::Constants::from_elements(&elements).context(InvalidElementsSnafu)?;
        Ok(Self { constants, epoch })
    }

    fn minutes_since_epoch(&self, tt_jd: f64) -> f64 {
        let query = Epoch::from_jde_tt(tt_jd);
        (query - self.epoch).to_unit(Unit::Minute)
    }

    /// TEME position, km, at TT Julian date `tt_jd`. SGP4 propagation
    /// failures (stale or decayed elements) are treated as a missing
    /// observation rather than aborting the whole search.
    fn teme_position_km(&self, tt_jd: f64) -> Option<Vector3> {
        let minutes = self.minutes_since_epoch(tt_jd);
        match self.constants.propagate(minutes) {
            Ok(prediction) => Some(Vector3::new(prediction.position[0], prediction.position[1], prediction.position[2])),
            Err(err) => {
                warn!("sgp4 propagation failed at t={minutes} min since epoch: {err}");
                None
            }
        }
    }

    /// Topocentric altitude, degrees, of the satellite at TT Julian date
    /// `tt_jd` as seen from `(lat_deg, lon_deg)` (spec §4.11 `a(t_tt)`).
    /// A propagation failure reads as far below the horizon, so it never
    /// registers as a rise.
    fn altitude_deg(&self, lat_deg: f64, lon_deg: f64, tt_jd: f64, mode: NutationMode) -> f64 {
        let jd_ut1 = tt_jd_to_ut1_jd(tt_jd);
        match self.teme_position_km(tt_jd) {
            Some(teme_pos) => {
                let pos_icrf = teme_to_icrf(teme_pos, jd_ut1, mode) - geodetic_to_icrf(lat_deg, lon_deg, jd_ut1, mode);
                altaz(pos_icrf, lat_deg, lon_deg, jd_ut1, mode).0
            }
            None => f64::NEG_INFINITY,
        }
    }
}

/// One rise/culmination/set event (spec §4.11): `kind` `0` = rise,
/// `1` = culmination, `2` = set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassEventKind {
    Rise = 0,
    Culmination = 1,
    Set = 2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassEvent {
    pub t: f64,
    pub kind: PassEventKind,
    pub alt_deg: f64,
}

/// A satellite pass: a rise always present, a culmination and set that
/// may be absent if the window boundary truncated the pass (spec §9
/// "Satellite event pass boundary" — an unmatched rise is a valid
/// record).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pass {
    pub rise: PassEvent,
    pub culmination: Option<PassEvent>,
    pub set: Option<PassEvent>,
}

const STEP_DAYS: f64 = 1.0 / 1440.0;
/// Pass-finding bisects to the exact step boundary rather than stopping
/// early at the almanac's default tolerance (spec §4.11).
const PASS_EPSILON_DAYS: f64 = 0.0;

/// Rise/culmination/set events for `sat` as seen from `(lat_deg, lon_deg)`
/// over `[start_tt_jd, end_tt_jd]` (TT Julian dates), where the satellite
/// climbs to at least `min_alt_deg` (spec §4.11).
pub fn find_events(
    sat: &SatelliteTarget,
    lat_deg: f64,
    lon_deg: f64,
    start_tt_jd: f64,
    end_tt_jd: f64,
    min_alt_deg: f64,
    mode: NutationMode,
) -> Result<Vec<Pass>, SatelliteError> {
    let altitude = |t: f64| sat.altitude_deg(lat_deg, lon_deg, t, mode);

    let transitions = find_discrete(start_tt_jd, end_tt_jd, STEP_DAYS, PASS_EPSILON_DAYS, |t| {
        if altitude(t) >= min_alt_deg {
            1
        } else {
            0
        }
    })?;

    let mut passes = Vec::new();
    let mut iter = transitions.into_iter().peekable();
    while let Some(event) = iter.next() {
        if event.new_value != 1 {
            continue;
        }
        let rise = PassEvent { t: event.t, kind: PassEventKind::Rise, alt_deg: altitude(event.t) };

        let set = match iter.peek() {
            Some(next) if next.new_value == 0 => {
                let next = iter.next().unwrap();
                Some(PassEvent { t: next.t, kind: PassEventKind::Set, alt_deg: altitude(next.t) })
            }
            _ => None,
        };

        let culmination_end = set.map(|s| s.t).unwrap_or(end_tt_jd);
        let culmination = if culmination_end > rise.t {
            find_maxima(rise.t, culmination_end, STEP_DAYS, crate::search::DEFAULT_EXTREMUM_EPSILON_DAYS, altitude)?
                .into_iter()
                .max_by(|a, b| a.value.partial_cmp(&b.value).unwrap())
                .map(|extremum| PassEvent { t: extremum.t, kind: PassEventKind::Culmination, alt_deg: extremum.value })
        } else {
            None
        };

        passes.push(Pass { rise, culmination, set });
    }

    Ok(passes)
}
