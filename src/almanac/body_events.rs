/*
 * Ephemera
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Body rise/set and meridian transit: the non-solar analogues of
//! [`super::sun_events`], using the refraction-only altitude threshold
//! and the hour-angle crossing of the local meridian (spec §4.9).

use super::{sample_and_search, step_days};
use crate::aberration::apparent;
use crate::config::EphemeraConfig;
use crate::ephemeris::Ephemeris;
use crate::rotation::{altaz, hour_angle_dec};
use crate::search::{DiscreteEvent, SearchError};
use crate::time::tdb_jd_to_ut1_jd;
use crate::NaifId;

/// Refraction-only altitude threshold for non-solar bodies (spec §4.9):
/// 34 arcminutes, as opposed to the Sun's disk-plus-refraction threshold.
const RISE_SET_THRESHOLD_DEG: f64 = -34.0 / 60.0;

fn body_altitude_deg(
    eph: &Ephemeris,
    config: &EphemeraConfig,
    observer: NaifId,
    body: NaifId,
    lat_deg: f64,
    lon_deg: f64,
    tdb_jd: f64,
) -> f64 {
    let pos = apparent(eph, observer, body, tdb_jd, config);
    let jd_ut1 = tdb_jd_to_ut1_jd(tdb_jd);
    altaz(pos, lat_deg, lon_deg, jd_ut1, config.nutation_mode).0
}

/// Rise and set events of `body` as seen from `(lat_deg, lon_deg)` over
/// `[start_jd, end_jd]` (spec §4.9), separated by direction: rises are
/// the transitions to altitude `>= -34'`, sets the transitions away
/// from it.
pub fn body_rise_set(
    eph: &Ephemeris,
    config: &EphemeraConfig,
    observer: NaifId,
    body: NaifId,
    lat_deg: f64,
    lon_deg: f64,
    start_jd: f64,
    end_jd: f64,
) -> Result<(Vec<DiscreteEvent>, Vec<DiscreteEvent>), SearchError> {
    let events = sample_and_search(start_jd, end_jd, step_days::BODY_RISE_SET, |t| {
        if body_altitude_deg(eph, config, observer, body, lat_deg, lon_deg, t) >= RISE_SET_THRESHOLD_DEG {
            1
        } else {
            0
        }
    })?;

    let rises = events.iter().copied().filter(|e| e.new_value == 1).collect();
    let sets = events.iter().copied().filter(|e| e.new_value == 0).collect();
    Ok((rises, sets))
}

/// Meridian transits of `body` as seen from longitude `lon_deg` over
/// `[start_jd, end_jd]` (spec §4.9): the instants the hour angle crosses
/// from above 180 degrees back to the `[0, 180)` half, i.e. upper
/// culmination.
pub fn body_meridian_transits(
    eph: &Ephemeris,
    config: &EphemeraConfig,
    observer: NaifId,
    body: NaifId,
    lon_deg: f64,
    start_jd: f64,
    end_jd: f64,
) -> Result<Vec<DiscreteEvent>, SearchError> {
    let events = sample_and_search(start_jd, end_jd, step_days::MERIDIAN_TRANSIT, |t| {
        let pos = apparent(eph, observer, body, t, config);
        let jd_ut1 = tdb_jd_to_ut1_jd(t);
        let (hour_angle_deg, ..) = hour_angle_dec(pos, lon_deg, jd_ut1, config.nutation_mode);
        if hour_angle_deg > 180.0 {
            0
        } else {
            1
        }
    })?;

    Ok(events.into_iter().filter(|e| e.new_value == 1).collect())
}
