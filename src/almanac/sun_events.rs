/*
 * Ephemera
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Sunrise/sunset and twilight: transitions of the apparent Sun's
//! topocentric altitude across the solar-disk-plus-refraction threshold
//! and the four twilight boundaries (spec §4.9).

use super::{sample_and_search, step_days};
use crate::aberration::apparent;
use crate::config::EphemeraConfig;
use crate::constants::bodies;
use crate::ephemeris::Ephemeris;
use crate::rotation::altaz;
use crate::search::{DiscreteEvent, SearchError};
use crate::time::tdb_jd_to_ut1_jd;

/// Solar-disk-plus-refraction threshold: 34' refraction + 16' semidiameter
/// (spec §4.9).
const SUNRISE_SUNSET_THRESHOLD_DEG: f64 = -0.8333;
const TWILIGHT_CIVIL_DEG: f64 = -6.0;
const TWILIGHT_NAUTICAL_DEG: f64 = -12.0;
const TWILIGHT_ASTRONOMICAL_DEG: f64 = -18.0;

/// Topocentric altitude of the apparent Sun, degrees.
fn sun_altitude_deg(eph: &Ephemeris, config: &EphemeraConfig, lat_deg: f64, lon_deg: f64, tdb_jd: f64) -> f64 {
    let pos = apparent(eph, bodies::EARTH, bodies::SUN, tdb_jd, config);
    let jd_ut1 = tdb_jd_to_ut1_jd(tdb_jd);
    altaz(pos, lat_deg, lon_deg, jd_ut1, config.nutation_mode).0
}

/// Sunrise/sunset transitions at `(lat_deg, lon_deg)` over
/// `[start_jd, end_jd]`. `new_value` is `1` at sunrise, `0` at sunset.
pub fn sunrise_sunset(
    eph: &Ephemeris,
    config: &EphemeraConfig,
    lat_deg: f64,
    lon_deg: f64,
    start_jd: f64,
    end_jd: f64,
) -> Result<Vec<DiscreteEvent>, SearchError> {
    sample_and_search(start_jd, end_jd, step_days::SUNRISE_SUNSET, |t| {
        if sun_altitude_deg(eph, config, lat_deg, lon_deg, t) >= SUNRISE_SUNSET_THRESHOLD_DEG {
            1
        } else {
            0
        }
    })
}

/// Five-level twilight classification at `(lat_deg, lon_deg)` over
/// `[start_jd, end_jd]` (spec §4.9): `0` = night, `1` = astronomical,
/// `2` = nautical, `3` = civil, `4` = daylight.
pub fn twilight(
    eph: &Ephemeris,
    config: &EphemeraConfig,
    lat_deg: f64,
    lon_deg: f64,
    start_jd: f64,
    end_jd: f64,
) -> Result<Vec<DiscreteEvent>, SearchError> {
    sample_and_search(start_jd, end_jd, step_days::TWILIGHT, |t| {
        let alt = sun_altitude_deg(eph, config, lat_deg, lon_deg, t);
        if alt >= SUNRISE_SUNSET_THRESHOLD_DEG {
            4
        } else if alt >= TWILIGHT_CIVIL_DEG {
            3
        } else if alt >= TWILIGHT_NAUTICAL_DEG {
            2
        } else if alt >= TWILIGHT_ASTRONOMICAL_DEG {
            1
        } else {
            0
        }
    })
}
