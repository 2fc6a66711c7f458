/*
 * Ephemera
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Seasons: equinox/solstice transitions via the Sun's ecliptic longitude
//! quadrant (spec §4.9).

use super::{ecliptic_longitude, sample_and_search, step_days};
use crate::config::EphemeraConfig;
use crate::constants::bodies;
use crate::ephemeris::Ephemeris;
use crate::search::{DiscreteEvent, SearchError};

/// Equinox/solstice transitions over `[start_jd, end_jd]`. `new_value` is
/// `0` = spring equinox, `1` = summer solstice, `2` = autumn equinox,
/// `3` = winter solstice.
pub fn seasons(
    eph: &Ephemeris,
    config: &EphemeraConfig,
    start_jd: f64,
    end_jd: f64,
) -> Result<Vec<DiscreteEvent>, SearchError> {
    sample_and_search(start_jd, end_jd, step_days::SEASONS, |t| {
        let lon = ecliptic_longitude(eph, bodies::SUN, t, config);
        (lon / 90.0).floor().rem_euclid(4.0) as i64
    })
}
