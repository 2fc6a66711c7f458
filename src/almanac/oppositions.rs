/*
 * Ephemera
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Oppositions/conjunctions: transitions of the Sun-body ecliptic
//! longitude difference across 0/180 degrees (spec §4.9).

use super::{ecliptic_longitude, sample_and_search, step_days};
use crate::config::EphemeraConfig;
use crate::constants::bodies;
use crate::ephemeris::Ephemeris;
use crate::search::{DiscreteEvent, SearchError};
use crate::NaifId;

/// Opposition/conjunction transitions of `body` over `[start_jd, end_jd]`.
/// `new_value` is `0` = conjunction, `1` = opposition.
pub fn oppositions_and_conjunctions(
    eph: &Ephemeris,
    config: &EphemeraConfig,
    body: NaifId,
    start_jd: f64,
    end_jd: f64,
) -> Result<Vec<DiscreteEvent>, SearchError> {
    sample_and_search(start_jd, end_jd, step_days::OPPOSITIONS, |t| {
        let sun_lon = ecliptic_longitude(eph, bodies::SUN, t, config);
        let body_lon = ecliptic_longitude(eph, body, t, config);
        (((sun_lon - body_lon).rem_euclid(360.0)) / 180.0).floor().rem_euclid(2.0) as i64
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::almanac::test_support::synthetic_solar_system;
    use crate::constants::J2000_JD;

    /// Mars's synthetic 100-day period beats against the Sun's 365.25-day
    /// period fast enough that a 300-day window covers several
    /// opposition/conjunction transitions, alternating as spec §4.9
    /// requires.
    #[test]
    fn mars_oppositions_and_conjunctions_alternate() {
        let eph = synthetic_solar_system();
        let config = EphemeraConfig::default();
        let events = oppositions_and_conjunctions(&eph, &config, bodies::MARS_BARYCENTER, J2000_JD, J2000_JD + 300.0).unwrap();

        assert!(events.len() >= 2);
        for pair in events.windows(2) {
            assert_ne!(pair[0].new_value, pair[1].new_value);
        }
    }
}
