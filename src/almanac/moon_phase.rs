/*
 * Ephemera
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Moon phases: new/first-quarter/full/last-quarter transitions via the
//! Moon-Sun ecliptic longitude difference (spec §4.9).

use super::{ecliptic_longitude, sample_and_search, step_days};
use crate::config::EphemeraConfig;
use crate::constants::bodies;
use crate::ephemeris::Ephemeris;
use crate::search::{DiscreteEvent, SearchError};

/// Moon-phase transitions over `[start_jd, end_jd]`. `new_value` is
/// `0` = new moon, `1` = first quarter, `2` = full moon, `3` = last
/// quarter.
pub fn moon_phases(
    eph: &Ephemeris,
    config: &EphemeraConfig,
    start_jd: f64,
    end_jd: f64,
) -> Result<Vec<DiscreteEvent>, SearchError> {
    sample_and_search(start_jd, end_jd, step_days::MOON_PHASE, |t| {
        let moon_lon = ecliptic_longitude(eph, bodies::MOON, t, config);
        let sun_lon = ecliptic_longitude(eph, bodies::SUN, t, config);
        (((moon_lon - sun_lon).rem_euclid(360.0)) / 90.0).floor().rem_euclid(4.0) as i64
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::almanac::test_support::synthetic_solar_system;
    use crate::constants::J2000_JD;

    /// Spec §8 scenario 5's shape: the Moon-Sun elongation completes one
    /// full new/first-quarter/full/last-quarter cycle per synodic month.
    #[test]
    fn one_synodic_month_returns_four_phase_transitions() {
        let eph = synthetic_solar_system();
        let config = EphemeraConfig::default();
        let events = moon_phases(&eph, &config, J2000_JD, J2000_JD + 35.0).unwrap();

        assert_eq!(events.len(), 4);
        let values: Vec<i64> = events.iter().map(|e| e.new_value).collect();
        assert_eq!(values, vec![0, 1, 2, 3]);
    }
}
