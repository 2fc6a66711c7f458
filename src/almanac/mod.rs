/*
 * Ephemera
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The almanac (component C9): seasons, moon phases, sunrise/sunset,
//! twilight, body rise/set, meridian transit, and oppositions/
//! conjunctions, each a composition of [`crate::search`] over
//! [`crate::rotation`]/[`crate::aberration`] (spec §4.9).

pub mod body_events;
pub mod eclipse;
pub mod moon_phase;
pub mod oppositions;
pub mod seasons;
pub mod sun_events;

pub use body_events::{body_meridian_transits, body_rise_set};
pub use eclipse::find_lunar_eclipses;
pub use moon_phase::moon_phases;
pub use oppositions::oppositions_and_conjunctions;
pub use seasons::seasons;
pub use sun_events::{sunrise_sunset, twilight};

use crate::aberration::apparent;
use crate::config::EphemeraConfig;
use crate::constants::bodies;
use crate::ephemeris::Ephemeris;
use crate::math::rotation::r1;
use crate::rotation::mean_obliquity;
use crate::search::{find_discrete, DiscreteEvent, SearchError};
use crate::NaifId;

/// Per-operation `step_days` table (spec §4.9) — the one place these
/// coarse sampling intervals live, so no almanac caller can drift from
/// the documented value for its own function.
pub mod step_days {
    pub const SEASONS: f64 = 90.0;
    pub const MOON_PHASE: f64 = 5.0;
    pub const SUNRISE_SUNSET: f64 = 0.04;
    pub const TWILIGHT: f64 = 0.01;
    pub const BODY_RISE_SET: f64 = 0.25;
    pub const MERIDIAN_TRANSIT: f64 = 0.4;
    pub const OPPOSITIONS: f64 = 40.0;
}

/// Thin wrapper over [`find_discrete`] with the default discrete epsilon
/// (spec §4.8), used by every almanac operation below.
pub(crate) fn sample_and_search(
    start_jd: f64,
    end_jd: f64,
    step_days: f64,
    f: impl Fn(f64) -> i64,
) -> Result<Vec<DiscreteEvent>, SearchError> {
    find_discrete(start_jd, end_jd, step_days, crate::search::DEFAULT_DISCRETE_EPSILON_DAYS, f)
}

/// Geocentric ecliptic longitude of `body`'s apparent position, degrees
/// in `[0, 360)`, using the fixed J2000 mean-obliquity rotation (spec
/// §4.9 "(added detail)" — Skyfield's `_mean_ecliptic` convention, not a
/// date-dependent obliquity).
pub(crate) fn ecliptic_longitude(eph: &Ephemeris, body: NaifId, tdb_jd: f64, config: &EphemeraConfig) -> f64 {
    let equatorial = apparent(eph, bodies::EARTH, body, tdb_jd, config);
    let ecliptic = r1(mean_obliquity(0.0)) * equatorial;
    ecliptic.y.atan2(ecliptic.x).to_degrees().rem_euclid(360.0)
}

/// A hand-built synthetic solar system shared by the almanac unit tests
/// below: circular orbits placed exactly in the J2000 mean-ecliptic plane
/// (same construction `anise`'s own test fixtures use — a small analytic
/// kernel standing in for a real DE-series file) so each operation's
/// worked-example assertions (spec §8 scenarios 2-5) can be checked
/// without vendoring a real kernel.
#[cfg(test)]
pub(crate) mod test_support {
    use crate::chains::ChainTable;
    use crate::constants::bodies;
    use crate::ephemeris::Ephemeris;
    use crate::math::rotation::r1;
    use crate::math::Vector3;
    use crate::naif::spk::{DataType, Segment};
    use crate::rotation::mean_obliquity;
    use crate::store::SegmentStore;
    use crate::NaifId;

    const DAY_SEC: f64 = 86_400.0;
    pub(crate) const WINDOW_START_SEC: f64 = -50.0 * DAY_SEC;
    pub(crate) const WINDOW_END_SEC: f64 = 450.0 * DAY_SEC;

    /// Real sidereal month, days: with the Sun's synthetic 365.25-day
    /// period this beats to a ~29.53-day synodic cycle (spec §4.9's
    /// `step_days::MOON_PHASE` target).
    pub(crate) const MOON_PERIOD_DAYS: f64 = 27.321_661;
    pub(crate) const SUN_PERIOD_DAYS: f64 = 365.25;
    pub(crate) const MARS_PERIOD_DAYS: f64 = 100.0;

    pub(crate) const SUN_PHASE0_DEG: f64 = 315.0;
    pub(crate) const MOON_PHASE0_DEG: f64 = 270.0;
    pub(crate) const MARS_PHASE0_DEG: f64 = 136.0;

    /// Builds one (target, center) segment tracing a circle of `radius_km`
    /// with angular position `phase0_deg + 360*(days since J2000)/period_days`,
    /// placed exactly in the ecliptic plane `r1(mean_obliquity(0.0))`
    /// maps back to: [`ecliptic_longitude`] then reads back the angle
    /// directly (up to the sub-arcsecond light-time/aberration correction
    /// it also applies), rather than a value warped by the equatorial-to-
    /// ecliptic tilt. Approximated as `n_records` exact-at-the-boundary
    /// linear (degree-1 Chebyshev) chords, fine-grained enough that the
    /// chord error is negligible at the day-level timescales these tests
    /// check.
    fn circular_body_segment(
        target: NaifId,
        center: NaifId,
        radius_km: f64,
        period_days: f64,
        phase0_deg: f64,
        n_records: usize,
    ) -> Segment {
        let eps = mean_obliquity(0.0);
        let tilt = r1(-eps);
        let point = |sec: f64| {
            let days = sec / DAY_SEC;
            let theta = (phase0_deg + 360.0 * days / period_days).to_radians();
            tilt * (Vector3::new(theta.cos(), theta.sin(), 0.0) * radius_km)
        };

        let int_len = (WINDOW_END_SEC - WINDOW_START_SEC) / n_records as f64;
        let mut data = Vec::with_capacity(n_records * 8);
        for k in 0..n_records {
            let left_sec = WINDOW_START_SEC + k as f64 * int_len;
            let right_sec = left_sec + int_len;
            let left = point(left_sec);
            let right = point(right_sec);
            let c0 = (left + right) * 0.5;
            let c1 = (right - left) * 0.5;
            data.extend_from_slice(&[0.0, 0.0, c0.x, c1.x, c0.y, c1.y, c0.z, c1.z]);
        }

        Segment::new(
            target,
            center,
            DataType::PositionOnly,
            WINDOW_START_SEC,
            WINDOW_END_SEC,
            WINDOW_START_SEC,
            int_len,
            8.0,
            n_records as f64,
            data,
        )
    }

    /// Earth's own barycentric position: a 1 km "wobble" rather than a
    /// fixed point, so its velocity is never exactly zero (stellar
    /// aberration divides by `|observer velocity|`).
    fn earth_segment() -> Segment {
        circular_body_segment(bodies::EARTH, bodies::SOLAR_SYSTEM_BARYCENTER, 1.0, SUN_PERIOD_DAYS, 0.0, 600)
    }

    /// A synthetic solar system: Sun and Mars circle the barycenter, the
    /// Moon circles Earth directly (spec §4.4 accepts any chain shape
    /// that terminates at the barycenter, not only the real Earth-Moon
    /// barycenter hop).
    pub(crate) fn synthetic_solar_system() -> Ephemeris {
        let store = SegmentStore::build(vec![
            circular_body_segment(bodies::SUN, bodies::SOLAR_SYSTEM_BARYCENTER, 149_597_870.0, SUN_PERIOD_DAYS, SUN_PHASE0_DEG, 730),
            earth_segment(),
            circular_body_segment(bodies::MOON, bodies::EARTH, 384_400.0, MOON_PERIOD_DAYS, MOON_PHASE0_DEG, 1_500),
            circular_body_segment(bodies::MARS_BARYCENTER, bodies::SOLAR_SYSTEM_BARYCENTER, 227_900_000.0, MARS_PERIOD_DAYS, MARS_PHASE0_DEG, 1_000),
        ]);
        let chains = ChainTable::build(&store).unwrap();
        Ephemeris::from_spk_parts(store, chains, 0, None)
    }
}
