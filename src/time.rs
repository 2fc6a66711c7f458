/*
 * Ephemera
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The one time-scale detail this crate implements itself: converting a
//! TDB Julian date into TDB seconds past J2000 for indexing into an SPK
//! segment (spec §3). General UTC/TT/UT1/TDB conversion is explicitly
//! out of scope (spec §1) and is the caller's responsibility — the
//! satellite event finder (C11) takes `hifitime::Epoch`s precisely so it
//! can lean on `hifitime` for that, rather than this crate reinventing a
//! leap-second table.

use hifitime::Epoch;

use crate::constants::{J2000_JD, SECONDS_PER_DAY};

/// The small periodic TDB−TT correction (at most a couple of
/// milliseconds), a fixed analytic expression independent of any
/// leap-second table.
pub fn tdb_minus_tt_seconds(tdb_jd: f64) -> f64 {
    let days_since_j2000 = tdb_jd - J2000_JD;
    let g = (357.53 + 0.985_600_3 * days_since_j2000).to_radians();
    0.001_658 * g.sin() + 0.000_014 * (2.0 * g).sin()
}

/// Converts a TDB Julian date into TDB seconds past J2000 (spec §3), the
/// unit [`crate::store::SegmentStore`] indexes segments in.
pub fn tdb_seconds_past_j2000(tdb_jd: f64) -> f64 {
    (tdb_jd - J2000_JD) * SECONDS_PER_DAY + tdb_minus_tt_seconds(tdb_jd)
}

/// Approximates a TDB Julian date as UT1, for the handful of call sites
/// (C9 sunrise/sunset and body rise/set, C11 satellite passes) that need
/// a Julian date in the UT1 scale for Earth-rotation-angle purposes.
/// DUT1 (UT1 − UTC) is at most ~0.9 s and is not modeled — this crate
/// treats UT1 as UTC, the same placeholder the teacher's own
/// `solar_time` module documents for the same reason (no leap-second/
/// IERS bulletin table is in scope, spec §1).
pub fn tdb_jd_to_ut1_jd(tdb_jd: f64) -> f64 {
    Epoch::from_jde_tdb(tdb_jd).to_jde_utc_days()
}

/// As [`tdb_jd_to_ut1_jd`], starting from a TT Julian date (C11 takes its
/// window bounds in TT per spec §4.11).
pub fn tt_jd_to_ut1_jd(tt_jd: f64) -> f64 {
    Epoch::from_jde_tt(tt_jd).to_jde_utc_days()
}
