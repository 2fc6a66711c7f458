/*
 * Ephemera
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Cross-module integration for component C11 (the satellite event
//! finder): a real ISS two-line element set propagated with SGP4,
//! converted to ICRF, and fed through the rise/culmination/set search
//! (spec §4.11), exercising the TEME-to-ICRF conversion and the
//! generic search kernel together end to end.

use hifitime::Epoch;

use ephemera::config::NutationMode;
use ephemera::satellite::{find_events, PassEventKind, SatelliteTarget};

const ISS_LINE1: &str = "1 25544U 98067A   20194.38623843 -.00002780  00000-0 -23000-4 0  9996";
const ISS_LINE2: &str = "2 25544  51.6460 357.3121 0002158  82.1940  89.0734 15.49248054236720";

fn iss() -> SatelliteTarget {
    let epoch = Epoch::from_jde_tt(2_459_043.886_238_43);
    SatelliteTarget::from_tle(Some("ISS (ZARYA)".to_string()), ISS_LINE1, ISS_LINE2, epoch).unwrap()
}

#[test]
fn iss_rises_above_the_horizon_over_two_days() {
    let sat = iss();
    let epoch_jd = 2_459_043.886_238_43;

    let passes = find_events(&sat, 40.7128, -74.0060, epoch_jd, epoch_jd + 2.0, 0.0, NutationMode::Standard).unwrap();

    assert!(!passes.is_empty());
    for pass in &passes {
        assert_eq!(pass.rise.kind, PassEventKind::Rise);
        if let Some(set) = pass.set {
            assert_eq!(set.kind, PassEventKind::Set);
            assert!(set.t > pass.rise.t);
        }
        if let Some(culmination) = pass.culmination {
            assert_eq!(culmination.kind, PassEventKind::Culmination);
            assert!(culmination.alt_deg >= pass.rise.alt_deg);
        }
    }
}

#[test]
fn invalid_tle_lines_are_rejected() {
    let epoch = Epoch::from_jde_tt(2_459_043.886_238_43);
    let result = SatelliteTarget::from_tle(None, "not a tle", "not a tle either", epoch);
    assert!(result.is_err());
}
