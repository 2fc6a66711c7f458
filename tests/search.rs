/*
 * Ephemera
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Cross-module integration for component C8 (the generic event-search
//! kernel): `find_discrete`/`find_maxima`/`find_minima` against plain
//! closures, no ephemeris involved, matching spec §8's own
//! implementation-independent framing of these three operations.

use ephemera::search::{find_discrete, find_maxima, find_minima, SearchError};

#[test]
fn find_discrete_locates_a_step_transition() {
    let events = find_discrete(0.0, 20.0, 1.0, 1e-6, |t| if t < 12.0 { 0 } else { 1 }).unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].new_value, 1);
    assert!((events[0].t - 12.0).abs() < 1e-4);
}

#[test]
fn find_maxima_locates_a_sine_peak() {
    use std::f64::consts::PI;
    let peaks = find_maxima(0.0, 10.0, 0.5, 1e-6, |t| (2.0 * PI * t / 8.0).sin()).unwrap();

    assert!(!peaks.is_empty());
    let peak = peaks.iter().max_by(|a, b| a.value.partial_cmp(&b.value).unwrap()).unwrap();
    assert!((peak.t - 2.0).abs() < 0.01);
    assert!((peak.value - 1.0).abs() < 1e-4);
}

#[test]
fn find_minima_locates_a_parabola_trough() {
    let troughs = find_minima(-5.0, 5.0, 0.5, 1e-6, |t| (t - 1.0).powi(2)).unwrap();

    assert_eq!(troughs.len(), 1);
    assert!((troughs[0].t - 1.0).abs() < 0.01);
}

#[test]
fn invalid_range_is_rejected_by_every_search_function() {
    assert!(matches!(find_discrete(5.0, 1.0, 0.1, 1e-6, |_| 0), Err(SearchError::InvalidRange { .. })));
    assert!(matches!(find_maxima(5.0, 1.0, 0.1, 1e-6, |_| 0.0), Err(SearchError::InvalidRange { .. })));
    assert!(matches!(find_minima(5.0, 1.0, 0.1, 1e-6, |_| 0.0), Err(SearchError::InvalidRange { .. })));
}
