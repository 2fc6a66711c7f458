/*
 * Ephemera
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! `find_maxima`/`find_minima`: golden-section refinement of a sampled
//! continuous function (spec §4.8).

use log::trace;

use super::{validate_range, SearchError};

/// A local extremum of a continuous function (spec §3 "Event records").
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremum {
    pub t: f64,
    pub value: f64,
}

const GOLDEN_RATIO: f64 = 0.618_033_988_749_895; // (sqrt(5) - 1) / 2

fn golden_section_max(f: &impl Fn(f64) -> f64, mut a: f64, mut b: f64, epsilon: f64) -> Extremum {
    let mut c = b - GOLDEN_RATIO * (b - a);
    let mut d = a + GOLDEN_RATIO * (b - a);
    let mut fc = f(c);
    let mut fd = f(d);

    while (b - a).abs() > epsilon {
        if fc > fd {
            b = d;
            d = c;
            fd = fc;
            c = b - GOLDEN_RATIO * (b - a);
            fc = f(c);
        } else {
            a = c;
            c = d;
            fc = fd;
            d = a + GOLDEN_RATIO * (b - a);
            fd = f(d);
        }
    }

    let t = (a + b) / 2.0;
    Extremum { t, value: f(t) }
}

/// Oversamples `f` by one `step_days` on each side of `[start_jd, end_jd]`,
/// finds every sample that is a strict local maximum against its left
/// neighbor and no less than its right neighbor, refines each bracket by
/// golden-section search, discards refined times outside the requested
/// range, and deduplicates near-coincident extrema (spec §4.8).
pub fn find_maxima(
    start_jd: f64,
    end_jd: f64,
    step_days: f64,
    epsilon: f64,
    f: impl Fn(f64) -> f64,
) -> Result<Vec<Extremum>, SearchError> {
    validate_range(start_jd, end_jd, step_days)?;

    let n = ((end_jd - start_jd) / step_days).ceil() as i64 + 1;
    let mut samples = Vec::with_capacity((n + 3) as usize);
    for i in -1..=n + 1 {
        let t = start_jd + i as f64 * step_days;
        samples.push((t, f(t)));
    }

    let mut extrema = Vec::new();
    for window in samples.windows(3) {
        let (t_lo, v_lo) = window[0];
        let (t_mid, v_mid) = window[1];
        let (t_hi, v_hi) = window[2];

        if v_mid > v_lo && v_mid >= v_hi {
            let refined = golden_section_max(&f, t_lo, t_hi, epsilon);
            if refined.t < start_jd || refined.t > end_jd {
                continue;
            }
            trace!("find_maxima: candidate at t={} value={}", refined.t, refined.value);
            extrema.push(refined);
        }
        let _ = t_mid;
    }

    extrema.dedup_by(|later, earlier| {
        if (later.t - earlier.t).abs() < epsilon {
            if later.value > earlier.value {
                *earlier = *later;
            }
            true
        } else {
            false
        }
    });

    Ok(extrema)
}

/// Finds local minima by delegating to [`find_maxima`] on `-f` and
/// negating the result (spec §4.8 "`find_minima` delegates to
/// `find_maxima` of `−f`").
pub fn find_minima(
    start_jd: f64,
    end_jd: f64,
    step_days: f64,
    epsilon: f64,
    f: impl Fn(f64) -> f64,
) -> Result<Vec<Extremum>, SearchError> {
    let negated = find_maxima(start_jd, end_jd, step_days, epsilon, |t| -f(t))?;
    Ok(negated
        .into_iter()
        .map(|e| Extremum { t: e.t, value: -e.value })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn finds_sine_peak() {
        // sin(t) on [0, pi] peaks at t = pi/2.
        let peaks = find_maxima(0.0, PI, PI / 20.0, 1e-7, |t| t.sin()).unwrap();
        assert_eq!(peaks.len(), 1);
        assert_relative_eq!(peaks[0].t, PI / 2.0, epsilon = 1e-5);
        assert_relative_eq!(peaks[0].value, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn finds_sine_trough() {
        let troughs = find_minima(PI, 2.0 * PI, PI / 20.0, 1e-7, |t| t.sin()).unwrap();
        assert_eq!(troughs.len(), 1);
        assert_relative_eq!(troughs[0].t, 1.5 * PI, epsilon = 1e-5);
        assert_relative_eq!(troughs[0].value, -1.0, epsilon = 1e-9);
    }

    #[test]
    fn rejects_invalid_range() {
        let err = find_maxima(5.0, 1.0, 0.1, 1e-6, |t| t).unwrap_err();
        assert!(matches!(err, SearchError::InvalidRange { .. }));
    }
}
